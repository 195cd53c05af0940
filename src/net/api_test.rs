use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::fake::FakeTransport;
use crate::net::transport::{Body, Method};
use crate::state::session::{MemorySessionStore, Session};

fn signed_in(token: &str) -> (ApiClient<FakeTransport, MemorySessionStore>, FakeTransport, MemorySessionStore) {
    let transport = FakeTransport::new();
    let store = MemorySessionStore::with_session(&Session {
        access_token: token.to_owned(),
        refresh_token: "refresh-1".to_owned(),
        user_id: 1,
    });
    let client = ApiClient::new(ClientConfig::default(), transport.clone(), store.clone());
    (client, transport, store)
}

fn post_json(id: i64, title: &str) -> serde_json::Value {
    json!({ "id": id, "title": title, "content": "body", "author_id": 1, "created_at": "2024-05-01T10:00:00" })
}

// =============================================================
// Path helpers
// =============================================================

#[test]
fn path_helpers_format_expected_routes() {
    assert_eq!(channel_path(4), "/channels/4");
    assert_eq!(channel_action_path(4, "join"), "/channels/4/join");
    assert_eq!(approve_post_path(9), "/posts/9/approve");
    assert_eq!(post_comments_path(9), "/comments/post/9");
    assert_eq!(reaction_counts_path(9), "/reactions/post/9/counts");
    assert_eq!(user_reaction_path(9), "/reactions/post/9/user");
    assert_eq!(saved_check_path(9), "/saved-posts/check/9");
    assert_eq!(flagged_word_path("spam"), "/flagged-words/spam");
    assert_eq!(flagged_word_path("no way"), "/flagged-words/no%20way");
}

// =============================================================
// Auth
// =============================================================

#[test]
fn current_user_sends_stored_bearer_token() {
    let (client, transport, _) = signed_in("tok-1");
    transport.reply(Method::Get, "/auth/me", 200, json!({ "id": 1, "email": "a@b.com", "role": "admin" }));

    let profile = block_on(client.current_user()).unwrap();

    assert_eq!(profile.email, "a@b.com");
    let sent = transport.sent_to(Method::Get, "/auth/me");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].bearer.as_deref(), Some("tok-1"));
}

#[test]
fn bearer_endpoint_without_token_fails_locally() {
    let transport = FakeTransport::new();
    let client = ApiClient::new(ClientConfig::default(), transport.clone(), MemorySessionStore::new());

    assert_eq!(block_on(client.current_user()), Err(ApiError::MissingToken));
    assert!(transport.sent().is_empty());
}

#[test]
fn token_is_read_per_request_not_cached() {
    let (client, transport, store) = signed_in("first");
    transport.reply(Method::Get, "/channels/", 200, json!([]));

    block_on(client.list_channels()).unwrap();
    store.clear();
    assert_eq!(block_on(client.list_channels()), Err(ApiError::MissingToken));
    store.set_access_token("second");
    block_on(client.list_channels()).unwrap();

    let tokens: Vec<_> = transport.sent().into_iter().map(|r| r.bearer).collect();
    assert_eq!(tokens, vec![Some("first".to_owned()), Some("second".to_owned())]);
}

#[test]
fn login_posts_form_without_bearer() {
    let transport = FakeTransport::new();
    transport.reply(
        Method::Post,
        "/auth/login",
        200,
        json!({ "access_token": "a", "refresh_token": "r", "token_type": "bearer", "user_id": 3 }),
    );
    let client = ApiClient::new(ClientConfig::default(), transport.clone(), MemorySessionStore::new());

    let resp = block_on(client.login("a@b.com", "pw")).unwrap();

    assert_eq!(resp.user_id, 3);
    let sent = &transport.sent()[0];
    assert_eq!(sent.bearer, None);
    assert_eq!(
        sent.body,
        Body::Form(vec![
            ("username".to_owned(), "a@b.com".to_owned()),
            ("password".to_owned(), "pw".to_owned()),
        ])
    );
}

#[test]
fn login_failure_surfaces_backend_detail() {
    let transport = FakeTransport::new();
    transport.reply(Method::Post, "/auth/login", 400, json!({ "detail": "invalid credentials" }));
    let client = ApiClient::new(ClientConfig::default(), transport, MemorySessionStore::new());

    let err = block_on(client.login("a@b.com", "bad")).unwrap_err();
    assert_eq!(err.to_string(), "invalid credentials");
}

#[test]
fn register_failure_without_detail_uses_fallback() {
    let transport = FakeTransport::new();
    transport.reply(Method::Post, "/auth/register", 500, json!({}));
    let client = ApiClient::new(ClientConfig::default(), transport, MemorySessionStore::new());

    let err = block_on(client.register("a@b.com", "pw")).unwrap_err();
    assert_eq!(err, ApiError::Status { status: 500, detail: "Registration failed".to_owned() });
}

#[test]
fn refresh_access_token_updates_store() {
    let (client, transport, store) = signed_in("old");
    transport.reply(Method::Post, "/auth/refresh", 200, json!({ "access_token": "new", "token_type": "bearer" }));

    assert_eq!(block_on(client.refresh_access_token()).unwrap(), "new");
    assert_eq!(store.access_token().as_deref(), Some("new"));
    assert_eq!(transport.sent()[0].body, Body::Json(json!({ "refresh_token": "refresh-1" })));
}

// =============================================================
// Channels, posts, files
// =============================================================

#[test]
fn search_channels_passes_query_parameter() {
    let (client, transport, _) = signed_in("t");
    transport.reply(
        Method::Get,
        "/channels/search",
        200,
        json!([{ "id": 1, "name": "Rust", "owner_id": 2, "created_at": "2024-01-01T00:00:00" }]),
    );

    let channels = block_on(client.search_channels("rust")).unwrap();

    assert_eq!(channels[0].name, "Rust");
    assert_eq!(transport.sent()[0].query, vec![("q".to_owned(), "rust".to_owned())]);
}

#[test]
fn create_post_sends_draft_json() {
    let (client, transport, _) = signed_in("t");
    transport.reply(Method::Post, "/posts/", 201, post_json(11, "Notes"));
    let draft = PostDraft { title: "Notes".to_owned(), content: "body".to_owned(), channel_id: 4 };

    let post = block_on(client.create_post(&draft)).unwrap();

    assert_eq!(post.id, 11);
    assert_eq!(
        transport.sent()[0].body,
        Body::Json(json!({ "title": "Notes", "content": "body", "channel_id": 4 }))
    );
}

#[test]
fn upload_files_builds_multipart_with_post_id_first() {
    let (client, transport, _) = signed_in("t");
    transport.reply(Method::Post, "/api/files/upload", 200, json!([{ "id": 1, "filename": "a.pdf" }]));
    let file = FileUpload {
        file_name: "a.pdf".to_owned(),
        content_type: "application/pdf".to_owned(),
        bytes: vec![1, 2, 3],
    };

    let stored = block_on(client.upload_files(11, vec![file.clone()])).unwrap();

    assert_eq!(stored[0].filename, "a.pdf");
    let Body::Multipart(parts) = &transport.sent()[0].body else {
        panic!("expected multipart body");
    };
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0], Part { name: "post_id".to_owned(), value: PartValue::Text("11".to_owned()) });
    assert_eq!(parts[1], Part { name: "files".to_owned(), value: PartValue::File(file) });
}

#[test]
fn update_channel_puts_draft_to_channel_path() {
    let (client, transport, _) = signed_in("t");
    transport.reply(
        Method::Put,
        "/channels/4",
        200,
        json!({ "id": 4, "name": "Rustaceans", "owner_id": 1, "created_at": "2024-01-01" }),
    );
    let draft = ChannelDraft { name: "Rustaceans".to_owned(), bio: None };

    let channel = block_on(client.update_channel(4, &draft)).unwrap();

    assert_eq!(channel.name, "Rustaceans");
    let sent = &transport.sent_to(Method::Put, "/channels/4")[0];
    assert_eq!(sent.bearer.as_deref(), Some("t"));
    assert_eq!(sent.body, Body::Json(json!({ "name": "Rustaceans" })));
}

#[test]
fn delete_channel_accepts_empty_no_content_body() {
    let (client, transport, _) = signed_in("t");
    transport.reply(Method::Delete, "/channels/4", 204, serde_json::Value::Null);
    assert_eq!(block_on(client.delete_channel(4)), Ok(()));
}

#[test]
fn unscripted_route_reports_not_found_detail() {
    let (client, _, _) = signed_in("t");
    assert_eq!(
        block_on(client.channel(99)),
        Err(ApiError::Status { status: 404, detail: "Not Found".to_owned() })
    );
}

#[test]
fn malformed_body_is_a_decode_error() {
    let (client, transport, _) = signed_in("t");
    transport.reply(Method::Get, "/posts/5", 200, json!({ "unexpected": true }));
    assert!(matches!(block_on(client.post(5)), Err(ApiError::Decode(_))));
}

#[test]
fn transport_failure_propagates() {
    let (client, transport, _) = signed_in("t");
    transport.fail(Method::Get, "/saved-posts/", ApiError::Network("offline".to_owned()));
    assert_eq!(block_on(client.saved_posts()), Err(ApiError::Network("offline".to_owned())));
}

// =============================================================
// Reactions, saved, gamification
// =============================================================

#[test]
fn reaction_counts_is_public() {
    let transport = FakeTransport::new();
    transport.reply(Method::Get, "/reactions/post/3/counts", 200, json!({ "like_count": 4, "dislike_count": 1 }));
    let client = ApiClient::new(ClientConfig::default(), transport.clone(), MemorySessionStore::new());

    let counts = block_on(client.reaction_counts(3)).unwrap();

    assert_eq!(counts, ReactionCounts { like_count: 4, dislike_count: 1 });
    assert_eq!(transport.sent()[0].bearer, None);
}

#[test]
fn my_reaction_null_body_is_none() {
    let (client, transport, _) = signed_in("t");
    transport.reply(Method::Get, "/reactions/post/3/user", 200, serde_json::Value::Null);
    assert_eq!(block_on(client.my_reaction(3)), Ok(None));
}

#[test]
fn react_sends_lowercase_reaction_type() {
    let (client, transport, _) = signed_in("t");
    transport.reply(
        Method::Post,
        "/reactions/",
        201,
        json!({ "id": 1, "post_id": 3, "user_id": 1, "reaction_type": "dislike" }),
    );

    block_on(client.react(3, ReactionKind::Dislike)).unwrap();

    assert_eq!(transport.sent()[0].body, Body::Json(json!({ "post_id": 3, "reaction_type": "dislike" })));
}

#[test]
fn is_saved_unwraps_check_body() {
    let (client, transport, _) = signed_in("t");
    transport.reply(Method::Get, "/saved-posts/check/3", 200, json!({ "is_saved": true }));
    assert_eq!(block_on(client.is_saved(3)), Ok(true));
}

#[test]
fn my_points_unwraps_points_field() {
    let (client, transport, _) = signed_in("t");
    transport.reply(Method::Get, "/api/gamification/my-points", 200, json!({ "points": 240 }));
    assert_eq!(block_on(client.my_points()), Ok(240));
}

#[test]
fn leaderboard_sends_limit_without_bearer() {
    let (client, transport, _) = signed_in("t");
    transport.reply(Method::Get, "/api/gamification/leaderboard", 200, json!([]));

    block_on(client.leaderboard(5)).unwrap();

    let sent = &transport.sent()[0];
    assert_eq!(sent.query, vec![("limit".to_owned(), "5".to_owned())]);
    assert_eq!(sent.bearer, None);
}

#[test]
fn add_flagged_word_posts_word_json() {
    let (client, transport, _) = signed_in("t");
    transport.reply(Method::Post, "/flagged-words/", 200, json!({ "id": 2, "word": "spam" }));

    let word = block_on(client.add_flagged_word("spam")).unwrap();

    assert_eq!(word.word, "spam");
    assert_eq!(transport.sent()[0].body, Body::Json(json!({ "word": "spam" })));
}
