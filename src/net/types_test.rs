use super::*;

#[test]
fn role_decodes_known_values_and_defaults_unknown_to_user() {
    let roles: Vec<Role> = serde_json::from_str(r#"["user","moderator","admin","ADMIN","owner"]"#).unwrap();
    assert_eq!(roles, vec![Role::User, Role::Moderator, Role::Admin, Role::Admin, Role::User]);
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Moderator).unwrap(), r#""moderator""#);
}

#[test]
fn only_moderator_and_admin_can_moderate() {
    assert!(!Role::User.can_moderate());
    assert!(Role::Moderator.can_moderate());
    assert!(Role::Admin.can_moderate());
}

#[test]
fn profile_decodes_auth_me_body() {
    let body = r#"{"id":7,"email":"a@b.com","username":null,"is_superuser":false,"role":"moderator"}"#;
    let profile: Profile = serde_json::from_str(body).unwrap();
    assert_eq!(profile.id, 7);
    assert_eq!(profile.role, Role::Moderator);
    assert_eq!(profile.display_name(), "a@b.com");
}

#[test]
fn profile_without_role_defaults_to_user() {
    let profile: Profile = serde_json::from_str(r#"{"id":1,"email":"x@y.z"}"#).unwrap();
    assert_eq!(profile.role, Role::User);
}

#[test]
fn profile_display_name_prefers_non_blank_username() {
    let mut profile: Profile = serde_json::from_str(r#"{"id":1,"email":"x@y.z","username":"keenan"}"#).unwrap();
    assert_eq!(profile.display_name(), "keenan");
    profile.username = Some("  ".to_owned());
    assert_eq!(profile.display_name(), "x@y.z");
}

#[test]
fn post_decodes_with_missing_optional_fields() {
    let body = r#"{"id":3,"title":"Notes","content":"body","author_id":2,"created_at":"2024-05-01T10:00:00"}"#;
    let post: Post = serde_json::from_str(body).unwrap();
    assert!(post.files.is_empty());
    assert!(!post.is_saved);
    assert_eq!(post.channel_id, None);
}

#[test]
fn channel_draft_omits_missing_bio() {
    let draft = ChannelDraft { name: "Rust".to_owned(), bio: None };
    assert_eq!(serde_json::to_value(&draft).unwrap(), serde_json::json!({ "name": "Rust" }));
}

#[test]
fn reaction_kind_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_value(ReactionKind::Dislike).unwrap(), serde_json::json!("dislike"));
    let reaction: Reaction =
        serde_json::from_str(r#"{"id":1,"post_id":4,"user_id":2,"reaction_type":"like"}"#).unwrap();
    assert_eq!(reaction.reaction_type, ReactionKind::Like);
}

#[test]
fn comment_author_label_falls_back_in_order() {
    let mut comment: Comment = serde_json::from_str(
        r#"{"id":1,"content":"hi","post_id":4,"author_id":9,"created_at":"2024-01-01T00:00:00"}"#,
    )
    .unwrap();
    assert_eq!(comment.author_label(), "User #9");
    comment.author_email = Some("@edora.io".to_owned());
    assert_eq!(comment.author_label(), "User #9");
    comment.author_email = Some("felix.m@edora.io".to_owned());
    assert_eq!(comment.author_label(), "felix.m");
    comment.author_username = Some(String::new());
    assert_eq!(comment.author_label(), "felix.m");
    comment.author_username = Some("felix".to_owned());
    assert_eq!(comment.author_label(), "@felix");
}

#[test]
fn null_or_missing_role_decodes_as_user() {
    let null_role: Profile = serde_json::from_str(r#"{"id":1,"email":"a@edora.io","role":null}"#).unwrap();
    assert_eq!(null_role.role, Role::User);
    let missing: Profile = serde_json::from_str(r#"{"id":1,"email":"a@edora.io"}"#).unwrap();
    assert_eq!(missing.role, Role::User);
    let admin: Profile = serde_json::from_str(r#"{"id":1,"email":"a@edora.io","role":"Admin"}"#).unwrap();
    assert_eq!(admin.role, Role::Admin);
}

#[test]
fn leaderboard_entry_display_name_prefers_username() {
    let entry: LeaderboardEntry =
        serde_json::from_str(r#"{"user_id":1,"email":"l@e.io","username":"ludwig","points":40,"rank":1}"#).unwrap();
    assert_eq!(entry.display_name(), "ludwig");
    assert_eq!(entry.rank, Some(1));
}
