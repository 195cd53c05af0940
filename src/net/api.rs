//! Typed calls for every Edora backend endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; nothing here panics or retries.
//! Non-OK responses carry the backend's `detail` text, or the endpoint's
//! fallback message when the body has none.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::json;

use super::error::ApiError;
use super::transport::{ApiRequest, BrowserTransport, FileUpload, Part, PartValue, RawResponse, Transport, encode_segment};
use super::types::{
    AccessTokenResponse, Channel, ChannelDraft, ChannelId, Comment, FlaggedWord, LeaderboardEntry, LoginResponse,
    MediaFile, PointsBalance, Post, PostDraft, PostId, Profile, Reaction, ReactionCounts, ReactionKind,
    RegisterResponse, SavedCheck, UsernameUpdated,
};
use crate::config::ClientConfig;
use crate::state::session::{LocalSessionStore, SessionStore};

fn channel_path(id: ChannelId) -> String {
    format!("/channels/{id}")
}

fn channel_action_path(id: ChannelId, action: &str) -> String {
    format!("/channels/{id}/{action}")
}

fn post_path(id: PostId) -> String {
    format!("/posts/{id}")
}

fn approve_post_path(id: PostId) -> String {
    format!("/posts/{id}/approve")
}

fn post_comments_path(id: PostId) -> String {
    format!("/comments/post/{id}")
}

fn reaction_counts_path(id: PostId) -> String {
    format!("/reactions/post/{id}/counts")
}

fn user_reaction_path(id: PostId) -> String {
    format!("/reactions/post/{id}/user")
}

fn post_reaction_path(id: PostId) -> String {
    format!("/reactions/post/{id}")
}

fn saved_post_path(id: PostId) -> String {
    format!("/saved-posts/{id}")
}

fn saved_check_path(id: PostId) -> String {
    format!("/saved-posts/check/{id}")
}

fn flagged_word_path(word: &str) -> String {
    format!("/flagged-words/{}", encode_segment(word))
}

/// Endpoint layer over a [`Transport`] and a [`SessionStore`].
///
/// The bearer token is read from the store on every call, never cached.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    config: ClientConfig,
    transport: T,
    store: S,
}

/// The client the WASM build runs with.
pub type BrowserClient = ApiClient<BrowserTransport, LocalSessionStore>;

impl BrowserClient {
    #[must_use]
    pub fn browser(config: ClientConfig) -> Self {
        ApiClient::new(config, BrowserTransport, LocalSessionStore)
    }
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn new(config: ClientConfig, transport: T, store: S) -> Self {
        Self { config, transport, store }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn authed(&self, request: ApiRequest) -> Result<ApiRequest, ApiError> {
        let token = self.store.access_token().ok_or(ApiError::MissingToken)?;
        Ok(request.bearer(token))
    }

    async fn exchange(&self, request: ApiRequest, fallback: &str) -> Result<RawResponse, ApiError> {
        let resp = self.transport.send(&self.config.api_base, request).await?;
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status, &resp.body, fallback));
        }
        Ok(resp)
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest, fallback: &str) -> Result<R, ApiError> {
        let resp = self.exchange(request, fallback).await?;
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn fetch_unit(&self, request: ApiRequest, fallback: &str) -> Result<(), ApiError> {
        self.exchange(request, fallback).await.map(|_| ())
    }

    // =============================================================
    // Auth
    // =============================================================

    /// `GET /auth/me`: verify the stored token and return its profile.
    ///
    /// # Errors
    ///
    /// `MissingToken` without a stored token, `Unauthorized` when rejected.
    pub async fn current_user(&self) -> Result<Profile, ApiError> {
        let req = self.authed(ApiRequest::get("/auth/me"))?;
        self.fetch_json(req, "Failed to verify session").await
    }

    /// `POST /auth/login` with the OAuth2 password form.
    ///
    /// Does not touch the store; callers persist the returned session.
    ///
    /// # Errors
    ///
    /// Returns the backend's `detail` (e.g. `invalid credentials`) on rejection.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let req = ApiRequest::post("/auth/login").form(vec![
            ("username".to_owned(), email.to_owned()),
            ("password".to_owned(), password.to_owned()),
        ]);
        self.fetch_json(req, "Login failed").await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the backend's `detail` (e.g. `email already registered`).
    pub async fn register(&self, email: &str, password: &str) -> Result<RegisterResponse, ApiError> {
        let req = ApiRequest::post("/auth/register").json(json!({ "email": email, "password": password }));
        self.fetch_json(req, "Registration failed").await
    }

    /// `POST /auth/refresh`: swap the stored refresh token for a new access token.
    ///
    /// # Errors
    ///
    /// `MissingToken` without a stored refresh token; `Unauthorized` when it expired.
    pub async fn refresh_access_token(&self) -> Result<String, ApiError> {
        let refresh_token = self.store.refresh_token().ok_or(ApiError::MissingToken)?;
        let req = ApiRequest::post("/auth/refresh").json(json!({ "refresh_token": refresh_token }));
        let resp: AccessTokenResponse = self.fetch_json(req, "Failed to refresh session").await?;
        self.store.set_access_token(&resp.access_token);
        Ok(resp.access_token)
    }

    /// `PUT /auth/username`.
    ///
    /// # Errors
    ///
    /// Returns the backend's `detail` (e.g. `Username already taken`).
    pub async fn update_username(&self, username: &str) -> Result<UsernameUpdated, ApiError> {
        let req = self.authed(ApiRequest::put("/auth/username").json(json!({ "username": username })))?;
        self.fetch_json(req, "Failed to update username").await
    }

    // =============================================================
    // Channels
    // =============================================================

    /// `GET /channels/`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn list_channels(&self) -> Result<Vec<Channel>, ApiError> {
        let req = self.authed(ApiRequest::get("/channels/"))?;
        self.fetch_json(req, "Failed to fetch channels").await
    }

    /// `GET /channels/search?q=`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn search_channels(&self, query: &str) -> Result<Vec<Channel>, ApiError> {
        let req = self.authed(ApiRequest::get("/channels/search").query("q", query))?;
        self.fetch_json(req, "Channel search failed").await
    }

    /// `POST /channels/`.
    ///
    /// # Errors
    ///
    /// Returns the backend's `detail` (e.g. `Channel name already taken`).
    pub async fn create_channel(&self, draft: &ChannelDraft) -> Result<Channel, ApiError> {
        let body = serde_json::to_value(draft).map_err(|e| ApiError::Encode(e.to_string()))?;
        let req = self.authed(ApiRequest::post("/channels/").json(body))?;
        self.fetch_json(req, "Failed to create channel").await
    }

    /// `GET /channels/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn channel(&self, id: ChannelId) -> Result<Channel, ApiError> {
        let req = self.authed(ApiRequest::get(channel_path(id)))?;
        self.fetch_json(req, "Failed to fetch channel").await
    }

    /// `PUT /channels/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn update_channel(&self, id: ChannelId, draft: &ChannelDraft) -> Result<Channel, ApiError> {
        let body = serde_json::to_value(draft).map_err(|e| ApiError::Encode(e.to_string()))?;
        let req = self.authed(ApiRequest::put(channel_path(id)).json(body))?;
        self.fetch_json(req, "Failed to update channel").await
    }

    /// `DELETE /channels/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_channel(&self, id: ChannelId) -> Result<(), ApiError> {
        let req = self.authed(ApiRequest::delete(channel_path(id)))?;
        self.fetch_unit(req, "Failed to delete channel").await
    }

    /// `POST /channels/{id}/join`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn join_channel(&self, id: ChannelId) -> Result<(), ApiError> {
        let req = self.authed(ApiRequest::post(channel_action_path(id, "join")))?;
        self.fetch_unit(req, "Failed to join channel").await
    }

    /// `POST /channels/{id}/leave`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn leave_channel(&self, id: ChannelId) -> Result<(), ApiError> {
        let req = self.authed(ApiRequest::post(channel_action_path(id, "leave")))?;
        self.fetch_unit(req, "Failed to leave channel").await
    }

    /// `GET /channels/{id}/posts`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn channel_posts(&self, id: ChannelId) -> Result<Vec<Post>, ApiError> {
        let req = self.authed(ApiRequest::get(channel_action_path(id, "posts")))?;
        self.fetch_json(req, "Failed to fetch posts").await
    }

    // =============================================================
    // Posts and files
    // =============================================================

    /// `POST /posts/`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn create_post(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        let body = serde_json::to_value(draft).map_err(|e| ApiError::Encode(e.to_string()))?;
        let req = self.authed(ApiRequest::post("/posts/").json(body))?;
        self.fetch_json(req, "Failed to create post").await
    }

    /// `GET /posts/search?q=`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn search_posts(&self, query: &str) -> Result<Vec<Post>, ApiError> {
        let req = self.authed(ApiRequest::get("/posts/search").query("q", query))?;
        self.fetch_json(req, "File search failed").await
    }

    /// `GET /posts/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn post(&self, id: PostId) -> Result<Post, ApiError> {
        let req = self.authed(ApiRequest::get(post_path(id)))?;
        self.fetch_json(req, "Failed to fetch post").await
    }

    /// `DELETE /posts/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_post(&self, id: PostId) -> Result<(), ApiError> {
        let req = self.authed(ApiRequest::delete(post_path(id)))?;
        self.fetch_unit(req, "Failed to delete post").await
    }

    /// `GET /posts/flagged`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn flagged_posts(&self) -> Result<Vec<Post>, ApiError> {
        let req = self.authed(ApiRequest::get("/posts/flagged"))?;
        self.fetch_json(req, "Failed to fetch flagged posts").await
    }

    /// `POST /posts/{id}/approve`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn approve_post(&self, id: PostId) -> Result<(), ApiError> {
        let req = self.authed(ApiRequest::post(approve_post_path(id)))?;
        self.fetch_unit(req, "Failed to approve post").await
    }

    /// `POST /api/files/upload` as multipart: `post_id` plus one `files` part per file.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn upload_files(&self, post_id: PostId, files: Vec<FileUpload>) -> Result<Vec<MediaFile>, ApiError> {
        let mut parts = vec![Part { name: "post_id".to_owned(), value: PartValue::Text(post_id.to_string()) }];
        parts.extend(files.into_iter().map(|file| Part { name: "files".to_owned(), value: PartValue::File(file) }));
        let req = self.authed(ApiRequest::post("/api/files/upload").multipart(parts))?;
        self.fetch_json(req, "Failed to upload files").await
    }

    // =============================================================
    // Comments and reactions
    // =============================================================

    /// `GET /comments/post/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn post_comments(&self, post_id: PostId) -> Result<Vec<Comment>, ApiError> {
        let req = self.authed(ApiRequest::get(post_comments_path(post_id)))?;
        self.fetch_json(req, "Failed to fetch comments").await
    }

    /// `POST /comments/`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn add_comment(&self, post_id: PostId, content: &str) -> Result<Comment, ApiError> {
        let req = self.authed(ApiRequest::post("/comments/").json(json!({ "content": content, "post_id": post_id })))?;
        self.fetch_json(req, "Failed to post comment").await
    }

    /// `GET /reactions/post/{id}/counts` (public).
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn reaction_counts(&self, post_id: PostId) -> Result<ReactionCounts, ApiError> {
        self.fetch_json(ApiRequest::get(reaction_counts_path(post_id)), "Failed to fetch reactions")
            .await
    }

    /// `GET /reactions/post/{id}/user`; `None` when the user has not reacted.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn my_reaction(&self, post_id: PostId) -> Result<Option<Reaction>, ApiError> {
        let req = self.authed(ApiRequest::get(user_reaction_path(post_id)))?;
        self.fetch_json(req, "Failed to fetch reaction").await
    }

    /// `POST /reactions/`: create or replace the user's reaction.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn react(&self, post_id: PostId, kind: ReactionKind) -> Result<Reaction, ApiError> {
        let req = self.authed(
            ApiRequest::post("/reactions/").json(json!({ "post_id": post_id, "reaction_type": kind })),
        )?;
        self.fetch_json(req, "Failed to react").await
    }

    /// `DELETE /reactions/post/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn clear_reaction(&self, post_id: PostId) -> Result<(), ApiError> {
        let req = self.authed(ApiRequest::delete(post_reaction_path(post_id)))?;
        self.fetch_unit(req, "Failed to remove reaction").await
    }

    // =============================================================
    // Saved posts
    // =============================================================

    /// `GET /saved-posts/`, newest save first.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn saved_posts(&self) -> Result<Vec<Post>, ApiError> {
        let req = self.authed(ApiRequest::get("/saved-posts/"))?;
        self.fetch_json(req, "Failed to fetch saved posts").await
    }

    /// `POST /saved-posts/`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn save_post(&self, post_id: PostId) -> Result<(), ApiError> {
        let req = self.authed(ApiRequest::post("/saved-posts/").json(json!({ "post_id": post_id })))?;
        self.fetch_unit(req, "Failed to save post").await
    }

    /// `DELETE /saved-posts/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn unsave_post(&self, post_id: PostId) -> Result<(), ApiError> {
        let req = self.authed(ApiRequest::delete(saved_post_path(post_id)))?;
        self.fetch_unit(req, "Failed to unsave post").await
    }

    /// `GET /saved-posts/check/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn is_saved(&self, post_id: PostId) -> Result<bool, ApiError> {
        let req = self.authed(ApiRequest::get(saved_check_path(post_id)))?;
        let check: SavedCheck = self.fetch_json(req, "Failed to fetch save status").await?;
        Ok(check.is_saved)
    }

    // =============================================================
    // Gamification
    // =============================================================

    /// `GET /api/gamification/my-points`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn my_points(&self) -> Result<i64, ApiError> {
        let req = self.authed(ApiRequest::get("/api/gamification/my-points"))?;
        let balance: PointsBalance = self.fetch_json(req, "Failed to fetch points").await?;
        Ok(balance.points)
    }

    /// `GET /api/gamification/leaderboard?limit=` (public).
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ApiError> {
        let req = ApiRequest::get("/api/gamification/leaderboard").query("limit", limit.to_string());
        self.fetch_json(req, "Failed to fetch leaderboard").await
    }

    // =============================================================
    // Moderation
    // =============================================================

    /// `GET /flagged-words/`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn flagged_words(&self) -> Result<Vec<FlaggedWord>, ApiError> {
        let req = self.authed(ApiRequest::get("/flagged-words/"))?;
        self.fetch_json(req, "Failed to fetch flagged words").await
    }

    /// `POST /flagged-words/`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn add_flagged_word(&self, word: &str) -> Result<FlaggedWord, ApiError> {
        let req = self.authed(ApiRequest::post("/flagged-words/").json(json!({ "word": word })))?;
        self.fetch_json(req, "Failed to add word").await
    }

    /// `DELETE /flagged-words/{word}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn remove_flagged_word(&self, word: &str) -> Result<(), ApiError> {
        let req = self.authed(ApiRequest::delete(flagged_word_path(word)))?;
        self.fetch_unit(req, "Failed to delete word").await
    }
}
