//! Wire DTOs for the Edora REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly. Optional or late-added
//! fields carry `#[serde(default)]` so older backends still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub type UserId = i64;
pub type ChannelId = i64;
pub type PostId = i64;

/// Account role; gates the moderator scene and its actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Role {
    #[default]
    User,
    Moderator,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
            Self::Admin => "admin",
        }
    }

    /// Moderators and admins may open the moderator panel.
    #[must_use]
    pub fn can_moderate(self) -> bool {
        matches!(self, Self::Moderator | Self::Admin)
    }
}

/// Missing, null and unknown roles all decode as `User`.
impl From<Option<String>> for Role {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref().map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("moderator") => Self::Moderator,
            Some("admin") => Self::Admin,
            _ => Self::User,
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

/// The signed-in user as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_superuser: bool,
}

impl Profile {
    /// Username when set, otherwise the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.username.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.email,
        }
    }
}

/// Body of a successful `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user_id: UserId,
}

/// Body of a successful `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Body of a successful `POST /auth/refresh`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

/// Body of a successful `PUT /auth/username`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UsernameUpdated {
    pub username: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub owner_id: UserId,
    #[serde(default)]
    pub logo_filename: Option<String>,
    pub created_at: String,
}

/// Payload for creating or updating a channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// An attachment stored by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author_id: UserId,
    #[serde(default)]
    pub channel_id: Option<ChannelId>,
    pub created_at: String,
    #[serde(default)]
    pub files: Vec<MediaFile>,
    #[serde(default)]
    pub is_saved: bool,
    /// Set by the backend when the post is held for review.
    #[serde(default)]
    pub flag_reason: Option<String>,
}

/// Payload for `POST /posts/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub channel_id: ChannelId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub post_id: PostId,
    pub author_id: UserId,
    pub created_at: String,
    #[serde(default)]
    pub author_email: Option<String>,
    #[serde(default)]
    pub author_username: Option<String>,
}

impl Comment {
    /// Author label shown next to the comment: `@username`, else the local
    /// part of the email, else `User #id`. The full address is never shown.
    #[must_use]
    pub fn author_label(&self) -> String {
        if let Some(name) = self.author_username.as_deref().filter(|name| !name.is_empty()) {
            return format!("@{name}");
        }
        self.author_email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .map_or_else(|| format!("User #{}", self.author_id), str::to_owned)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
}

/// The current user's reaction to a post.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: i64,
    pub post_id: PostId,
    pub user_id: UserId,
    pub reaction_type: ReactionKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub like_count: u64,
    pub dislike_count: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct SavedCheck {
    pub is_saved: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct PointsBalance {
    pub points: i64,
}

/// One row of `GET /api/gamification/leaderboard`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: UserId,
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    pub points: i64,
    #[serde(default)]
    pub rank: Option<u32>,
}

impl LeaderboardEntry {
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.username.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.email,
        }
    }
}

/// A word that causes posts to be flagged for review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedWord {
    pub id: i64,
    pub word: String,
}
