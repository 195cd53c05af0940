//! Post interactions, publishing and profile edits.
//!
//! Validation helpers are pure and return the inline message to show; the
//! async workflows chain the endpoint calls a single user action needs.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::{FileUpload, Transport};
use crate::net::types::{
    ChannelDraft, ChannelId, MediaFile, Post, PostDraft, PostId, Reaction, ReactionCounts, ReactionKind,
};
use crate::state::session::SessionStore;

pub const NO_CHANNELS_MESSAGE: &str = "You need to create a channel first before posting.";
pub const SELECT_CHANNEL_MESSAGE: &str = "Please select a channel";
pub const USERNAME_MAX_CHARS: usize = 50;

/// Failure of the two-step publish flow.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("Please select a channel")]
    NoChannel,
    #[error("Please enter a title")]
    MissingTitle,
    #[error("Error creating post: {0}")]
    CreatePost(ApiError),
    /// The post exists but its attachments did not upload.
    #[error("Error uploading files: {source}")]
    UploadFiles { post_id: PostId, source: ApiError },
}

/// A publish request as collected from the upload form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PublishForm {
    pub title: String,
    pub content: String,
    pub channel_id: Option<ChannelId>,
    pub files: Vec<FileUpload>,
}

impl PublishForm {
    /// Check the form before anything is sent.
    ///
    /// # Errors
    ///
    /// `NoChannel` or `MissingTitle`.
    pub fn draft(&self) -> Result<PostDraft, PublishError> {
        let channel_id = self.channel_id.ok_or(PublishError::NoChannel)?;
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PublishError::MissingTitle);
        }
        Ok(PostDraft { title: title.to_owned(), content: self.content.clone(), channel_id })
    }
}

/// Create the post, then upload any attached files to it.
///
/// # Errors
///
/// Validation failures send nothing. An upload failure still leaves the post created.
pub async fn publish_post<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
    form: PublishForm,
) -> Result<(Post, Vec<MediaFile>), PublishError> {
    let draft = form.draft()?;
    let post = client.create_post(&draft).await.map_err(PublishError::CreatePost)?;
    log::info!("publish: created post {} in channel {}", post.id, draft.channel_id);
    if form.files.is_empty() {
        return Ok((post, Vec::new()));
    }
    let count = form.files.len();
    let uploaded = client
        .upload_files(post.id, form.files)
        .await
        .map_err(|source| PublishError::UploadFiles { post_id: post.id, source })?;
    log::info!("publish: uploaded {count} file(s) to post {}", post.id);
    Ok((post, uploaded))
}

/// Flip the saved flag; returns the new value.
///
/// # Errors
///
/// Propagates the API failure; the flag is unchanged on error.
pub async fn toggle_saved<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
    post_id: PostId,
    currently_saved: bool,
) -> Result<bool, ApiError> {
    if currently_saved {
        client.unsave_post(post_id).await?;
    } else {
        client.save_post(post_id).await?;
    }
    Ok(!currently_saved)
}

/// State of a post's reactions after a toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReactionState {
    pub mine: Option<Reaction>,
    pub counts: ReactionCounts,
}

/// Apply `kind`: removing it when already held, otherwise setting it.
/// Counts are refetched afterwards.
///
/// # Errors
///
/// Propagates the first API failure.
pub async fn toggle_reaction<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
    post_id: PostId,
    current: Option<ReactionKind>,
    kind: ReactionKind,
) -> Result<ReactionState, ApiError> {
    let mine = if current == Some(kind) {
        client.clear_reaction(post_id).await?;
        None
    } else {
        Some(client.react(post_id, kind).await?)
    };
    let counts = client.reaction_counts(post_id).await?;
    Ok(ReactionState { mine, counts })
}

/// Trimmed comment text, or `None` when blank.
#[must_use]
pub fn validate_comment(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

/// Trimmed username of 1..=50 characters.
///
/// # Errors
///
/// Returns the message to show inline.
pub fn validate_username(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Username cannot be empty");
    }
    if name.chars().count() > USERNAME_MAX_CHARS {
        return Err("Username must be at most 50 characters");
    }
    Ok(name.to_owned())
}

/// Channel form: trimmed name required, blank bio omitted.
///
/// # Errors
///
/// Returns the message to show inline.
pub fn validate_channel(name: &str, bio: &str) -> Result<ChannelDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Channel name is required");
    }
    let bio = bio.trim();
    Ok(ChannelDraft { name: name.to_owned(), bio: (!bio.is_empty()).then(|| bio.to_owned()) })
}

/// Flagged word to add: trimmed and lowercased, `None` when blank.
#[must_use]
pub fn normalize_flagged_word(raw: &str) -> Option<String> {
    let word = raw.trim().to_lowercase();
    (!word.is_empty()).then_some(word)
}
