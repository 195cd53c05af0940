//! Home summary refresh fan-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! A refresh is triggered by login, session restore, channel creation,
//! returning from a post and explicit requests. It issues five independent
//! fetches concurrently and hands each result to the caller as soon as it
//! lands.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch is logged on its own and its field keeps the previous
//! value. The other four are unaffected. Nothing is retried.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::state::home::{SummaryPart, SummaryUpdate};
use crate::state::session::SessionStore;

/// Which parts of a refresh failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub failed: Vec<SummaryPart>,
    /// A fetch failed because the stored credential was missing or rejected.
    pub session_rejected: bool,
}

impl RefreshReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    #[must_use]
    pub fn failed_part(&self, part: SummaryPart) -> bool {
        self.failed.contains(&part)
    }
}

fn land(
    on_update: &impl Fn(SummaryUpdate),
    part: SummaryPart,
    result: Result<SummaryUpdate, ApiError>,
) -> Option<(SummaryPart, bool)> {
    match result {
        Ok(update) => {
            on_update(update);
            None
        }
        Err(e) => {
            log::warn!("refresh: {} failed: {e}", part.as_str());
            Some((part, e.is_auth_failure()))
        }
    }
}

fn first<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

/// Run one refresh, calling `on_update` for every fetch that succeeds.
pub async fn refresh_summary<T, S, F>(client: &ApiClient<T, S>, on_update: F) -> RefreshReport
where
    T: Transport,
    S: SessionStore,
    F: Fn(SummaryUpdate),
{
    let config = client.config();
    let on_update = &on_update;

    let profile = async {
        let result = client.current_user().await.map(SummaryUpdate::Profile);
        land(on_update, SummaryPart::Profile, result)
    };
    let saved = async {
        let result = client
            .saved_posts()
            .await
            .map(|posts| SummaryUpdate::Saved(first(posts, config.saved_preview_limit)));
        land(on_update, SummaryPart::Saved, result)
    };
    let channels = async {
        let result = client
            .list_channels()
            .await
            .map(|channels| SummaryUpdate::Channels(first(channels, config.channel_preview_limit)));
        land(on_update, SummaryPart::Channels, result)
    };
    let points = async {
        let result = client.my_points().await.map(SummaryUpdate::Points);
        land(on_update, SummaryPart::Points, result)
    };
    let leaderboard = async {
        let result = client
            .leaderboard(config.leaderboard_limit)
            .await
            .map(SummaryUpdate::Leaderboard);
        land(on_update, SummaryPart::Leaderboard, result)
    };

    let (profile, saved, channels, points, leaderboard) = futures::join!(profile, saved, channels, points, leaderboard);
    let failures: Vec<(SummaryPart, bool)> =
        [profile, saved, channels, points, leaderboard].into_iter().flatten().collect();
    if failures.is_empty() {
        log::debug!("refresh: all parts updated");
    }
    RefreshReport {
        session_rejected: failures.iter().any(|(_, auth)| *auth),
        failed: failures.into_iter().map(|(part, _)| part).collect(),
    }
}
