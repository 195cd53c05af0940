//! Cached summary shown on the home scene.
//!
//! DESIGN
//! ======
//! Each refresh fetch lands as its own [`SummaryUpdate`], so a failed fetch
//! only leaves its own field stale. Last write wins.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use crate::net::types::{Channel, LeaderboardEntry, Post, Profile};

/// Which part of the summary a fetch fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SummaryPart {
    Profile,
    Saved,
    Channels,
    Points,
    Leaderboard,
}

impl SummaryPart {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Saved => "saved posts",
            Self::Channels => "channels",
            Self::Points => "points",
            Self::Leaderboard => "leaderboard",
        }
    }
}

/// One successful refresh fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SummaryUpdate {
    Profile(Profile),
    Saved(Vec<Post>),
    Channels(Vec<Channel>),
    Points(i64),
    Leaderboard(Vec<LeaderboardEntry>),
}

impl SummaryUpdate {
    #[must_use]
    pub fn part(&self) -> SummaryPart {
        match self {
            Self::Profile(_) => SummaryPart::Profile,
            Self::Saved(_) => SummaryPart::Saved,
            Self::Channels(_) => SummaryPart::Channels,
            Self::Points(_) => SummaryPart::Points,
            Self::Leaderboard(_) => SummaryPart::Leaderboard,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeSummary {
    pub profile: Option<Profile>,
    pub saved: Vec<Post>,
    pub channels: Vec<Channel>,
    pub points: Option<i64>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub refreshing: bool,
}

impl HomeSummary {
    pub fn apply(&mut self, update: SummaryUpdate) {
        match update {
            SummaryUpdate::Profile(profile) => self.profile = Some(profile),
            SummaryUpdate::Saved(posts) => self.saved = posts,
            SummaryUpdate::Channels(channels) => self.channels = channels,
            SummaryUpdate::Points(points) => self.points = Some(points),
            SummaryUpdate::Leaderboard(rows) => self.leaderboard = rows,
        }
    }

    /// Name shown in the sidebar profile block.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.profile
            .as_ref()
            .map_or_else(|| "Guest".to_owned(), |p| p.display_name().to_owned())
    }
}
