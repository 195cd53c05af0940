//! Search bar input and the last successful result set.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::{Channel, Post};
use crate::state::scene::Event;

/// What a query searches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    File,
    Channel,
}

impl SearchMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Channel => "channel",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::File => "Search files...",
            Self::Channel => "Search channels...",
        }
    }

    /// Parse a `<select>` value; anything unknown is a file search.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "channel" => Self::Channel,
            _ => Self::File,
        }
    }
}

/// Results of one query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchHits {
    Posts(Vec<Post>),
    Channels(Vec<Channel>),
}

impl SearchHits {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Posts(p) => p.len(),
            Self::Channels(c) => c.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A completed search, labeled with the query that was sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub query: String,
    pub mode: SearchMode,
    pub hits: SearchHits,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    /// Live text in the search box.
    pub input: String,
    pub mode: SearchMode,
    pub in_flight: bool,
    pub last: Option<SearchOutcome>,
}

impl SearchState {
    /// Claim the busy flag for a submission.
    ///
    /// Returns the trimmed query and mode to send, or `None` when the input
    /// is blank or a search is already running.
    pub fn begin(&mut self) -> Option<(String, SearchMode)> {
        let query = self.input.trim();
        if query.is_empty() || self.in_flight {
            return None;
        }
        let query = query.to_owned();
        self.in_flight = true;
        Some((query, self.mode))
    }

    /// Release the busy flag, replacing results on success.
    ///
    /// Returns the event to dispatch: `SearchSucceeded` when results were
    /// stored, nothing when the search failed so the scene stays put.
    pub fn finish(&mut self, outcome: Option<SearchOutcome>) -> Option<Event> {
        self.in_flight = false;
        let outcome = outcome?;
        self.last = Some(outcome);
        Some(Event::SearchSucceeded)
    }
}
