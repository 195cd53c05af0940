//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the API base URL
//! is baked in from `EDORA_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `EDORA_API_URL` is not set.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Items shown per list on the home summary.
pub const DEFAULT_PREVIEW_LIMIT: usize = 5;

/// Runtime settings shared by the API client and refresh coordinator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub api_base: String,
    /// Saved posts kept in the home summary.
    pub saved_preview_limit: usize,
    /// Channels kept in the home summary.
    pub channel_preview_limit: usize,
    /// Leaderboard rows requested for the home summary.
    pub leaderboard_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_api_base(None)
    }
}

impl ClientConfig {
    /// Build from the compile-time `EDORA_API_URL` variable.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("EDORA_API_URL"))
    }

    /// Build with an explicit base URL, falling back to [`DEFAULT_API_BASE`].
    #[must_use]
    pub fn with_api_base(raw: Option<&str>) -> Self {
        Self {
            api_base: normalize_api_base(raw),
            saved_preview_limit: DEFAULT_PREVIEW_LIMIT,
            channel_preview_limit: DEFAULT_PREVIEW_LIMIT,
            leaderboard_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }
}

fn normalize_api_base(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}
