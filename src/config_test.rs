use super::*;

#[test]
fn default_points_at_local_backend() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "http://127.0.0.1:8000");
    assert_eq!(config.saved_preview_limit, 5);
    assert_eq!(config.channel_preview_limit, 5);
    assert_eq!(config.leaderboard_limit, 5);
}

#[test]
fn with_api_base_trims_trailing_slashes_and_whitespace() {
    let config = ClientConfig::with_api_base(Some("  https://api.edora.dev//  "));
    assert_eq!(config.api_base, "https://api.edora.dev");
}

#[test]
fn blank_api_base_falls_back_to_default() {
    assert_eq!(ClientConfig::with_api_base(Some("   ")).api_base, DEFAULT_API_BASE);
    assert_eq!(ClientConfig::with_api_base(Some("/")).api_base, DEFAULT_API_BASE);
}
