use super::*;

fn channel(bio: Option<&str>) -> Channel {
    Channel {
        id: 3,
        name: "Rust".to_owned(),
        bio: bio.map(str::to_owned),
        owner_id: 1,
        logo_filename: None,
        created_at: "2024-01-01".to_owned(),
    }
}

#[test]
fn option_label_includes_bio_when_present() {
    assert_eq!(channel_option_label(&channel(Some("systems"))), "Rust (systems)");
    assert_eq!(channel_option_label(&channel(Some("  "))), "Rust");
    assert_eq!(channel_option_label(&channel(None)), "Rust");
}

#[test]
fn placeholder_choice_is_no_channel() {
    assert_eq!(parse_channel_choice(""), None);
    assert_eq!(parse_channel_choice("12"), Some(12));
}
