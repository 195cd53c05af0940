use super::*;
use crate::net::types::Role;

fn profile() -> Profile {
    Profile {
        id: 1,
        email: "k@edora.io".to_owned(),
        username: Some("keenan".to_owned()),
        role: Role::User,
        is_superuser: false,
    }
}

#[test]
fn default_summary_is_empty() {
    let summary = HomeSummary::default();
    assert!(summary.profile.is_none());
    assert!(summary.saved.is_empty());
    assert_eq!(summary.points, None);
    assert!(!summary.refreshing);
    assert_eq!(summary.display_name(), "Guest");
}

#[test]
fn apply_updates_only_its_own_field() {
    let mut summary = HomeSummary::default();
    summary.apply(SummaryUpdate::Points(240));
    summary.apply(SummaryUpdate::Profile(profile()));

    assert_eq!(summary.points, Some(240));
    assert_eq!(summary.display_name(), "keenan");
    assert!(summary.channels.is_empty());
    assert!(summary.leaderboard.is_empty());
}

#[test]
fn later_update_wins() {
    let mut summary = HomeSummary::default();
    summary.apply(SummaryUpdate::Points(10));
    summary.apply(SummaryUpdate::Points(30));
    assert_eq!(summary.points, Some(30));
}

#[test]
fn update_reports_its_part() {
    assert_eq!(SummaryUpdate::Points(1).part(), SummaryPart::Points);
    assert_eq!(SummaryUpdate::Saved(Vec::new()).part(), SummaryPart::Saved);
    assert_eq!(SummaryUpdate::Leaderboard(Vec::new()).part(), SummaryPart::Leaderboard);
}
