//! Pure render decisions derived from [`AppState`].

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use super::scene::{AppState, Scene};
use crate::net::types::{ChannelId, PostId, Role};

/// What the shell mounts for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Auth,
    Home,
    Upload,
    Create,
    Channels,
    ChannelDetail(ChannelId),
    PostDetail(PostId),
    Saved,
    SearchResults,
    Messages,
    Notifications,
    Settings,
    Support,
    Moderator,
}

/// Resolve the view for `state`.
///
/// Unauthenticated state always yields [`View::Auth`]. A detail scene missing
/// its id, or the moderator scene for a plain user, yields `None` and the
/// shell renders nothing for it.
#[must_use]
pub fn resolve_view(state: &AppState) -> Option<View> {
    if !state.authenticated {
        return Some(View::Auth);
    }
    let view = match state.scene {
        Scene::Auth => View::Auth,
        Scene::Home => View::Home,
        Scene::Upload => View::Upload,
        Scene::Create => View::Create,
        Scene::Channels => View::Channels,
        Scene::ChannelView => View::ChannelDetail(state.nav.selected_channel?),
        Scene::PostView => View::PostDetail(state.nav.selected_post?),
        Scene::Saved => View::Saved,
        Scene::Result => View::SearchResults,
        Scene::Messages => View::Messages,
        Scene::Notifications => View::Notifications,
        Scene::Settings => View::Settings,
        Scene::Support => View::Support,
        Scene::Moderator if state.role.can_moderate() => View::Moderator,
        Scene::Moderator => return None,
    };
    Some(view)
}

/// A sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub scene: Scene,
    pub label: &'static str,
}

const fn entry(scene: Scene, label: &'static str) -> NavEntry {
    NavEntry { scene, label }
}

/// Sidebar links visible to `role`, top to bottom.
#[must_use]
pub fn nav_entries(role: Role) -> Vec<NavEntry> {
    let mut entries = vec![
        entry(Scene::Home, "Home"),
        entry(Scene::Channels, "Channels"),
        entry(Scene::Messages, "Messages"),
        entry(Scene::Saved, "Saved"),
    ];
    if role.can_moderate() {
        entries.push(entry(Scene::Moderator, "Moderator"));
    }
    entries.extend([
        entry(Scene::Notifications, "Notifications"),
        entry(Scene::Settings, "Settings"),
        entry(Scene::Support, "Support"),
    ]);
    entries
}

/// Whether `entry` should render as the active link while `current` is shown.
///
/// Detail scenes highlight the list they belong to.
#[must_use]
pub fn is_active(entry: Scene, current: Scene) -> bool {
    match current {
        Scene::ChannelView => entry == Scene::Channels,
        other => entry == other,
    }
}
