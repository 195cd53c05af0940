use super::*;
use crate::state::scene::{Event, NavContext};

fn authed(scene: Scene, role: Role) -> AppState {
    AppState { authenticated: true, role, scene, nav: NavContext::default(), ..AppState::default() }
}

#[test]
fn unauthenticated_always_renders_auth() {
    for scene in Scene::ALL {
        let state = AppState { authenticated: false, role: Role::Admin, scene, nav: NavContext::default(), ..AppState::default() };
        assert_eq!(resolve_view(&state), Some(View::Auth), "{scene:?}");
    }
}

#[test]
fn detail_scenes_without_selection_render_nothing() {
    assert_eq!(resolve_view(&authed(Scene::ChannelView, Role::User)), None);
    assert_eq!(resolve_view(&authed(Scene::PostView, Role::User)), None);
}

#[test]
fn detail_scenes_with_selection_carry_id() {
    let mut state = authed(Scene::ChannelView, Role::User);
    state.nav.selected_channel = Some(3);
    assert_eq!(resolve_view(&state), Some(View::ChannelDetail(3)));

    state.scene = Scene::PostView;
    state.nav.selected_post = Some(9);
    assert_eq!(resolve_view(&state), Some(View::PostDetail(9)));
}

#[test]
fn every_scene_resolves_without_panicking() {
    for role in [Role::User, Role::Moderator, Role::Admin] {
        for scene in Scene::ALL {
            let _ = resolve_view(&authed(scene, role));
        }
    }
}

#[test]
fn moderator_scene_is_role_gated() {
    assert_eq!(resolve_view(&authed(Scene::Moderator, Role::User)), None);
    assert_eq!(resolve_view(&authed(Scene::Moderator, Role::Moderator)), Some(View::Moderator));
    assert_eq!(resolve_view(&authed(Scene::Moderator, Role::Admin)), Some(View::Moderator));
}

#[test]
fn user_role_never_sees_moderator_entry() {
    assert!(nav_entries(Role::User).iter().all(|e| e.scene != Scene::Moderator));
}

#[test]
fn moderator_and_admin_see_moderator_entry() {
    for role in [Role::Moderator, Role::Admin] {
        assert!(nav_entries(role).iter().any(|e| e.scene == Scene::Moderator), "{role:?}");
    }
}

#[test]
fn nav_entries_never_link_detail_scenes() {
    assert!(nav_entries(Role::Admin).iter().all(|e| !e.scene.requires_selection() && e.scene != Scene::Auth));
}

#[test]
fn result_scene_after_search_renders_results() {
    let state = authed(Scene::Home, Role::User).apply(Event::SearchSucceeded).state;
    assert_eq!(resolve_view(&state), Some(View::SearchResults));
}

#[test]
fn channel_view_highlights_channels_link() {
    assert!(is_active(Scene::Channels, Scene::ChannelView));
    assert!(!is_active(Scene::Home, Scene::ChannelView));
    assert!(is_active(Scene::Saved, Scene::Saved));
}
