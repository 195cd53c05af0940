//! Scene state machine for the application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one scene is active at a time. Views never mutate navigation
//! directly: they report an [`Event`], and [`AppState::apply`] returns the
//! next state together with the side effects the shell must run.
//!
//! TRADE-OFFS
//! ==========
//! Effects are returned as data rather than executed here, which keeps every
//! transition testable without a browser or network.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::net::types::{ChannelId, PostId, Role};

/// Top-level views of the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scene {
    #[default]
    Auth,
    Home,
    Upload,
    Create,
    Channels,
    ChannelView,
    PostView,
    Saved,
    Result,
    Messages,
    Notifications,
    Settings,
    Support,
    Moderator,
}

impl Scene {
    pub const ALL: [Scene; 14] = [
        Scene::Auth,
        Scene::Home,
        Scene::Upload,
        Scene::Create,
        Scene::Channels,
        Scene::ChannelView,
        Scene::PostView,
        Scene::Saved,
        Scene::Result,
        Scene::Messages,
        Scene::Notifications,
        Scene::Settings,
        Scene::Support,
        Scene::Moderator,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Home => "home",
            Self::Upload => "upload",
            Self::Create => "create",
            Self::Channels => "channels",
            Self::ChannelView => "channel-view",
            Self::PostView => "post-view",
            Self::Saved => "saved",
            Self::Result => "result",
            Self::Messages => "messages",
            Self::Notifications => "notifications",
            Self::Settings => "settings",
            Self::Support => "support",
            Self::Moderator => "moderator",
        }
    }

    /// Detail scenes that cannot render without a selected id.
    #[must_use]
    pub fn requires_selection(self) -> bool {
        matches!(self, Self::ChannelView | Self::PostView)
    }
}

/// Selection and origin tracking for detail scenes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavContext {
    pub selected_channel: Option<ChannelId>,
    pub selected_post: Option<PostId>,
    /// Scene the open post was launched from.
    pub previous_scene: Option<Scene>,
}

/// The whole navigation/session state of the shell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub authenticated: bool,
    pub role: Role,
    pub scene: Scene,
    pub nav: NavContext,
    /// Bumped whenever a session starts or ends. Async work captures it at
    /// launch and drops its result when it no longer matches.
    pub epoch: u64,
}

/// Something that happened in a view or in a network callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// Bootstrap verified the stored token.
    SessionRestored { role: Role },
    /// Bootstrap found no usable token.
    SessionRejected,
    LoggedIn,
    LoggedOut,
    ProfileLoaded { role: Role },
    Navigate(Scene),
    SelectChannel(ChannelId),
    SelectPost(PostId),
    BackFromPost,
    BackFromChannel,
    ChannelCreated,
    RefreshRequested,
    SearchSucceeded,
}

/// Side effects the shell runs after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    RefreshSummary,
    ClearSession,
}

/// Next state plus the effects to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(state: AppState) -> Self {
        Self { state, effects: Vec::new() }
    }

    fn with(state: AppState, effect: Effect) -> Self {
        Self { state, effects: vec![effect] }
    }
}

impl AppState {
    /// Authenticated home state for a new session.
    fn home(&self, role: Role) -> Self {
        Self {
            authenticated: true,
            role,
            scene: Scene::Home,
            nav: NavContext::default(),
            epoch: self.epoch.wrapping_add(1),
        }
    }

    /// Unauthenticated state for a session that just ended.
    fn signed_out(&self) -> Self {
        Self { epoch: self.epoch.wrapping_add(1), ..Self::default() }
    }

    /// Whether work launched at `epoch` still belongs to this session.
    #[must_use]
    pub fn is_current(&self, epoch: u64) -> bool {
        self.authenticated && self.epoch == epoch
    }

    /// Apply `event`, returning the next state and its effects.
    ///
    /// Unknown or disallowed events leave the state unchanged with no effects.
    #[must_use]
    pub fn apply(&self, event: Event) -> Transition {
        match event {
            Event::SessionRestored { role } => Transition::with(self.home(role), Effect::RefreshSummary),
            Event::LoggedIn => Transition::with(self.home(Role::User), Effect::RefreshSummary),
            Event::SessionRejected | Event::LoggedOut => Transition::with(self.signed_out(), Effect::ClearSession),
            _ if !self.authenticated => Transition::to(self.clone()),
            Event::ProfileLoaded { role } => {
                let mut next = self.clone();
                next.role = role;
                if next.scene == Scene::Moderator && !role.can_moderate() {
                    next.scene = Scene::Home;
                }
                Transition::to(next)
            }
            Event::Navigate(scene) => Transition::to(self.navigate(scene)),
            Event::SelectChannel(id) => {
                let mut next = self.clone();
                next.scene = Scene::ChannelView;
                next.nav = NavContext { selected_channel: Some(id), selected_post: None, previous_scene: None };
                Transition::to(next)
            }
            Event::SelectPost(id) => {
                let mut next = self.clone();
                if self.scene != Scene::PostView {
                    next.nav.previous_scene = Some(self.scene);
                }
                next.nav.selected_post = Some(id);
                next.scene = Scene::PostView;
                Transition::to(next)
            }
            Event::BackFromPost => Transition::with(self.back_from_post(), Effect::RefreshSummary),
            Event::BackFromChannel => {
                let mut next = self.clone();
                next.scene = Scene::Channels;
                next.nav.selected_channel = None;
                Transition::to(next)
            }
            Event::ChannelCreated => {
                let mut next = self.clone();
                next.scene = Scene::Home;
                next.nav = NavContext::default();
                Transition::with(next, Effect::RefreshSummary)
            }
            Event::RefreshRequested => Transition::with(self.clone(), Effect::RefreshSummary),
            Event::SearchSucceeded => {
                let mut next = self.clone();
                next.scene = Scene::Result;
                Transition::to(next)
            }
        }
    }

    fn navigate(&self, scene: Scene) -> Self {
        let allowed = match scene {
            Scene::Auth => false,
            Scene::Moderator => self.role.can_moderate(),
            s => !s.requires_selection(),
        };
        if !allowed {
            return self.clone();
        }
        let mut next = self.clone();
        next.scene = scene;
        next.nav = NavContext::default();
        next
    }

    fn back_from_post(&self) -> Self {
        let mut next = self.clone();
        let origin = self.nav.previous_scene.filter(|scene| match scene {
            Scene::Auth | Scene::PostView => false,
            Scene::ChannelView => self.nav.selected_channel.is_some(),
            _ => true,
        });
        next.scene = origin.unwrap_or(Scene::Channels);
        next.nav.selected_post = None;
        next.nav.previous_scene = None;
        next
    }
}
