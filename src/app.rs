//! Root application component and the event dispatcher.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the shared state signals, validates the stored session once
//! on mount and then mounts either the auth page or the signed-in shell.
//! Views never set the scene directly; they hand an [`Event`] to the
//! [`Dispatcher`], which applies the transition and runs its effects.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::search_bar::SearchBar;
use crate::components::sidebar::Sidebar;
use crate::config::ClientConfig;
use crate::net::api::BrowserClient;
use crate::net::error::ApiError;
use crate::pages::auth::AuthPage;
use crate::pages::channel_view::ChannelViewPage;
use crate::pages::channels::ChannelsPage;
use crate::pages::create::CreateChannelPage;
use crate::pages::home::HomePage;
use crate::pages::moderator::ModeratorPage;
use crate::pages::placeholder::PlaceholderPage;
use crate::pages::post_view::PostViewPage;
use crate::pages::result::ResultPage;
use crate::pages::saved::SavedPage;
use crate::pages::settings::SettingsPage;
use crate::pages::upload::UploadPage;
use crate::services::refresh::refresh_summary;
use crate::services::session::{bootstrap, logout};
use crate::state::home::{HomeSummary, SummaryUpdate};
use crate::state::scene::{AppState, Effect, Event, Transition};
use crate::state::search::SearchState;
use crate::state::session::SessionStore;
use crate::state::view::{View, resolve_view};

/// Applies scene transitions and runs their effects.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: RwSignal<AppState>,
    summary: RwSignal<HomeSummary>,
    search: RwSignal<SearchState>,
    client: StoredValue<BrowserClient>,
}

impl Dispatcher {
    pub fn new(
        state: RwSignal<AppState>,
        summary: RwSignal<HomeSummary>,
        search: RwSignal<SearchState>,
        client: BrowserClient,
    ) -> Self {
        Self { state, summary, search, client: StoredValue::new(client) }
    }

    pub fn client(self) -> BrowserClient {
        self.client.get_value()
    }

    /// Epoch of the current session, captured when async work starts.
    pub fn epoch(self) -> u64 {
        self.state.with_untracked(|s| s.epoch)
    }

    /// Whether work launched at `epoch` may still touch shared state.
    pub fn is_current(self, epoch: u64) -> bool {
        self.state.with_untracked(|s| s.is_current(epoch))
    }

    pub fn dispatch(self, event: Event) {
        let Transition { state, effects } = self.state.with_untracked(|s| s.apply(event));
        log::debug!("dispatch {event:?} -> {}", state.scene.as_str());
        self.state.set(state);
        for effect in effects {
            match effect {
                Effect::RefreshSummary => self.refresh(),
                Effect::ClearSession => self.clear_session(),
            }
        }
    }

    /// Forget the stored session and return to the auth scene.
    pub fn logout(self) {
        let event = self.client.with_value(|c| logout(c.store()));
        self.dispatch(event);
    }

    /// Force the auth scene when `err` means the session is gone.
    pub fn check_auth(self, err: &ApiError) {
        if err.is_auth_failure() && self.state.with_untracked(|s| s.authenticated) {
            log::warn!("session rejected: {err}");
            self.dispatch(Event::SessionRejected);
        }
    }

    fn clear_session(self) {
        self.client.with_value(|c| c.store().clear());
        self.summary.set(HomeSummary::default());
        self.search.set(SearchState::default());
    }

    fn refresh(self) {
        let summary = self.summary;
        let epoch = self.epoch();
        summary.update(|s| s.refreshing = true);
        let client = self.client();
        leptos::task::spawn_local(async move {
            let report = refresh_summary(&client, move |update| {
                if !self.is_current(epoch) {
                    log::debug!("refresh: dropping {} from an ended session", update.part().as_str());
                    return;
                }
                if let SummaryUpdate::Profile(profile) = &update {
                    self.dispatch(Event::ProfileLoaded { role: profile.role });
                }
                summary.update(|s| s.apply(update));
            })
            .await;
            if !self.is_current(epoch) {
                return;
            }
            summary.update(|s| s.refreshing = false);
            if report.session_rejected {
                self.dispatch(Event::SessionRejected);
            }
        });
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(AppState::default());
    let summary = RwSignal::new(HomeSummary::default());
    let search = RwSignal::new(SearchState::default());
    let dispatcher = Dispatcher::new(state, summary, search, BrowserClient::browser(ClientConfig::from_build_env()));

    provide_context(state);
    provide_context(summary);
    provide_context(search);
    provide_context(dispatcher);

    let booting = RwSignal::new(true);
    leptos::task::spawn_local(async move {
        let outcome = bootstrap(&dispatcher.client()).await;
        dispatcher.dispatch(outcome.event());
        booting.set(false);
    });

    let signed_in = Memo::new(move |_| state.with(|s| s.authenticated));
    let resolved = Memo::new(move |_| state.with(resolve_view));

    view! {
        <Title text="Edora"/>
        <Show when=move || !booting.get() fallback=|| view! { <div class="boot-screen">"Loading..."</div> }>
            <Show when=move || signed_in.get() fallback=|| view! { <AuthPage/> }>
                <Shell resolved/>
            </Show>
        </Show>
    }
}

/// Signed-in layout: sidebar, search header and the active scene.
#[component]
fn Shell(resolved: Memo<Option<View>>) -> impl IntoView {
    let body = move || match resolved.get() {
        Some(View::Home) => view! { <HomePage/> }.into_any(),
        Some(View::Upload) => view! { <UploadPage/> }.into_any(),
        Some(View::Create) => view! { <CreateChannelPage/> }.into_any(),
        Some(View::Channels) => view! { <ChannelsPage/> }.into_any(),
        Some(View::ChannelDetail(id)) => view! { <ChannelViewPage channel_id=id/> }.into_any(),
        Some(View::PostDetail(id)) => view! { <PostViewPage post_id=id/> }.into_any(),
        Some(View::Saved) => view! { <SavedPage/> }.into_any(),
        Some(View::SearchResults) => view! { <ResultPage/> }.into_any(),
        Some(View::Messages) => view! { <PlaceholderPage title="Messages"/> }.into_any(),
        Some(View::Notifications) => view! { <PlaceholderPage title="Notifications"/> }.into_any(),
        Some(View::Support) => view! { <PlaceholderPage title="Support"/> }.into_any(),
        Some(View::Settings) => view! { <SettingsPage/> }.into_any(),
        Some(View::Moderator) => view! { <ModeratorPage/> }.into_any(),
        Some(View::Auth) | None => ().into_any(),
    };

    view! {
        <div class="app">
            <Sidebar/>
            <main class="main-content">
                <SearchBar/>
                {body}
            </main>
        </div>
    }
}
