//! Sidebar navigation with the profile and points block.
//!
//! ARCHITECTURE
//! ============
//! Links come from `state::view::nav_entries`, so role gating lives in one
//! place; clicking a link only dispatches `Event::Navigate`.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::state::home::HomeSummary;
use crate::state::scene::{AppState, Event};
use crate::state::view::{is_active, nav_entries};

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<RwSignal<AppState>>();
    let summary = expect_context::<RwSignal<HomeSummary>>();
    let dispatcher = expect_context::<Dispatcher>();

    let links = move || {
        let (role, current) = state.with(|s| (s.role, s.scene));
        nav_entries(role)
            .into_iter()
            .map(|entry| {
                view! {
                    <button
                        class="clickable-link"
                        class:active=is_active(entry.scene, current)
                        on:click=move |_| dispatcher.dispatch(Event::Navigate(entry.scene))
                    >
                        <span>{entry.label}</span>
                    </button>
                }
            })
            .collect_view()
    };

    let on_logout = move |_| dispatcher.logout();

    let points = move || {
        summary.with(|s| s.points.map_or_else(|| "-- points".to_owned(), |p| format!("{p} points")))
    };

    view! {
        <aside class="sidebar">
            <div class="edora-logo">"Edora"</div>
            <nav class="nav-links">{links}</nav>
            <div class="bottom-links">
                <button class="clickable-link" on:click=on_logout>
                    <span>"Logout"</span>
                </button>
            </div>
            <div class="user-profile">
                <div class="points-display">{points}</div>
                <div class="username">{move || summary.with(HomeSummary::display_name)}</div>
            </div>
        </aside>
    }
}
