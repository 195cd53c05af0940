//! Home dashboard backed by the cached summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders `HomeSummary` only; the refresh coordinator fills it. Each panel
//! degrades to an empty state on its own when its fetch failed.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::state::home::HomeSummary;
use crate::state::scene::{Event, Scene};

#[component]
pub fn HomePage() -> impl IntoView {
    let summary = expect_context::<RwSignal<HomeSummary>>();
    let dispatcher = expect_context::<Dispatcher>();

    let saved = move || {
        summary.with(|s| {
            if s.saved.is_empty() {
                return view! { <li class="empty-state">"No saved documents yet"</li> }.into_any();
            }
            s.saved
                .iter()
                .map(|post| {
                    let id = post.id;
                    view! {
                        <li class="clickable-link" on:click=move |_| dispatcher.dispatch(Event::SelectPost(id))>
                            {post.title.clone()}
                        </li>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let channels = move || {
        summary.with(|s| {
            if s.channels.is_empty() {
                return view! { <li class="empty-state">"No channels yet"</li> }.into_any();
            }
            s.channels
                .iter()
                .map(|channel| {
                    let id = channel.id;
                    view! {
                        <li class="clickable-link" on:click=move |_| dispatcher.dispatch(Event::SelectChannel(id))>
                            {channel.name.clone()}
                        </li>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    let leaderboard = move || {
        summary.with(|s| {
            s.leaderboard
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let rank = row.rank.map_or_else(|| (i + 1).to_string(), |r| r.to_string());
                    view! {
                        <li class="leaderboard-row">
                            <span class="leaderboard-rank">{format!("#{rank}")}</span>
                            <span class="leaderboard-name">{row.display_name().to_owned()}</span>
                            <span class="leaderboard-points">{row.points}</span>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="dashboard">
            <div class="dashboard-header">
                <h2>{move || format!("Welcome, {}", summary.with(HomeSummary::display_name))}</h2>
                <button
                    class="dashboard-button secondary"
                    disabled=move || summary.with(|s| s.refreshing)
                    on:click=move |_| dispatcher.dispatch(Event::RefreshRequested)
                >
                    {move || if summary.with(|s| s.refreshing) { "Refreshing..." } else { "Refresh" }}
                </button>
            </div>
            <div class="upload-box clickable-panel" on:click=move |_| dispatcher.dispatch(Event::Navigate(Scene::Create))>
                <h3>"Create Your Channel"</h3>
                <p>"Build your own community and start sharing content now!"</p>
            </div>
            <div class="upload-box clickable-panel" on:click=move |_| dispatcher.dispatch(Event::Navigate(Scene::Upload))>
                <h3>"Upload Your Documents"</h3>
                <p>"Start helping others by uploading your own documents here!"</p>
            </div>
            <div class="saved-docs">
                <h4>"Your saved documents"</h4>
                <ul class="no-bullets">{saved}</ul>
            </div>
            <div class="subscribed">
                <h4>"Your channels"</h4>
                <ul class="no-bullets">{channels}</ul>
            </div>
            <div class="leaderboard">
                <h4>"Leaderboard"</h4>
                <ol class="no-bullets">{leaderboard}</ol>
            </div>
        </section>
    }
}
