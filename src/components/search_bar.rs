//! Header search box with the file/channel mode selector.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::services::search::{SearchError, dispatch_search};
use crate::state::search::{SearchMode, SearchState};
use crate::util::browser;

#[component]
pub fn SearchBar() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let dispatcher = expect_context::<Dispatcher>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((query, mode)) = search.try_update(SearchState::begin).flatten() else {
            return;
        };
        let client = dispatcher.client();
        let epoch = dispatcher.epoch();
        leptos::task::spawn_local(async move {
            let result = dispatch_search(&client, &query, mode).await;
            if !dispatcher.is_current(epoch) {
                log::debug!("search {query:?}: session ended, result dropped");
                return;
            }
            let outcome = match result {
                Ok(outcome) => {
                    log::info!("search {query:?}: {} hit(s)", outcome.hits.len());
                    Some(outcome)
                }
                Err(e) => {
                    if let SearchError::Api(api) = &e {
                        dispatcher.check_auth(api);
                    }
                    browser::alert(&e.to_string());
                    None
                }
            };
            if let Some(event) = search.try_update(|s| s.finish(outcome)).flatten() {
                dispatcher.dispatch(event);
            }
        });
    };

    view! {
        <header class="header">
            <form class="search-form" on:submit=on_submit>
                <select
                    class="search-mode"
                    prop:value=move || search.with(|s| s.mode.as_str())
                    on:change=move |ev| search.update(|s| s.mode = SearchMode::parse(&event_target_value(&ev)))
                >
                    <option value="file">"File"</option>
                    <option value="channel">"Channel"</option>
                </select>
                <input
                    class="search-input"
                    type="text"
                    placeholder=move || search.with(|s| s.mode.placeholder())
                    prop:value=move || search.with(|s| s.input.clone())
                    on:input=move |ev| search.update(|s| s.input = event_target_value(&ev))
                />
                <button class="search-button" type="submit" disabled=move || search.with(|s| s.in_flight)>
                    {move || if search.with(|s| s.in_flight) { "Searching..." } else { "Search" }}
                </button>
            </form>
        </header>
    }
}
