//! Search results, labeled with the query that produced them.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::components::post_card::PostCard;
use crate::net::types::PostId;
use crate::state::scene::Event;
use crate::state::search::{SearchHits, SearchState};

#[component]
pub fn ResultPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let dispatcher = expect_context::<Dispatcher>();
    let on_open = Callback::new(move |id: PostId| dispatcher.dispatch(Event::SelectPost(id)));

    let body = move || {
        let Some(outcome) = search.with(|s| s.last.clone()) else {
            return view! { <p>"No search query entered."</p> }.into_any();
        };
        let heading = format!("{} result(s) for \"{}\"", outcome.hits.len(), outcome.query);
        let hits = match outcome.hits {
            SearchHits::Posts(posts) if posts.is_empty() => view! { <p class="empty-state">"No files found."</p> }.into_any(),
            SearchHits::Posts(posts) => {
                posts.into_iter().map(|post| view! { <PostCard post on_open/> }).collect_view().into_any()
            }
            SearchHits::Channels(channels) if channels.is_empty() => {
                view! { <p class="empty-state">"No channels found."</p> }.into_any()
            }
            SearchHits::Channels(channels) => channels
                .into_iter()
                .map(|channel| {
                    let id = channel.id;
                    view! {
                        <div class="result-item" on:click=move |_| dispatcher.dispatch(Event::SelectChannel(id))>
                            <div class="result-title">{channel.name}</div>
                            {channel.bio.map(|bio| view! { <div class="result-preview">{bio}</div> })}
                        </div>
                    }
                })
                .collect_view()
                .into_any(),
        };
        view! {
            <p class="result-heading">{heading}</p>
            <div class="result-list">{hits}</div>
        }
        .into_any()
    };

    view! {
        <section class="result-container">
            <h2>"Search Results"</h2>
            {body}
        </section>
    }
}
