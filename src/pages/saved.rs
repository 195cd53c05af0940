//! The user's saved posts, with inline unsave.

#[cfg(test)]
#[path = "saved_test.rs"]
mod saved_test;

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::net::error::ApiError;
use crate::net::types::{Post, PostId};
use crate::pages::view_token;
use crate::state::scene::Event;
use crate::util::browser;
use crate::util::format::{display_date, truncate_content};

/// Claim the page's busy slot for unsaving `id`; one unsave runs at a time.
pub fn begin_unsave(pending: &mut Option<PostId>, id: PostId) -> bool {
    if pending.is_some() {
        return false;
    }
    *pending = Some(id);
    true
}

/// Apply a finished unsave to the list.
///
/// On success the post leaves the list and the home summary must refresh.
///
/// # Errors
///
/// Returns the API failure untouched; the list is unchanged.
pub fn finish_unsave(posts: &mut Vec<Post>, id: PostId, result: Result<(), ApiError>) -> Result<Event, ApiError> {
    result?;
    posts.retain(|p| p.id != id);
    Ok(Event::RefreshRequested)
}

#[component]
pub fn SavedPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let token = view_token();
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let unsaving = RwSignal::new(None::<PostId>);

    {
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = client.saved_posts().await;
            token.guard(result, |result| {
                match result {
                    Ok(list) => posts.set(list),
                    Err(e) => {
                        log::warn!("saved posts: {e}");
                        dispatcher.check_auth(&e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        });
    }

    let on_unsave = Callback::new(move |id: PostId| {
        if !unsaving.try_update(|pending| begin_unsave(pending, id)).unwrap_or(false) {
            return;
        }
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = client.unsave_post(id).await;
            token.guard(result, |result| {
                unsaving.set(None);
                let outcome = posts.try_update(|list| finish_unsave(list, id, result));
                match outcome {
                    Some(Ok(event)) => dispatcher.dispatch(event),
                    Some(Err(e)) => {
                        log::warn!("unsave post {id}: {e}");
                        dispatcher.check_auth(&e);
                        browser::alert(&e.to_string());
                    }
                    None => {}
                }
            });
        });
    });

    let rows = move || {
        posts.with(|list| {
            list.iter()
                .map(|post| {
                    let id = post.id;
                    view! {
                        <div class="saved-post-card" on:click=move |_| dispatcher.dispatch(Event::SelectPost(id))>
                            <div class="saved-post-header">
                                <h3>{post.title.clone()}</h3>
                                <button
                                    class="unsave-button"
                                    disabled=move || unsaving.get().is_some()
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.stop_propagation();
                                        on_unsave.run(id);
                                    }
                                >
                                    {move || if unsaving.get() == Some(id) { "Removing..." } else { "Unsave" }}
                                </button>
                            </div>
                            <p class="saved-post-excerpt">{truncate_content(&post.content)}</p>
                            <span class="post-date">{display_date(&post.created_at)}</span>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="saved-posts-container">
            <h2>"Saved Posts"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading saved posts..."</p> }>
                {move || match error.get() {
                    Some(msg) => view! { <p class="error-message">{msg}</p> }.into_any(),
                    None if posts.with(Vec::is_empty) => view! {
                        <div class="empty-state">
                            <h3>"No saved posts yet"</h3>
                            <p>"Save posts to find them here later."</p>
                        </div>
                    }
                    .into_any(),
                    None => view! { <div class="saved-posts-grid">{rows}</div> }.into_any(),
                }}
            </Show>
        </section>
    }
}
