//! Moderator panel: flagged posts and the flagged word list.
//!
//! Only mounted for moderator and admin roles. Every mutation refetches the
//! list it touched; failures show in a single error banner.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::net::error::ApiError;
use crate::net::types::{FlaggedWord, Post, PostId};
use crate::pages::view_token;
use crate::services::posts::normalize_flagged_word;
use crate::util::browser;

#[component]
pub fn ModeratorPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let token = view_token();
    let posts = RwSignal::new(Vec::<Post>::new());
    let words = RwSignal::new(Vec::<FlaggedWord>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let new_word = RwSignal::new(String::new());

    let report = move |context: &str, e: &ApiError| {
        log::warn!("moderator: {context} failed: {e}");
        dispatcher.check_auth(e);
        error.set(Some(e.to_string()));
    };

    let posts_token = token.clone();
    let load_posts = Callback::new(move |()| {
        let client = dispatcher.client();
        let token = posts_token.clone();
        leptos::task::spawn_local(async move {
            let result = client.flagged_posts().await;
            token.guard(result, |result| {
                match result {
                    Ok(list) => posts.set(list),
                    Err(e) => report("flagged posts", &e),
                }
                loading.set(false);
            });
        });
    });

    let words_token = token.clone();
    let load_words = Callback::new(move |()| {
        let client = dispatcher.client();
        let token = words_token.clone();
        leptos::task::spawn_local(async move {
            let result = client.flagged_words().await;
            token.guard(result, |result| match result {
                Ok(list) => words.set(list),
                Err(e) => report("flagged words", &e),
            });
        });
    });

    load_posts.run(());
    load_words.run(());

    let approve_token = token.clone();
    let on_approve = Callback::new(move |id: PostId| {
        error.set(None);
        let client = dispatcher.client();
        let token = approve_token.clone();
        leptos::task::spawn_local(async move {
            let result = client.approve_post(id).await;
            token.guard(result, |result| match result {
                Ok(()) => load_posts.run(()),
                Err(e) => report("approve", &e),
            });
        });
    });

    let delete_token = token.clone();
    let on_delete_post = Callback::new(move |id: PostId| {
        if !browser::confirm("Delete this post?") {
            return;
        }
        error.set(None);
        let client = dispatcher.client();
        let token = delete_token.clone();
        leptos::task::spawn_local(async move {
            let result = client.delete_post(id).await;
            token.guard(result, |result| match result {
                Ok(()) => load_posts.run(()),
                Err(e) => report("delete post", &e),
            });
        });
    });

    let remove_token = token.clone();
    let on_remove_word = Callback::new(move |word: String| {
        error.set(None);
        let client = dispatcher.client();
        let token = remove_token.clone();
        leptos::task::spawn_local(async move {
            let result = client.remove_flagged_word(&word).await;
            token.guard(result, |result| match result {
                Ok(()) => load_words.run(()),
                Err(e) => report("remove word", &e),
            });
        });
    });

    let on_add_word = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(word) = normalize_flagged_word(&new_word.get_untracked()) else {
            return;
        };
        error.set(None);
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = client.add_flagged_word(&word).await;
            token.guard(result, |result| match result {
                Ok(added) => {
                    log::info!("moderator: flagged word {:?}", added.word);
                    new_word.set(String::new());
                    load_words.run(());
                }
                Err(e) => report("add word", &e),
            });
        });
    };

    let post_rows = move || {
        posts.with(|list| {
            list.iter()
                .map(|post| {
                    let id = post.id;
                    view! {
                        <li class="list-item flagged-post">
                            <div><b>"Title: "</b>{post.title.clone()}</div>
                            <div><b>"Reason: "</b>{post.flag_reason.clone().unwrap_or_default()}</div>
                            <div><b>"Content: "</b>{post.content.clone()}</div>
                            <div class="flagged-post__actions">
                                <button class="dashboard-button" on:click=move |_| on_approve.run(id)>"Approve"</button>
                                <button class="dashboard-button secondary" on:click=move |_| on_delete_post.run(id)>
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    let word_rows = move || {
        words.with(|list| {
            list.iter()
                .map(|fw| {
                    let word = fw.word.clone();
                    view! {
                        <li class="list-item">
                            <span>{fw.word.clone()}</span>
                            <button
                                class="dashboard-button secondary"
                                on:click=move |_| on_remove_word.run(word.clone())
                            >
                                "Delete"
                            </button>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="moderator-panel">
            <h2>"Moderator Panel"</h2>
            {move || error.get().map(|msg| view! { <div class="error-container">{msg}</div> })}
            <div class="panel-grid">
                <div class="panel">
                    <h3>"Flagged Posts"</h3>
                    {move || {
                        if loading.get() {
                            view! { <p class="loading">"Loading..."</p> }.into_any()
                        } else if posts.with(Vec::is_empty) {
                            view! { <p class="empty-state">"No flagged posts"</p> }.into_any()
                        } else {
                            view! { <ul class="item-list">{post_rows}</ul> }.into_any()
                        }
                    }}
                </div>
                <div class="panel">
                    <h3>"Flagged Words"</h3>
                    <form class="flagged-word-form" on:submit=on_add_word>
                        <input
                            type="text"
                            class="input"
                            placeholder="Add new word..."
                            required=true
                            prop:value=move || new_word.get()
                            on:input=move |ev| new_word.set(event_target_value(&ev))
                        />
                        <button class="dashboard-button" type="submit">"Add"</button>
                    </form>
                    <Show
                        when=move || !words.with(Vec::is_empty)
                        fallback=|| view! { <p class="empty-state">"No flagged words"</p> }
                    >
                        <ul class="item-list">{word_rows}</ul>
                    </Show>
                </div>
            </div>
        </section>
    }
}
