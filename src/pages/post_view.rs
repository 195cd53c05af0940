//! Post detail: content, attachments, reactions, saving and comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened through `Event::SelectPost`; leaving goes through
//! `Event::BackFromPost`, which restores the scene the post was opened from.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::net::types::{Comment, Post, PostId, ReactionCounts, ReactionKind};
use crate::pages::view_token;
use crate::services::posts::{toggle_reaction, toggle_saved, validate_comment};
use crate::state::scene::{AppState, Event};
use crate::util::browser;
use crate::util::format::{display_date, file_href, file_label};

const DELETE_PROMPT: &str = "Are you sure you want to delete this post?";

#[component]
pub fn PostViewPage(post_id: PostId) -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = expect_context::<RwSignal<AppState>>();
    let token = view_token();
    let api_base = dispatcher.client().config().api_base.clone();

    let post = RwSignal::new(None::<Post>);
    let comments = RwSignal::new(Vec::<Comment>::new());
    let counts = RwSignal::new(ReactionCounts::default());
    let mine = RwSignal::new(None::<ReactionKind>);
    let saved = RwSignal::new(false);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reacting = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let comment_text = RwSignal::new(String::new());
    let commenting = RwSignal::new(false);

    {
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let loaded = futures::join!(
                client.post(post_id),
                client.post_comments(post_id),
                client.reaction_counts(post_id),
                client.my_reaction(post_id),
                client.is_saved(post_id),
            );
            token.guard(loaded, |(detail, thread, tally, reaction, is_saved)| {
                match detail {
                    Ok(p) => post.set(Some(p)),
                    Err(e) => {
                        dispatcher.check_auth(&e);
                        error.set(Some(e.to_string()));
                    }
                }
                match thread {
                    Ok(list) => comments.set(list),
                    Err(e) => log::warn!("post {post_id} comments: {e}"),
                }
                match tally {
                    Ok(c) => counts.set(c),
                    Err(e) => log::warn!("post {post_id} reaction counts: {e}"),
                }
                match reaction {
                    Ok(r) => mine.set(r.map(|r| r.reaction_type)),
                    Err(e) => log::warn!("post {post_id} user reaction: {e}"),
                }
                match is_saved {
                    Ok(flag) => saved.set(flag),
                    Err(e) => log::warn!("post {post_id} save status: {e}"),
                }
                loading.set(false);
            });
        });
    }

    let react_token = token.clone();
    let on_react = Callback::new(move |kind: ReactionKind| {
        if reacting.get_untracked() {
            return;
        }
        reacting.set(true);
        let client = dispatcher.client();
        let token = react_token.clone();
        let current = mine.get_untracked();
        leptos::task::spawn_local(async move {
            let result = toggle_reaction(&client, post_id, current, kind).await;
            token.guard(result, |result| {
                match result {
                    Ok(next) => {
                        mine.set(next.mine.map(|r| r.reaction_type));
                        counts.set(next.counts);
                    }
                    Err(e) => {
                        log::warn!("post {post_id} reaction: {e}");
                        dispatcher.check_auth(&e);
                    }
                }
                reacting.set(false);
            });
        });
    });

    let save_token = token.clone();
    let on_save = move |_: leptos::ev::MouseEvent| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let client = dispatcher.client();
        let token = save_token.clone();
        let current = saved.get_untracked();
        leptos::task::spawn_local(async move {
            let result = toggle_saved(&client, post_id, current).await;
            token.guard(result, |result| {
                match result {
                    Ok(flag) => {
                        saved.set(flag);
                        dispatcher.dispatch(Event::RefreshRequested);
                    }
                    Err(e) => {
                        dispatcher.check_auth(&e);
                        browser::alert(&e.to_string());
                    }
                }
                saving.set(false);
            });
        });
    };

    let comment_token = token.clone();
    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if commenting.get_untracked() {
            return;
        }
        let Some(text) = validate_comment(&comment_text.get_untracked()) else {
            return;
        };
        commenting.set(true);
        let client = dispatcher.client();
        let token = comment_token.clone();
        leptos::task::spawn_local(async move {
            let result = match client.add_comment(post_id, &text).await {
                Ok(_) => client.post_comments(post_id).await,
                Err(e) => Err(e),
            };
            token.guard(result, |result| {
                match result {
                    Ok(list) => {
                        comments.set(list);
                        comment_text.set(String::new());
                    }
                    Err(e) => {
                        dispatcher.check_auth(&e);
                        browser::alert(&e.to_string());
                    }
                }
                commenting.set(false);
            });
        });
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if !browser::confirm(DELETE_PROMPT) {
            return;
        }
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = client.delete_post(post_id).await;
            token.guard(result, |result| match result {
                Ok(()) => {
                    log::info!("deleted post {post_id}");
                    dispatcher.dispatch(Event::BackFromPost);
                }
                Err(e) => {
                    dispatcher.check_auth(&e);
                    browser::alert(&e.to_string());
                }
            });
        });
    };

    let can_moderate = move || state.with(|s| s.role.can_moderate());
    let on_back = move |_| dispatcher.dispatch(Event::BackFromPost);

    let article = move || {
        post.get().map(|p| {
            let paragraphs = p.content.lines().map(|line| view! { <p>{line.to_owned()}</p> }).collect_view();
            let attachments = p
                .files
                .iter()
                .map(|file| {
                    let href = file_href(&api_base, &file.filename, file.url.as_deref());
                    view! {
                        <div class="attachment-card">
                            <span class="file-name">{file_label(&file.filename).to_owned()}</span>
                            <a class="download-link" href=href target="_blank" rel="noopener noreferrer">"Download"</a>
                        </div>
                    }
                })
                .collect_view();
            let has_files = !p.files.is_empty();
            let on_delete = on_delete.clone();
            view! {
                <article class="post-article">
                    <header class="post-header">
                        <h1 class="post-title">{p.title}</h1>
                        <Show when=can_moderate>
                            <button class="delete-post-button" on:click=on_delete.clone()>"Delete Post"</button>
                        </Show>
                        <div class="post-meta">
                            <span class="author-name">{format!("User #{}", p.author_id)}</span>
                            <span class="post-date">{display_date(&p.created_at)}</span>
                            <button
                                class="save-button"
                                class:saved=move || saved.get()
                                disabled=move || saving.get()
                                on:click=on_save.clone()
                            >
                                {move || if saved.get() { "Saved" } else { "Save" }}
                            </button>
                        </div>
                    </header>
                    <div class="post-content">{paragraphs}</div>
                    <Show when=move || has_files>
                        <div class="post-attachments">
                            <h3>"Attachments"</h3>
                        </div>
                    </Show>
                    <div class="attachments-grid">{attachments}</div>
                    <div class="action-buttons">
                        <button
                            class="action-btn"
                            class:active=move || mine.get() == Some(ReactionKind::Like)
                            disabled=move || reacting.get()
                            on:click=move |_| on_react.run(ReactionKind::Like)
                        >
                            {move || format!("Like {}", counts.get().like_count)}
                        </button>
                        <button
                            class="action-btn"
                            class:active=move || mine.get() == Some(ReactionKind::Dislike)
                            disabled=move || reacting.get()
                            on:click=move |_| on_react.run(ReactionKind::Dislike)
                        >
                            {move || format!("Dislike {}", counts.get().dislike_count)}
                        </button>
                    </div>
                </article>
            }
        })
    };

    let thread = move || {
        comments
            .get()
            .into_iter()
            .map(|c| {
                view! {
                    <div class="comment">
                        <div class="comment-header">
                            <span class="comment-author">{c.author_label()}</span>
                            <span class="comment-date">{display_date(&c.created_at)}</span>
                        </div>
                        <p class="comment-text">{c.content}</p>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section class="post-detail-container">
            <div class="post-detail-header">
                <button class="back-button" on:click=on_back>"Back"</button>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading post..."</p> }>
                {move || error.get().map(|msg| view! { <div class="error-container"><h2>"Error"</h2><p>{msg}</p></div> })}
                {article.clone()}
                <div class="comments-section">
                    <h3>{move || format!("Comments ({})", comments.with(Vec::len))}</h3>
                    <form class="comment-form" on:submit=on_comment.clone()>
                        <textarea
                            class="comment-input"
                            rows="3"
                            placeholder="Write a comment..."
                            prop:value=move || comment_text.get()
                            on:input=move |ev| comment_text.set(event_target_value(&ev))
                        ></textarea>
                        <button
                            class="comment-submit"
                            type="submit"
                            disabled=move || commenting.get() || comment_text.with(|t| t.trim().is_empty())
                        >
                            "Post Comment"
                        </button>
                    </form>
                    <div class="comments-list">{thread}</div>
                </div>
            </Show>
        </section>
    }
}
