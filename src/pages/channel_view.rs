//! One channel: header, its posts, leaving and owner deletion.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::components::post_card::PostCard;
use crate::net::types::{Channel, ChannelId, Post, PostId};
use crate::pages::view_token;
use crate::state::home::HomeSummary;
use crate::state::scene::Event;
use crate::util::browser;
use crate::util::format::{display_date, plural};

#[component]
pub fn ChannelViewPage(channel_id: ChannelId) -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let summary = expect_context::<RwSignal<HomeSummary>>();
    let token = view_token();
    let channel = RwSignal::new(None::<Channel>);
    let posts = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let leaving = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    {
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let (detail, list) = futures::join!(client.channel(channel_id), client.channel_posts(channel_id));
            token.guard((detail, list), |(detail, list)| {
                match detail {
                    Ok(c) => channel.set(Some(c)),
                    Err(e) => {
                        log::warn!("channel {channel_id}: {e}");
                        dispatcher.check_auth(&e);
                        error.set(Some(e.to_string()));
                    }
                }
                match list {
                    Ok(p) => posts.set(p),
                    Err(e) => {
                        log::warn!("channel {channel_id} posts: {e}");
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        });
    }

    let delete_token = token.clone();
    let on_delete = move |_: leptos::ev::MouseEvent| {
        if deleting.get_untracked() || !browser::confirm("Delete this channel and all of its posts?") {
            return;
        }
        deleting.set(true);
        let client = dispatcher.client();
        let token = delete_token.clone();
        leptos::task::spawn_local(async move {
            let result = client.delete_channel(channel_id).await;
            token.guard(result, |result| {
                deleting.set(false);
                match result {
                    Ok(()) => {
                        log::info!("deleted channel {channel_id}");
                        dispatcher.dispatch(Event::RefreshRequested);
                        dispatcher.dispatch(Event::BackFromChannel);
                    }
                    Err(e) => {
                        dispatcher.check_auth(&e);
                        browser::alert(&e.to_string());
                    }
                }
            });
        });
    };

    let on_leave = move |_: leptos::ev::MouseEvent| {
        if leaving.get_untracked() {
            return;
        }
        leaving.set(true);
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = client.leave_channel(channel_id).await;
            token.guard(result, |result| {
                leaving.set(false);
                match result {
                    Ok(()) => dispatcher.dispatch(Event::BackFromChannel),
                    Err(e) => {
                        dispatcher.check_auth(&e);
                        browser::alert(&e.to_string());
                    }
                }
            });
        });
    };

    let on_open = Callback::new(move |id: PostId| dispatcher.dispatch(Event::SelectPost(id)));
    let on_back = move |_| dispatcher.dispatch(Event::BackFromChannel);

    let header = move || {
        channel.get().map(|c| {
            let owner_id = c.owner_id;
            let is_owner = move || summary.with(|s| s.profile.as_ref().is_some_and(|p| p.id == owner_id));
            let on_delete = on_delete.clone();
            view! {
                <div class="channel-info">
                    <h1 class="channel-title">{c.name}</h1>
                    {c.bio.map(|bio| view! { <p class="channel-bio">{bio}</p> })}
                    <div class="channel-meta">
                        <span class="post-count">{move || posts.with(|p| plural(p.len() as u64, "post"))}</span>
                        <span class="created-date">{format!("Created {}", display_date(&c.created_at))}</span>
                        <button class="leave-channel-button" disabled=move || leaving.get() on:click=on_leave.clone()>
                            {move || if leaving.get() { "Leaving..." } else { "Leave Channel" }}
                        </button>
                        <Show when=is_owner>
                            <button
                                class="delete-channel-button"
                                disabled=move || deleting.get()
                                on:click=on_delete.clone()
                            >
                                "Delete Channel"
                            </button>
                        </Show>
                    </div>
                </div>
            }
        })
    };

    let list = move || {
        let items = posts.get();
        if items.is_empty() {
            return view! {
                <div class="empty-state">
                    <h3>"No posts yet"</h3>
                    <p>"This channel doesn't have any posts yet. Be the first to share something!"</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="posts-grid">
                {items.into_iter().map(|post| view! { <PostCard post on_open/> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class="channel-view-container">
            <div class="channel-header">
                <button class="back-button" on:click=on_back>"Back to Channels"</button>
                {header}
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading channel posts..."</p> }>
                {move || error.get().map(|msg| view! { <p class="error-message">{msg}</p> })}
                {list}
            </Show>
        </section>
    }
}
