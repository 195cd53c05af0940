//! List item for a post preview.

use leptos::prelude::*;

use crate::net::types::{Post, PostId};
use crate::util::format::{display_date, plural, truncate_content};

/// A clickable post preview; `on_open` receives the post id.
#[component]
pub fn PostCard(
    post: Post,
    on_open: Callback<PostId>,
    #[prop(optional)] channel_name: Option<String>,
) -> impl IntoView {
    let id = post.id;
    let files = post.files.len();

    view! {
        <article class="post-card" on:click=move |_| on_open.run(id)>
            <h3 class="post-card__title">{post.title}</h3>
            <p class="post-card__content">{truncate_content(&post.content)}</p>
            <div class="post-card__meta">
                <span>{display_date(&post.created_at)}</span>
                {channel_name.map(|name| view! { <span class="post-card__channel">{name}</span> })}
                <Show when=move || { files > 0 }>
                    <span class="post-card__files">{plural(files as u64, "attachment")}</span>
                </Show>
            </div>
        </article>
    }
}
