//! New post form with file attachments.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::net::transport::FileUpload;
use crate::net::types::{Channel, ChannelId};
use crate::pages::view_token;
use crate::services::posts::{NO_CHANNELS_MESSAGE, PublishError, PublishForm, publish_post};
use crate::state::scene::{Event, Scene};
use crate::util::browser;

pub const PUBLISHED_MESSAGE: &str = "Post created successfully!";

/// Option label for a channel in the picker.
#[must_use]
pub fn channel_option_label(channel: &Channel) -> String {
    match channel.bio.as_deref().map(str::trim) {
        Some(bio) if !bio.is_empty() => format!("{} ({bio})", channel.name),
        _ => channel.name.clone(),
    }
}

/// Parse the `<select>` value; the placeholder option is empty.
#[must_use]
pub fn parse_channel_choice(raw: &str) -> Option<ChannelId> {
    raw.trim().parse().ok()
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let token = view_token();
    let channels = RwSignal::new(Vec::<Channel>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    let channel_id = RwSignal::new(None::<ChannelId>);
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let files = RwSignal::new(Vec::<FileUpload>::new());
    let busy = RwSignal::new(false);

    {
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = client.list_channels().await;
            token.guard(result, |result| {
                match result {
                    Ok(list) if list.is_empty() => load_error.set(Some(NO_CHANNELS_MESSAGE.to_owned())),
                    Ok(list) => channels.set(list),
                    Err(e) => {
                        log::warn!("upload: channels failed: {e}");
                        dispatcher.check_auth(&e);
                        load_error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        });
    }

    let files_token = token.clone();
    let on_files = move |ev: leptos::ev::Event| {
        let chosen = browser::selected_files(&ev);
        let token = files_token.clone();
        leptos::task::spawn_local(async move {
            let read = browser::read_files(chosen).await;
            token.guard(read, |read| files.set(read));
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = PublishForm {
            title: title.get_untracked(),
            content: content.get_untracked(),
            channel_id: channel_id.get_untracked(),
            files: files.get_untracked(),
        };
        if let Err(e) = form.draft() {
            browser::alert(&e.to_string());
            return;
        }
        busy.set(true);
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = publish_post(&client, form).await;
            token.guard(result, |result| {
                busy.set(false);
                match result {
                    Ok(_) => {
                        browser::alert(PUBLISHED_MESSAGE);
                        title.set(String::new());
                        content.set(String::new());
                        files.set(Vec::new());
                        dispatcher.dispatch(Event::RefreshRequested);
                    }
                    Err(e) => {
                        if let PublishError::CreatePost(api) | PublishError::UploadFiles { source: api, .. } = &e {
                            dispatcher.check_auth(api);
                        }
                        browser::alert(&e.to_string());
                    }
                }
            });
        });
    };

    let options = move || {
        channels.with(|list| {
            list.iter()
                .map(|c| view! { <option value=c.id.to_string()>{channel_option_label(c)}</option> })
                .collect_view()
        })
    };

    let chosen_names = move || {
        files.with(|list| list.iter().map(|f| view! { <li>{f.file_name.clone()}</li> }).collect_view())
    };

    let form = move || {
        let on_submit = on_submit.clone();
        let on_files = on_files.clone();
        view! {
            <form class="upload-form" on:submit=on_submit>
                <h2 class="upload-title">"Create a New Post"</h2>
                <label for="channel">"Channel"</label>
                <select
                    id="channel"
                    prop:value=move || channel_id.get().map(|id| id.to_string()).unwrap_or_default()
                    on:change=move |ev| channel_id.set(parse_channel_choice(&event_target_value(&ev)))
                >
                    <option value="" disabled=true>"Select a channel"</option>
                    {options}
                </select>
                <label for="title">"Title"</label>
                <input
                    id="title"
                    type="text"
                    placeholder="Post title..."
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <label for="desc">"Description"</label>
                <textarea
                    id="desc"
                    rows="4"
                    placeholder="Describe your post..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <label for="files">"Attachments"</label>
                <input id="files" type="file" multiple=true on:change=on_files/>
                <ul class="chosen-files">{chosen_names}</ul>
                <button class="upload-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Publishing..." } else { "Publish" }}
                </button>
            </form>
        }
    };
    let ready = Memo::new(move |_| !loading.get() && load_error.with(Option::is_none));

    view! {
        <section class="upload-container">
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading your channels..."</p> }>
                {move || load_error.get().map(|msg| {
                    let no_channels = msg == NO_CHANNELS_MESSAGE;
                    view! {
                        <div class="error-container">
                            <h2>"Error Loading Channels"</h2>
                            <p>{msg}</p>
                            <Show when=move || no_channels>
                                <button
                                    class="dashboard-button"
                                    on:click=move |_| dispatcher.dispatch(Event::Navigate(Scene::Create))
                                >
                                    "Create Your First Channel"
                                </button>
                            </Show>
                        </div>
                    }
                })}
            </Show>
            {move || ready.get().then(form.clone())}
        </section>
    }
}
