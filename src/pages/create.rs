//! Create-channel form.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::pages::view_token;
use crate::services::posts::validate_channel;
use crate::state::scene::Event;

#[component]
pub fn CreateChannelPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let token = view_token();
    let name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = match validate_channel(&name.get_untracked(), &bio.get_untracked()) {
            Ok(draft) => draft,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = client.create_channel(&draft).await;
            token.guard(result, |result| {
                busy.set(false);
                match result {
                    Ok(channel) => {
                        log::info!("created channel {} ({})", channel.id, channel.name);
                        dispatcher.dispatch(Event::ChannelCreated);
                    }
                    Err(e) => {
                        dispatcher.check_auth(&e);
                        error.set(e.to_string());
                    }
                }
            });
        });
    };

    view! {
        <section class="create-container">
            <h2 class="create-title">"Create Your Channel"</h2>
            <form on:submit=on_submit>
                <div class="create-section">
                    <label for="channel-name">"Channel Name"</label>
                    <input
                        id="channel-name"
                        type="text"
                        placeholder="Enter your channel name..."
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </div>
                <div class="create-section">
                    <label for="channel-bio">"Channel Bio"</label>
                    <textarea
                        id="channel-bio"
                        placeholder="Describe your channel, goals, and content..."
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="error-message">{move || error.get()}</p>
                </Show>
                <button class="create-btn" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating..." } else { "Create Channel" }}
                </button>
            </form>
        </section>
    }
}
