//! Channel directory with join and open actions.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::net::types::{Channel, ChannelId};
use crate::pages::view_token;
use crate::state::scene::{Event, Scene};
use crate::util::browser;
use crate::util::format::display_date;

#[component]
pub fn ChannelsPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let token = view_token();
    let channels = RwSignal::new(Vec::<Channel>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let joining = RwSignal::new(None::<ChannelId>);
    let join_token = token.clone();

    let load = Callback::new(move |()| {
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = client.list_channels().await;
            token.guard(result, |result| {
                match result {
                    Ok(list) => {
                        channels.set(list);
                        error.set(None);
                    }
                    Err(e) => {
                        log::warn!("channels: load failed: {e}");
                        dispatcher.check_auth(&e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
        });
    });
    load.run(());

    let on_join = Callback::new(move |id: ChannelId| {
        if joining.get_untracked().is_some() {
            return;
        }
        joining.set(Some(id));
        let client = dispatcher.client();
        let token = join_token.clone();
        leptos::task::spawn_local(async move {
            let result = client.join_channel(id).await;
            token.guard(result, |result| {
                match result {
                    Ok(()) => dispatcher.dispatch(Event::SelectChannel(id)),
                    Err(e) => {
                        dispatcher.check_auth(&e);
                        browser::alert(&e.to_string());
                    }
                }
                joining.set(None);
            });
        });
    });

    let rows = move || {
        channels.with(|list| {
            list.iter()
                .map(|channel| {
                    let id = channel.id;
                    view! {
                        <li class="channel-row">
                            <div class="channel-row__info" on:click=move |_| dispatcher.dispatch(Event::SelectChannel(id))>
                                <strong>{channel.name.clone()}</strong>
                                {channel.bio.clone().map(|bio| view! { <p class="channel-bio">{bio}</p> })}
                                <span class="created-date">{format!("Created {}", display_date(&channel.created_at))}</span>
                            </div>
                            <button
                                class="dashboard-button"
                                disabled=move || joining.get().is_some()
                                on:click=move |_| on_join.run(id)
                            >
                                {move || if joining.get() == Some(id) { "Joining..." } else { "Join" }}
                            </button>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section class="channels-container">
            <div class="channels-header">
                <h2>"Channels"</h2>
                <button class="dashboard-button" on:click=move |_| dispatcher.dispatch(Event::Navigate(Scene::Create))>
                    "Create Channel"
                </button>
            </div>
            <Show when=move || !loading.get() fallback=|| view! { <p class="loading">"Loading channels..."</p> }>
                {move || match error.get() {
                    Some(msg) => view! {
                        <div class="error-container">
                            <p>{msg}</p>
                            <button class="dashboard-button" on:click=move |_| load.run(())>"Retry"</button>
                        </div>
                    }
                    .into_any(),
                    None if channels.with(Vec::is_empty) => {
                        view! { <p class="empty-state">"No channels yet. Create the first one!"</p> }.into_any()
                    }
                    None => view! { <ul class="divide-y">{rows}</ul> }.into_any(),
                }}
            </Show>
        </section>
    }
}
