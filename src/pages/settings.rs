//! Account settings: profile overview and username edit.

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::pages::view_token;
use crate::services::posts::validate_username;
use crate::state::home::HomeSummary;
use crate::state::scene::Event;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let summary = expect_context::<RwSignal<HomeSummary>>();
    let token = view_token();

    let username = RwSignal::new(
        summary.with_untracked(|s| s.profile.as_ref().and_then(|p| p.username.clone()).unwrap_or_default()),
    );
    let message = RwSignal::new(None::<Result<String, String>>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name = match validate_username(&username.get_untracked()) {
            Ok(name) => name,
            Err(msg) => {
                message.set(Some(Err(msg.to_owned())));
                return;
            }
        };
        busy.set(true);
        message.set(None);
        let client = dispatcher.client();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = client.update_username(&name).await;
            token.guard(result, |result| {
                busy.set(false);
                match result {
                    Ok(updated) => {
                        log::info!("username changed to {}", updated.username);
                        username.set(updated.username.clone());
                        message.set(Some(Ok(updated
                            .message
                            .unwrap_or_else(|| format!("Username updated to {}", updated.username)))));
                        dispatcher.dispatch(Event::RefreshRequested);
                    }
                    Err(e) => {
                        dispatcher.check_auth(&e);
                        message.set(Some(Err(e.to_string())));
                    }
                }
            });
        });
    };

    let profile_rows = move || {
        summary.with(|s| {
            s.profile.as_ref().map(|p| {
                view! {
                    <dl class="profile-details">
                        <dt>"Email"</dt>
                        <dd>{p.email.clone()}</dd>
                        <dt>"Role"</dt>
                        <dd>{p.role.as_str()}</dd>
                        <dt>"Points"</dt>
                        <dd>{s.points.map_or_else(|| "-".to_owned(), |n| n.to_string())}</dd>
                    </dl>
                }
            })
        })
    };

    let feedback = move || {
        message.get().map(|m| match m {
            Ok(text) => view! { <p class="success-message">{text}</p> }.into_any(),
            Err(text) => view! { <p class="error-message">{text}</p> }.into_any(),
        })
    };

    view! {
        <section class="settings-container">
            <h2 class="settings-title">"Settings"</h2>
            <h3>{move || summary.with(HomeSummary::display_name)}</h3>
            {profile_rows}
            <form class="settings-form" on:submit=on_submit>
                <label for="username">"Username"</label>
                <input
                    id="username"
                    type="text"
                    placeholder="Choose a username..."
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                {feedback}
                <button class="dashboard-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </button>
            </form>
        </section>
    }
}
