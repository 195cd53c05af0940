//! Login and registration form.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::app::Dispatcher;
use crate::services::session::{REGISTERED_MESSAGE, login, register, validate_login, validate_registration};
use crate::util::browser;

/// Which form the auth page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Welcome back!",
            Self::Register => "Create your account",
        }
    }

    #[must_use]
    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Login, false) => "Sign In",
            (Self::Login, true) => "Signing in...",
            (Self::Register, false) => "Create Account",
            (Self::Register, true) => "Creating account...",
        }
    }

    #[must_use]
    pub fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account? Sign up",
            Self::Register => "Already have an account? Sign in",
        }
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let mode = RwSignal::new(AuthMode::Login);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let current = mode.get_untracked();
        let pass = password.get_untracked();
        let checked = match current {
            AuthMode::Login => validate_login(&email.get_untracked(), &pass),
            AuthMode::Register => validate_registration(&email.get_untracked(), &pass, &confirm.get_untracked()),
        };
        let address = match checked {
            Ok(address) => address,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let client = dispatcher.client();
        leptos::task::spawn_local(async move {
            match current {
                AuthMode::Login => match login(&client, &address, &pass).await {
                    Ok(event) => dispatcher.dispatch(event),
                    Err(e) => error.set(e.to_string()),
                },
                AuthMode::Register => match register(&client, &address, &pass).await {
                    Ok(_) => {
                        mode.set(AuthMode::Login);
                        password.set(String::new());
                        confirm.set(String::new());
                        browser::alert(REGISTERED_MESSAGE);
                    }
                    Err(e) => error.set(e.to_string()),
                },
            }
            busy.set(false);
        });
    };

    let on_toggle = move |_| {
        mode.update(|m| *m = m.toggled());
        error.set(String::new());
        email.set(String::new());
        password.set(String::new());
        confirm.set(String::new());
    };

    view! {
        <div class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <h1 class="auth-title">"Edora"</h1>
                    <p class="auth-subtitle">{move || mode.get().subtitle()}</p>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <label class="form-label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="form-input"
                        type="email"
                        placeholder="Enter your email"
                        disabled=move || busy.get()
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="form-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="form-input"
                        type="password"
                        placeholder="Enter your password"
                        disabled=move || busy.get()
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || mode.get() == AuthMode::Register>
                        <label class="form-label" for="confirm-password">"Confirm Password"</label>
                        <input
                            id="confirm-password"
                            class="form-input"
                            type="password"
                            placeholder="Confirm your password"
                            disabled=move || busy.get()
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </Show>
                    <Show when=move || !error.get().is_empty()>
                        <div class="error-message">{move || error.get()}</div>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || mode.get().submit_label(busy.get())}
                    </button>
                </form>
                <button class="auth-switch" type="button" disabled=move || busy.get() on:click=on_toggle>
                    {move || mode.get().switch_prompt()}
                </button>
            </div>
        </div>
    }
}
