//! Session bootstrap, login, registration and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only writers of persisted credentials besides token refresh.
//! Each returns the [`Event`] the shell should apply, so the scene machine
//! stays the single owner of navigation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{Profile, RegisterResponse};
use crate::state::scene::Event;
use crate::state::session::{Session, SessionStore};

pub const PASSWORDS_MISMATCH: &str = "Passwords do not match";
pub const REGISTERED_MESSAGE: &str = "Registration successful! Please log in.";

/// Result of the startup session check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The stored token was accepted.
    Authenticated(Profile),
    /// No token was stored, or the backend rejected it.
    Unauthenticated,
}

impl BootstrapOutcome {
    #[must_use]
    pub fn event(&self) -> Event {
        match self {
            Self::Authenticated(profile) => Event::SessionRestored { role: profile.role },
            Self::Unauthenticated => Event::SessionRejected,
        }
    }
}

/// Validate the stored credential once at startup.
///
/// Makes no request without a stored token. Any failure clears the store;
/// there are no retries.
pub async fn bootstrap<T: Transport, S: SessionStore>(client: &ApiClient<T, S>) -> BootstrapOutcome {
    if client.store().access_token().is_none() {
        log::debug!("bootstrap: no stored session");
        return BootstrapOutcome::Unauthenticated;
    }
    match client.current_user().await {
        Ok(profile) => {
            log::info!("bootstrap: session restored for user {}", profile.id);
            BootstrapOutcome::Authenticated(profile)
        }
        Err(e) => {
            log::warn!("bootstrap: stored session rejected: {e}");
            client.store().clear();
            BootstrapOutcome::Unauthenticated
        }
    }
}

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the message to show inline.
pub fn validate_login(email: &str, password: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(email.to_owned())
}

/// Check the register form before any request is sent.
///
/// # Errors
///
/// Returns the message to show inline.
pub fn validate_registration(email: &str, password: &str, confirm: &str) -> Result<String, &'static str> {
    let email = validate_login(email, password)?;
    if password != confirm {
        return Err(PASSWORDS_MISMATCH);
    }
    Ok(email)
}

/// Log in and persist the returned session.
///
/// # Errors
///
/// The backend's message (or `Login failed`); nothing is stored on failure.
pub async fn login<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
    email: &str,
    password: &str,
) -> Result<Event, ApiError> {
    let resp = client.login(email, password).await?;
    let session = Session::from(resp);
    log::info!("login: signed in as user {}", session.user_id);
    client.store().save(&session);
    Ok(Event::LoggedIn)
}

/// Create an account. The user logs in separately afterwards.
///
/// # Errors
///
/// The backend's message (or `Registration failed`).
pub async fn register<T: Transport, S: SessionStore>(
    client: &ApiClient<T, S>,
    email: &str,
    password: &str,
) -> Result<RegisterResponse, ApiError> {
    let account = client.register(email, password).await?;
    log::info!("register: created account {}", account.id);
    Ok(account)
}

/// Forget the persisted session.
pub fn logout<S: SessionStore>(store: &S) -> Event {
    store.clear();
    log::info!("logout: session cleared");
    Event::LoggedOut
}
