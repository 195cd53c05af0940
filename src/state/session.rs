//! Persisted credentials for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session is the only state shared across views. Writes come from login,
//! bootstrap, token refresh and logout; every request reads the token afresh
//! so a cleared store can never leak a stale credential.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::net::types::{LoginResponse, UserId};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_ID_KEY: &str = "user_id";

/// Credential pair plus the identity it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: UserId,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self {
            access_token: resp.access_token,
            refresh_token: resp.refresh_token,
            user_id: resp.user_id,
        }
    }
}

/// Key/value storage holding the session.
///
/// Implementors supply the three primitives; the session-level operations
/// are provided on top of them.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);

    /// Non-empty stored access token, if any.
    fn access_token(&self) -> Option<String> {
        self.get_item(ACCESS_TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    fn refresh_token(&self) -> Option<String> {
        self.get_item(REFRESH_TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    fn save(&self, session: &Session) {
        self.set_item(ACCESS_TOKEN_KEY, &session.access_token);
        self.set_item(REFRESH_TOKEN_KEY, &session.refresh_token);
        self.set_item(USER_ID_KEY, &session.user_id.to_string());
    }

    fn set_access_token(&self, token: &str) {
        self.set_item(ACCESS_TOKEN_KEY, token);
    }

    fn clear(&self) {
        self.remove_item(ACCESS_TOKEN_KEY);
        self.remove_item(REFRESH_TOKEN_KEY);
        self.remove_item(USER_ID_KEY);
    }
}

/// Browser `localStorage`; a no-op outside the `csr` build.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSessionStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to persist {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not removed");
                return;
            };
            if storage.remove_item(key).is_err() {
                log::warn!("failed to remove {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory store; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store already holding `session`.
    #[must_use]
    pub fn with_session(session: &Session) -> Self {
        let store = Self::new();
        store.save(session);
        store
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
