//! Page modules, one per scene.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its local UI state and data loading, reports navigation
//! through the `Dispatcher` and delegates list items to `components`.

pub mod auth;
pub mod channel_view;
pub mod channels;
pub mod create;
pub mod home;
pub mod moderator;
pub mod placeholder;
pub mod post_view;
pub mod result;
pub mod saved;
pub mod settings;
pub mod upload;

use leptos::prelude::on_cleanup;

use crate::services::cancel::CancelToken;

/// Token for async work started by the mounting view; cancelled on unmount.
pub(crate) fn view_token() -> CancelToken {
    let token = CancelToken::new();
    let on_unmount = token.clone();
    on_cleanup(move || on_unmount.cancel());
    token
}
