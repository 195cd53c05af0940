//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the signed-in chrome and shared list items while
//! reading state from Leptos context providers set up in `app`.

pub mod post_card;
pub mod search_bar;
pub mod sidebar;
