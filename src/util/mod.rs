//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` isolates the `web-sys` dialogs and file inputs from page logic;
//! `format` holds the pure text helpers views render with.

pub mod browser;
pub mod format;
