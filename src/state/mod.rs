//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`scene`, `session`, `home`, `search`) so views
//! depend on small focused models. Navigation is one value driven by a pure
//! transition function; `view` derives what to mount from it.

pub mod home;
pub mod scene;
pub mod search;
pub mod session;
pub mod view;
