//! Async workflows layered over the API client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call these instead of the endpoint layer directly when a user action
//! spans more than one request or touches the session store. Each workflow is
//! generic over the transport and store, so it runs natively in tests.

pub mod cancel;
pub mod posts;
pub mod refresh;
pub mod search;
pub mod session;
