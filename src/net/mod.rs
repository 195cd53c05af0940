//! Networking modules for the Edora REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves raw requests over the wire, `api` maps every backend
//! endpoint onto typed calls, `types` defines the wire schema and `error`
//! classifies failures.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;
