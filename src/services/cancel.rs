//! Per-view cancellation for async work.
//!
//! A view creates a token on mount and cancels it from `on_cleanup`; tasks
//! it spawned check the token before writing results back.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Run `apply` only while the token is live.
    pub fn guard<T>(&self, value: T, apply: impl FnOnce(T)) {
        if self.is_cancelled() {
            log::debug!("dropping result for unmounted view");
            return;
        }
        apply(value);
    }
}
