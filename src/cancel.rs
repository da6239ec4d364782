//! Cancellation token for the poll loop.
//!
//! A cloneable flag shared between the signal handler and the poller.
//! The handler trips it from its own thread; the loop observes it
//! between poll cycles and winds down cleanly. No GPIO state is released
//! on shutdown — the kernel reclaims the line when the process exits.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable cancellation handle.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the token. Safe to call from a signal-handler thread.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
