//! Cooperative cancellation for generation runs.
//!
//! The host driving the generator may process large compilation units and
//! wants to abandon stale runs cheaply. The driver checks the token at
//! natural step boundaries, before resolving each declaration; it performs
//! no blocking work in between.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering}
};

/// Clonable cancellation signal shared between the host and a run.
///
/// A fresh token is never cancelled. Cloning shares the underlying flag, so
/// cancelling any clone cancels them all.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>
}

impl CancellationToken {
    /// Create a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every run observing this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
