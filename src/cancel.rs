//! Cooperative cancellation for the watch loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Token observed by the watch loop between file-processing iterations.
///
/// Uses an AtomicBool internally. Clone is cheap and shares state, so
/// the signal handler and the loop hold the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new token (not cancelled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}
