//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{GapError, Result};

/// Shared flag checked between gap computations.
///
/// Clones observe the same flag, so a token handed to an engine can be
/// tripped from elsewhere (a signal handler, another thread).
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Fail with [`GapError::Cancelled`] once cancellation was requested.
    pub fn check(&self, completed_gaps: u64) -> Result<()> {
        if self.is_cancelled() {
            return Err(GapError::Cancelled { completed_gaps });
        }
        Ok(())
    }
}
