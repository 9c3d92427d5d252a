//! Error types for prime gap computations.
//!
//! This module defines [`GapError`], the error type shared by the engine,
//! the series producer and the command-line front end, and a [`Result`]
//! alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A histogram is either complete for the requested prefix or not returned
//! - Use `GapError` for failures a caller can act on
//! - Use `anyhow::Error` (via `GapError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for prime gap operations.
#[derive(Debug, Error)]
pub enum GapError {
    /// The prime source ran out before enough primes were produced.
    #[error("Prime source exhausted: needed {needed} primes but only {supplied} were available")]
    ExhaustedSource { needed: u64, supplied: u64 },

    /// A parameter was rejected before any computation started.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The prime source yielded a value not greater than its predecessor.
    #[error("Prime source out of order: {next} follows {previous}")]
    SourceOutOfOrder { previous: u64, next: u64 },

    /// A gap count no longer fits in a `u64`.
    #[error("Count overflow for gap size {gap}")]
    CountOverflow { gap: u64 },

    /// The computation was interrupted through its cancellation token.
    #[error("Cancelled after {completed_gaps} gaps")]
    Cancelled { completed_gaps: u64 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GapError {
    /// Shorthand for a [`GapError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for prime gap operations.
pub type Result<T> = std::result::Result<T, GapError>;
