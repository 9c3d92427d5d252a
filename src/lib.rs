//! prime-gaps - histograms of prime gaps over growing prefixes of the primes.
//!
//! For a prefix length `n`, the histogram maps each gap size between
//! consecutive primes to the number of times it occurs among the first `n`
//! gaps. A series of such histograms at prefix lengths `0, step, 2·step, …`
//! forms the frames of an animation.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the frame run
//! - [`config`] - Validated run configuration
//! - [`error`] - Error types and result aliases
//! - [`export`] - Frame export formats and labels
//! - [`gaps`] - Gap histograms, the engine and the series producer
//! - [`primes`] - Prime sources
//! - [`ui`] - Progress bar, status lines and styling
//!
//! # Example
//!
//! ```
//! use prime_gaps::gaps::GapHistogramEngine;
//! use prime_gaps::primes::SieveSource;
//!
//! let engine = GapHistogramEngine::new(SieveSource::new);
//! let histogram = engine.compute_histogram(5).unwrap();
//!
//! // 2, 3, 5, 7, 11, 13 -> gaps 1, 2, 2, 4, 2
//! assert_eq!(histogram.count(1), 1);
//! assert_eq!(histogram.count(2), 3);
//! assert_eq!(histogram.count(4), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod gaps;
pub mod primes;
pub mod ui;

pub use error::{GapError, Result};
