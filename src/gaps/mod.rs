//! Prime gap histograms.
//!
//! This module turns a [`PrimeSource`](crate::primes::PrimeSource) into gap
//! statistics:
//!
//! - [`GapHistogram`] - gap size to occurrence count
//! - [`GapHistogramEngine`] - histogram of the first `n` gaps, from scratch
//! - [`GapSeries`] - lazy, incremental series of [`Frame`]s
//! - [`CancelToken`] - cooperative cancellation checked between gaps
//!
//! # Example
//!
//! ```
//! use prime_gaps::gaps::GapSeries;
//! use prime_gaps::primes::SieveSource;
//!
//! let series = GapSeries::new(SieveSource::new(), 1_000, 3_000).unwrap();
//! let totals: Vec<u64> = series.map(|frame| frame.unwrap().histogram.total()).collect();
//! assert_eq!(totals, vec![0, 1_000, 2_000, 3_000]);
//! ```

pub mod cancel;
mod cursor;
pub mod engine;
pub mod histogram;
pub mod series;

pub use cancel::CancelToken;
pub use engine::GapHistogramEngine;
pub use histogram::GapHistogram;
pub use series::{Frame, GapSeries};
