//! Histogram computation over a prefix of the primes.

use tracing::debug;

use crate::error::Result;
use crate::primes::PrimeSource;

use super::cursor::GapCursor;
use super::{CancelToken, GapHistogram, GapSeries};

/// Computes gap histograms from a factory of fresh prime sources.
///
/// Every [`compute_histogram`](Self::compute_histogram) call builds a new
/// source and starts over from the first prime, so calls are independent of
/// each other. Use [`series`](Self::series) to walk many prefix lengths in
/// one pass.
///
/// # Example
///
/// ```
/// use prime_gaps::gaps::GapHistogramEngine;
/// use prime_gaps::primes::ListedPrimes;
///
/// let primes = ListedPrimes::from(vec![2, 3, 5, 7, 11, 13]);
/// let engine = GapHistogramEngine::new(move || primes.clone());
///
/// let histogram = engine.compute_histogram(5).unwrap();
/// assert_eq!(histogram.count(2), 3);
/// assert_eq!(histogram.total(), 5);
/// ```
pub struct GapHistogramEngine<F> {
    factory: F,
    cancel: CancelToken,
}

impl<F, S> GapHistogramEngine<F>
where
    F: Fn() -> S,
    S: PrimeSource,
{
    /// Create an engine drawing sources from `factory`.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            cancel: CancelToken::new(),
        }
    }

    /// Check `cancel` between gap computations.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Histogram of the first `n` gaps (the first `n + 1` primes).
    ///
    /// `n == 0` yields an empty histogram without reading the source.
    pub fn compute_histogram(&self, n: u64) -> Result<GapHistogram> {
        let mut cursor = GapCursor::new((self.factory)());
        let mut histogram = GapHistogram::new();
        cursor.advance(n, &mut histogram, &self.cancel)?;
        debug!(n, distinct = histogram.len(), "computed gap histogram");
        Ok(histogram)
    }

    /// Lazy series of histograms at prefix lengths `0, step, 2·step, … <= max_n`.
    pub fn series(&self, step: u64, max_n: u64) -> Result<GapSeries<S>> {
        Ok(GapSeries::new((self.factory)(), step, max_n)?.with_cancel(self.cancel.clone()))
    }
}
