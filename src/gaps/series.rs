//! Lazy series of histograms at growing prefix lengths.

use std::iter::FusedIterator;

use tracing::{debug, warn};

use crate::error::{GapError, Result};
use crate::primes::PrimeSource;

use super::cursor::GapCursor;
use super::{CancelToken, GapHistogram};

/// One element of a series: the histogram of the first `prefix_len` gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Position in the series, starting at 0.
    pub index: u64,
    /// Number of gaps counted, `index * step`.
    pub prefix_len: u64,
    pub histogram: GapHistogram,
}

/// Pull-based producer of [`Frame`]s at prefix lengths `0, step, 2·step, …`
/// up to `max_n`.
///
/// A single source cursor and a running histogram are kept across frames;
/// each frame advances the cursor by exactly `step` gaps and yields a
/// snapshot. The result is identical to counting every prefix from scratch.
///
/// After an error is yielded the series is finished.
#[derive(Debug)]
pub struct GapSeries<S> {
    cursor: GapCursor<S>,
    running: GapHistogram,
    step: u64,
    max_n: u64,
    next_index: u64,
    finished: bool,
    cancel: CancelToken,
}

impl<S: PrimeSource> GapSeries<S> {
    /// Create a series over `source`.
    ///
    /// Fails with [`GapError::InvalidArgument`] when `step` is 0.
    pub fn new(source: S, step: u64, max_n: u64) -> Result<Self> {
        if step == 0 {
            return Err(GapError::invalid("step must be at least 1"));
        }
        Ok(Self {
            cursor: GapCursor::new(source),
            running: GapHistogram::new(),
            step,
            max_n,
            next_index: 0,
            finished: false,
            cancel: CancelToken::new(),
        })
    }

    /// Check `cancel` between gap computations.
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn max_n(&self) -> u64 {
        self.max_n
    }

    /// Frames still to be produced, saturating at `u64::MAX`.
    pub fn frames_remaining(&self) -> u64 {
        u64::try_from(self.remaining_exact()).unwrap_or(u64::MAX)
    }

    fn remaining_exact(&self) -> u128 {
        if self.finished {
            return 0;
        }
        let total = u128::from(self.max_n / self.step) + 1;
        total.saturating_sub(u128::from(self.next_index))
    }

    fn produce(&mut self, prefix_len: u64) -> Result<Frame> {
        let gaps = prefix_len - self.cursor.gaps_taken();
        self.cursor.advance(gaps, &mut self.running, &self.cancel)?;
        Ok(Frame {
            index: self.next_index,
            prefix_len,
            histogram: self.running.clone(),
        })
    }
}

impl<S: PrimeSource> Iterator for GapSeries<S> {
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let prefix_len = match self.next_index.checked_mul(self.step) {
            Some(prefix_len) if prefix_len <= self.max_n => prefix_len,
            _ => {
                self.finished = true;
                return None;
            }
        };

        match self.produce(prefix_len) {
            Ok(frame) => {
                debug!(
                    index = frame.index,
                    prefix_len,
                    distinct = frame.histogram.len(),
                    "produced frame"
                );
                self.next_index += 1;
                Some(Ok(frame))
            }
            Err(err) => {
                warn!(index = self.next_index, prefix_len, "series stopped: {}", err);
                self.finished = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_exact();
        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<S: PrimeSource> FusedIterator for GapSeries<S> {}
