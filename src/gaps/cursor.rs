//! Forward cursor turning a prime source into recorded gaps.

use crate::error::{GapError, Result};
use crate::primes::PrimeSource;

use super::{CancelToken, GapHistogram};

/// Walks a [`PrimeSource`], remembering the last prime it pulled so that
/// counting can resume where it stopped.
#[derive(Debug)]
pub(crate) struct GapCursor<S> {
    source: S,
    last: Option<u64>,
    primes_pulled: u64,
    gaps_taken: u64,
}

impl<S: PrimeSource> GapCursor<S> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            source,
            last: None,
            primes_pulled: 0,
            gaps_taken: 0,
        }
    }

    /// Gaps recorded so far.
    pub(crate) fn gaps_taken(&self) -> u64 {
        self.gaps_taken
    }

    /// Record the next `gaps` gaps into `histogram`.
    ///
    /// Advancing by zero gaps never touches the source.
    pub(crate) fn advance(
        &mut self,
        gaps: u64,
        histogram: &mut GapHistogram,
        cancel: &CancelToken,
    ) -> Result<()> {
        if gaps == 0 {
            return Ok(());
        }

        let needed = self.gaps_taken.saturating_add(gaps).saturating_add(1);
        let mut previous = match self.last {
            Some(prime) => prime,
            None => self.pull(needed)?,
        };

        for _ in 0..gaps {
            cancel.check(self.gaps_taken)?;
            let next = self.pull(needed)?;
            if next <= previous {
                return Err(GapError::SourceOutOfOrder { previous, next });
            }
            histogram.record(next - previous)?;
            previous = next;
            self.gaps_taken += 1;
        }
        Ok(())
    }

    fn pull(&mut self, needed: u64) -> Result<u64> {
        let prime = self
            .source
            .next_prime()
            .ok_or(GapError::ExhaustedSource {
                needed,
                supplied: self.primes_pulled,
            })?;
        self.primes_pulled += 1;
        self.last = Some(prime);
        Ok(prime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_gaps_pulls_nothing() {
        let mut cursor = GapCursor::new(std::iter::empty::<u64>());
        let mut histogram = GapHistogram::new();
        cursor
            .advance(0, &mut histogram, &CancelToken::new())
            .unwrap();
        assert_eq!(cursor.primes_pulled, 0);
        assert!(histogram.is_empty());
    }

    #[test]
    fn resumes_from_last_prime() {
        let mut cursor = GapCursor::new(vec![2u64, 3, 5, 7, 11].into_iter());
        let mut histogram = GapHistogram::new();
        let cancel = CancelToken::new();
        cursor.advance(2, &mut histogram, &cancel).unwrap();
        assert_eq!(cursor.primes_pulled, 3);
        cursor.advance(2, &mut histogram, &cancel).unwrap();
        assert_eq!(cursor.primes_pulled, 5);
        assert_eq!(cursor.gaps_taken(), 4);
        assert_eq!(histogram.count(2), 2);
        assert_eq!(histogram.count(4), 1);
    }

    #[test]
    fn exhaustion_reports_needed_and_supplied() {
        let mut cursor = GapCursor::new(vec![2u64, 3, 5].into_iter());
        let err = cursor
            .advance(4, &mut GapHistogram::new(), &CancelToken::new())
            .unwrap_err();
        assert!(matches!(
            err,
            GapError::ExhaustedSource {
                needed: 5,
                supplied: 3
            }
        ));
    }

    #[test]
    fn rejects_non_increasing_source() {
        let mut cursor = GapCursor::new(vec![2u64, 3, 3].into_iter());
        let err = cursor
            .advance(2, &mut GapHistogram::new(), &CancelToken::new())
            .unwrap_err();
        assert!(matches!(
            err,
            GapError::SourceOutOfOrder {
                previous: 3,
                next: 3
            }
        ));
    }

    #[test]
    fn cancelled_token_stops_before_first_gap() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut cursor = GapCursor::new(vec![2u64, 3, 5].into_iter());
        let err = cursor
            .advance(2, &mut GapHistogram::new(), &cancel)
            .unwrap_err();
        assert!(matches!(err, GapError::Cancelled { completed_gaps: 0 }));
    }
}
