//! Gap size histogram.

use std::collections::BTreeMap;

use crate::error::{GapError, Result};

/// Mapping from gap size to the number of times it occurred.
///
/// Every stored count is at least 1, and [`total`](Self::total) always
/// equals the number of gaps recorded. Iteration is ascending by gap size.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapHistogram {
    counts: BTreeMap<u64, u64>,
    total: u64,
}

impl GapHistogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `gap`.
    ///
    /// Fails with [`GapError::CountOverflow`] instead of wrapping.
    pub fn record(&mut self, gap: u64) -> Result<()> {
        let total = self
            .total
            .checked_add(1)
            .ok_or(GapError::CountOverflow { gap })?;
        let count = self.counts.entry(gap).or_insert(0);
        *count = count.checked_add(1).ok_or(GapError::CountOverflow { gap })?;
        self.total = total;
        Ok(())
    }

    /// Occurrences of `gap` (0 if it never occurred).
    pub fn count(&self, gap: u64) -> u64 {
        self.counts.get(&gap).copied().unwrap_or(0)
    }

    /// Sum of all counts, i.e. the number of gaps recorded.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct gap sizes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(gap, count)` pairs in ascending gap order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.counts.iter().map(|(&gap, &count)| (gap, count))
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &BTreeMap<u64, u64> {
        &self.counts
    }

    /// Largest gap seen so far.
    pub fn max_gap(&self) -> Option<u64> {
        self.counts.keys().next_back().copied()
    }

    /// The gap with the highest count; ties go to the smaller gap.
    pub fn most_common(&self) -> Option<(u64, u64)> {
        self.iter()
            .fold(None, |best: Option<(u64, u64)>, (gap, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((gap, count)),
            })
    }
}

impl<'a> IntoIterator for &'a GapHistogram {
    type Item = (u64, u64);
    type IntoIter = Box<dyn Iterator<Item = (u64, u64)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
