//! Finite prime source backed by a list.

use std::sync::Arc;

/// A prime source replaying a fixed list of primes.
///
/// Cloning is cheap: clones share the list and each keeps its own position,
/// which makes it convenient as the product of a source factory.
#[derive(Debug, Clone)]
pub struct ListedPrimes {
    primes: Arc<[u64]>,
    pos: usize,
}

impl ListedPrimes {
    /// Create a source yielding `primes` in order.
    pub fn new(primes: impl Into<Arc<[u64]>>) -> Self {
        Self {
            primes: primes.into(),
            pos: 0,
        }
    }

    /// Number of primes not yet yielded.
    pub fn remaining(&self) -> usize {
        self.primes.len() - self.pos
    }
}

impl From<Vec<u64>> for ListedPrimes {
    fn from(primes: Vec<u64>) -> Self {
        Self::new(primes)
    }
}

impl Iterator for ListedPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let prime = self.primes.get(self.pos).copied()?;
        self.pos += 1;
        Some(prime)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for ListedPrimes {}
