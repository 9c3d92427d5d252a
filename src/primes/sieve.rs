//! Segmented sieve of Eratosthenes.
//!
//! Primes are produced one segment of odd candidates at a time, so memory
//! stays bounded no matter how far the cursor runs. The base primes used to
//! cross off composites are regrown on demand as segments move up.

use tracing::trace;

/// Odd candidates sieved per segment.
const SEGMENT_ODDS: usize = 1 << 15;

/// Largest prime magnitude the sieve will ever reach.
pub const MAX_SUPPORTED_PRIME: u64 = 1 << 62;

/// An unbounded (or ceiling-bounded) cursor over the primes.
#[derive(Debug, Clone)]
pub struct SieveSource {
    ceiling: u64,
    yielded_two: bool,
    exhausted: bool,
    low: u64,
    next_low: u64,
    composite: Vec<bool>,
    pos: usize,
    base: Vec<u64>,
    base_limit: u64,
}

impl Default for SieveSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SieveSource {
    /// Create a sieve bounded only by [`MAX_SUPPORTED_PRIME`].
    pub fn new() -> Self {
        Self::with_ceiling(MAX_SUPPORTED_PRIME)
    }

    /// Create a sieve that stops after the largest prime `<= ceiling`.
    pub fn with_ceiling(ceiling: u64) -> Self {
        Self {
            ceiling: ceiling.min(MAX_SUPPORTED_PRIME),
            yielded_two: false,
            exhausted: false,
            low: 3,
            next_low: 3,
            composite: Vec::with_capacity(SEGMENT_ODDS),
            pos: 0,
            base: Vec::new(),
            base_limit: 0,
        }
    }

    /// Create a sieve from an optional ceiling.
    pub fn bounded(ceiling: Option<u64>) -> Self {
        ceiling.map_or_else(Self::new, Self::with_ceiling)
    }

    /// The inclusive upper bound on yielded primes.
    pub fn ceiling(&self) -> u64 {
        self.ceiling
    }

    fn advance_segment(&mut self) -> bool {
        if self.exhausted || self.next_low > self.ceiling {
            self.exhausted = true;
            return false;
        }

        let low = self.next_low;
        let high = self
            .ceiling
            .min(low + 2 * (SEGMENT_ODDS as u64 - 1));
        let len = ((high - low) / 2 + 1) as usize;
        self.ensure_base(high);

        self.composite.clear();
        self.composite.resize(len, false);
        for &p in &self.base {
            let square = p * p;
            if square > high {
                break;
            }
            let mut multiple = if square >= low {
                square
            } else {
                first_odd_multiple(p, low)
            };
            while multiple <= high {
                self.composite[((multiple - low) / 2) as usize] = true;
                multiple += 2 * p;
            }
        }

        trace!(low, high, "sieved segment");
        self.low = low;
        self.next_low = low + 2 * len as u64;
        self.pos = 0;
        true
    }

    fn ensure_base(&mut self, high: u64) {
        let needed = high.isqrt();
        if self.base_limit >= needed {
            return;
        }
        let limit = needed.max(self.base_limit * 2).max(1024);
        self.base = odd_primes_up_to(limit);
        self.base_limit = limit;
    }
}

impl Iterator for SieveSource {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if !self.yielded_two {
            self.yielded_two = true;
            if self.ceiling >= 2 {
                return Some(2);
            }
            self.exhausted = true;
            return None;
        }

        loop {
            while self.pos < self.composite.len() {
                let index = self.pos;
                self.pos += 1;
                if !self.composite[index] {
                    return Some(self.low + 2 * index as u64);
                }
            }
            if !self.advance_segment() {
                return None;
            }
        }
    }
}

/// Smallest odd multiple of odd `p` that is `>= low`.
fn first_odd_multiple(p: u64, low: u64) -> u64 {
    let remainder = low % p;
    let multiple = if remainder == 0 {
        low
    } else {
        low + (p - remainder)
    };
    if multiple % 2 == 0 {
        multiple + p
    } else {
        multiple
    }
}

/// Odd primes `<= limit`, by a plain sieve.
fn odd_primes_up_to(limit: u64) -> Vec<u64> {
    let limit = limit as usize;
    let mut is_prime = vec![true; limit + 1];
    let mut primes = Vec::new();
    let mut n = 3;
    while n <= limit {
        if is_prime[n] {
            primes.push(n as u64);
            let mut multiple = n * n;
            while multiple <= limit {
                is_prime[multiple] = false;
                multiple += 2 * n;
            }
        }
        n += 2;
    }
    primes
}
