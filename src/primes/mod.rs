//! Prime sources.
//!
//! The gap engine only needs a forward cursor over the primes, expressed by
//! the [`PrimeSource`] trait. Any `Iterator<Item = u64>` qualifies, so a
//! plain `Vec<u64>` iterator works for known data.
//!
//! - [`SieveSource`] - unbounded segmented sieve with an optional ceiling
//! - [`ListedPrimes`] - a finite, caller-supplied list

pub mod listed;
pub mod sieve;

pub use listed::ListedPrimes;
pub use sieve::SieveSource;

/// A cursor over the strictly increasing sequence of primes, starting at 2.
pub trait PrimeSource {
    /// Yield the next prime, or `None` once the source has nothing left.
    fn next_prime(&mut self) -> Option<u64>;
}

impl<I> PrimeSource for I
where
    I: Iterator<Item = u64>,
{
    fn next_prime(&mut self) -> Option<u64> {
        self.next()
    }
}
