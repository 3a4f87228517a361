//! Random source backing the shuffle strategy.

use std::cmp::Ordering;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

static PROCESS_SOURCE: Lazy<ShuffleSource> = Lazy::new(ShuffleSource::from_entropy);

/// Thread-safe pseudo-random source for shuffle comparisons.
///
/// One process-wide instance backs [`Order::compare`](crate::Order::compare)
/// and is shared by every thread; tests and engines that need determinism
/// inject a [`seeded`](ShuffleSource::seeded) instance through
/// [`Order::compare_with`](crate::Order::compare_with) instead. The contract
/// is safety under concurrent use, not reproducibility across runs and not
/// cryptographic quality.
#[derive(Debug)]
pub struct ShuffleSource {
    rng: Mutex<StdRng>,
}

impl ShuffleSource {
    /// Source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic source for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// The process-wide source used when no explicit source is injected.
    pub fn process_wide() -> &'static ShuffleSource {
        &PROCESS_SOURCE
    }

    /// A uniformly random `Less` or `Greater`; never `Equal`.
    pub fn coin_flip(&self) -> Ordering {
        if self.lock_rng().random() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// Fisher–Yates permutation of `items`.
    pub(crate) fn shuffle_slice<T>(&self, items: &mut [T]) {
        items.shuffle(&mut *self.lock_rng());
    }

    fn lock_rng(&self) -> std::sync::MutexGuard<'_, StdRng> {
        // A poisoned rng is still a usable rng.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn coin_flip_never_lands_equal() {
        let source = ShuffleSource::seeded(7);
        for _ in 0..256 {
            assert_ne!(source.coin_flip(), Ordering::Equal);
        }
    }

    #[test]
    fn coin_flip_produces_both_outcomes() {
        let source = ShuffleSource::seeded(42);
        let flips: Vec<_> = (0..256).map(|_| source.coin_flip()).collect();
        assert!(flips.contains(&Ordering::Less));
        assert!(flips.contains(&Ordering::Greater));
    }

    #[test]
    fn seeded_sources_repeat_their_sequence() {
        let a = ShuffleSource::seeded(99);
        let b = ShuffleSource::seeded(99);
        let first: Vec<_> = (0..64).map(|_| a.coin_flip()).collect();
        let second: Vec<_> = (0..64).map(|_| b.coin_flip()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn safe_under_concurrent_use() {
        let source = Arc::new(ShuffleSource::seeded(1));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                std::thread::spawn(move || {
                    for _ in 0..512 {
                        assert_ne!(source.coin_flip(), Ordering::Equal);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("flip thread panicked");
        }
    }
}
