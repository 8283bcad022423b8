// Random sources for tie-breaking
//
// The engine never touches a global RNG; it draws through a `RandomSource` handed to it.
// Every source is shareable across concurrent decisions.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};

pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` is never zero.
    fn index(&self, len: usize) -> usize;
}

/// Picks one item uniformly, or None for an empty slice
pub fn choose<T: Copy>(rng: &dyn RandomSource, items: &[T]) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()).min(items.len() - 1)).copied()
}

/// Per-thread RNG; independent draws with no shared state
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn index(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Reproducible RNG seeded from a u64, resettable between runs
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Restarts the sequence from `seed`
    pub fn reset(&self, seed: u64) {
        *self.rng.lock() = StdRng::seed_from_u64(seed);
    }
}

impl RandomSource for SeededRandom {
    fn index(&self, len: usize) -> usize {
        self.rng.lock().random_range(0..len)
    }
}

/// Replays a fixed script of indices, wrapping around; each value is taken modulo `len`
#[derive(Debug)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: AtomicUsize,
}

impl ScriptedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        ScriptedRandom {
            script,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Always answers the first candidate
    pub fn first() -> Self {
        Self::new(vec![0])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&self, len: usize) -> usize {
        if self.script.is_empty() {
            return 0;
        }
        let at = self.cursor.fetch_add(1, Ordering::AcqRel);
        self.script[at % self.script.len()] % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_empty_is_none() {
        let empty: [u8; 0] = [];
        assert_eq!(choose(&ThreadRandom, &empty), None);
    }

    #[test]
    fn test_thread_random_stays_in_range() {
        for len in 1..10 {
            for _ in 0..50 {
                assert!(ThreadRandom.index(len) < len);
            }
        }
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let rng = SeededRandom::new(42);
        let first: Vec<usize> = (0..20).map(|_| rng.index(4)).collect();

        rng.reset(42);
        let second: Vec<usize> = (0..20).map(|_| rng.index(4)).collect();

        assert_eq!(first, second);
        assert!(first.iter().all(|&i| i < 4));
    }

    #[test]
    fn test_scripted_random_wraps_and_reduces() {
        let rng = ScriptedRandom::new(vec![1, 5]);
        assert_eq!(choose(&rng, &['a', 'b', 'c']), Some('b'));
        assert_eq!(choose(&rng, &['a', 'b', 'c']), Some('c'));
        assert_eq!(choose(&rng, &['a', 'b']), Some('b'));
        assert_eq!(rng.draws(), 3);
    }
}
