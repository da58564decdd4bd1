//! Uniform index selection behind a narrow trait.
//!
//! Card draws and fallback fortunes both pick "one of N". Production code uses
//! a seeded or OS-seeded [`StdRng`]; tests can substitute a [`Sequence`] to
//! make selection fully deterministic.

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform indices.
pub trait RandomSource: Send {
    /// Return an index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// A scripted source that cycles through fixed indices (each taken modulo `len`).
#[derive(Debug, Clone)]
pub struct Sequence {
    picks: Vec<usize>,
    next: usize,
}

impl Sequence {
    /// Create a sequence. An empty list always yields index 0.
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, next: 0 }
    }
}

impl RandomSource for Sequence {
    fn index(&mut self, len: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let pick = self.picks[self.next % self.picks.len()];
        self.next += 1;
        pick % len
    }
}
