//! Move selection for the computer opponent.
//!
//! The opponent is deliberately naive: it picks any empty cell. The choice
//! goes through [`MoveSelector`] so tests can swap in a deterministic source.

use super::Position;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Picks one of the candidate positions.
pub trait MoveSelector {
    /// Returns one of `candidates`, or `None` when the slice is empty.
    fn select(&mut self, candidates: &[Position]) -> Option<Position>;
}

/// Uniform random choice backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: ChaCha8Rng,
}

impl RandomSelector {
    /// Seeds from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Same seed, same sequence of picks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, candidates: &[Position]) -> Option<Position> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Always takes the first empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstEmptySelector;

impl MoveSelector for FirstEmptySelector {
    fn select(&mut self, candidates: &[Position]) -> Option<Position> {
        candidates.first().copied()
    }
}

impl<S: MoveSelector + ?Sized> MoveSelector for &mut S {
    fn select(&mut self, candidates: &[Position]) -> Option<Position> {
        (**self).select(candidates)
    }
}
