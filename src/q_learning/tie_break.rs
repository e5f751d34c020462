//! Tie-breaking between equally valued actions

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Picks one of `candidates` equally valued actions.
///
/// Implementations return an index in `0..candidates`; `candidates` is
/// always at least 2 when called by the agent. Any `FnMut(usize) -> usize`
/// closure qualifies, which is how tests pin a choice.
pub trait TieBreaker: Send {
    fn choose(&mut self, candidates: usize) -> usize;
}

impl<F> TieBreaker for F
where
    F: FnMut(usize) -> usize + Send,
{
    fn choose(&mut self, candidates: usize) -> usize {
        self(candidates)
    }
}

fn build_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_rng(&mut rand::rng())
    }
}

/// Uniform tie-breaker backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomTieBreaker {
    rng: StdRng,
}

impl RandomTieBreaker {
    /// Tie-breaker seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: build_rng(None),
        }
    }

    /// Deterministic tie-breaker.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: build_rng(Some(seed)),
        }
    }
}

impl Default for RandomTieBreaker {
    fn default() -> Self {
        Self::new()
    }
}

impl TieBreaker for RandomTieBreaker {
    fn choose(&mut self, candidates: usize) -> usize {
        if candidates <= 1 {
            return 0;
        }
        self.rng.random_range(0..candidates)
    }
}
