//! Random Minichess Agent
//!
//! A simple agent that picks uniformly at random among the slots its legality
//! mask admits. Useful for:
//! - Testing infrastructure before training ML models
//! - Baseline comparisons (any real agent should easily beat this)
//! - Stress testing move generation and the action codec

use minichess_core::{Action, Agent, Board, Ruleset, codec};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

#[cfg(test)]
mod lib_tests;

/// An agent that plays random legal actions.
///
/// It samples a slot from the legality mask, builds the one-hot action vector
/// a policy head would emit, and decodes it through the codec. It applies no
/// evaluation at all, which makes it the baseline every trained agent has to
/// clear.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A seeded agent for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Ruleset> Agent<R> for RandomAgent {
    fn propose_action(&mut self, board: &Board<R>, mask: &[f32]) -> Option<Action> {
        let open: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter(|(_, &weight)| weight > 0.0)
            .map(|(slot, _)| slot)
            .collect();
        let slot = *open.choose(&mut self.rng)?;

        let mut vector = vec![0.0; mask.len()];
        vector[slot] = 1.0;
        codec::decode(&vector, board).ok()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
