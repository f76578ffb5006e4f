//! Uniform random opponent.

use crate::core::{GameRng, GameState, Move, Player};
use crate::error::{Error, Result};
use crate::rules;

use super::Agent;

/// Picks uniformly among the legal moves.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent drawing from `rng`.
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Create an agent with a fresh RNG seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn decide(&mut self, state: &GameState, player: Player) -> Result<Move> {
        let moves = rules::legal_moves(state, player);
        self.rng
            .choose(&moves)
            .copied()
            .ok_or(Error::NoLegalMove { player })
    }
}
