//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Configuration for a headless match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Maximum moves before the match is abandoned.
    pub max_turns: usize,

    /// Seat that moves first.
    pub first_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 200,
            first_player: Player::A,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the turn cap.
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    /// Set the opening seat.
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }
}
