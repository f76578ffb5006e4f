//! Game state: both players' hands and whose turn it is.
//!
//! `GameState` is a small `Copy` value. The rules never mutate a state in
//! place; every move produces a fresh snapshot, so callers can keep old
//! states around for history or undo without any cloning cost.

use serde::{Deserialize, Serialize};

use super::hand::Hands;
use super::player::{Player, PlayerPair};

/// Snapshot of a game between two turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Each player's hands.
    pub hands: PlayerPair<Hands>,

    /// Player who acts next.
    pub to_move: Player,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Opening position: 1-1 against 1-1, Player A to move.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hands: PlayerPair::new(Hands::STARTING, Hands::STARTING),
            to_move: Player::A,
        }
    }

    /// Build an arbitrary position.
    #[must_use]
    pub const fn from_hands(a: Hands, b: Hands, to_move: Player) -> Self {
        Self {
            hands: PlayerPair::new(a, b),
            to_move,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A {} | B {} ({} to move)",
            self.hands[Player::A],
            self.hands[Player::B],
            self.to_move
        )
    }
}
