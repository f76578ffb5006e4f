//! Canonical state encoding used as the policy lookup key.
//!
//! A key describes a position from one player's point of view: that player's
//! hands, the other player's hands, and whether it is that player's turn.
//! Positions that differ only by which seat (A or B) holds which pair collapse
//! to the same key. Left/right order inside a pair is kept, since swap
//! legality depends on it.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, Hands, Player, PlayerPair, HAND_MODULUS};

/// Perspective-relative position key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateKey {
    /// Hands of the perspective player.
    pub own: Hands,
    /// Hands of the other player.
    pub opponent: Hands,
    /// True when the perspective player moves next.
    pub own_turn: bool,
}

impl StateKey {
    /// Number of distinct keys (`index()` is always below this).
    pub const COUNT: u16 = 2 * 625;

    /// Encode `state` as seen by `perspective`.
    #[must_use]
    pub fn new(state: &GameState, perspective: Player) -> Self {
        Self {
            own: state.hands[perspective],
            opponent: state.hands[perspective.opponent()],
            own_turn: state.to_move == perspective,
        }
    }

    /// Rebuild the position with the perspective player seated at `seat`.
    #[must_use]
    pub fn to_state(&self, seat: Player) -> GameState {
        let mut hands = PlayerPair::with_value(self.own);
        hands[seat.opponent()] = self.opponent;
        GameState {
            hands,
            to_move: if self.own_turn { seat } else { seat.opponent() },
        }
    }

    /// Dense index in `0..COUNT`: turn flag, then the four hand values as
    /// base-5 digits, own pair first.
    #[must_use]
    pub fn index(&self) -> u16 {
        let m = u16::from(HAND_MODULUS);
        let digits = [
            self.own.left,
            self.own.right,
            self.opponent.left,
            self.opponent.right,
        ];
        let packed = digits
            .iter()
            .fold(0u16, |acc, h| acc * m + u16::from(h.get()));
        u16::from(self.own_turn) * 625 + packed
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let turn = if self.own_turn { "own" } else { "opp" };
        write!(f, "{}/{}@{}", self.own, self.opponent, turn)
    }
}
