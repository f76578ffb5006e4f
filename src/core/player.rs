//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Tap'n'Swap is strictly two-player: `Player::A` opens a fresh game and
//! `Player::B` answers.
//!
//! ## PlayerPair
//!
//! Fixed-size per-player storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first in a fresh game.
    A,
    /// Moves second.
    B,
}

impl Player {
    /// Both players in seat order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Seat index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tapnswap::core::{Player, PlayerPair};
///
/// let mut wins: PlayerPair<u32> = PlayerPair::with_value(0);
/// wins[Player::B] += 1;
///
/// assert_eq!(wins[Player::A], 0);
/// assert_eq!(wins[Player::B], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair from explicit values for A and B.
    pub const fn new(a: T, b: T) -> Self {
        Self { data: [a, b] }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }
}

impl<T> Index<Player> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerPair<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_basics() {
        assert_eq!(Player::A.index(), 0);
        assert_eq!(Player::B.index(), 1);
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent(), Player::A);
        assert_eq!(format!("{}", Player::B), "Player B");
    }

    #[test]
    fn test_player_pair_with_value() {
        let pair = PlayerPair::with_value(7u8);

        assert_eq!(pair[Player::A], 7);
        assert_eq!(pair[Player::B], 7);
    }

    #[test]
    fn test_player_pair_mutation() {
        let mut pair = PlayerPair::new(1, 2);
        pair[Player::A] = 5;

        assert_eq!(pair[Player::A], 5);
        assert_eq!(pair[Player::B], 2);
    }

    #[test]
    fn test_player_pair_serialization() {
        let pair = PlayerPair::new(3u8, 4u8);
        let json = serde_json::to_string(&pair).unwrap();
        let deserialized: PlayerPair<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, deserialized);
    }
}
