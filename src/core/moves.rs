//! Move representation.
//!
//! A move is either a tap (one of your live hands onto one of the opponent's
//! live hands) or a swap (redistribute your own fingers). Legality is decided
//! by the rules module; a `Move` value on its own is just a request.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::hand::{Hand, HandValue};

/// Moves available in a single position.
///
/// At most four taps and four swaps exist in any position, so this never
/// spills to the heap.
pub type MoveList = SmallVec<[Move; 8]>;

/// A move submitted by the player to act.
///
/// ## Example
///
/// ```
/// use tapnswap::core::{Hand, HandValue, Move};
///
/// let tap = Move::tap(Hand::Left, Hand::Right);
/// assert!(tap.is_tap());
///
/// let swap = Move::swap(HandValue::new(2).unwrap(), HandValue::new(2).unwrap());
/// assert_eq!(swap.to_string(), "swap to 2-2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Add the mover's `from` hand to the opponent's `to` hand.
    Tap { from: Hand, to: Hand },

    /// Replace the mover's pair with `(left, right)`.
    Swap { left: HandValue, right: HandValue },
}

impl Move {
    /// Build a tap.
    #[must_use]
    pub const fn tap(from: Hand, to: Hand) -> Self {
        Move::Tap { from, to }
    }

    /// Build a swap.
    #[must_use]
    pub const fn swap(left: HandValue, right: HandValue) -> Self {
        Move::Swap { left, right }
    }

    /// Check if this move is a tap.
    #[must_use]
    pub const fn is_tap(&self) -> bool {
        matches!(self, Move::Tap { .. })
    }

    /// Check if this move is a swap.
    #[must_use]
    pub const fn is_swap(&self) -> bool {
        matches!(self, Move::Swap { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Tap { from, to } => write!(f, "tap {} on {}", from, to),
            Move::Swap { left, right } => write!(f, "swap to {}-{}", left, right),
        }
    }
}
