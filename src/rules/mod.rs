//! Tap'n'Swap rules.
//!
//! - What moves are legal for the player to act
//! - How a move transforms the state
//! - When the game is over and who won
//!
//! Agents and drivers call into this module; nothing else decides legality.

pub mod engine;

pub use engine::{
    apply_move, is_legal, is_terminal, kills_hand, legal_moves, reachable_states,
    wins_immediately, GameResult,
};
