//! Core types: players, hands, state, moves, RNG, configuration.

pub mod config;
pub mod hand;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{AgentConfig, Difficulty, DEFAULT_MODEL, DEFAULT_POLICY_DIR};
pub use hand::{Hand, HandValue, Hands, HAND_MODULUS};
pub use moves::{Move, MoveList};
pub use player::{Player, PlayerPair};
pub use rng::GameRng;
pub use state::GameState;
