//! # tapnswap
//!
//! Rules engine and computer opponents for Tap'n'Swap, a two-player
//! finger-counting game in the chopsticks family.
//!
//! Each player has two hands holding 1 to 4 fingers (0 means the hand is
//! dead). On a turn the player either taps one of their live hands onto an
//! opponent's live hand, adding its count modulo 5, or swaps: redistributes
//! their own fingers into a new left/right pair with the same total. A player
//! whose hands are both dead loses.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: `rules` functions take a `GameState` by reference and
//!    return a new one. States are `Copy` and never mutated in place.
//!
//! 2. **Agents Behind One Trait**: drivers hold a `Box<dyn Agent>` and never
//!    branch on what kind of opponent they face.
//!
//! 3. **Injected Randomness**: every random choice goes through a seeded
//!    `GameRng`, so games are reproducible.
//!
//! ## Modules
//!
//! - `core`: players, hands, state, moves, RNG, configuration
//! - `rules`: legal moves, move application, win detection
//! - `policy`: state keys and trained value tables
//! - `agents`: the `Agent` trait, random and policy opponents
//! - `arena`: headless matches and series between agents
//! - `error`: crate error type

pub mod core;
pub mod error;
pub mod rules;
pub mod policy;
pub mod agents;
pub mod arena;

// Re-export commonly used types
pub use crate::core::{
    AgentConfig, Difficulty,
    GameRng,
    Hand, HandValue, Hands,
    Move, MoveList,
    Player, PlayerPair,
    GameState,
};

pub use crate::error::{Error, Result};

pub use crate::rules::{apply_move, is_terminal, legal_moves, GameResult};

pub use crate::policy::{PolicyStore, StateKey};

pub use crate::agents::{build_agent, Agent, PolicyAgent, RandomAgent};

pub use crate::arena::{evaluate, play_match, MatchConfig, MatchOutcome, MatchRecord, SeriesTally};
