//! Crate error type.

use std::path::PathBuf;

use crate::core::{Move, Player};
use crate::policy::StateKey;

/// Errors raised by the rules, agents, and policy store.
#[derive(Debug)]
pub enum Error {
    /// A move outside the legal set was submitted.
    IllegalMove { player: Player, mv: Move },

    /// An agent was asked to act in a position with no legal moves.
    NoLegalMove { player: Player },

    /// The policy table has no entry for a position.
    UnknownState(StateKey),

    /// Policy name is not a plain file stem.
    InvalidPolicyName(String),

    /// No trained policy with this name exists.
    PolicyNotFound { name: String, path: PathBuf },

    /// The policy file was written by an incompatible version.
    PolicyVersion { found: u32, expected: u32 },

    /// The policy file could not be decoded.
    PolicyDecode(bincode::Error),

    /// Finger count outside `0..=4`.
    InvalidHand(u8),

    Io(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::IllegalMove { player, mv } => write!(f, "illegal move for {}: {}", player, mv),
            Error::NoLegalMove { player } => write!(f, "{} has no legal move", player),
            Error::UnknownState(key) => write!(f, "no policy entry for state {}", key),
            Error::InvalidPolicyName(name) => write!(f, "invalid policy name '{}'", name),
            Error::PolicyNotFound { name, path } => {
                write!(f, "policy '{}' not found at {}", name, path.display())
            }
            Error::PolicyVersion { found, expected } => {
                write!(f, "policy file version {} (expected {})", found, expected)
            }
            Error::PolicyDecode(e) => write!(f, "corrupt policy file: {}", e),
            Error::InvalidHand(v) => write!(f, "hand value {} out of range 0..=4", v),
            Error::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::PolicyDecode(e) => Some(e.as_ref()),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<bincode::Error> for Error {
    fn from(e: bincode::Error) -> Self {
        Error::PolicyDecode(e)
    }
}
