//! Computer opponents.
//!
//! Every opponent implements `Agent`, so a driver can hold a
//! `Box<dyn Agent>` and never branch on which kind it faces. A human-input
//! adapter fits the same seam.
//!
//! - `RandomAgent`: uniform choice among legal moves
//! - `PolicyAgent`: trained value table with an optional greedy override
//!
//! ## Usage
//!
//! ```
//! use tapnswap::agents::{build_agent, Agent};
//! use tapnswap::core::{AgentConfig, GameState, Player};
//! use tapnswap::rules;
//!
//! let mut agent = build_agent(&AgentConfig::easy(7)).unwrap();
//! let state = GameState::new();
//! let mv = agent.decide(&state, Player::A).unwrap();
//! let next = rules::apply_move(&state, Player::A, mv).unwrap();
//! assert_eq!(next.to_move, Player::B);
//! ```

pub mod policy;
pub mod random;

pub use policy::PolicyAgent;
pub use random::RandomAgent;

use crate::core::{AgentConfig, Difficulty, GameRng, GameState, Move, Player};
use crate::error::Result;
use crate::policy::PolicyStore;

/// Anything that can choose a move.
pub trait Agent: Send {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Choose a legal move for `player` in `state`.
    ///
    /// Fails with `Error::NoLegalMove` when `player` cannot act; drivers are
    /// expected to check `rules::is_terminal` first.
    fn decide(&mut self, state: &GameState, player: Player) -> Result<Move>;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&mut self, state: &GameState, player: Player) -> Result<Move> {
        (**self).decide(state, player)
    }
}

/// Build the opponent described by `config`.
///
/// For `Difficulty::Hard` the policy is loaded immediately, so a missing
/// model fails here rather than on the first move.
pub fn build_agent(config: &AgentConfig) -> Result<Box<dyn Agent>> {
    let rng = GameRng::new(config.seed);
    match config.difficulty {
        Difficulty::Easy => Ok(Box::new(RandomAgent::new(rng))),
        Difficulty::Hard => {
            let store = PolicyStore::load(&config.policy_dir, &config.model)?;
            Ok(Box::new(PolicyAgent::new(store, rng).with_greedy(config.greedy)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_build_easy() {
        let agent = build_agent(&AgentConfig::easy(1)).unwrap();
        assert_eq!(agent.name(), "random");
    }

    #[test]
    fn test_build_hard_missing_model() {
        let dir = std::env::temp_dir().join(format!("tapnswap-agents-missing-{}", std::process::id()));
        let config = AgentConfig::hard("absent").with_policy_dir(&dir);

        assert!(matches!(
            build_agent(&config),
            Err(Error::PolicyNotFound { .. })
        ));
    }

    #[test]
    fn test_build_hard_rejects_path_in_model() {
        let config = AgentConfig::hard("../../etc/passwd");

        assert!(matches!(
            build_agent(&config),
            Err(Error::InvalidPolicyName(_))
        ));
    }

    #[test]
    fn test_build_hard() {
        let dir = std::env::temp_dir().join(format!("tapnswap-agents-hard-{}", std::process::id()));
        PolicyStore::new("tiny").save(&dir).unwrap();

        let config = AgentConfig::hard("tiny").with_policy_dir(&dir).with_greedy(true);
        let mut agent = build_agent(&config).unwrap();
        assert_eq!(agent.name(), "tiny");
        assert!(agent.decide(&GameState::new(), Player::A).is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
