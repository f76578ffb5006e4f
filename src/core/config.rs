//! Opponent configuration.
//!
//! The driver decides once, at startup, which kind of computer opponent to
//! face. `AgentConfig` captures that choice; `agents::build_agent` resolves it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Model loaded for the hard opponent unless configured otherwise.
pub const DEFAULT_MODEL: &str = "greedy0_2_vsRandomvsSelf";

/// Directory searched for `<model>.policy` files by default.
pub const DEFAULT_POLICY_DIR: &str = "policies";

/// Opponent strength.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform random play.
    Easy,
    /// Trained policy.
    #[default]
    Hard,
}

/// How to build a computer opponent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Which agent to build.
    pub difficulty: Difficulty,

    /// Directory holding trained policy files.
    pub policy_dir: PathBuf,

    /// Name of the trained policy (file stem inside `policy_dir`).
    /// Ignored for `Difficulty::Easy`.
    pub model: String,

    /// Prefer immediately winning or hand-killing moves over the policy.
    pub greedy: bool,

    /// Seed for the agent's random choices.
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            policy_dir: PathBuf::from(DEFAULT_POLICY_DIR),
            model: DEFAULT_MODEL.to_string(),
            greedy: false,
            seed: 42,
        }
    }
}

impl AgentConfig {
    /// Easy opponent with the given seed.
    pub fn easy(seed: u64) -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed,
            ..Self::default()
        }
    }

    /// Hard opponent playing the named model.
    pub fn hard(model: impl Into<String>) -> Self {
        Self {
            difficulty: Difficulty::Hard,
            model: model.into(),
            ..Self::default()
        }
    }

    /// Set the policy directory.
    pub fn with_policy_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.policy_dir = dir.into();
        self
    }

    /// Enable or disable the greedy override.
    pub fn with_greedy(mut self, greedy: bool) -> Self {
        self.greedy = greedy;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AgentConfig::default();
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.policy_dir, PathBuf::from("policies"));
        assert!(!config.greedy);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AgentConfig::hard("selfplay")
            .with_policy_dir("/tmp/models")
            .with_greedy(true)
            .with_seed(7);

        assert_eq!(config.model, "selfplay");
        assert_eq!(config.policy_dir, PathBuf::from("/tmp/models"));
        assert!(config.greedy);
        assert_eq!(config.seed, 7);

        assert_eq!(AgentConfig::easy(3).difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_serialization() {
        let config = AgentConfig::easy(11).with_greedy(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AgentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
