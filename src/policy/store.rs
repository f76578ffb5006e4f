//! Read-only access to a trained value table.
//!
//! A trained policy maps `StateKey`s to the expected outcome for the key's
//! perspective player, in `[0, 1]` (1 = win, 0 = loss). Policies are stored
//! one per file as `<dir>/<name>.policy`, bincode-encoded.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::key::StateKey;
use crate::error::{Error, Result};

/// File extension of stored policies.
pub const POLICY_EXTENSION: &str = "policy";

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

/// On-disk layout.
#[derive(Serialize, Deserialize)]
struct PolicyFile {
    version: u32,
    name: String,
    entries: Vec<(StateKey, f32)>,
}

/// A named table of state values.
#[derive(Clone, Debug, Default)]
pub struct PolicyStore {
    name: String,
    values: FxHashMap<StateKey, f32>,
}

impl PolicyStore {
    /// Create an empty store.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: FxHashMap::default(),
        }
    }

    /// Create a store from (key, value) pairs. Later duplicates win.
    pub fn from_entries(
        name: impl Into<String>,
        entries: impl IntoIterator<Item = (StateKey, f32)>,
    ) -> Self {
        Self {
            name: name.into(),
            values: entries.into_iter().collect(),
        }
    }

    /// Location of the named policy inside `dir`.
    ///
    /// The name must be a single plain file stem; anything that would
    /// resolve outside `dir` is `Error::InvalidPolicyName`.
    pub fn path_for(dir: impl AsRef<Path>, name: &str) -> Result<PathBuf> {
        let mut parts = Path::new(name).components();
        match (parts.next(), parts.next()) {
            (Some(Component::Normal(stem)), None) if stem == name => {
                Ok(dir.as_ref().join(format!("{}.{}", name, POLICY_EXTENSION)))
            }
            _ => Err(Error::InvalidPolicyName(name.to_string())),
        }
    }

    /// Load the named policy from `dir`.
    ///
    /// A missing file is a configuration error (`Error::PolicyNotFound`)
    /// reported here rather than on first lookup.
    pub fn load(dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        let path = Self::path_for(dir, name)?;
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::PolicyNotFound {
                    name: name.to_string(),
                    path,
                });
            }
            Err(e) => return Err(e.into()),
        };

        let stored: PolicyFile = bincode::deserialize_from(BufReader::new(file))?;
        if stored.version != FORMAT_VERSION {
            return Err(Error::PolicyVersion {
                found: stored.version,
                expected: FORMAT_VERSION,
            });
        }
        if stored.name != name {
            log::warn!(
                "policy file {} is labelled '{}', loading as '{}'",
                path.display(),
                stored.name,
                name
            );
        }

        let store = Self::from_entries(name, stored.entries);
        log::info!("loaded policy '{}' ({} states)", store.name, store.len());
        Ok(store)
    }

    /// Write this policy to `<dir>/<name>.policy`, creating `dir` if needed.
    ///
    /// Entries are written in key order, so saving the same table twice
    /// produces identical files.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = Self::path_for(dir.as_ref(), &self.name)?;
        fs::create_dir_all(dir.as_ref())?;

        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(key, _)| key.index());

        let stored = PolicyFile {
            version: FORMAT_VERSION,
            name: self.name.clone(),
            entries,
        };
        let mut writer = BufWriter::new(File::create(&path)?);
        bincode::serialize_into(&mut writer, &stored)?;
        writer.flush()?;

        log::info!("saved policy '{}' to {}", self.name, path.display());
        Ok(path)
    }

    /// Policy name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of states with a stored value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Set the value of a state.
    pub fn insert(&mut self, key: StateKey, value: f32) {
        self.values.insert(key, value);
    }

    /// Stored value for a state, if any.
    #[must_use]
    pub fn value_of(&self, key: &StateKey) -> Option<f32> {
        self.values.get(key).copied()
    }

    /// Stored value for a state, or `Error::UnknownState`.
    pub fn lookup(&self, key: &StateKey) -> Result<f32> {
        self.value_of(key).ok_or(Error::UnknownState(*key))
    }

    /// Iterate over all (key, value) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (StateKey, f32)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Hands, Player};

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("tapnswap-store-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn key(a: (u8, u8), b: (u8, u8), to_move: Player) -> StateKey {
        let state = GameState::from_hands(
            Hands::from_counts(a.0, a.1).unwrap(),
            Hands::from_counts(b.0, b.1).unwrap(),
            to_move,
        );
        StateKey::new(&state, Player::A)
    }

    #[test]
    fn test_value_of() {
        let k = key((1, 1), (1, 2), Player::B);
        let store = PolicyStore::from_entries("t", [(k, 0.75)]);

        assert_eq!(store.value_of(&k), Some(0.75));
        assert_eq!(store.value_of(&key((1, 1), (2, 1), Player::B)), None);
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_lookup_unknown() {
        let store = PolicyStore::new("empty");
        let k = key((1, 1), (1, 1), Player::A);

        assert!(store.is_empty());
        assert!(matches!(store.lookup(&k), Err(Error::UnknownState(missing)) if missing == k));
    }

    #[test]
    fn test_save_and_load() {
        let dir = scratch_dir("roundtrip");
        let mut store = PolicyStore::new("unit");
        store.insert(key((1, 1), (1, 2), Player::B), 0.25);
        store.insert(key((3, 1), (0, 4), Player::B), 0.9);

        let path = store.save(&dir).unwrap();
        assert_eq!(path, dir.join("unit.policy"));

        let loaded = PolicyStore::load(&dir, "unit").unwrap();
        assert_eq!(loaded.name(), "unit");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.value_of(&key((3, 1), (0, 4), Player::B)), Some(0.9));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_is_reproducible() {
        let dir = scratch_dir("stable");
        let entries = [
            (key((1, 1), (1, 2), Player::B), 0.5),
            (key((2, 1), (1, 1), Player::B), 0.4),
            (key((4, 0), (1, 3), Player::A), 0.1),
        ];

        let first = PolicyStore::from_entries("stable", entries).save(&dir).unwrap();
        let first = fs::read(first).unwrap();
        let mut reversed = entries;
        reversed.reverse();
        let second = PolicyStore::from_entries("stable", reversed).save(&dir).unwrap();
        let second = fs::read(second).unwrap();

        assert_eq!(first, second);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_policy() {
        let dir = scratch_dir("missing");
        let err = PolicyStore::load(&dir, "nope").unwrap_err();

        match err {
            Error::PolicyNotFound { name, path } => {
                assert_eq!(name, "nope");
                assert_eq!(path, dir.join("nope.policy"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_names_outside_dir() {
        let dir = scratch_dir("names");

        for name in ["../escape", "nested/model", "", "..", ".", "/abs"] {
            assert!(
                matches!(PolicyStore::load(&dir, name), Err(Error::InvalidPolicyName(ref n)) if n == name),
                "load accepted {name:?}"
            );
            assert!(
                matches!(PolicyStore::new(name).save(&dir), Err(Error::InvalidPolicyName(_))),
                "save accepted {name:?}"
            );
        }
        assert!(!dir.exists());
        assert!(PolicyStore::path_for(&dir, "greedy0_2.v1").is_ok());
    }

    #[test]
    fn test_saved_file_is_complete() {
        let dir = scratch_dir("complete");
        let entries: Vec<_> = crate::rules::reachable_states()
            .into_iter()
            .map(|s| (StateKey::new(&s, Player::A), 0.5))
            .collect();
        let store = PolicyStore::from_entries("big", entries);

        let path = store.save(&dir).unwrap();
        let bytes = fs::read(&path).unwrap();
        let decoded: PolicyFile = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded.entries.len(), store.len());
        assert_eq!(bytes.len() as u64, bincode::serialized_size(&decoded).unwrap());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_policy() {
        let dir = scratch_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("junk.policy"), b"\x01").unwrap();

        assert!(matches!(
            PolicyStore::load(&dir, "junk"),
            Err(Error::PolicyDecode(_))
        ));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_version_mismatch() {
        let dir = scratch_dir("version");
        fs::create_dir_all(&dir).unwrap();
        let stale = PolicyFile {
            version: FORMAT_VERSION + 1,
            name: "old".to_string(),
            entries: vec![],
        };
        fs::write(dir.join("old.policy"), bincode::serialize(&stale).unwrap()).unwrap();

        assert!(matches!(
            PolicyStore::load(&dir, "old"),
            Err(Error::PolicyVersion { expected: FORMAT_VERSION, .. })
        ));
        let _ = fs::remove_dir_all(&dir);
    }
}
