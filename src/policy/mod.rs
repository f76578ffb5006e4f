//! Trained policy lookup.
//!
//! - `StateKey`: canonical, perspective-relative position encoding
//! - `PolicyStore`: named table of state values, loaded once at startup
//!
//! How a table is trained is outside this crate; only the lookup contract
//! and the file layout live here.

pub mod key;
pub mod store;

pub use key::StateKey;
pub use store::{PolicyStore, FORMAT_VERSION, POLICY_EXTENSION};
