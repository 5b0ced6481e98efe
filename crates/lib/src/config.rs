//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_KEY_LEN;

/// Tunables for [`crate::Mover`] and [`crate::audit`].
///
/// Deserializes with defaults for missing fields, so a partial config file
/// or an empty JSON object is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Respace the destination container when no key fits between the
    /// neighbors, instead of failing the move.
    pub rebalance_on_exhaustion: bool,

    /// Containers whose longest key exceeds this length are reported as due
    /// for a rebalance.
    pub max_key_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rebalance_on_exhaustion: true,
            max_key_len: DEFAULT_MAX_KEY_LEN,
        }
    }
}
