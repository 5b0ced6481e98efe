//! Error types for rank key operations.

use thiserror::Error;

use super::RankKey;

/// Structured error types for the rank codec.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// Rank keys are never empty; the empty string only denotes an open bound
    #[error("Rank key must not be empty")]
    EmptyKey,

    /// Key contains a character outside the `'0'..='z'` alphabet
    #[error("Invalid character {character:?} at offset {offset} in rank key {key:?}")]
    InvalidCharacter {
        key: String,
        character: char,
        offset: usize,
    },

    /// Both bounds were given but the lower one does not sort before the upper one
    #[error("Lower bound {prev} must sort before upper bound {next}")]
    InvalidBounds { prev: RankKey, next: RankKey },
}

impl RankError {
    /// Check if this error comes from parsing untrusted key text
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            RankError::EmptyKey | RankError::InvalidCharacter { .. }
        )
    }

    /// Check if this error is a violated `prev < next` precondition
    pub fn is_invalid_bounds(&self) -> bool {
        matches!(self, RankError::InvalidBounds { .. })
    }
}

impl From<RankError> for crate::Error {
    fn from(err: RankError) -> Self {
        crate::Error::Rank(err)
    }
}
