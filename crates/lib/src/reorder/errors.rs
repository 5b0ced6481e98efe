//! Error types for move resolution.

use thiserror::Error;

use crate::rank::{RankError, RankKey};

/// Structured error types for the reorder resolver.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    /// Drop index does not address a slot in the container
    #[error("Index {index} out of bounds for container {container} with {len} slots")]
    IndexOutOfBounds {
        container: String,
        index: usize,
        len: usize,
    },

    /// The dragged item is not in the snapshot
    #[error("Item not found in snapshot: {id}")]
    ItemNotFound { id: String },

    /// The source index does not point at the dragged item, so the drop was
    /// computed against a different ordering than the snapshot
    #[error(
        "Stale drop: expected {expected} at index {index} of container {container}, found {found}"
    )]
    StaleSnapshot {
        container: String,
        index: usize,
        expected: String,
        found: String,
    },

    /// No key fits between the neighbors; the container needs a rebalance
    #[error("No room between neighbors in container {container}")]
    Exhausted {
        container: String,
        lower: Option<RankKey>,
        upper: Option<RankKey>,
    },

    /// Codec rejected its inputs
    #[error(transparent)]
    Rank(#[from] RankError),
}

impl ReorderError {
    /// Check if this error indicates the dragged item was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReorderError::ItemNotFound { .. })
    }

    /// Check if retrying against a fresh snapshot or a rebalanced container can succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ReorderError::Exhausted { .. } | ReorderError::StaleSnapshot { .. }
        )
    }

    /// Check if this error asks for the container to be rebalanced
    pub fn needs_rebalance(&self) -> bool {
        matches!(self, ReorderError::Exhausted { .. })
    }

    /// Get the container this error refers to, if any
    pub fn container(&self) -> Option<&str> {
        match self {
            ReorderError::IndexOutOfBounds { container, .. }
            | ReorderError::StaleSnapshot { container, .. }
            | ReorderError::Exhausted { container, .. } => Some(container),
            _ => None,
        }
    }
}

impl From<ReorderError> for crate::Error {
    fn from(err: ReorderError) -> Self {
        crate::Error::Reorder(err)
    }
}
