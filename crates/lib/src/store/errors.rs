//! Error types for rank store operations.

use thiserror::Error;

/// Structured error types for [`super::RankStore`] implementations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item with this id in the store
    #[error("Item not found in store: {id}")]
    ItemNotFound { id: String },

    /// An item with this id already exists
    #[error("Item already exists in store: {id}")]
    DuplicateItem { id: String },

    /// The backing storage failed
    #[error("Store backend error: {reason}")]
    Backend { reason: String },
}

impl StoreError {
    /// Check if this error indicates an item was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::ItemNotFound { .. })
    }

    /// Check if this error indicates an id conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::DuplicateItem { .. })
    }

    /// Get the item id this error refers to, if any
    pub fn item_id(&self) -> Option<&str> {
        match self {
            StoreError::ItemNotFound { id } | StoreError::DuplicateItem { id } => Some(id),
            StoreError::Backend { .. } => None,
        }
    }
}

impl From<StoreError> for crate::Error {
    fn from(err: StoreError) -> Self {
        crate::Error::Store(err)
    }
}
