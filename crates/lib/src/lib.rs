//!
//! boardrank: the ordering engine for task boards.
//!
//! Lists on a board and cards in a list are ordered by an opaque string key
//! rather than by an integer index. Moving an item rewrites only that item's
//! key, computed to sort strictly between its new neighbors, so a drag never
//! renumbers siblings.
//!
//! ## Core Concepts
//!
//! * **Rank keys (`rank::RankKey`)**: Non-empty strings over `'0'..='z'`, compared lexicographically.
//! * **Codec (`rank::insert`)**: Computes a key strictly between two keys, or beyond an open bound.
//! * **Resolver (`reorder::resolve_move`)**: Turns a drag-and-drop outcome into the neighbor pair that bounds the moved item and the key between them.
//! * **Rebalance (`rebalance::spread`)**: Evenly respaces a container when a gap has run out of room.
//! * **Stores (`store::RankStore`)**: The update API keys are written through; `store::InMemory` for tests and tools.
//! * **Mover (`Mover`)**: Runs read, resolve and write for one drop, rebalancing on exhaustion.

pub mod audit;
pub mod clock;
pub mod config;
pub mod constants;
pub mod item;
pub mod mover;
pub mod rank;
pub mod rebalance;
pub mod reorder;
pub mod store;

pub use clock::{Clock, SystemClock};
#[cfg(any(test, feature = "testing"))]
pub use clock::{ClockHold, FixedClock};
pub use config::Config;
pub use item::{Item, ItemKind, Orderable};
pub use mover::Mover;
pub use rank::RankKey;

/// Result type used throughout the boardrank library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the boardrank library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured rank key errors from the rank module
    #[error(transparent)]
    Rank(rank::RankError),

    /// Structured move resolution errors from the reorder module
    #[error(transparent)]
    Reorder(reorder::ReorderError),

    /// Structured store errors from the store module
    #[error(transparent)]
    Store(store::StoreError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Rank(_) => "rank",
            Error::Reorder(_) => "reorder",
            Error::Store(_) => "store",
        }
    }

    /// Check if this error indicates an item was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Reorder(reorder_err) => reorder_err.is_not_found(),
            Error::Store(store_err) => store_err.is_not_found(),
            Error::Rank(_) => false,
        }
    }

    /// Check if this error indicates a conflict (already exists).
    pub fn is_conflict(&self) -> bool {
        match self {
            Error::Store(store_err) => store_err.is_conflict(),
            _ => false,
        }
    }

    /// Check if this error asks for a container rebalance.
    pub fn needs_rebalance(&self) -> bool {
        match self {
            Error::Reorder(reorder_err) => reorder_err.needs_rebalance(),
            _ => false,
        }
    }

    /// Check if retrying (after a fresh read or a rebalance) can succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Reorder(reorder_err) => reorder_err.is_recoverable(),
            _ => false,
        }
    }

    /// Check if this error comes from invalid key input.
    pub fn is_invalid_key(&self) -> bool {
        match self {
            Error::Rank(rank_err) => rank_err.is_parse_error() || rank_err.is_invalid_bounds(),
            Error::Reorder(reorder::ReorderError::Rank(rank_err)) => {
                rank_err.is_parse_error() || rank_err.is_invalid_bounds()
            }
            _ => false,
        }
    }
}
