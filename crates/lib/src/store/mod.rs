//! The update API the ordering engine writes rank keys through.
//!
//! The engine never owns item records. It reads sibling sets through a
//! [`RankStore`] and hands back single-field key updates. Stores do not
//! validate ordering; callers are responsible for only writing keys the
//! resolver produced.

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::item::Item;
use crate::rank::RankKey;

mod errors;
pub use errors::StoreError;

mod in_memory;
pub use in_memory::InMemory;

/// A single-field update: item `item_id` now lives in `container` at `pos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyUpdate {
    pub item_id: String,
    pub container: String,
    pub pos: RankKey,
}

impl KeyUpdate {
    pub fn new(item_id: impl Into<String>, container: impl Into<String>, pos: RankKey) -> Self {
        Self {
            item_id: item_id.into(),
            container: container.into(),
            pos,
        }
    }
}

/// Storage of orderable items, as seen by the ordering engine.
///
/// All implementations must be `Send` and `Sync`; mutation goes through
/// `&self` so a store can be shared between callers.
pub trait RankStore: Send + Sync {
    /// Retrieves an item by id.
    ///
    /// # Errors
    /// Returns [`StoreError::ItemNotFound`] if no such item exists.
    fn get(&self, id: &str) -> Result<Item>;

    /// Returns every item in `container`, in no particular order.
    fn siblings(&self, container: &str) -> Result<Vec<Item>>;

    /// Persists a key update for an existing item.
    ///
    /// # Errors
    /// Returns [`StoreError::ItemNotFound`] if the item does not exist.
    fn set_pos(&self, update: &KeyUpdate) -> Result<()>;
}
