//! In-memory rank store
//!
//! Holds item records in a `HashMap` behind a read-write lock. Suitable for
//! tests, the CLI, and as the client-side cache the engine patches
//! optimistically.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use super::{KeyUpdate, RankStore, StoreError};
use crate::Result;
use crate::clock::{Clock, SystemClock};
use crate::item::{Item, ItemKind, sibling_order};
use crate::reorder;

/// A `HashMap`-backed [`RankStore`].
#[derive(Debug)]
pub struct InMemory {
    items: RwLock<HashMap<String, Item>>,
    clock: Arc<dyn Clock>,
}

impl InMemory {
    /// Creates an empty store stamping new items with system time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty store using `clock` for creation timestamps.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Creates a store pre-populated with `items`.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateItem`] if two items share an id.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let store = Self::new();
        for item in items {
            store.insert(item)?;
        }
        Ok(store)
    }

    /// Adds an existing item record as-is.
    pub fn insert(&self, item: Item) -> Result<()> {
        let mut items = self.write()?;
        if items.contains_key(&item.id) {
            return Err(StoreError::DuplicateItem { id: item.id }.into());
        }
        items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Creates a new item at the bottom of `container`.
    pub fn create(
        &self,
        kind: ItemKind,
        container: &str,
        title: impl Into<String>,
    ) -> Result<Item> {
        let mut items = self.write()?;
        self.place(&mut items, kind, container, title.into(), None)
    }

    /// Creates a new item at `index` among the sorted siblings of `container`.
    ///
    /// The key is bounded by the neighbors that will surround the new item.
    pub fn create_at(
        &self,
        kind: ItemKind,
        container: &str,
        title: impl Into<String>,
        index: usize,
    ) -> Result<Item> {
        let mut items = self.write()?;
        self.place(&mut items, kind, container, title.into(), Some(index))
    }

    /// Keys and stores a new item while the caller holds the write lock.
    /// `None` places it after the last sibling.
    fn place(
        &self,
        items: &mut HashMap<String, Item>,
        kind: ItemKind,
        container: &str,
        title: String,
        index: Option<usize>,
    ) -> Result<Item> {
        let mut siblings: Vec<Item> = items
            .values()
            .filter(|item| item.container == container)
            .cloned()
            .collect();
        siblings.sort_by(sibling_order);

        let index = index.unwrap_or(siblings.len());
        let pos = reorder::place_new(container, &siblings, index)?;
        let item = Item::new(kind, container, title, pos, self.clock.now());
        debug!(id = %item.id, container, pos = %item.pos, "Created item");
        items.insert(item.id.clone(), item.clone());
        Ok(item)
    }

    /// Every item, grouped by container and sorted within each container.
    pub fn items(&self) -> Result<Vec<Item>> {
        let items = self.read()?;
        let mut all: Vec<Item> = items.values().cloned().collect();
        all.sort_by(|a, b| {
            a.container
                .cmp(&b.container)
                .then_with(|| sibling_order(a, b))
        });
        Ok(all)
    }

    /// Number of stored items.
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// True if the store holds no items.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<String, Item>>> {
        self.items.read().map_err(|_| poisoned().into())
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, Item>>> {
        self.items.write().map_err(|_| poisoned().into())
    }
}

fn poisoned() -> StoreError {
    StoreError::Backend {
        reason: "item lock poisoned".to_string(),
    }
}

impl Default for InMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl RankStore for InMemory {
    fn get(&self, id: &str) -> Result<Item> {
        self.read()?.get(id).cloned().ok_or_else(|| {
            StoreError::ItemNotFound { id: id.to_string() }.into()
        })
    }

    fn siblings(&self, container: &str) -> Result<Vec<Item>> {
        Ok(self
            .read()?
            .values()
            .filter(|item| item.container == container)
            .cloned()
            .collect())
    }

    fn set_pos(&self, update: &KeyUpdate) -> Result<()> {
        let mut items = self.write()?;
        let item = items
            .get_mut(&update.item_id)
            .ok_or_else(|| StoreError::ItemNotFound {
                id: update.item_id.clone(),
            })?;
        item.container.clone_from(&update.container);
        item.pos = update.pos.clone();
        Ok(())
    }
}
