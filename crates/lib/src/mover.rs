//! Applying drops against a rank store.
//!
//! [`Mover`] runs the whole flow for one drop: read the affected containers
//! from the store, sort them, resolve the move, and write the new key back.
//! When the neighbors leave no room for a key and rebalancing is enabled, the
//! destination container is respaced with the moved item already in place.

use tracing::{debug, info, warn};

use crate::Result;
use crate::config::Config;
use crate::item::Item;
use crate::rebalance;
use crate::reorder::{self, DropEvent, ReorderError, Resolution, SiblingSnapshot};
use crate::store::{KeyUpdate, RankStore};

/// Executes drops against a [`RankStore`].
#[derive(Debug)]
pub struct Mover<S> {
    store: S,
    config: Config,
}

impl<S: RankStore> Mover<S> {
    /// Creates a mover with the default [`Config`].
    pub fn new(store: S) -> Self {
        Self::with_config(store, Config::default())
    }

    pub fn with_config(store: S, config: Config) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Applies a drop and returns the key updates written to the store.
    ///
    /// A drop back onto its own slot writes nothing. A regular move writes
    /// exactly one update. A move into an exhausted gap writes one update per
    /// respaced item when rebalancing is enabled.
    ///
    /// # Errors
    /// Propagates resolver errors ([`ReorderError`]) and store errors. With
    /// rebalancing disabled, an exhausted gap is returned as
    /// [`ReorderError::Exhausted`].
    pub fn apply(&self, drop: &DropEvent) -> Result<Vec<KeyUpdate>> {
        // Always read fresh; indices are only meaningful against current keys
        let snapshot = self.capture(drop)?;

        match reorder::resolve_move(&snapshot, drop) {
            Ok(Resolution::Unchanged) => {
                debug!(item = %drop.dragged_id, "Dropped onto its own slot");
                Ok(Vec::new())
            }
            Ok(Resolution::Placed(placement)) => {
                let update = KeyUpdate::new(placement.item_id, placement.container, placement.key);
                self.store.set_pos(&update)?;
                info!(
                    item = %update.item_id,
                    container = %update.container,
                    pos = %update.pos,
                    "Moved item"
                );
                Ok(vec![update])
            }
            Err(err) if err.needs_rebalance() && self.config.rebalance_on_exhaustion => {
                warn!(
                    item = %drop.dragged_id,
                    container = %drop.destination.container,
                    "No room between neighbors, rebalancing"
                );
                self.rebalance_into(&snapshot, drop)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn capture(&self, drop: &DropEvent) -> Result<SiblingSnapshot<Item>> {
        let mut items = self.store.siblings(&drop.source.container)?;
        if drop.destination.container != drop.source.container {
            items.extend(self.store.siblings(&drop.destination.container)?);
        }
        Ok(SiblingSnapshot::capture(items))
    }

    fn rebalance_into(
        &self,
        snapshot: &SiblingSnapshot<Item>,
        drop: &DropEvent,
    ) -> Result<Vec<KeyUpdate>> {
        let destination = &drop.destination;
        let mut moved = snapshot
            .siblings(&drop.source.container)
            .iter()
            .find(|item| item.id == drop.dragged_id)
            .cloned()
            .ok_or_else(|| ReorderError::ItemNotFound {
                id: drop.dragged_id.clone(),
            })?;
        moved.container.clone_from(&destination.container);

        let mut order: Vec<Item> = snapshot
            .siblings(&destination.container)
            .iter()
            .filter(|item| item.id != drop.dragged_id)
            .cloned()
            .collect();
        if destination.index > order.len() {
            return Err(ReorderError::IndexOutOfBounds {
                container: destination.container.clone(),
                index: destination.index,
                len: order.len() + 1,
            }
            .into());
        }
        order.insert(destination.index, moved);

        let mut updates = rebalance::respace(&order);
        // The moved item may keep its old key but still changes container
        if !updates.iter().any(|update| update.item_id == drop.dragged_id) {
            updates.push(KeyUpdate::new(
                &drop.dragged_id,
                &destination.container,
                order[destination.index].pos.clone(),
            ));
        }

        for update in &updates {
            self.store.set_pos(update)?;
        }
        info!(
            container = %destination.container,
            updates = updates.len(),
            "Rebalanced container"
        );
        Ok(updates)
    }
}
