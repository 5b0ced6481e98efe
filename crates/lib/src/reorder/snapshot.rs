//! Sorted sibling views captured right before a move is resolved.

use std::collections::BTreeMap;

use super::Placement;
use crate::item::{Orderable, sibling_order};

/// Siblings grouped by container, each group sorted by [`sibling_order`].
///
/// Sorting happens on capture, so the resolver never depends on whatever
/// order the caller happened to hold items in.
#[derive(Debug, Clone)]
pub struct SiblingSnapshot<T> {
    containers: BTreeMap<String, Vec<T>>,
}

impl<T: Orderable> SiblingSnapshot<T> {
    /// Groups `items` by container and sorts every group.
    pub fn capture(items: impl IntoIterator<Item = T>) -> Self {
        let mut containers: BTreeMap<String, Vec<T>> = BTreeMap::new();
        for item in items {
            containers
                .entry(item.container().to_string())
                .or_default()
                .push(item);
        }
        for siblings in containers.values_mut() {
            siblings.sort_by(sibling_order);
        }
        Self { containers }
    }

    /// Sorted siblings of `container`; empty if the container has no items.
    pub fn siblings(&self, container: &str) -> &[T] {
        self.containers
            .get(container)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Index of the item with `id` within `container`.
    pub fn position(&self, container: &str, id: &str) -> Option<usize> {
        self.siblings(container).iter().position(|item| item.id() == id)
    }

    /// Container ids in the snapshot.
    pub fn containers(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(String::as_str)
    }

    /// Total number of items across all containers.
    pub fn len(&self) -> usize {
        self.containers.values().map(Vec::len).sum()
    }

    /// True if the snapshot holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Optimistically applies a resolved placement.
    ///
    /// The item is moved to its new container with its new key and the
    /// destination is re-sorted. Returns false if the item is not in the
    /// snapshot.
    pub fn apply(&mut self, placement: &Placement) -> bool {
        let Some(mut item) = self.take(&placement.item_id) else {
            return false;
        };
        item.relocate(&placement.container, placement.key.clone());
        let siblings = self
            .containers
            .entry(placement.container.clone())
            .or_default();
        siblings.push(item);
        siblings.sort_by(sibling_order);
        true
    }

    fn take(&mut self, id: &str) -> Option<T> {
        let (container, index) = self.containers.iter().find_map(|(container, siblings)| {
            siblings
                .iter()
                .position(|item| item.id() == id)
                .map(|index| (container.clone(), index))
        })?;
        let siblings = self.containers.get_mut(&container)?;
        let item = siblings.remove(index);
        if siblings.is_empty() {
            self.containers.remove(&container);
        }
        Some(item)
    }
}
