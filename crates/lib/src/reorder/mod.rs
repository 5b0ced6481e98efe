//! Drag-and-drop move resolution.
//!
//! A drop reported by the UI is classified once into a [`Move`]. The resolver
//! then looks up the two existing siblings that will surround the item at its
//! destination and asks the rank codec for a key between them. Only the
//! moved item's key changes; its siblings keep theirs.
//!
//! # Example
//!
//! ```
//! use boardrank::item::{Item, ItemKind};
//! use boardrank::rank::RankKey;
//! use boardrank::reorder::{DropEvent, Location, Resolution, SiblingSnapshot, resolve_move};
//! use chrono::Utc;
//!
//! let list = |id: &str, pos: &str| {
//!     Item::new(ItemKind::List, "board", id, RankKey::parse(pos).unwrap(), Utc::now()).with_id(id)
//! };
//! let snapshot = SiblingSnapshot::capture([list("todo", "a"), list("done", "c"), list("doing", "m")]);
//!
//! // Drag "doing" from the bottom to between "todo" and "done".
//! let drop = DropEvent::new("doing", Location::new("board", 2), Location::new("board", 1));
//! let Resolution::Placed(placement) = resolve_move(&snapshot, &drop)? else {
//!     unreachable!()
//! };
//! assert_eq!(placement.key, "b");
//! # Ok::<(), boardrank::reorder::ReorderError>(())
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::item::Orderable;
use crate::rank::{self, Insertion, RankKey};

pub mod errors;
pub mod snapshot;

pub use errors::ReorderError;
pub use snapshot::SiblingSnapshot;

/// A slot in a container: the container id and a zero-based index into its
/// sorted siblings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub container: String,
    pub index: usize,
}

impl Location {
    pub fn new(container: impl Into<String>, index: usize) -> Self {
        Self {
            container: container.into(),
            index,
        }
    }
}

/// The outcome of a drag gesture as reported by the capture layer.
///
/// Indices refer to the sorted sibling view the user was looking at.
/// `destination.index` is the slot the item ends up in once the drop is
/// complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    pub dragged_id: String,
    pub source: Location,
    pub destination: Location,
}

impl DropEvent {
    pub fn new(dragged_id: impl Into<String>, source: Location, destination: Location) -> Self {
        Self {
            dragged_id: dragged_id.into(),
            source,
            destination,
        }
    }
}

/// A drop classified into the shape of move it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    /// Dropped back onto its own slot.
    NoOp,
    /// Moved within its container.
    Reorder {
        item_id: String,
        container: String,
        from: usize,
        to: usize,
    },
    /// Moved into a different container.
    Transfer {
        item_id: String,
        from: Location,
        to: Location,
    },
}

impl Move {
    /// Decides which kind of move a drop is.
    pub fn classify(drop: &DropEvent) -> Self {
        if drop.source.container == drop.destination.container {
            if drop.source.index == drop.destination.index {
                Move::NoOp
            } else {
                Move::Reorder {
                    item_id: drop.dragged_id.clone(),
                    container: drop.source.container.clone(),
                    from: drop.source.index,
                    to: drop.destination.index,
                }
            }
        } else {
            Move::Transfer {
                item_id: drop.dragged_id.clone(),
                from: drop.source.clone(),
                to: drop.destination.clone(),
            }
        }
    }
}

impl From<&DropEvent> for Move {
    fn from(drop: &DropEvent) -> Self {
        Move::classify(drop)
    }
}

/// Where a moved item lands and the key it must be stored with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub item_id: String,
    pub container: String,
    pub index: usize,
    pub key: RankKey,
}

/// Result of resolving a drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing moved; no key changes.
    Unchanged,
    /// The item needs the given key.
    Placed(Placement),
}

impl Resolution {
    /// The placement, if the item moved.
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            Resolution::Unchanged => None,
            Resolution::Placed(placement) => Some(placement),
        }
    }
}

/// Resolves a drop against a freshly captured snapshot.
///
/// # Errors
/// - [`ReorderError::ItemNotFound`] if the dragged item is not in the source container.
/// - [`ReorderError::StaleSnapshot`] if the source index points at another item.
/// - [`ReorderError::IndexOutOfBounds`] for an index outside the container.
/// - [`ReorderError::Exhausted`] if no key fits between the neighbors.
pub fn resolve_move<T: Orderable>(
    snapshot: &SiblingSnapshot<T>,
    drop: &DropEvent,
) -> Result<Resolution, ReorderError> {
    let placement = match Move::classify(drop) {
        Move::NoOp => return Ok(Resolution::Unchanged),
        Move::Reorder {
            item_id,
            container,
            from,
            to,
        } => {
            check_source(snapshot, &item_id, &container, from)?;
            let siblings = snapshot.siblings(&container);
            if to >= siblings.len() {
                return Err(ReorderError::IndexOutOfBounds {
                    container,
                    index: to,
                    len: siblings.len(),
                });
            }
            // Neighbors at `to` once the item has left its old slot
            let remaining: Vec<&RankKey> = siblings
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != from)
                .map(|(_, item)| item.pos())
                .collect();
            let lower = to.checked_sub(1).map(|index| remaining[index]);
            let upper = remaining.get(to).copied();
            let key = key_between(&container, lower, upper)?;
            Placement {
                item_id,
                container,
                index: to,
                key,
            }
        }
        Move::Transfer { item_id, from, to } => {
            check_source(snapshot, &item_id, &from.container, from.index)?;
            let key = place_new(&to.container, snapshot.siblings(&to.container), to.index)?;
            Placement {
                item_id,
                container: to.container,
                index: to.index,
                key,
            }
        }
    };

    debug!(
        item = %placement.item_id,
        container = %placement.container,
        index = placement.index,
        key = %placement.key,
        "Resolved move"
    );
    Ok(Resolution::Placed(placement))
}

/// Computes the key for an item entering `container` at `index`.
///
/// `siblings` must be the container's sorted items, not including the item
/// being placed. An empty container gets [`crate::constants::EMPTY_CONTAINER_KEY`]
/// without consulting the codec. Otherwise the item is bounded by the sibling
/// above it (if any) and the sibling below it (if any).
pub fn place_new<T: Orderable>(
    container: &str,
    siblings: &[T],
    index: usize,
) -> Result<RankKey, ReorderError> {
    if index > siblings.len() {
        return Err(ReorderError::IndexOutOfBounds {
            container: container.to_string(),
            index,
            len: siblings.len() + 1,
        });
    }
    if siblings.is_empty() {
        return Ok(rank::empty_container_key());
    }

    let lower = index.checked_sub(1).map(|i| siblings[i].pos());
    let upper = siblings.get(index).map(Orderable::pos);
    key_between(container, lower, upper)
}

fn key_between(
    container: &str,
    lower: Option<&RankKey>,
    upper: Option<&RankKey>,
) -> Result<RankKey, ReorderError> {
    let exhausted = || ReorderError::Exhausted {
        container: container.to_string(),
        lower: lower.cloned(),
        upper: upper.cloned(),
    };

    // Tied neighbors leave no room at all
    if let (Some(lower), Some(upper)) = (lower, upper) {
        if lower >= upper {
            return Err(exhausted());
        }
    }

    match rank::insert(lower, upper)? {
        Insertion::Placed(key) => Ok(key),
        Insertion::Exhausted { .. } => Err(exhausted()),
    }
}

fn check_source<T: Orderable>(
    snapshot: &SiblingSnapshot<T>,
    item_id: &str,
    container: &str,
    index: usize,
) -> Result<(), ReorderError> {
    let siblings = snapshot.siblings(container);
    if snapshot.position(container, item_id).is_none() {
        return Err(ReorderError::ItemNotFound {
            id: item_id.to_string(),
        });
    }
    match siblings.get(index) {
        None => Err(ReorderError::IndexOutOfBounds {
            container: container.to_string(),
            index,
            len: siblings.len(),
        }),
        Some(item) if item.id() != item_id => Err(ReorderError::StaleSnapshot {
            container: container.to_string(),
            index,
            expected: item_id.to_string(),
            found: item.id().to_string(),
        }),
        Some(_) => Ok(()),
    }
}
