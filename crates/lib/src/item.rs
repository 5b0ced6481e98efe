//! Orderable board items.
//!
//! Lists are ordered within a board and cards within a list. Both carry a
//! single [`RankKey`] in their `pos` field; everything else about them
//! (labels, comments, membership) lives outside this crate.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rank::RankKey;

/// The kind of orderable item, which determines its sibling scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A list; siblings share a board.
    List,
    /// A card; siblings share a list.
    Card,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::List => f.write_str("list"),
            ItemKind::Card => f.write_str("card"),
        }
    }
}

/// Anything that can be ranked among siblings.
///
/// Siblings are sorted by `pos`, then by creation time, then by id, so a
/// tied key still yields a stable order.
pub trait Orderable {
    /// Stable identifier of the item.
    fn id(&self) -> &str;

    /// Identifier of the parent container (board or list).
    fn container(&self) -> &str;

    /// Current rank key.
    fn pos(&self) -> &RankKey;

    /// Creation time, used to break ties between equal keys.
    fn created_at(&self) -> DateTime<Utc>;

    /// Replaces the item's container and rank key after a move.
    fn relocate(&mut self, container: &str, pos: RankKey);
}

/// Total sibling order: `pos`, then `created_at`, then `id`.
pub fn sibling_order<T: Orderable>(a: &T, b: &T) -> Ordering {
    a.pos()
        .cmp(b.pos())
        .then_with(|| a.created_at().cmp(&b.created_at()))
        .then_with(|| a.id().cmp(b.id()))
}

/// A list or card record as seen by the ordering engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub kind: ItemKind,
    /// Board id for lists, list id for cards.
    pub container: String,
    #[serde(default)]
    pub title: String,
    pub pos: RankKey,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates an item with a freshly generated id.
    pub fn new(
        kind: ItemKind,
        container: impl Into<String>,
        title: impl Into<String>,
        pos: RankKey,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            container: container.into(),
            title: title.into(),
            pos,
            created_at,
        }
    }

    /// Returns the item with its id replaced.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl Orderable for Item {
    fn id(&self) -> &str {
        &self.id
    }

    fn container(&self) -> &str {
        &self.container
    }

    fn pos(&self) -> &RankKey {
        &self.pos
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn relocate(&mut self, container: &str, pos: RankKey) {
        if self.container != container {
            self.container = container.to_string();
        }
        self.pos = pos;
    }
}
