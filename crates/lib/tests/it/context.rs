//! Test context for building boards.
//!
//! Provides a composable `BoardContext` that explicitly shows which lists and
//! cards each test starts from, backed by an `InMemory` store with a fixed
//! clock so creation times are deterministic.

use std::sync::Arc;

use boardrank::{
    Clock, Config, FixedClock, Item, ItemKind, Mover,
    reorder::{self, SiblingSnapshot},
    store::{InMemory, RankStore},
};

/// Test context holding a mover over an in-memory store.
///
/// Use the builder methods to set up what the test needs:
/// - `BoardContext::new()` - empty board
/// - `.with_lists(&[..])` - lists created in order on the board
/// - `.with_cards(list, &[..])` - cards created in order in a list
/// - `.with_config(config)` - mover configuration
pub struct BoardContext {
    board: String,
    clock: Arc<FixedClock>,
    mover: Mover<InMemory>,
}

impl BoardContext {
    pub const BOARD: &'static str = "board-1";

    /// Create a context with an empty board.
    pub fn new() -> Self {
        let clock = Arc::new(FixedClock::default());
        Self {
            board: Self::BOARD.to_string(),
            mover: Mover::new(InMemory::with_clock(clock.clone())),
            clock,
        }
    }

    /// Replace the mover configuration, keeping existing items.
    pub fn with_config(self, config: Config) -> Self {
        Self {
            board: self.board,
            clock: self.clock,
            mover: Mover::with_config(self.mover.into_store(), config),
        }
    }

    /// Create lists at the bottom of the board, titled and identified by name.
    pub fn with_lists(self, names: &[&str]) -> Self {
        for name in names {
            self.create(ItemKind::List, &self.board, name);
        }
        self
    }

    /// Create cards at the bottom of `list`, titled and identified by name.
    pub fn with_cards(self, list: &str, names: &[&str]) -> Self {
        for name in names {
            self.create(ItemKind::Card, list, name);
        }
        self
    }

    fn create(&self, kind: ItemKind, container: &str, name: &str) {
        let siblings = SiblingSnapshot::capture(
            self.store()
                .siblings(container)
                .expect("Failed to read siblings"),
        );
        let siblings = siblings.siblings(container);
        let pos = reorder::place_new(container, siblings, siblings.len())
            .expect("Failed to place item");
        let item = Item::new(kind, container, name, pos, self.clock.now()).with_id(name);
        self.store().insert(item).expect("Failed to insert item");
    }

    pub fn board(&self) -> &str {
        &self.board
    }

    pub fn clock(&self) -> &FixedClock {
        &self.clock
    }

    pub fn mover(&self) -> &Mover<InMemory> {
        &self.mover
    }

    pub fn store(&self) -> &InMemory {
        self.mover.store()
    }
}
