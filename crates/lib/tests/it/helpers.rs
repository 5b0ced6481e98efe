use boardrank::{
    Item, ItemKind, RankKey,
    item::Orderable,
    reorder::{DropEvent, Location, SiblingSnapshot},
    store::{InMemory, RankStore},
};
use chrono::{TimeZone, Utc};

/// Parses a key that the test knows to be valid.
pub fn key(s: &str) -> RankKey {
    RankKey::parse(s).unwrap_or_else(|e| panic!("invalid test key {s:?}: {e}"))
}

/// Builds an item with a fixed id and creation time.
pub fn item(kind: ItemKind, container: &str, id: &str, pos: &str) -> Item {
    Item::new(
        kind,
        container,
        id,
        key(pos),
        Utc.timestamp_millis_opt(1704067200000).unwrap(),
    )
    .with_id(id)
}

pub fn card(list: &str, id: &str, pos: &str) -> Item {
    item(ItemKind::Card, list, id, pos)
}

pub fn list(board: &str, id: &str, pos: &str) -> Item {
    item(ItemKind::List, board, id, pos)
}

/// Shorthand for a drop event.
pub fn drop_event(id: &str, from: (&str, usize), to: (&str, usize)) -> DropEvent {
    DropEvent::new(id, Location::new(from.0, from.1), Location::new(to.0, to.1))
}

/// Ids of `container`'s items in sibling order, as stored.
pub fn stored_order(store: &InMemory, container: &str) -> Vec<String> {
    SiblingSnapshot::capture(store.siblings(container).expect("Failed to read siblings"))
        .siblings(container)
        .iter()
        .map(|item| item.id().to_string())
        .collect()
}

/// Asserts keys are strictly increasing in sibling order.
pub fn assert_strictly_ordered(store: &InMemory, container: &str) {
    let snapshot = SiblingSnapshot::capture(store.siblings(container).unwrap());
    for pair in snapshot.siblings(container).windows(2) {
        assert!(
            pair[0].pos < pair[1].pos,
            "keys out of order in {container}: {} !< {}",
            pair[0].pos,
            pair[1].pos
        );
    }
}
