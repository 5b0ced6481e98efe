//! Rebalance integration tests

use boardrank::{
    rank::insert,
    rebalance::{respace, spread},
    reorder::SiblingSnapshot,
    store::{InMemory, RankStore},
};

use crate::helpers::{assert_strictly_ordered, card, stored_order};

#[test]
fn test_spread_is_strictly_increasing() {
    for count in [1, 2, 10, 74, 75, 500, 5000] {
        let keys = spread(count);
        assert_eq!(keys.len(), count);
        assert!(keys.windows(2).all(|pair| pair[0] < pair[1]), "count {count}");
    }
}

#[test]
fn test_spread_keys_have_uniform_short_width() {
    let keys = spread(5000);
    assert!(keys.iter().all(|k| k.len() <= 3));
}

#[test]
fn test_spread_leaves_room_at_both_ends() {
    let keys = spread(200);
    assert!(insert(None, keys.first()).unwrap().is_placed());
    assert!(insert(keys.last(), None).unwrap().is_placed());
}

#[test]
fn test_respace_preserves_order_and_shortens_keys() {
    let store = InMemory::from_items([
        card("l1", "a", "a"),
        card("l1", "b", "aUUUUUUUUUUUUUUUUUUUUU"),
        card("l1", "c", "aUUUUUUUUUUUUUUUUUUUUV"),
        card("l1", "d", "b"),
    ])
    .unwrap();
    let before = stored_order(&store, "l1");

    let snapshot = SiblingSnapshot::capture(store.siblings("l1").unwrap());
    for update in respace(snapshot.siblings("l1")) {
        store.set_pos(&update).unwrap();
    }

    assert_eq!(stored_order(&store, "l1"), before);
    assert_strictly_ordered(&store, "l1");
    assert!(store.items().unwrap().iter().all(|item| item.pos.len() == 1));
}

#[test]
fn test_respace_breaks_ties_in_sibling_order() {
    let store = InMemory::from_items([
        card("l1", "x", "m"),
        card("l1", "y", "m"),
        card("l1", "z", "m"),
    ])
    .unwrap();
    let before = stored_order(&store, "l1");

    let snapshot = SiblingSnapshot::capture(store.siblings("l1").unwrap());
    let updates = respace(snapshot.siblings("l1"));
    for update in &updates {
        store.set_pos(update).unwrap();
    }

    assert_eq!(stored_order(&store, "l1"), before);
    assert_strictly_ordered(&store, "l1");
}
