use boardrank::reorder::{Move, ReorderError, Resolution, SiblingSnapshot, resolve_move};

use crate::context::BoardContext;
use crate::helpers::{assert_strictly_ordered, card, drop_event, key, list, stored_order};

#[test]
fn test_list_dragged_between_two_lists() {
    let snapshot = SiblingSnapshot::capture([
        list("board", "todo", "a"),
        list("board", "done", "c"),
        list("board", "doing", "x"),
    ]);

    let drop = drop_event("doing", ("board", 2), ("board", 1));
    let Resolution::Placed(placement) = resolve_move(&snapshot, &drop).unwrap() else {
        panic!("expected a placement");
    };

    assert_eq!(placement.key, "b");
    assert!(key("a") < placement.key && placement.key < key("c"));
}

#[test]
fn test_first_card_moved_to_last_slot() {
    let ctx = BoardContext::new().with_cards("l1", &["one", "two", "three"]);

    let updates = ctx
        .mover()
        .apply(&drop_event("one", ("l1", 0), ("l1", 2)))
        .unwrap();

    assert_eq!(updates.len(), 1);
    let three = ctx.store().items().unwrap();
    let last_remaining = three.iter().find(|item| item.id == "three").unwrap();
    assert!(updates[0].pos > last_remaining.pos);
    assert_eq!(stored_order(ctx.store(), "l1"), ["two", "three", "one"]);
}

#[test]
fn test_card_into_empty_list_then_second_card_below() {
    let ctx = BoardContext::new()
        .with_lists(&["l1", "l2"])
        .with_cards("l1", &["first", "second"]);

    let updates = ctx
        .mover()
        .apply(&drop_event("first", ("l1", 0), ("l2", 0)))
        .unwrap();
    assert_eq!(updates[0].pos, "a");

    // "second" is now alone in l1
    ctx.mover()
        .apply(&drop_event("second", ("l1", 0), ("l2", 1)))
        .unwrap();

    assert_eq!(stored_order(ctx.store(), "l2"), ["first", "second"]);
    assert_strictly_ordered(ctx.store(), "l2");
    assert!(stored_order(ctx.store(), "l1").is_empty());
}

#[test]
fn test_snapshot_order_ignores_input_order() {
    let shuffled = SiblingSnapshot::capture([
        card("l1", "c", "x"),
        card("l1", "a", "b"),
        card("l1", "b", "m"),
    ]);
    let ids: Vec<&str> = shuffled
        .siblings("l1")
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);

    // Index 0 means "a" even though "c" came first in the input
    let drop = drop_event("c", ("l1", 0), ("l1", 2));
    assert!(matches!(
        resolve_move(&shuffled, &drop),
        Err(ReorderError::StaleSnapshot { .. })
    ));
}

#[test]
fn test_moves_are_classified_once() {
    assert_eq!(Move::classify(&drop_event("a", ("l1", 1), ("l1", 1))), Move::NoOp);
    assert!(matches!(
        Move::classify(&drop_event("a", ("l1", 1), ("l1", 0))),
        Move::Reorder { from: 1, to: 0, .. }
    ));
    assert!(matches!(
        Move::classify(&drop_event("a", ("l1", 1), ("l2", 1))),
        Move::Transfer { .. }
    ));
}

#[test]
fn test_optimistic_patch_matches_store() {
    let ctx = BoardContext::new().with_cards("l1", &["a", "b", "c", "d"]);
    let mut cache = SiblingSnapshot::capture(ctx.store().items().unwrap());

    let drop = drop_event("d", ("l1", 3), ("l1", 1));
    let Resolution::Placed(placement) = resolve_move(&cache, &drop).unwrap() else {
        panic!("expected a placement");
    };
    assert!(cache.apply(&placement));
    ctx.mover().apply(&drop).unwrap();

    let cached: Vec<&str> = cache
        .siblings("l1")
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(cached, stored_order(ctx.store(), "l1"));
    assert_eq!(cached, ["a", "d", "b", "c"]);
}
