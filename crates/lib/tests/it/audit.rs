//! Audit integration tests

use boardrank::{Clock, Config, Item, ItemKind, audit::check};

use crate::context::BoardContext;
use crate::helpers::{card, drop_event, key, stored_order};

#[test]
fn test_fresh_board_is_healthy() {
    let ctx = BoardContext::new()
        .with_lists(&["l1", "l2"])
        .with_cards("l1", &["a", "b", "c"]);
    let report = check(ctx.store().items().unwrap(), &Config::default());

    assert!(report.is_healthy());
    assert_eq!(report.container(ctx.board()).unwrap().items, 2);
    assert_eq!(report.container("l1").unwrap().items, 3);
}

#[test]
fn test_repeated_splits_trip_key_length_limit() {
    let config = Config {
        max_key_len: 4,
        ..Config::default()
    };
    let ctx = BoardContext::new()
        .with_cards("l1", &["a", "b", "c"])
        .with_config(config.clone());

    for _ in 0..30 {
        ctx.mover()
            .apply(&drop_event("c", ("l1", 2), ("l1", 1)))
            .unwrap();
        ctx.mover()
            .apply(&drop_event("b", ("l1", 2), ("l1", 1)))
            .unwrap();
    }

    let report = check(ctx.store().items().unwrap(), &config);
    let l1 = report.container("l1").unwrap();
    assert!(l1.longest_key > 4);
    assert!(l1.needs_rebalance);
}

#[test]
fn test_concurrent_collision_is_reported() {
    // Two editors resolved against the same snapshot and wrote the same key
    let report = check(
        [card("l1", "a", "b"), card("l1", "b", "bU"), card("l1", "c", "bU")],
        &Config::default(),
    );
    assert_eq!(report.total_ties(), 1);
    assert!(!report.is_healthy());
}

#[test]
fn test_same_instant_collision_orders_by_id_and_is_reported() {
    let ctx = BoardContext::new().with_cards("l1", &["top"]);

    // Two editors create a card below "top" in the same millisecond and both
    // compute the same key from the same snapshot
    {
        let _hold = ctx.clock().hold();
        for id in ["second-b", "second-a"] {
            let item = Item::new(ItemKind::Card, "l1", id, key("m"), ctx.clock().now()).with_id(id);
            ctx.store().insert(item).unwrap();
        }
    }

    assert_eq!(stored_order(ctx.store(), "l1"), ["top", "second-a", "second-b"]);
    let report = check(ctx.store().items().unwrap(), &Config::default());
    assert_eq!(report.container("l1").unwrap().ties, 1);
    assert!(report.container("l1").unwrap().needs_rebalance);
}
