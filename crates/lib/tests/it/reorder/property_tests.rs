//! Property-based tests for drag sequences.
//!
//! After every drop, siblings sorted by key must reproduce exactly the order
//! a plain `Vec` model produces for the same drops.

use boardrank::Config;
use proptest::prelude::*;

use crate::context::BoardContext;
use crate::helpers::{drop_event, stored_order};

const LISTS: [&str; 3] = ["l1", "l2", "l3"];

// ── Strategies ──────────────────────────────────────────────────────────

/// Raw drag choices; reduced modulo the live container sizes when applied.
#[derive(Debug, Clone)]
struct Drag {
    from_list: usize,
    from_index: usize,
    to_list: usize,
    to_index: usize,
}

fn drag_strategy() -> impl Strategy<Value = Drag> {
    (0usize..3, 0usize..64, 0usize..3, 0usize..64).prop_map(
        |(from_list, from_index, to_list, to_index)| Drag {
            from_list,
            from_index,
            to_list,
            to_index,
        },
    )
}

fn run(drags: &[Drag], config: Config) -> Result<(), TestCaseError> {
    let ctx = BoardContext::new()
        .with_cards("l1", &["a", "b", "c", "d"])
        .with_cards("l2", &["e", "f"])
        .with_config(config);
    let mut model: Vec<Vec<String>> = LISTS
        .iter()
        .map(|list| stored_order(ctx.store(), list))
        .collect();

    for drag in drags {
        let from_list = drag.from_list;
        if model[from_list].is_empty() {
            continue;
        }
        let from_index = drag.from_index % model[from_list].len();
        let id = model[from_list].remove(from_index);

        let to_list = drag.to_list;
        let to_index = drag.to_index % (model[to_list].len() + 1);
        model[to_list].insert(to_index, id.clone());

        ctx.mover()
            .apply(&drop_event(
                &id,
                (LISTS[from_list], from_index),
                (LISTS[to_list], to_index),
            ))
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for (list, expected) in LISTS.iter().zip(&model) {
            prop_assert_eq!(&stored_order(ctx.store(), list), expected);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn stored_order_matches_drag_model(drags in prop::collection::vec(drag_strategy(), 1..40)) {
        run(&drags, Config::default())?;
    }

    #[test]
    fn repeated_drags_into_one_gap_stay_ordered(count in 1usize..60) {
        // Always drop the bottom card of l1 directly under the top card
        let drags: Vec<Drag> = (0..count)
            .map(|_| Drag { from_list: 0, from_index: 3, to_list: 0, to_index: 1 })
            .collect();
        run(&drags, Config::default())?;
    }
}
