//! Rebalance command - respaces the keys of one container.

use boardrank::{
    rebalance,
    reorder::SiblingSnapshot,
    store::RankStore,
};

use crate::board;
use crate::cli::RebalanceArgs;
use crate::output::{OutputFormat, print_updates};

/// Run the rebalance command
pub fn run(args: &RebalanceArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let store = board::load(&args.board.board)?;
    let snapshot = SiblingSnapshot::capture(store.siblings(&args.container)?);
    let siblings = snapshot.siblings(&args.container);
    if siblings.is_empty() {
        return Err(format!("Container {} has no items", args.container).into());
    }

    let updates = rebalance::respace(siblings);
    for update in &updates {
        store.set_pos(update)?;
    }

    print_updates(&updates, format)?;
    if args.board.write && !updates.is_empty() {
        board::save(&args.board.board, &store)?;
    }
    Ok(())
}
