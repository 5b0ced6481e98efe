//! Move command - applies one drop to a board file.

use boardrank::{
    Config, Mover,
    reorder::{DropEvent, Location, SiblingSnapshot},
    store::{InMemory, RankStore},
};

use crate::board;
use crate::cli::MoveArgs;
use crate::output::{OutputFormat, print_updates};

/// Run the move command
pub fn run(args: &MoveArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let store = board::load(&args.board.board)?;
    let drop = drop_for(&store, args)?;

    let config = Config {
        rebalance_on_exhaustion: !args.no_rebalance,
        ..Config::default()
    };
    let mover = Mover::with_config(store, config);
    let updates = mover.apply(&drop)?;

    print_updates(&updates, format)?;
    if args.board.write && !updates.is_empty() {
        board::save(&args.board.board, mover.store())?;
    }
    Ok(())
}

/// Builds the drop from the item's current slot, as a board UI would report it.
fn drop_for(store: &InMemory, args: &MoveArgs) -> Result<DropEvent, Box<dyn std::error::Error>> {
    let item = store.get(&args.item)?;
    let snapshot = SiblingSnapshot::capture(store.siblings(&item.container)?);
    let index = snapshot
        .position(&item.container, &item.id)
        .ok_or_else(|| format!("Item {} missing from its container", item.id))?;

    let destination = args.to.clone().unwrap_or_else(|| item.container.clone());
    Ok(DropEvent::new(
        item.id,
        Location::new(item.container, index),
        Location::new(destination, args.index),
    ))
}
