//! Between command - computes a key for a slot given its neighbors' keys.

use boardrank::rank::{self, Insertion};

use crate::cli::BetweenArgs;
use crate::output::OutputFormat;

/// Run the between command
pub fn run(args: &BetweenArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let insertion = rank::insert(args.prev.as_ref(), args.next.as_ref())?;
    let key = match insertion {
        Insertion::Placed(key) => key,
        Insertion::Exhausted { .. } => {
            return Err(format!(
                "No key fits between {} and {}; rebalance the container",
                display(args.prev.as_ref()),
                display(args.next.as_ref()),
            )
            .into());
        }
    };

    match format {
        OutputFormat::Human => println!("{key}"),
        OutputFormat::Json => {
            let value = serde_json::json!({
                "prev": args.prev,
                "next": args.next,
                "key": key,
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }
    Ok(())
}

fn display(key: Option<&boardrank::RankKey>) -> String {
    key.map_or_else(|| "(open)".to_string(), |k| format!("{k:?}"))
}
