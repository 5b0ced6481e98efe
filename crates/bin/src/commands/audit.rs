//! Audit command - reports containers due for a rebalance.

use boardrank::{Config, audit};

use crate::board;
use crate::cli::AuditArgs;
use crate::output::{OutputFormat, print_table};

/// Run the audit command
pub fn run(args: &AuditArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let store = board::load(&args.board)?;
    let config = Config {
        max_key_len: args.max_key_len,
        ..Config::default()
    };
    let report = audit::check(store.items()?, &config);

    match format {
        OutputFormat::Human => {
            if report.containers.is_empty() {
                println!("Board is empty.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = report
                .containers
                .iter()
                .map(|c| {
                    vec![
                        c.container.clone(),
                        c.items.to_string(),
                        c.ties.to_string(),
                        c.longest_key.to_string(),
                        if c.needs_rebalance { "yes" } else { "" }.to_string(),
                    ]
                })
                .collect();
            print_table(&["CONTAINER", "ITEMS", "TIES", "LONGEST", "REBALANCE"], &rows);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&report)?);
        }
    }

    if !report.is_healthy() {
        std::process::exit(2);
    }
    Ok(())
}
