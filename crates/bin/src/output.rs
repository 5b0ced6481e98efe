//! Output formatting helpers for human-readable and JSON output.

use boardrank::store::KeyUpdate;
use clap::ValueEnum;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

/// Print the key updates a command wrote (or would write).
pub fn print_updates(
    updates: &[KeyUpdate],
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            if updates.is_empty() {
                println!("No keys changed.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = updates
                .iter()
                .map(|u| vec![u.item_id.clone(), u.container.clone(), u.pos.to_string()])
                .collect();
            print_table(&["ITEM", "CONTAINER", "POS"], &rows);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(updates)?);
        }
    }
    Ok(())
}
