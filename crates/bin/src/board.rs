//! Loading and saving board files.
//!
//! A board file is a JSON array of items. Lists and cards may appear in any
//! order; sibling order comes from the keys alone.

use std::path::Path;

use boardrank::{Item, store::InMemory};

/// Load a board file into an in-memory store.
pub fn load(path: &Path) -> Result<InMemory, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read board file {}: {e}", path.display()))?;
    let items: Vec<Item> = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse board file {}: {e}", path.display()))?;
    tracing::debug!(path = %path.display(), items = items.len(), "Loaded board");
    Ok(InMemory::from_items(items)?)
}

/// Write every item in `store` back to `path`, grouped by container in sibling order.
pub fn save(path: &Path, store: &InMemory) -> Result<(), Box<dyn std::error::Error>> {
    let items = store.items()?;
    let json = serde_json::to_string_pretty(&items)?;
    std::fs::write(path, json + "\n")?;
    tracing::info!(path = %path.display(), items = items.len(), "Saved board");
    Ok(())
}
