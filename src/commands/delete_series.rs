use std::path::PathBuf;

use anyhow::{Context, Result};
use repeatcal_core::store::{EventStore, JsonFileStore};

use crate::render::pluralize;

pub fn run(series_id: &str, store_path: PathBuf) -> Result<()> {
    let mut store = JsonFileStore::new(store_path);
    let removed = store
        .delete_series(series_id)
        .with_context(|| format!("Failed to update {}", store.path().display()))?;

    if removed == 0 {
        anyhow::bail!("No events found in series '{}'", series_id);
    }

    println!("Deleted {} {}", removed, pluralize("event", removed));
    Ok(())
}
