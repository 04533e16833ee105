use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::debug;
use repeatcal_core::preview::RepeatPreview;
use repeatcal_core::store::{BulkCreateRequest, EventStore, JsonFileStore};
use repeatcal_core::{EventForm, Expander};

use crate::render::pluralize;

pub fn run(expander: &Expander, form: &EventForm, store_path: PathBuf) -> Result<()> {
    let preview = RepeatPreview::new(expander, form);

    if !preview.is_valid_repeat {
        anyhow::bail!(
            "Nothing to save: {}\n\
            Check the repeat type, interval (must be at least 1) and end date.",
            preview.summary()
        );
    }

    let mut store = JsonFileStore::new(store_path);
    let created = store
        .bulk_create(BulkCreateRequest {
            events: preview.repeated_events,
        })
        .with_context(|| format!("Failed to save events to {}", store.path().display()))?;
    debug!(count = created.len(), path = %store.path().display(), "saved recurring events");

    println!(
        "Saved {} {} to {}",
        created.len(),
        pluralize("event", created.len()),
        store.path().display()
    );
    if let Some(series_id) = created.first().and_then(|e| e.series_id()) {
        println!("Series: {}", series_id.green());
    }

    Ok(())
}
