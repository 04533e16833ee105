//! Persistence for expanded events.
//!
//! `BulkCreateRequest` and `EventsResponse` are the request and response
//! bodies of the event store API (`POST /api/events-list`,
//! `GET /api/events`). `JsonFileStore` keeps the same document on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RepeatError, RepeatResult};
use crate::event::Event;

/// Body of a bulk-create request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateRequest {
    pub events: Vec<Event>,
}

/// Body of an event list response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

/// Somewhere events can be saved.
pub trait EventStore {
    /// All stored events, in insertion order.
    fn list(&self) -> RepeatResult<Vec<Event>>;

    /// Store `request.events` in order and return what was stored.
    fn bulk_create(&mut self, request: BulkCreateRequest) -> RepeatResult<Vec<Event>>;

    /// Remove every event of a series. Returns how many were removed.
    fn delete_series(&mut self, series_id: &str) -> RepeatResult<usize>;
}

/// Event store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> RepeatResult<EventsResponse> {
        if !self.path.exists() {
            return Ok(EventsResponse::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(EventsResponse::default());
        }

        serde_json::from_str(&content).map_err(|e| {
            RepeatError::Store(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, doc: &EventsResponse) -> RepeatResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(doc)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl EventStore for JsonFileStore {
    fn list(&self) -> RepeatResult<Vec<Event>> {
        Ok(self.load()?.events)
    }

    fn bulk_create(&mut self, request: BulkCreateRequest) -> RepeatResult<Vec<Event>> {
        let mut doc = self.load()?;

        if let Some(dup) = request
            .events
            .iter()
            .find(|new| doc.events.iter().any(|old| old.id == new.id))
        {
            return Err(RepeatError::Store(format!("Event '{}' already exists", dup.id)));
        }

        doc.events.extend(request.events.iter().cloned());
        self.save(&doc)?;
        debug!(count = request.events.len(), path = %self.path.display(), "stored events");

        Ok(request.events)
    }

    fn delete_series(&mut self, series_id: &str) -> RepeatResult<usize> {
        let mut doc = self.load()?;
        let before = doc.events.len();
        doc.events.retain(|e| e.series_id() != Some(series_id));
        let removed = before - doc.events.len();

        if removed > 0 {
            self.save(&doc)?;
        }
        debug!(removed, series_id, "deleted series");

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventForm, RepeatInfo, RepeatType};
    use crate::id::SequentialIdGenerator;
    use crate::recurrence::Expander;
    use chrono::{NaiveDate, NaiveTime};

    fn make_form(title: &str) -> EventForm {
        EventForm {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            description: "Daily workout".to_string(),
            location: "Gym".to_string(),
            category: "personal".to_string(),
            repeat: RepeatInfo::new(RepeatType::Daily, 1, NaiveDate::from_ymd_opt(2025, 10, 3)),
            notification_time: 10,
        }
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("events.json"));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_bulk_create_then_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested/events.json"));
        let expander = Expander::with_ids(SequentialIdGenerator::new());

        let events = expander.expand(&make_form("Workout"));
        let created = store.bulk_create(BulkCreateRequest { events: events.clone() }).unwrap();
        assert_eq!(created, events);

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[2].date, NaiveDate::from_ymd_opt(2025, 10, 3).unwrap());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("events.json"));
        let events = Expander::with_ids(SequentialIdGenerator::new()).expand(&make_form("Workout"));

        store.bulk_create(BulkCreateRequest { events: events.clone() }).unwrap();
        let err = store.bulk_create(BulkCreateRequest { events }).unwrap_err();
        assert!(matches!(err, RepeatError::Store(_)));
        assert_eq!(store.list().unwrap().len(), 3);
    }

    #[test]
    fn test_delete_series_keeps_other_series() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("events.json"));
        let expander = Expander::with_ids(SequentialIdGenerator::new());

        let workout = expander.expand(&make_form("Workout"));
        let reading = expander.expand(&make_form("Reading"));
        let series_id = workout[0].repeat.id.clone().unwrap();
        store.bulk_create(BulkCreateRequest { events: workout }).unwrap();
        store.bulk_create(BulkCreateRequest { events: reading }).unwrap();

        assert_eq!(store.delete_series(&series_id).unwrap(), 3);
        assert_eq!(store.delete_series(&series_id).unwrap(), 0);

        let left = store.list().unwrap();
        assert_eq!(left.len(), 3);
        assert!(left.iter().all(|e| e.title == "Reading"));
    }

    #[test]
    fn test_request_body_shape() {
        let events = Expander::with_ids(SequentialIdGenerator::new()).expand(&make_form("Workout"));
        let body = serde_json::to_value(BulkCreateRequest { events }).unwrap();

        assert_eq!(body["events"].as_array().map(Vec::len), Some(3));
        assert_eq!(body["events"][0]["repeat"]["type"], "daily");
        assert_eq!(body["events"][0]["startTime"], "07:00");
    }
}
