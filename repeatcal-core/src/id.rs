//! Event and series identifier generation.
//!
//! The expander takes an `IdGenerator` so callers decide where uniqueness
//! comes from: random UUIDs in normal use, a counter when ids must be
//! predictable.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use uuid::Uuid;

/// Source of event ids and series ids.
pub trait IdGenerator: Send + Sync {
    /// Id for one event on `date`.
    fn event_id(&self, title: &str, date: NaiveDate) -> String;

    /// Id shared by all events of one recurring series.
    fn series_id(&self, title: &str) -> String;
}

/// Random ids backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn event_id(&self, title: &str, date: NaiveDate) -> String {
        format!("{}-{}-{}", title, date.format("%Y-%m-%d"), Uuid::new_v4().simple())
    }

    fn series_id(&self, title: &str) -> String {
        format!("repeat-{}-{}", title, Uuid::new_v4().simple())
    }
}

/// Deterministic ids from a monotonic counter.
///
/// Event ids and series ids draw from the same counter, so no two ids
/// handed out by one generator share a suffix.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting at `first` instead of zero.
    pub fn starting_at(first: u64) -> Self {
        SequentialIdGenerator {
            next: AtomicU64::new(first),
        }
    }

    fn bump(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn event_id(&self, title: &str, date: NaiveDate) -> String {
        format!("{}-{}-{:09}", title, date.format("%Y-%m-%d"), self.bump())
    }

    fn series_id(&self, title: &str) -> String {
        format!("repeat-{}-{:09}", title, self.bump())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_uuid_event_ids_are_unique() {
        let ids = UuidIdGenerator;
        let id1 = ids.event_id("Standup", day());
        let id2 = ids.event_id("Standup", day());

        assert!(id1.starts_with("Standup-2024-01-01-"));
        assert!(id2.starts_with("Standup-2024-01-01-"));
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_uuid_series_ids_are_unique() {
        let ids = UuidIdGenerator;
        let id1 = ids.series_id("Standup");
        let id2 = ids.series_id("Standup");

        assert!(id1.starts_with("repeat-Standup-"));
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_sequential_ids_are_predictable() {
        let ids = SequentialIdGenerator::new();
        assert_eq!(ids.series_id("Gym"), "repeat-Gym-000000000");
        assert_eq!(ids.event_id("Gym", day()), "Gym-2024-01-01-000000001");
        assert_eq!(ids.event_id("Gym", day()), "Gym-2024-01-01-000000002");
    }

    #[test]
    fn test_sequential_ids_never_collide() {
        let ids = SequentialIdGenerator::starting_at(41);
        let seen: HashSet<String> = (0..500).map(|_| ids.event_id("x", day())).collect();
        assert_eq!(seen.len(), 500);
        assert_eq!(ids.series_id("x"), "repeat-x-000000541");
    }
}
