//! Core types for repeatcal.
//!
//! This crate provides everything the CLI needs to turn one recurring event
//! form into concrete events:
//! - `event` for the event form and event instance types
//! - `recurrence` for the expansion engine (date stepping, validity, expander)
//! - `id` for event and series identifier generation
//! - `preview` and `store` for the UI-facing and persistence-facing adapters

pub mod config;
pub mod error;
pub mod event;
pub mod id;
pub mod preview;
pub mod recurrence;
pub mod store;

pub use error::{RepeatError, RepeatResult};
pub use event::{Event, EventForm, RepeatInfo, RepeatType};
pub use recurrence::{generate_repeated_events, Expander, DEFAULT_HORIZON, MAX_EVENTS};
