//! Recurring event expansion.
//!
//! Turns one `EventForm` with a repeat rule into the list of dated events it
//! stands for. Everything here is pure: no I/O, no state kept between calls.
//!
//! - `settings`: is the repeat configuration usable at all
//! - `advance`: step from one candidate date to the next
//! - `validity`: does a candidate date count as an occurrence
//! - `expand`: walk from the anchor date to the end date

mod advance;
mod expand;
mod settings;
mod validity;

use chrono::NaiveDate;

pub use advance::next_repeat_date;
pub use expand::{generate_repeated_events, Expander};
pub use settings::validate_repeat_settings;
pub use validity::is_valid_repeat_date;

/// End date used for rules without one.
pub const DEFAULT_HORIZON: NaiveDate = match NaiveDate::from_ymd_opt(2025, 10, 30) {
    Some(date) => date,
    None => panic!("invalid default horizon"),
};

/// Upper bound on loop iterations (and therefore on events) per expansion.
pub const MAX_EVENTS: usize = 1000;
