use chrono::{Datelike, NaiveDate};

use crate::event::RepeatType;

/// Decide whether `date` is a real occurrence for a rule anchored at `anchor`.
///
/// Monthly rules anchored on the 29th, 30th or 31st only accept that exact
/// day of month. Yearly rules anchored on Feb 29 only accept Feb 29.
/// Everything else is accepted.
pub fn is_valid_repeat_date(date: NaiveDate, repeat_type: RepeatType, anchor: NaiveDate) -> bool {
    match repeat_type {
        RepeatType::Monthly if anchor.day() >= 29 => date.day() == anchor.day(),
        RepeatType::Yearly if anchor.month() == 2 && anchor.day() == 29 => {
            date.month() == 2 && date.day() == 29
        }
        _ => true,
    }
}
