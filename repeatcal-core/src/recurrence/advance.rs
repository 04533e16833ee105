use chrono::{Datelike, Days, NaiveDate, TimeDelta};

use crate::event::RepeatType;

/// Compute the next candidate date after `current`.
///
/// Monthly steps move the month first (keeping the current day), then pin
/// the day to the anchor's day of month. Either move may overshoot the end
/// of a short month; the overflow rolls into the following month, so a
/// Jan 31 anchor yields Mar 31 rather than a clamped Feb 29. Yearly steps
/// roll Feb 29 into Mar 1 on common years. `is_valid_repeat_date` filters
/// those rolled dates out.
///
/// `RepeatType::None` returns `current` unchanged. Returns `None` only when
/// the result falls outside the supported calendar range.
pub fn next_repeat_date(
    current: NaiveDate,
    repeat_type: RepeatType,
    interval: i32,
    anchor: Option<NaiveDate>,
) -> Option<NaiveDate> {
    let interval = i64::from(interval);

    match repeat_type {
        RepeatType::Daily => add_days(current, interval),
        RepeatType::Weekly => add_days(current, interval * 7),
        RepeatType::Monthly => {
            let day = anchor.map_or(current.day(), |a| a.day());
            let moved = rolled_date(
                i64::from(current.year()),
                i64::from(current.month0()) + interval,
                current.day(),
            )?;
            rolled_date(i64::from(moved.year()), i64::from(moved.month0()), day)
        }
        RepeatType::Yearly => rolled_date(
            i64::from(current.year()) + interval,
            i64::from(current.month0()),
            current.day(),
        ),
        RepeatType::None => Some(current),
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_days(days)?)
}

/// Build a date from a year, a zero-based month that may lie outside 0..12,
/// and a day that may exceed the month length. Excess months carry into the
/// year and excess days carry into the following month(s).
fn rolled_date(year: i64, month0: i64, day: u32) -> Option<NaiveDate> {
    let year = i32::try_from(year + month0.div_euclid(12)).ok()?;
    let month = u32::try_from(month0.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_days(Days::new(u64::from(day.saturating_sub(1))))
}
