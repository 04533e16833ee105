use chrono::NaiveDate;

/// Check a repeat configuration before expanding it.
///
/// A missing interval or end date is fine on its own; defaults apply later.
pub fn validate_repeat_settings(
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    interval: Option<i32>,
) -> bool {
    if interval.is_some_and(|i| i < 1) {
        return false;
    }

    if end_date.is_some_and(|end| end < start_date) {
        return false;
    }

    true
}
