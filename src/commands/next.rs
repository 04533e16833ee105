use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use repeatcal_core::recurrence::{is_valid_repeat_date, next_repeat_date};
use repeatcal_core::RepeatType;

pub fn run(date: NaiveDate, repeat: RepeatType, interval: i32, anchor: Option<NaiveDate>) -> Result<()> {
    let (next, valid) = step(date, repeat, interval, anchor)?;

    let verdict = if valid {
        "occurrence".green().to_string()
    } else {
        "skipped".yellow().to_string()
    };

    println!("{} ({})", next.format("%Y-%m-%d"), verdict);
    Ok(())
}

/// Next candidate date and whether it counts as an occurrence.
fn step(
    date: NaiveDate,
    repeat: RepeatType,
    interval: i32,
    anchor: Option<NaiveDate>,
) -> Result<(NaiveDate, bool)> {
    let anchor = anchor.unwrap_or(date);

    let Some(next) = next_repeat_date(date, repeat, interval, Some(anchor)) else {
        anyhow::bail!("Next {} date after {} is out of range", repeat, date);
    };

    Ok((next, is_valid_repeat_date(next, repeat, anchor)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn out_of_range_is_an_error() {
        let err = step(NaiveDate::MAX, RepeatType::Daily, 1, None).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(run(NaiveDate::MAX, RepeatType::Daily, 1, None).is_err());
    }

    #[test]
    fn anchor_defaults_to_date() {
        assert_eq!(step(date(2024, 1, 31), RepeatType::Monthly, 1, None).unwrap(), (date(2024, 3, 31), true));
    }

    #[test]
    fn rolled_leap_day_is_skipped() {
        let (next, valid) = step(date(2024, 2, 29), RepeatType::Yearly, 1, None).unwrap();
        assert_eq!(next, date(2025, 3, 1));
        assert!(!valid);
    }
}
