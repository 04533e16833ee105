use anyhow::Result;
use owo_colors::OwoColorize;
use repeatcal_core::{Event, EventForm, Expander};

use crate::render::{pluralize, Render};

pub fn run(expander: &Expander, form: &EventForm, json: bool) -> Result<()> {
    let events = expander.expand(form);

    if json {
        println!("{}", to_json(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", "No events".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("{}", event.render());
    }

    if let Some(series_id) = events[0].series_id() {
        println!();
        println!(
            "{} {} in series {}",
            events.len(),
            pluralize("event", events.len()),
            series_id.dimmed()
        );
    }

    Ok(())
}

/// Events as a pretty-printed JSON array (`[]` when there are none).
fn to_json(events: &[Event]) -> Result<String> {
    Ok(serde_json::to_string_pretty(events)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use repeatcal_core::id::SequentialIdGenerator;
    use repeatcal_core::{RepeatInfo, RepeatType};

    fn make_form(repeat: RepeatInfo) -> EventForm {
        EventForm {
            title: "Review".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            description: String::new(),
            location: String::new(),
            category: "work".to_string(),
            repeat,
            notification_time: 0,
        }
    }

    #[test]
    fn json_for_no_events_is_empty_array() {
        let form = make_form(RepeatInfo::none());
        let events = Expander::new().expand(&form);

        assert_eq!(to_json(&events).unwrap(), "[]");
        assert!(run(&Expander::new(), &form, true).is_ok());
    }

    #[test]
    fn json_lists_expanded_dates() {
        let form = make_form(RepeatInfo::new(RepeatType::Monthly, 1, NaiveDate::from_ymd_opt(2024, 4, 30)));
        let events = Expander::with_ids(SequentialIdGenerator::new()).expand(&form);
        let value: serde_json::Value = serde_json::from_str(&to_json(&events).unwrap()).unwrap();

        let dates: Vec<_> = value.as_array().unwrap().iter().map(|e| e["date"].clone()).collect();
        assert_eq!(dates, vec!["2024-01-31", "2024-03-31"]);
    }
}
