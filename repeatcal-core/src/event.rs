//! Event form and event instance types.
//!
//! `EventForm` is what the user fills in (one logical event, possibly
//! recurring). `Event` is one concrete, dated occurrence ready to be stored.
//! Both serialize with the camelCase keys the event store expects.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::RepeatError;

/// How an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RepeatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatType::None => "none",
            RepeatType::Daily => "daily",
            RepeatType::Weekly => "weekly",
            RepeatType::Monthly => "monthly",
            RepeatType::Yearly => "yearly",
        }
    }
}

impl fmt::Display for RepeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatType {
    type Err = RepeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(RepeatType::None),
            "daily" => Ok(RepeatType::Daily),
            "weekly" => Ok(RepeatType::Weekly),
            "monthly" => Ok(RepeatType::Monthly),
            "yearly" => Ok(RepeatType::Yearly),
            _ => Err(RepeatError::UnknownRepeatType(s.to_string())),
        }
    }
}

/// Recurrence settings attached to a form or an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatInfo {
    #[serde(rename = "type")]
    pub repeat_type: RepeatType,
    /// Step size in units of `repeat_type`. Values below 1 are rejected by
    /// the settings validator, not by deserialization.
    pub interval: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Series id shared by every event of one expansion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RepeatInfo {
    pub fn none() -> Self {
        RepeatInfo {
            repeat_type: RepeatType::None,
            interval: 0,
            end_date: None,
            id: None,
        }
    }

    pub fn new(repeat_type: RepeatType, interval: i32, end_date: Option<NaiveDate>) -> Self {
        RepeatInfo {
            repeat_type,
            interval,
            end_date,
            id: None,
        }
    }
}

impl Default for RepeatInfo {
    fn default() -> Self {
        RepeatInfo::none()
    }
}

/// The event template: one logical event as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    /// First occurrence (the recurrence anchor)
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: RepeatInfo,
    /// Minutes before the event to notify
    #[serde(default)]
    pub notification_time: i64,
}

/// A concrete, dated event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    pub description: String,
    pub location: String,
    pub category: String,
    pub repeat: RepeatInfo,
    pub notification_time: i64,
}

impl Event {
    /// Build one occurrence of `form` on `date`, tagged with `series_id`.
    pub fn from_form(form: &EventForm, id: String, date: NaiveDate, series_id: &str) -> Self {
        Event {
            id,
            title: form.title.clone(),
            date,
            start_time: form.start_time,
            end_time: form.end_time,
            description: form.description.clone(),
            location: form.location.clone(),
            category: form.category.clone(),
            repeat: RepeatInfo {
                id: Some(series_id.to_string()),
                ..form.repeat.clone()
            },
            notification_time: form.notification_time,
        }
    }

    /// Whether this event belongs to a recurring series.
    pub fn is_recurring(&self) -> bool {
        self.repeat.repeat_type != RepeatType::None
            && self.repeat.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    pub fn series_id(&self) -> Option<&str> {
        self.repeat.id.as_deref()
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, RepeatError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| RepeatError::InvalidDate(s.to_string()))
}

/// Time-of-day as `HH:MM` on the wire. Seconds are accepted on input.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(|_| serde::de::Error::custom(format!("invalid time '{}', expected HH:MM", s)))
    }
}
