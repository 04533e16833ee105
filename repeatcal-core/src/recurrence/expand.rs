use chrono::NaiveDate;
use tracing::{debug, trace};

use super::{
    is_valid_repeat_date, next_repeat_date, validate_repeat_settings, DEFAULT_HORIZON, MAX_EVENTS,
};
use crate::event::{Event, EventForm, RepeatInfo, RepeatType};
use crate::id::{IdGenerator, UuidIdGenerator};

/// Expands recurring event forms into dated events.
///
/// Invalid or non-repeating forms expand to an empty list; there is no
/// error path. Callers treat "empty" as "nothing to preview or save".
#[derive(Debug)]
pub struct Expander<G = UuidIdGenerator> {
    ids: G,
    horizon: NaiveDate,
}

impl Expander<UuidIdGenerator> {
    pub fn new() -> Self {
        Expander::with_ids(UuidIdGenerator)
    }
}

impl Default for Expander<UuidIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> Expander<G> {
    pub fn with_ids(ids: G) -> Self {
        Expander {
            ids,
            horizon: DEFAULT_HORIZON,
        }
    }

    /// Use `horizon` as the end date for rules that don't set one.
    pub fn with_horizon(mut self, horizon: NaiveDate) -> Self {
        self.horizon = horizon;
        self
    }

    /// The last date a rule may produce an event on.
    pub fn effective_end(&self, repeat: &RepeatInfo) -> NaiveDate {
        repeat.end_date.unwrap_or(self.horizon)
    }

    /// Expand `form` into its occurrences, in ascending date order.
    ///
    /// Every returned event shares one series id and has its own event id.
    /// At most `MAX_EVENTS` candidate dates are examined.
    pub fn expand(&self, form: &EventForm) -> Vec<Event> {
        let repeat = &form.repeat;
        let anchor = form.date;

        if repeat.repeat_type == RepeatType::None {
            return Vec::new();
        }

        if !validate_repeat_settings(anchor, repeat.end_date, Some(repeat.interval)) {
            debug!(
                title = %form.title,
                interval = repeat.interval,
                end_date = ?repeat.end_date,
                "rejected repeat settings"
            );
            return Vec::new();
        }

        let end = self.effective_end(repeat);
        let series_id = self.ids.series_id(&form.title);
        debug!(
            title = %form.title,
            repeat = %repeat.repeat_type,
            interval = repeat.interval,
            %anchor,
            %end,
            %series_id,
            "expanding recurring event"
        );

        let mut events = Vec::new();
        let mut current = anchor;
        let mut count = 0;

        while current <= end && count < MAX_EVENTS {
            if is_valid_repeat_date(current, repeat.repeat_type, anchor) {
                let id = self.ids.event_id(&form.title, current);
                events.push(Event::from_form(form, id, current, &series_id));
            } else {
                trace!(date = %current, "skipped date");
            }

            match next_repeat_date(current, repeat.repeat_type, repeat.interval, Some(anchor)) {
                Some(next) => current = next,
                None => break,
            }
            count += 1;
        }

        debug!(count = events.len(), iterations = count, "expanded recurring event");
        events
    }
}

/// Expand `form` with random ids and the default horizon.
pub fn generate_repeated_events(form: &EventForm) -> Vec<Event> {
    Expander::new().expand(form)
}
