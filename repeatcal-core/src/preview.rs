//! Live preview of a recurring event form before it is saved.

use crate::event::{Event, EventForm};
use crate::id::IdGenerator;
use crate::recurrence::Expander;

/// What a form would create if saved now.
#[derive(Debug, Clone)]
pub struct RepeatPreview {
    pub repeated_events: Vec<Event>,
    /// True iff at least one event would be created
    pub is_valid_repeat: bool,
}

impl RepeatPreview {
    pub fn new<G: IdGenerator>(expander: &Expander<G>, form: &EventForm) -> Self {
        let repeated_events = expander.expand(form);
        let is_valid_repeat = !repeated_events.is_empty();
        RepeatPreview {
            repeated_events,
            is_valid_repeat,
        }
    }

    pub fn len(&self) -> usize {
        self.repeated_events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repeated_events.is_empty()
    }

    /// One-line description for the form footer.
    pub fn summary(&self) -> String {
        match self.len() {
            0 => "These repeat settings do not create any events.".to_string(),
            1 => "1 repeated event will be created.".to_string(),
            n => format!("{} repeated events will be created.", n),
        }
    }
}
