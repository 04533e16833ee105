//! Terminal rendering for repeatcal types.
//!
//! Extension traits that add colored output to repeatcal-core types using
//! owo_colors.

use owo_colors::OwoColorize;
use repeatcal_core::preview::RepeatPreview;
use repeatcal_core::Event;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let date = self.date.format("%a %Y-%m-%d").to_string();
        let time = format!("{}-{}", self.start_time.format("%H:%M"), self.end_time.format("%H:%M"));

        let mut line = format!("{} {} {}", date.bold(), time, self.title);
        if !self.location.is_empty() {
            line.push_str(&format!(" {}", format!("@ {}", self.location).dimmed()));
        }
        line
    }
}

/// Number of dates listed in a preview before eliding the rest
const PREVIEW_LIMIT: usize = 5;

impl Render for RepeatPreview {
    fn render(&self) -> String {
        if !self.is_valid_repeat {
            return self.summary().red().to_string();
        }

        let mut lines = vec![self.summary().green().to_string()];
        for event in self.repeated_events.iter().take(PREVIEW_LIMIT) {
            lines.push(format!("   {}", event.render()));
        }

        let hidden = self.len().saturating_sub(PREVIEW_LIMIT);
        if hidden > 0 {
            lines.push(format!("   {}", format!("... and {} more", hidden).dimmed()));
        }

        lines.join("\n")
    }
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
