//! Dated, placed life events (birth, death, marriage)

use serde::{Deserialize, Serialize};

/// A life event with an optional date and place; either may be empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    date: String,
    place: String,
}

impl Event {
    pub fn new(date: impl Into<String>, place: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            place: place.into(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    /// Date and place joined by a single space, kept even when either is empty
    pub fn summary(&self) -> String {
        format!("{} {}", self.date, self.place)
    }
}

/// Accumulates DATE/PLAC lines while an event sub-scan is running
#[derive(Debug, Default)]
pub(crate) struct EventBuilder {
    date: String,
    place: String,
}

impl EventBuilder {
    pub(crate) fn date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub(crate) fn place(&mut self, place: impl Into<String>) {
        self.place = place.into();
    }

    pub(crate) fn build(self) -> Event {
        Event::new(self.date, self.place)
    }
}
