use super::event::Event;
use serde::{Deserialize, Serialize};

/// A performance location and its events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Venue {
    pub fn new(name: &str, address: &str, events: Vec<Event>) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            events,
        }
    }

    /// Same venue header, different events.
    pub fn with_events(&self, events: Vec<Event>) -> Self {
        Self {
            name: self.name.clone(),
            address: self.address.clone(),
            events,
        }
    }
}
