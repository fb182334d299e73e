use super::day_bucket::DayBucket;
use crate::core::attendance::EventId;
use crate::utils::time::{EventTime, format_duration};
use serde::{Deserialize, Serialize};

/// One scheduled performance, as found in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub time: String,     // "18h" | "20h30"
    pub artist: String,   // part of the identity triple
    pub duration: u32,    // minutes
    #[serde(default)]
    pub attending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>, // "24.5" | "25.5" | absent
}

impl Event {
    pub fn new(time: &str, artist: &str, duration: u32, date: Option<&str>) -> Self {
        Self {
            time: time.to_string(),
            artist: artist.to_string(),
            duration,
            attending: false,
            date: date.map(str::to_string),
        }
    }

    /// Parsed start time, 0h00 when `time` is malformed.
    pub fn start(&self) -> EventTime {
        EventTime::parse_or_midnight(&self.time)
    }

    pub fn hour(&self) -> u32 {
        self.start().hour
    }

    pub fn bucket(&self) -> DayBucket {
        DayBucket::from_date(self.date.as_deref())
    }

    pub fn identity(&self, venue: &str) -> EventId {
        EventId::new(venue, &self.artist, &self.time)
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.duration)
    }
}
