//! Time utilities: parsing the festival's "18h" / "20h30" notation,
//! formatting durations, parsing wall-clock instants.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

static EVENT_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)h(\d+)?").expect("valid event time pattern"));

/// Hour and minutes extracted from an event `time` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventTime {
    pub hour: u32,
    pub minutes: u32,
}

impl EventTime {
    /// Parse `"<hour>h"` or `"<hour>h<minutes>"`. Only the leading part has to
    /// match, trailing text is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = EVENT_TIME_RE.captures(s)?;
        let hour = caps.get(1)?.as_str().parse().ok()?;
        let minutes = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        Some(Self { hour, minutes })
    }

    /// Like [`EventTime::parse`], with 0h00 for unparsable input.
    pub fn parse_or_midnight(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Fractional hour of day, e.g. 20h30 → 20.5
    pub fn as_hours(&self) -> f64 {
        self.hour as f64 + self.minutes as f64 / 60.0
    }
}

/// Render a duration in minutes the way the schedule cards do:
/// `90` → "1h 30min", `45` → "45min", `120` → "2h".
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => format!("{m}min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}min"),
    }
}

/// Parse a wall-clock instant given on the command line.
/// Accepts "YYYY-MM-DD HH:MM" and "YYYY-MM-DDTHH:MM".
pub fn parse_instant(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}
