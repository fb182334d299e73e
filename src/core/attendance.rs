//! Attendance map: the persisted `identity → attending` document.
//!
//! The map is flat and keyed by the identity triple rendered as
//! `"<venue>-<artist>-<time>"`. It is always rebuilt from the whole model
//! and written as a single value.

use crate::errors::AppResult;
use crate::models::Venue;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Identity of an event within the schedule: (venue name, artist, time string).
///
/// Two events sharing all three fields cannot be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EventId {
    pub venue: String,
    pub artist: String,
    pub time: String,
}

impl EventId {
    pub fn new(venue: &str, artist: &str, time: &str) -> Self {
        Self {
            venue: venue.to_string(),
            artist: artist.to_string(),
            time: time.to_string(),
        }
    }

    /// Storage key of this identity.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.venue, self.artist, self.time)
    }
}

pub type AttendanceMap = BTreeMap<String, bool>;

/// Build the map from every event of every venue.
pub fn snapshot(venues: &[Venue]) -> AttendanceMap {
    let mut map = AttendanceMap::new();

    for venue in venues {
        for ev in &venue.events {
            map.insert(ev.identity(&venue.name).key(), ev.attending);
        }
    }

    map
}

pub fn encode(map: &AttendanceMap) -> AppResult<String> {
    Ok(serde_json::to_string(map)?)
}

pub fn decode(raw: &str) -> AppResult<AttendanceMap> {
    Ok(serde_json::from_str(raw)?)
}

/// Overwrite `attending` on every event whose key is in `map`.
/// Returns how many events were patched.
pub fn apply(venues: &mut [Venue], map: &AttendanceMap) -> usize {
    let mut patched = 0;

    for venue in venues.iter_mut() {
        let name = venue.name.clone();
        for ev in venue.events.iter_mut() {
            if let Some(&attending) = map.get(&ev.identity(&name).key()) {
                ev.attending = attending;
                patched += 1;
            }
        }
    }

    patched
}
