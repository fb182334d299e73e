use super::venue::Venue;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Sample schedule compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../../data/events.json");

/// The dataset document: an ordered list of venues.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub locations: Vec<Venue>,
}

impl Schedule {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let schedule: Schedule = serde_json::from_str(raw)
            .map_err(|e| AppError::InvalidDataset(e.to_string()))?;
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn bundled() -> AppResult<Self> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Load `path` when given, the bundled schedule otherwise.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(p) => Self::from_file(Path::new(p)),
            None => Self::bundled(),
        }
    }

    /// Venue names must be unique, artists non-empty and durations positive.
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::new();

        for venue in &self.locations {
            if !seen.insert(venue.name.as_str()) {
                return Err(AppError::InvalidDataset(format!(
                    "duplicate venue name '{}'",
                    venue.name
                )));
            }

            for ev in &venue.events {
                if ev.artist.trim().is_empty() {
                    return Err(AppError::InvalidDataset(format!(
                        "event at {} in '{}' has no artist",
                        ev.time, venue.name
                    )));
                }
                if ev.duration == 0 {
                    return Err(AppError::InvalidDataset(format!(
                        "event '{}' in '{}' has a zero duration",
                        ev.artist, venue.name
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn venue_names(&self) -> Vec<String> {
        self.locations.iter().map(|v| v.name.clone()).collect()
    }
}
