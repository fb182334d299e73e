//! Schedule view engine.
//!
//! Owns the in-memory venues, restores attendance from the store on load,
//! recomputes the filtered and laid-out view on demand and writes the whole
//! attendance map back after every change.

use crate::core::attendance::{self, AttendanceMap, EventId};
use crate::core::calculator::timeline::{ScheduleView, build_view};
use crate::core::filter::{FilterCriteria, filter_venues};
use crate::core::ordering::sort_venue_events;
use crate::db::store::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Event, Schedule, Venue};
use crate::ui::messages::warning;

/// Result of reading the persisted attendance map at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Map found and applied; number of events patched.
    Restored(usize),
    /// Nothing stored yet.
    Missing,
    /// Unreadable or malformed; dataset defaults kept.
    Failed(String),
}

/// Result of an attendance change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceUpdate {
    pub attending: bool,
    /// False when the store refused the write; the change is kept in memory.
    pub persisted: bool,
}

pub struct ScheduleEngine<S: KeyValueStore> {
    venues: Vec<Venue>,
    store: S,
    state_key: String,
    restore: RestoreOutcome,
}

impl<S: KeyValueStore> ScheduleEngine<S> {
    /// Order the schedule and patch it with the persisted attendance.
    pub fn load(schedule: Schedule, store: S, state_key: &str) -> Self {
        let mut venues = schedule.locations;
        sort_venue_events(&mut venues);

        let mut engine = Self {
            venues,
            store,
            state_key: state_key.to_string(),
            restore: RestoreOutcome::Missing,
        };
        engine.restore = engine.restore_attendance();
        engine
    }

    fn restore_attendance(&mut self) -> RestoreOutcome {
        let raw = match self.store.get(&self.state_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return RestoreOutcome::Missing,
            Err(e) => {
                warning(format!("Error loading attending state: {e}"));
                return RestoreOutcome::Failed(e.to_string());
            }
        };

        match attendance::decode(&raw) {
            Ok(map) => RestoreOutcome::Restored(attendance::apply(&mut self.venues, &map)),
            Err(e) => {
                warning(format!("Error loading attending state: {e}"));
                RestoreOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn restore_outcome(&self) -> &RestoreOutcome {
        &self.restore
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn venue_names(&self) -> Vec<String> {
        self.venues.iter().map(|v| v.name.clone()).collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// First event carrying `id`.
    pub fn find(&self, id: &EventId) -> Option<&Event> {
        self.venues
            .iter()
            .filter(|v| v.name == id.venue)
            .flat_map(|v| v.events.iter())
            .find(|e| e.artist == id.artist && e.time == id.time)
    }

    /// Filter, group, sort and lay out the current model.
    pub fn recompute(&self, criteria: &FilterCriteria) -> ScheduleView {
        build_view(&filter_venues(&self.venues, criteria))
    }

    pub fn attendance_map(&self) -> AttendanceMap {
        attendance::snapshot(&self.venues)
    }

    /// Set `attending` on every event carrying `id`, then persist the map.
    pub fn set_attending(&mut self, id: &EventId, attending: bool) -> AppResult<AttendanceUpdate> {
        let mut found = false;

        for venue in self.venues.iter_mut().filter(|v| v.name == id.venue) {
            for ev in venue
                .events
                .iter_mut()
                .filter(|e| e.artist == id.artist && e.time == id.time)
            {
                ev.attending = attending;
                found = true;
            }
        }

        if !found {
            return Err(AppError::EventNotFound(id.to_string()));
        }

        Ok(AttendanceUpdate {
            attending,
            persisted: self.persist(),
        })
    }

    pub fn toggle_attending(&mut self, id: &EventId) -> AppResult<AttendanceUpdate> {
        let current = self
            .find(id)
            .map(|e| e.attending)
            .ok_or_else(|| AppError::EventNotFound(id.to_string()))?;

        self.set_attending(id, !current)
    }

    fn persist(&mut self) -> bool {
        let written = attendance::encode(&self.attendance_map())
            .and_then(|raw| self.store.set(&self.state_key, &raw));

        match written {
            Ok(()) => true,
            Err(e) => {
                warning(format!("Error saving attending state: {e}"));
                false
            }
        }
    }
}
