//! "Happening now" indicator.
//!
//! Time is read through the [`Clock`] trait so that callers (and tests) decide
//! what "now" is. [`HappeningTicker`] decides when a re-check is due and
//! [`HappeningBoard`] keeps the resulting set of running events.

use crate::core::attendance::EventId;
use crate::models::{Event, Venue};
use crate::utils::time::EventTime;
use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use std::cell::Cell;
use std::collections::BTreeSet;

pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

/// Day-of-month and month as the dataset writes them: 24 May → "24.5".
pub fn festival_date_label(date: NaiveDate) -> String {
    format!("{}.{}", date.day(), date.month())
}

/// True when `now` falls within `[start, start + duration]` on the event's
/// day (any day for undated events). A malformed `time` never matches.
pub fn is_happening(event: &Event, now: NaiveDateTime) -> bool {
    let Some(start) = EventTime::parse(&event.time) else {
        return false;
    };

    if let Some(date) = &event.date
        && *date != festival_date_label(now.date())
    {
        return false;
    }

    let start = start.as_hours();
    let end = start + event.duration as f64 / 60.0;
    let current = now.hour() as f64 + now.minute() as f64 / 60.0;

    current >= start && current <= end
}

/// Fires on the first poll, then whenever `interval` has elapsed since the
/// last time it fired.
#[derive(Debug, Clone)]
pub struct HappeningTicker {
    interval: Duration,
    last_check: Option<NaiveDateTime>,
}

impl HappeningTicker {
    pub const DEFAULT_INTERVAL_SECS: i64 = 60;

    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_check: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn due(&mut self, now: NaiveDateTime) -> bool {
        let fire = match self.last_check {
            None => true,
            Some(last) => now - last >= self.interval || now < last,
        };

        if fire {
            self.last_check = Some(now);
        }
        fire
    }
}

impl Default for HappeningTicker {
    fn default() -> Self {
        Self::new(Duration::seconds(Self::DEFAULT_INTERVAL_SECS))
    }
}

/// The set of events currently running, refreshed on ticker cadence.
#[derive(Debug, Clone, Default)]
pub struct HappeningBoard {
    ticker: HappeningTicker,
    running: BTreeSet<EventId>,
}

impl HappeningBoard {
    pub fn new(ticker: HappeningTicker) -> Self {
        Self {
            ticker,
            running: BTreeSet::new(),
        }
    }

    /// Re-check every event when the ticker fires. Returns whether a re-check
    /// happened.
    pub fn poll<C: Clock + ?Sized>(&mut self, clock: &C, venues: &[Venue]) -> bool {
        let now = clock.now();
        if !self.ticker.due(now) {
            return false;
        }

        self.running = venues
            .iter()
            .flat_map(|v| {
                v.events
                    .iter()
                    .filter(move |e| is_happening(e, now))
                    .map(move |e| e.identity(&v.name))
            })
            .collect();
        true
    }

    pub fn is_happening(&self, id: &EventId) -> bool {
        self.running.contains(id)
    }

    pub fn running(&self) -> impl Iterator<Item = &EventId> {
        self.running.iter()
    }
}
