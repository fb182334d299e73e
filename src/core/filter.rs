//! Filter criteria chosen by the user and the filtering pass over venues.

use crate::errors::{AppError, AppResult};
use crate::models::day_bucket::{FIRST_DAY, SECOND_DAY};
use crate::models::{Event, Venue};
use std::collections::BTreeSet;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateSelector {
    #[default]
    All,
    FirstDay,
    SecondDay,
}

impl DateSelector {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateSelector::All => "all",
            DateSelector::FirstDay => FIRST_DAY,
            DateSelector::SecondDay => SECOND_DAY,
        }
    }

    /// Events without a date are never excluded.
    pub fn matches(&self, date: Option<&str>) -> bool {
        match (self, date) {
            (DateSelector::All, _) | (_, None) => true,
            (sel, Some(d)) => d == sel.as_str(),
        }
    }
}

impl FromStr for DateSelector {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim() {
            "all" => Ok(DateSelector::All),
            FIRST_DAY => Ok(DateSelector::FirstDay),
            SECOND_DAY => Ok(DateSelector::SecondDay),
            other => Err(AppError::InvalidDate(other.to_string())),
        }
    }
}

/// Inclusive hour-of-day window, `0 <= lo <= hi <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    lo: u32,
    hi: u32,
}

impl HourRange {
    pub const MAX_HOUR: u32 = 24;

    pub fn new(lo: u32, hi: u32) -> AppResult<Self> {
        if lo > hi || hi > Self::MAX_HOUR {
            return Err(AppError::InvalidHourRange(lo, hi));
        }
        Ok(Self { lo, hi })
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.lo <= hour && hour <= self.hi
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self {
            lo: 0,
            hi: Self::MAX_HOUR,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub venues: BTreeSet<String>,
    pub date: DateSelector,
    pub hours: HourRange,
    pub attending_only: bool,
}

impl FilterCriteria {
    /// Initial page state: every venue, every day, the whole day, everything.
    pub fn all<I, S>(venue_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            venues: venue_names.into_iter().map(Into::into).collect(),
            date: DateSelector::All,
            hours: HourRange::default(),
            attending_only: false,
        }
    }

    pub fn with_date(mut self, date: DateSelector) -> Self {
        self.date = date;
        self
    }

    pub fn with_hours(mut self, hours: HourRange) -> Self {
        self.hours = hours;
        self
    }

    pub fn with_attending_only(mut self, attending_only: bool) -> Self {
        self.attending_only = attending_only;
        self
    }

    pub fn accepts(&self, ev: &Event) -> bool {
        self.date.matches(ev.date.as_deref())
            && self.hours.contains(ev.hour())
            && (!self.attending_only || ev.attending)
    }
}

/// Keep selected venues with at least one passing event; passing events keep
/// their current order.
pub fn filter_venues(venues: &[Venue], criteria: &FilterCriteria) -> Vec<Venue> {
    venues
        .iter()
        .filter(|v| criteria.venues.contains(&v.name))
        .filter_map(|v| {
            let events: Vec<Event> = v
                .events
                .iter()
                .filter(|e| criteria.accepts(e))
                .cloned()
                .collect();

            (!events.is_empty()).then(|| v.with_events(events))
        })
        .collect()
}
