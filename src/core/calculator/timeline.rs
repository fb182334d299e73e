use crate::core::attendance::EventId;
use crate::models::{DayBucket, Event, Venue};
use serde::Serialize;

/// Layout units per hour of timeline.
pub const HOUR_HEIGHT: u32 = 100;
/// Smallest height an event slot is drawn with.
pub const MIN_SLOT_HEIGHT: f64 = 48.0;
/// Vertical gap left below each slot.
pub const SLOT_GAP: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSlot {
    pub id: EventId,
    pub event: Event,
    pub top: u32,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySection {
    pub bucket: DayBucket,
    /// Venue-local first hour of the column (one hour of padding).
    pub min_hour: u32,
    /// Shared height of this day's column across all venues.
    pub column_height: u32,
    pub slots: Vec<EventSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueColumn {
    pub name: String,
    pub address: String,
    /// First day, then second day, then unscheduled; each by hour.
    pub events: Vec<Event>,
    /// One section per non-empty bucket, same order as `events`.
    pub sections: Vec<DaySection>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DayHeights {
    pub first_day: u32,
    pub second_day: u32,
    pub unscheduled: u32,
}

impl DayHeights {
    pub fn get(&self, bucket: DayBucket) -> u32 {
        match bucket {
            DayBucket::FirstDay => self.first_day,
            DayBucket::SecondDay => self.second_day,
            DayBucket::Unscheduled => self.unscheduled,
        }
    }

    fn raise(&mut self, bucket: DayBucket, height: u32) {
        let slot = match bucket {
            DayBucket::FirstDay => &mut self.first_day,
            DayBucket::SecondDay => &mut self.second_day,
            DayBucket::Unscheduled => &mut self.unscheduled,
        };
        *slot = (*slot).max(height);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleView {
    pub venues: Vec<VenueColumn>,
    pub day_heights: DayHeights,
}

impl ScheduleView {
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.venues.iter().map(|v| v.events.len()).sum()
    }

    pub fn venue(&self, name: &str) -> Option<&VenueColumn> {
        self.venues.iter().find(|v| v.name == name)
    }
}

/// A venue's events split by festival day, each bucket ordered by hour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayGroups {
    pub first_day: Vec<Event>,
    pub second_day: Vec<Event>,
    pub unscheduled: Vec<Event>,
}

impl DayGroups {
    pub fn get(&self, bucket: DayBucket) -> &[Event] {
        match bucket {
            DayBucket::FirstDay => &self.first_day,
            DayBucket::SecondDay => &self.second_day,
            DayBucket::Unscheduled => &self.unscheduled,
        }
    }

    /// Buckets concatenated in their fixed order.
    pub fn flatten(&self) -> Vec<Event> {
        DayBucket::ALL
            .iter()
            .flat_map(|b| self.get(*b).iter().cloned())
            .collect()
    }
}

pub fn group_by_day(events: &[Event]) -> DayGroups {
    let mut groups = DayGroups::default();

    for ev in events {
        match ev.bucket() {
            DayBucket::FirstDay => groups.first_day.push(ev.clone()),
            DayBucket::SecondDay => groups.second_day.push(ev.clone()),
            DayBucket::Unscheduled => groups.unscheduled.push(ev.clone()),
        }
    }

    // -----------------------------
    // Stable sort by start hour
    // -----------------------------
    groups.first_day.sort_by_key(Event::hour);
    groups.second_day.sort_by_key(Event::hour);
    groups.unscheduled.sort_by_key(Event::hour);

    groups
}

/// Padded `(min_hour, max_hour)` of a bucket, `None` when empty.
pub fn bucket_bounds(events: &[Event]) -> Option<(u32, u32)> {
    let min = events.iter().map(Event::hour).min()?;
    let max = events.iter().map(Event::hour).max()?;

    Some((min.saturating_sub(1), (max + 1).min(24)))
}

/// Vertical extent needed to show a bucket, 0 when empty.
pub fn timeline_height(events: &[Event]) -> u32 {
    match bucket_bounds(events) {
        Some((lo, hi)) => {
            let hours = (hi as i64 - lo as i64 + 1).max(0) as u32;
            hours * HOUR_HEIGHT
        }
        None => 0,
    }
}

pub fn slot_height(duration_minutes: u32) -> f64 {
    (duration_minutes as f64 / 60.0 * HOUR_HEIGHT as f64 - SLOT_GAP).max(MIN_SLOT_HEIGHT)
}

/// Group, order and lay out already-filtered venues.
pub fn build_view(filtered: &[Venue]) -> ScheduleView {
    let grouped: Vec<(&Venue, DayGroups)> =
        filtered.iter().map(|v| (v, group_by_day(&v.events))).collect();

    // -----------------------------
    // Tallest column per day
    // -----------------------------
    let mut day_heights = DayHeights::default();
    for (_, groups) in &grouped {
        for bucket in DayBucket::ALL {
            day_heights.raise(bucket, timeline_height(groups.get(bucket)));
        }
    }

    // -----------------------------
    // Per-venue sections and slots
    // -----------------------------
    let venues = grouped
        .into_iter()
        .map(|(venue, groups)| {
            let sections = DayBucket::ALL
                .iter()
                .filter_map(|bucket| {
                    let events = groups.get(*bucket);
                    let (min_hour, _) = bucket_bounds(events)?;

                    let slots = events
                        .iter()
                        .map(|ev| EventSlot {
                            id: ev.identity(&venue.name),
                            event: ev.clone(),
                            top: ev.hour().saturating_sub(min_hour) * HOUR_HEIGHT,
                            height: slot_height(ev.duration),
                        })
                        .collect();

                    Some(DaySection {
                        bucket: *bucket,
                        min_hour,
                        column_height: day_heights.get(*bucket),
                        slots,
                    })
                })
                .collect();

            VenueColumn {
                name: venue.name.clone(),
                address: venue.address.clone(),
                events: groups.flatten(),
                sections,
            }
        })
        .collect();

    ScheduleView {
        venues,
        day_heights,
    }
}
