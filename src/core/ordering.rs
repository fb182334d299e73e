use crate::models::Venue;

/// Put every venue's events in chronological order: festival day first
/// (unscheduled last), then start hour. Ties keep their dataset order.
pub fn sort_venue_events(venues: &mut [Venue]) {
    for venue in venues.iter_mut() {
        venue.events.sort_by_key(|e| (e.bucket().rank(), e.hour()));
    }
}
