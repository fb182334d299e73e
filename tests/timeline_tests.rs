mod common;
use common::{artists, ev, sample_schedule};
use virada_schedule::core::calculator::timeline::{
    bucket_bounds, build_view, group_by_day, slot_height, timeline_height,
};
use virada_schedule::core::filter::{FilterCriteria, HourRange, filter_venues};
use virada_schedule::core::ordering::sort_venue_events;
use virada_schedule::models::{DayBucket, Venue};

#[test]
fn test_timeline_height_example() {
    let events = vec![ev("16h", "B", 90, Some("24.5"))];

    assert_eq!(bucket_bounds(&events), Some((15, 17)));
    assert_eq!(timeline_height(&events), 300);
}

#[test]
fn test_timeline_height_clamps_to_day() {
    let events = vec![ev("0h", "Open", 60, None), ev("24h", "Close", 60, None)];

    assert_eq!(bucket_bounds(&events), Some((0, 24)));
    assert_eq!(timeline_height(&events), 2500);
    assert_eq!(timeline_height(&[]), 0);
    assert_eq!(bucket_bounds(&[]), None);
}

#[test]
fn test_slot_height_has_a_floor() {
    assert_eq!(slot_height(90), 138.0);
    assert_eq!(slot_height(60), 88.0);
    assert_eq!(slot_height(20), 48.0);
    assert_eq!(slot_height(1), 48.0);
    assert!((slot_height(50) - (50.0 / 60.0 * 100.0 - 12.0)).abs() < 1e-9);
}

#[test]
fn test_grouping_orders_buckets_and_hours() {
    let events = vec![
        ev("12h", "Undated", 60, None),
        ev("18h", "Sun Late", 60, Some("25.5")),
        ev("20h", "Sat Late", 60, Some("24.5")),
        ev("9h", "Sun Early", 60, Some("25.5")),
        ev("14h", "Sat Early", 60, Some("24.5")),
        ev("3h", "Other Day", 60, Some("26.5")),
    ];

    let groups = group_by_day(&events);

    assert_eq!(artists(&groups.first_day), vec!["Sat Early", "Sat Late"]);
    assert_eq!(artists(&groups.second_day), vec!["Sun Early", "Sun Late"]);
    assert_eq!(artists(&groups.unscheduled), vec!["Other Day", "Undated"]);
    assert_eq!(
        artists(&groups.flatten()),
        vec!["Sat Early", "Sat Late", "Sun Early", "Sun Late", "Other Day", "Undated"]
    );
}

#[test]
fn test_bucket_sort_is_stable() {
    let events = vec![
        ev("18h30", "First", 60, Some("24.5")),
        ev("18h", "Second", 60, Some("24.5")),
        ev("17h", "Before", 60, Some("24.5")),
    ];

    let groups = group_by_day(&events);

    assert_eq!(artists(&groups.first_day), vec!["Before", "First", "Second"]);
}

#[test]
fn test_day_ordering_invariant_in_view() {
    let mut schedule = sample_schedule();
    sort_venue_events(&mut schedule.locations);

    let criteria = FilterCriteria::all(schedule.venue_names());
    let view = build_view(&filter_venues(&schedule.locations, &criteria));

    for venue in &view.venues {
        let ranks: Vec<u32> = venue.events.iter().map(|e| e.bucket().rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted, "bucket order broken in {}", venue.name);
    }
}

#[test]
fn test_column_height_aligned_to_busiest_venue() {
    let venues = vec![
        Venue::new(
            "Busy",
            "",
            vec![ev("10h", "Morning", 60, Some("24.5")), ev("20h", "Night", 60, Some("24.5"))],
        ),
        Venue::new("Quiet", "", vec![ev("18h", "Only", 30, Some("24.5"))]),
    ];

    let view = build_view(&venues);

    // Busy: 9h..21h → 13 hours
    assert_eq!(view.day_heights.first_day, 1300);
    assert_eq!(view.day_heights.second_day, 0);
    assert_eq!(view.day_heights.unscheduled, 0);

    let quiet = view.venue("Quiet").unwrap();
    assert_eq!(quiet.sections.len(), 1);
    let section = &quiet.sections[0];
    assert_eq!(section.bucket, DayBucket::FirstDay);
    assert_eq!(section.column_height, 1300);
    // positions use the venue's own first hour
    assert_eq!(section.min_hour, 17);
    assert_eq!(section.slots[0].top, 100);
    assert_eq!(section.slots[0].height, 48.0);

    let busy = view.venue("Busy").unwrap();
    let tops: Vec<u32> = busy.sections[0].slots.iter().map(|s| s.top).collect();
    assert_eq!(tops, vec![100, 1100]);
}

#[test]
fn test_roosevelt_example_view() {
    let venues = vec![Venue::new(
        "Praça Roosevelt",
        "",
        vec![ev("14h", "A", 60, Some("24.5")), ev("16h", "B", 90, Some("24.5"))],
    )];

    let criteria = FilterCriteria::all(["Praça Roosevelt"]).with_hours(HourRange::new(15, 24).unwrap());
    let view = build_view(&filter_venues(&venues, &criteria));

    assert_eq!(view.event_count(), 1);
    assert_eq!(view.day_heights.first_day, 300);

    let slot = &view.venues[0].sections[0].slots[0];
    assert_eq!(slot.id.to_string(), "Praça Roosevelt-B-16h");
    assert_eq!(slot.top, 100);
    assert_eq!(slot.height, 138.0);
}

#[test]
fn test_sections_only_for_non_empty_buckets() {
    let venues = vec![Venue::new(
        "V",
        "",
        vec![ev("19h", "Undated", 45, None), ev("11h", "Sunday", 50, Some("25.5"))],
    )];

    let view = build_view(&venues);
    let buckets: Vec<DayBucket> = view.venues[0].sections.iter().map(|s| s.bucket).collect();

    assert_eq!(buckets, vec![DayBucket::SecondDay, DayBucket::Unscheduled]);
    assert_eq!(artists(&view.venues[0].events), vec!["Sunday", "Undated"]);
}

#[test]
fn test_pipeline_is_idempotent() {
    let mut schedule = sample_schedule();
    sort_venue_events(&mut schedule.locations);
    let criteria = FilterCriteria::all(schedule.venue_names()).with_hours(HourRange::new(10, 22).unwrap());

    let first = build_view(&filter_venues(&schedule.locations, &criteria));
    let second = build_view(&filter_venues(&schedule.locations, &criteria));

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_empty_view() {
    let view = build_view(&[]);

    assert!(view.is_empty());
    assert_eq!(view.event_count(), 0);
    assert_eq!(view.day_heights.first_day, 0);
}
