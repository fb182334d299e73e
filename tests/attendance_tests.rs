mod common;
use common::{ev, sample_schedule, setup_test_db};
use virada_schedule::config::DEFAULT_STATE_KEY;
use virada_schedule::core::attendance::{self, EventId};
use virada_schedule::core::engine::{RestoreOutcome, ScheduleEngine};
use virada_schedule::core::filter::FilterCriteria;
use virada_schedule::db::log::load_entries;
use virada_schedule::db::store::{KeyValueStore, MemoryStore, SqliteStore};
use virada_schedule::errors::AppError;
use virada_schedule::models::{Schedule, Venue};

fn beta() -> EventId {
    EventId::new("Praça Roosevelt", "Beta Trio", "16h")
}

#[test]
fn test_identity_key_format() {
    assert_eq!(EventId::new("X", "Y", "18h").to_string(), "X-Y-18h");
    assert_eq!(ev("18h", "Y", 60, None).identity("X").key(), "X-Y-18h");
}

#[test]
fn test_load_sorts_and_reports_missing_state() {
    let engine = ScheduleEngine::load(sample_schedule(), MemoryStore::new(), DEFAULT_STATE_KEY);

    assert_eq!(engine.restore_outcome(), &RestoreOutcome::Missing);
    let praca: Vec<&str> = engine.venues()[0]
        .events
        .iter()
        .map(|e| e.artist.as_str())
        .collect();
    assert_eq!(praca, vec!["Alpha Band", "Beta Trio", "Roda de Choro"]);
}

#[test]
fn test_toggle_round_trip() {
    let mut schedule = sample_schedule();
    schedule.locations[1].events[1].attending = true; // Early Set defaults to attending

    let mut engine = ScheduleEngine::load(schedule.clone(), MemoryStore::new(), DEFAULT_STATE_KEY);
    let update = engine.toggle_attending(&beta()).unwrap();
    assert!(update.attending);
    assert!(update.persisted);

    let store = engine.into_store();
    assert_eq!(store.writes(), 1);

    let reloaded = ScheduleEngine::load(schedule, store, DEFAULT_STATE_KEY);
    assert_eq!(reloaded.restore_outcome(), &RestoreOutcome::Restored(6));
    assert!(reloaded.find(&beta()).unwrap().attending);
    assert!(!reloaded.find(&EventId::new("Praça Roosevelt", "Alpha Band", "14h")).unwrap().attending);
    assert!(reloaded.find(&EventId::new("Arouche", "Early Set", "10h")).unwrap().attending);
    assert!(!reloaded.find(&EventId::new("Arouche", "Late Set", "20h")).unwrap().attending);
}

#[test]
fn test_persisted_map_covers_every_event() {
    let mut engine = ScheduleEngine::load(sample_schedule(), MemoryStore::new(), DEFAULT_STATE_KEY);
    engine.set_attending(&beta(), true).unwrap();

    let raw = engine.store().raw(DEFAULT_STATE_KEY).unwrap().to_string();
    let map = attendance::decode(&raw).unwrap();

    assert_eq!(map.len(), 6);
    assert_eq!(map.get("Praça Roosevelt-Beta Trio-16h"), Some(&true));
    assert_eq!(map.get("Arouche-Gamma Choir-20h30"), Some(&false));
    assert_eq!(map, engine.attendance_map());
}

#[test]
fn test_unlisted_events_keep_dataset_default() {
    let store = MemoryStore::new().with_entry(
        DEFAULT_STATE_KEY,
        r#"{"Praça Roosevelt-Alpha Band-14h":true,"Gone-Old Act-1h":true}"#,
    );

    let engine = ScheduleEngine::load(sample_schedule(), store, DEFAULT_STATE_KEY);

    assert_eq!(engine.restore_outcome(), &RestoreOutcome::Restored(1));
    assert!(engine.find(&EventId::new("Praça Roosevelt", "Alpha Band", "14h")).unwrap().attending);
    assert!(!engine.find(&beta()).unwrap().attending);
}

#[test]
fn test_malformed_state_falls_back_to_defaults() {
    let store = MemoryStore::new().with_entry(DEFAULT_STATE_KEY, "{not json");

    let engine = ScheduleEngine::load(sample_schedule(), store, DEFAULT_STATE_KEY);

    assert!(matches!(engine.restore_outcome(), RestoreOutcome::Failed(_)));
    assert!(engine.venues().iter().flat_map(|v| &v.events).all(|e| !e.attending));
}

#[test]
fn test_read_failure_is_not_fatal() {
    let mut store = MemoryStore::new().with_entry(DEFAULT_STATE_KEY, r#"{"Praça Roosevelt-Beta Trio-16h":true}"#);
    store.fail_reads(true);

    let engine = ScheduleEngine::load(sample_schedule(), store, DEFAULT_STATE_KEY);

    assert!(matches!(engine.restore_outcome(), RestoreOutcome::Failed(_)));
    assert!(!engine.find(&beta()).unwrap().attending);
    // rendering still works
    let view = engine.recompute(&FilterCriteria::all(engine.venue_names()));
    assert_eq!(view.event_count(), 6);
}

#[test]
fn test_write_failure_keeps_toggle_in_memory() {
    let mut store = MemoryStore::new();
    store.fail_writes(true);

    let mut engine = ScheduleEngine::load(sample_schedule(), store, DEFAULT_STATE_KEY);
    let update = engine.set_attending(&beta(), true).unwrap();

    assert!(update.attending);
    assert!(!update.persisted);
    assert!(engine.find(&beta()).unwrap().attending);
    assert_eq!(engine.store().writes(), 0);
    assert!(engine.store().raw(DEFAULT_STATE_KEY).is_none());

    let view = engine.recompute(&FilterCriteria::all(engine.venue_names()).with_attending_only(true));
    assert_eq!(view.event_count(), 1);
}

#[test]
fn test_unknown_event_is_rejected() {
    let mut engine = ScheduleEngine::load(sample_schedule(), MemoryStore::new(), DEFAULT_STATE_KEY);
    let ghost = EventId::new("Praça Roosevelt", "Beta Trio", "17h");

    assert!(matches!(engine.toggle_attending(&ghost), Err(AppError::EventNotFound(_))));
    assert!(matches!(engine.set_attending(&ghost, true), Err(AppError::EventNotFound(_))));
    assert_eq!(engine.store().writes(), 0);
}

#[test]
fn test_duplicate_identity_flips_together() {
    let schedule = Schedule {
        locations: vec![Venue::new(
            "V",
            "",
            vec![ev("18h", "Twin", 60, Some("24.5")), ev("18h", "Twin", 30, Some("25.5"))],
        )],
    };

    let mut engine = ScheduleEngine::load(schedule, MemoryStore::new(), DEFAULT_STATE_KEY);
    engine.set_attending(&EventId::new("V", "Twin", "18h"), true).unwrap();

    assert!(engine.venues()[0].events.iter().all(|e| e.attending));
    assert_eq!(engine.attendance_map().len(), 1);
}

#[test]
fn test_sqlite_store_replaces_whole_value() {
    let mut store = SqliteStore::in_memory().unwrap();

    assert_eq!(store.get("k").unwrap(), None);
    store.set("k", r#"{"a":true}"#).unwrap();
    store.set("k", r#"{"b":false}"#).unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some(r#"{"b":false}"#));

    let entries = load_entries(&store.pool().conn).unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.operation == "save_attendance" && e.target == "k"));
}

#[test]
fn test_sqlite_round_trip_across_sessions() {
    let db_path = setup_test_db("attendance_round_trip");

    {
        let store = SqliteStore::open(&db_path).unwrap();
        let mut engine = ScheduleEngine::load(sample_schedule(), store, DEFAULT_STATE_KEY);
        engine.set_attending(&beta(), true).unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    let engine = ScheduleEngine::load(sample_schedule(), store, DEFAULT_STATE_KEY);

    assert_eq!(engine.restore_outcome(), &RestoreOutcome::Restored(6));
    assert!(engine.find(&beta()).unwrap().attending);
}
