#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;
use virada_schedule::models::{Event, Schedule, Venue};

pub fn vir() -> Command {
    cargo_bin_cmd!("virada")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_virada.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_virada_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Small two-venue dataset used by the CLI tests.
pub const CLI_DATASET: &str = r#"{
  "locations": [
    {
      "name": "Praça Roosevelt",
      "address": "Consolação, São Paulo",
      "events": [
        { "time": "16h", "artist": "Beta Trio", "duration": 90, "attending": false, "date": "24.5" },
        { "time": "14h", "artist": "Alpha Band", "duration": 60, "attending": false, "date": "24.5" }
      ]
    },
    {
      "name": "Arouche",
      "address": "República, São Paulo",
      "events": [
        { "time": "20h30", "artist": "Gamma Choir", "duration": 30, "attending": false, "date": "25.5" },
        { "time": "12h", "artist": "Delta DJ", "duration": 240, "attending": false }
      ]
    }
  ]
}"#;

/// Write `CLI_DATASET` to a temp file and return its path
pub fn write_dataset(name: &str) -> String {
    let path = temp_out(&format!("{name}_dataset"), "json");
    fs::write(&path, CLI_DATASET).expect("write dataset");
    path
}

pub fn ev(time: &str, artist: &str, duration: u32, date: Option<&str>) -> Event {
    Event::new(time, artist, duration, date)
}

/// Library-level fixture: two venues, mixed days, one undated event.
pub fn sample_schedule() -> Schedule {
    Schedule {
        locations: vec![
            Venue::new(
                "Praça Roosevelt",
                "Consolação",
                vec![
                    ev("16h", "Beta Trio", 90, Some("24.5")),
                    ev("14h", "Alpha Band", 60, Some("24.5")),
                    ev("19h", "Roda de Choro", 45, None),
                ],
            ),
            Venue::new(
                "Arouche",
                "República",
                vec![
                    ev("20h30", "Gamma Choir", 30, Some("25.5")),
                    ev("10h", "Early Set", 60, Some("24.5")),
                    ev("20h", "Late Set", 120, Some("24.5")),
                ],
            ),
        ],
    }
}

pub fn artists(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.artist.as_str()).collect()
}
