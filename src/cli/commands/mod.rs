pub mod attend;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod now;
pub mod show;
pub mod venues;

use crate::config::Config;
use crate::core::engine::ScheduleEngine;
use crate::core::happening::{Clock, FixedClock, SystemClock};
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::Schedule;
use crate::utils::time::parse_instant;

/// Load the configured schedule and restore attendance from the database.
pub(crate) fn open_engine(cfg: &Config) -> AppResult<ScheduleEngine<SqliteStore>> {
    let schedule = Schedule::load(cfg.dataset.as_deref())?;
    let store = SqliteStore::open(&cfg.database)?;
    Ok(ScheduleEngine::load(schedule, store, &cfg.state_key))
}

/// Wall clock, or a frozen clock when `--at` was given.
pub(crate) fn clock_for(at: Option<&str>) -> AppResult<Box<dyn Clock>> {
    match at {
        Some(s) => Ok(Box::new(FixedClock::new(parse_instant(s)?))),
        None => Ok(Box::new(SystemClock)),
    }
}
