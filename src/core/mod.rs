pub mod attendance;
pub mod calculator;
pub mod engine;
pub mod filter;
pub mod happening;
pub mod log;
pub mod ordering;

pub use attendance::{AttendanceMap, EventId};
pub use calculator::timeline::ScheduleView;
pub use engine::{AttendanceUpdate, RestoreOutcome, ScheduleEngine};
pub use filter::{DateSelector, FilterCriteria, HourRange};
