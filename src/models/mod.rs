pub mod day_bucket;
pub mod event;
pub mod schedule;
pub mod venue;

pub use day_bucket::DayBucket;
pub use event::Event;
pub use schedule::Schedule;
pub use venue::Venue;
