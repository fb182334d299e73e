pub mod colors;
pub mod formatting;
pub mod path;
pub mod table;
pub mod time;

pub use formatting::display_width;
pub use time::{EventTime, format_duration};
