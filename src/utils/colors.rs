//! ANSI color helper utilities for terminal output.
use crate::models::DayBucket;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// Orange "happening now" badge (256-colour palette).
pub const ORANGE_BG: &str = "\x1b[48;5;208;97;1m";

/// Heading colour of each festival day:
/// first day → blue, second day → magenta, the rest → grey
pub fn color_for_bucket(bucket: DayBucket) -> &'static str {
    match bucket {
        DayBucket::FirstDay => BLUE,
        DayBucket::SecondDay => MAGENTA,
        DayBucket::Unscheduled => GREY,
    }
}

pub fn colorize_attending(attending: bool) -> String {
    if attending {
        format!("{GREEN}[x]{RESET}")
    } else {
        format!("{GREY}[ ]{RESET}")
    }
}

pub fn happening_badge() -> String {
    format!("{ORANGE_BG} NOW {RESET}")
}
