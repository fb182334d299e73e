use serde::Serialize;

/// Date label of the first festival day.
pub const FIRST_DAY: &str = "24.5";
/// Date label of the second festival day.
pub const SECOND_DAY: &str = "25.5";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum DayBucket {
    FirstDay,    // 24.5
    SecondDay,   // 25.5
    Unscheduled, // no date, or a date outside the festival
}

impl DayBucket {
    /// Fixed output order of the buckets.
    pub const ALL: [DayBucket; 3] = [
        DayBucket::FirstDay,
        DayBucket::SecondDay,
        DayBucket::Unscheduled,
    ];

    pub fn from_date(date: Option<&str>) -> Self {
        match date {
            Some(FIRST_DAY) => DayBucket::FirstDay,
            Some(SECOND_DAY) => DayBucket::SecondDay,
            _ => DayBucket::Unscheduled,
        }
    }

    /// Sort rank used by the initial ordering.
    pub fn rank(&self) -> u32 {
        match self {
            DayBucket::FirstDay => 24,
            DayBucket::SecondDay => 25,
            DayBucket::Unscheduled => 999,
        }
    }

    /// Section heading shown above the bucket's events.
    pub fn title(&self) -> &'static str {
        match self {
            DayBucket::FirstDay => "Saturday (24.5)",
            DayBucket::SecondDay => "Sunday (25.5)",
            DayBucket::Unscheduled => "Other Events",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayBucket::FirstDay => "first_day",
            DayBucket::SecondDay => "second_day",
            DayBucket::Unscheduled => "unscheduled",
        }
    }
}
