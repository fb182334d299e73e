use crate::core::calculator::timeline::ScheduleView;
use serde::Serialize;

/// One flat export row per laid-out event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotExport {
    pub venue: String,
    pub address: String,
    pub day: String,
    pub date: String,
    pub time: String,
    pub artist: String,
    pub duration: u32,
    pub attending: bool,
    pub top: u32,
    pub height: f64,
    pub column_height: u32,
}

impl SlotExport {
    /// Flatten a view in display order.
    pub fn rows(view: &ScheduleView) -> Vec<SlotExport> {
        view.venues
            .iter()
            .flat_map(|venue| {
                venue.sections.iter().flat_map(move |section| {
                    section.slots.iter().map(move |slot| SlotExport {
                        venue: venue.name.clone(),
                        address: venue.address.clone(),
                        day: section.bucket.as_str().to_string(),
                        date: slot.event.date.clone().unwrap_or_default(),
                        time: slot.event.time.clone(),
                        artist: slot.event.artist.clone(),
                        duration: slot.event.duration,
                        attending: slot.event.attending,
                        top: slot.top,
                        height: slot.height,
                        column_height: section.column_height,
                    })
                })
            })
            .collect()
    }
}
