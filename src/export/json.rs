use crate::core::calculator::timeline::ScheduleView;
use crate::errors::AppResult;
use std::path::Path;

/// Write the whole view (venues, sections, slots, day heights) as pretty JSON.
pub(crate) fn write_json(path: &Path, view: &ScheduleView) -> AppResult<()> {
    let json = serde_json::to_string_pretty(view)?;
    std::fs::write(path, json)?;
    Ok(())
}
