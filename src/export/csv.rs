use super::model::SlotExport;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write one row per event, header taken from the field names.
pub(crate) fn write_csv(path: &Path, rows: &[SlotExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
