use super::fs_utils::ensure_writable;
use super::model::SlotExport;
use super::{ExportFormat, csv, json, notify_export_success};
use crate::core::calculator::timeline::ScheduleView;
use crate::errors::AppResult;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `view` to `path` in `format`. Returns the number of exported events.
    pub fn export(view: &ScheduleView, format: ExportFormat, path: &Path, force: bool) -> AppResult<usize> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let rows = SlotExport::rows(view);

        match format {
            ExportFormat::Json => json::write_json(path, view)?,
            ExportFormat::Csv => csv::write_csv(path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), rows.len(), path);
        Ok(rows.len())
    }
}
