// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::SlotExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!("{label} export completed ({rows} events): {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
