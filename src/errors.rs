//! Unified application error type.
//! All modules (models, core, db, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Persisted store
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Store error: {0}")]
    Store(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date selector: {0} (expected all, 24.5 or 25.5)")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid hour range: {0}-{1} (expected 0 <= from <= to <= 24)")]
    InvalidHourRange(u32, u32),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Unknown venue: {0}")]
    UnknownVenue(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
