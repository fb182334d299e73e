//! SQLite connection wrapper (lightweight for CLI usage).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (or create) the database at `path` and apply pending migrations.
    pub fn new(path: &str) -> AppResult<Self> {
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    /// Private in-memory database, used by tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
