use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// One row of the internal `log` table.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Local timestamp, ISO 8601
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Read the whole log, oldest first.
pub fn load_entries(conn: &Connection) -> AppResult<Vec<LogEntry>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, COALESCE(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get(3)?,
            message: row.get(4)?,
        })
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }
    Ok(entries)
}
