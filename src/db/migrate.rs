use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column called `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the key/value table holding persisted UI state.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key         TEXT PRIMARY KEY,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// First releases stored only key and value.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    if has_column(conn, "kv_store", "updated_at")? {
        return Ok(());
    }

    conn.execute(
        "ALTER TABLE kv_store ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
        [],
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
        rusqlite::params![
            chrono::Local::now().to_rfc3339(),
            "migrate_kv_updated_at",
            "kv_store",
            "Added column updated_at"
        ],
    )?;
    Ok(())
}

/// Bring the schema up to date. Safe to run on every open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if table_exists(conn, "kv_store")? {
        migrate_add_updated_at(conn)?;
    } else {
        create_kv_table(conn)?;
    }

    Ok(())
}
