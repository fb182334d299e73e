//! Persisted key/value storage.
//!
//! The schedule engine only needs `get` and `set` on whole string values.
//! `SqliteStore` keeps them in the `kv_store` table, `MemoryStore` keeps them
//! in a map and can be told to fail, which tests use to exercise recovery.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the whole value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful `set` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads {
            return Err(AppError::Store(format!("read of '{key}' refused")));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Store(format!("write of '{key}' refused")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::in_memory()?,
        })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();

        self.pool.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;

        // Internal log is best effort
        if let Err(e) = ttlog(
            &self.pool.conn,
            "save_attendance",
            key,
            &format!("{} bytes written", value.len()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}
