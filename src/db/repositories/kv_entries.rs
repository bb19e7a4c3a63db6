use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::db::Database;

impl Database {
    /// Get the raw value stored under `key`
    pub fn get_entry(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();
        self.execute(move |conn| {
            let value = conn
                .query_row(
                    "SELECT value FROM kv_entries WHERE key = ?1",
                    params![key],
                    |row| row.get::<_, String>(0),
                )
                .optional()
                .with_context(|| format!("failed to read entry '{key}'"))?;
            Ok(value)
        })
    }

    /// Insert or replace the value under `key`
    pub fn upsert_entry(&self, key: &str, value: &str) -> Result<()> {
        let key = key.to_string();
        let value = value.to_string();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO kv_entries (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .with_context(|| format!("failed to write entry '{key}'"))?;
            Ok(())
        })
    }

    pub fn delete_entry(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.execute(move |conn| {
            conn.execute("DELETE FROM kv_entries WHERE key = ?1", params![key])
                .with_context(|| format!("failed to delete entry '{key}'"))?;
            Ok(())
        })
    }

    pub fn clear_entries(&self) -> Result<()> {
        self.execute(|conn| {
            conn.execute("DELETE FROM kv_entries", [])
                .context("failed to clear entries")?;
            Ok(())
        })
    }

    /// All keys, most recently written first
    #[allow(dead_code)]
    pub(crate) fn list_keys(&self) -> Result<Vec<String>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT key FROM kv_entries
                 ORDER BY updated_at DESC, key ASC",
            )?;

            let keys = stmt
                .query_map([], |row| row.get::<_, String>(0))?
                .collect::<Result<Vec<_>, _>>()?;

            Ok(keys)
        })
    }
}
