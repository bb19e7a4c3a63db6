use std::path::PathBuf;

use anyhow::Result;

use super::KeyValueStore;
use crate::db::Database;

/// Backend storing each key as a row of the `kv_entries` table.
#[derive(Clone)]
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    pub fn open(path: PathBuf) -> Result<Self> {
        Ok(Self {
            db: Database::new(path)?,
        })
    }

    #[allow(dead_code)]
    pub(crate) fn database(&self) -> &Database {
        &self.db
    }
}

impl KeyValueStore for SqliteStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        self.db.get_entry(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.db.upsert_entry(key, value)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.db.delete_entry(key)
    }

    fn clear(&self) -> Result<()> {
        self.db.clear_entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn upsert_replaces_and_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mindwell.sqlite3");

        let store = SqliteStore::open(path.clone()).unwrap();
        store.write("reports", "[]").unwrap();
        store.write("reports", r#"[{"name":"a.pdf","url":"blob:x"}]"#).unwrap();
        store.write("user", "{}").unwrap();
        store.delete("user").unwrap();
        drop(store);

        let reopened = SqliteStore::open(path).unwrap();
        assert_eq!(
            reopened.read("reports").unwrap().as_deref(),
            Some(r#"[{"name":"a.pdf","url":"blob:x"}]"#)
        );
        assert!(reopened.read("user").unwrap().is_none());
        assert_eq!(reopened.database().list_keys().unwrap(), vec!["reports"]);
    }

    #[test]
    fn clear_empties_the_table() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("mindwell.sqlite3")).unwrap();
        store.write("a", "1").unwrap();
        store.write("b", "2").unwrap();

        store.clear().unwrap();

        assert!(store.database().list_keys().unwrap().is_empty());
    }
}
