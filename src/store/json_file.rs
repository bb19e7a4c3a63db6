use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    sync::{RwLock, RwLockWriteGuard},
};

use super::KeyValueStore;
use crate::log_warn;

const ENABLE_LOGS: bool = true;

type Entries = BTreeMap<String, String>;

/// Whole store kept in memory and mirrored to one pretty-printed JSON object
/// on every mutation, the on-disk counterpart of browser local storage.
pub struct JsonFileStore {
    path: PathBuf,
    data: RwLock<Entries>,
}

fn load_entries(path: &Path) -> Result<Entries> {
    if !path.exists() {
        return Ok(Entries::new());
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session store from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session store at {}", path.display()))
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create store directory {}", parent.display())
            })?;
        }

        let data = load_entries(&path).unwrap_or_else(|err| {
            log_warn!("Starting with an empty session store: {err:#}");
            Entries::new()
        });

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Replaces the in-memory view with the file's current contents.
    pub fn reload(&self) -> Result<()> {
        let data = load_entries(&self.path)?;
        *self.write_guard() = data;
        Ok(())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Entries> {
        match self.data.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Applies `change` and persists. The in-memory view only changes when
    /// the file write succeeds.
    fn mutate(&self, change: impl FnOnce(&mut Entries)) -> Result<()> {
        let mut guard = self.write_guard();
        let mut next = guard.clone();
        change(&mut next);
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }

    fn persist(&self, data: &Entries) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write session store to {}", self.path.display()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let guard = match self.data.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Ok(guard.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.mutate(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> Result<()> {
        self.mutate(|entries| entries.clear())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let store = JsonFileStore::new(path.clone()).unwrap();
        store.write("dashboardSleep", "8").unwrap();
        store.write("dashboardFeedback", "Felt tired").unwrap();
        store.delete("dashboardFeedback").unwrap();
        drop(store);

        let reopened = JsonFileStore::new(path).unwrap();
        assert_eq!(reopened.read("dashboardSleep").unwrap().as_deref(), Some("8"));
        assert!(reopened.read("dashboardFeedback").unwrap().is_none());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("session.json");

        let store = JsonFileStore::new(path.clone()).unwrap();
        store.write("k", "v").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn malformed_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json at all").unwrap();

        let store = JsonFileStore::new(path).unwrap();
        assert!(store.read("user").unwrap().is_none());

        store.write("user", "{}").unwrap();
        assert_eq!(store.read("user").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn reload_picks_up_external_changes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let store = JsonFileStore::new(path.clone()).unwrap();
        store.write("a", "1").unwrap();

        let other = JsonFileStore::new(path).unwrap();
        other.write("a", "2").unwrap();

        assert_eq!(store.read("a").unwrap().as_deref(), Some("1"));
        store.reload().unwrap();
        assert_eq!(store.read("a").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn failed_persist_leaves_memory_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");

        let store = JsonFileStore::new(path.clone()).unwrap();
        store.write("a", "1").unwrap();

        // A directory at the file's path makes every write fail.
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.write("a", "2").is_err());
        assert_eq!(store.read("a").unwrap().as_deref(), Some("1"));
    }
}
