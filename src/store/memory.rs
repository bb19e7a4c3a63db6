use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use anyhow::Result;

use super::KeyValueStore;

/// Process-local backend. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries_read(&self) -> RwLockReadGuard<'_, BTreeMap<String, String>> {
        match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn entries_write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
        match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries_read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries_write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries_write().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.entries_write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let store = MemoryStore::new();
        store.write("k", "1").unwrap();
        store.write("k", "2").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn delete_and_clear() {
        let store = MemoryStore::new();
        store.write("a", "1").unwrap();
        store.write("b", "2").unwrap();
        store.delete("a").unwrap();
        store.delete("never-written").unwrap();
        assert!(store.read("a").unwrap().is_none());
        store.clear().unwrap();
        assert!(store.read("b").unwrap().is_none());
    }
}
