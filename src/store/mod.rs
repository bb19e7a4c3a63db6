//! Key-value persistence shared by the dashboard pages.
//!
//! Pages never touch a backend directly. They hold a [`SessionStore`], which
//! encodes values as JSON, hands raw strings to an injected
//! [`KeyValueStore`], and turns every storage failure into "absent" on read
//! or "not persisted" on write. Wellness notes are advisory data; a broken
//! store must never take a page down.

pub mod json_file;
pub mod keys;
pub mod memory;
pub mod sqlite;

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{log_debug, log_info, log_warn};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

const ENABLE_LOGS: bool = true;

/// Raw string storage. Implementations only need last-write-wins semantics
/// per key; encoding and defaults are handled by [`SessionStore`].
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn delete(&self, key: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

struct StoreInner {
    backend: Arc<dyn KeyValueStore>,
    key_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<StoreInner>,
}

fn lock_ignoring_poison<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl SessionStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                backend,
                key_locks: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Store backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    fn key_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut locks = lock_ignoring_poison(&self.inner.key_locks);
        locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn read_raw(&self, key: &str) -> Option<String> {
        match self.inner.backend.read(key) {
            Ok(value) => value,
            Err(err) => {
                log_warn!("Failed to read key '{key}', using default: {err:#}");
                None
            }
        }
    }

    /// Returns whether the value reached the backend.
    fn write_raw(&self, key: &str, value: &str) -> bool {
        match self.inner.backend.write(key, value) {
            Ok(()) => {
                log_debug!("Stored key '{key}' ({} bytes)", value.len());
                true
            }
            Err(err) => {
                log_warn!("Dropped write for key '{key}': {err:#}");
                false
            }
        }
    }

    fn encode_and_write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(encoded) => self.write_raw(key, &encoded),
            Err(err) => {
                log_warn!("Dropped write for key '{key}', value not serializable: {err}");
                false
            }
        }
    }

    /// Decoded value at `key`, or `default` when the key is missing or its
    /// contents do not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.read_raw(key) else {
            return default;
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log_warn!("Malformed value at key '{key}', using default: {err}");
                default
            }
        }
    }

    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.get(key, T::default())
    }

    /// Replaces whatever is stored at `key` with the JSON encoding of `value`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let lock = self.key_lock(key);
        let _guard = lock_ignoring_poison(&lock);
        self.encode_and_write(key, value);
    }

    /// Raw stored text, without JSON decoding.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.read_raw(key)
    }

    /// Stores `text` verbatim, without JSON encoding.
    pub fn set_text(&self, key: &str, text: &str) {
        let lock = self.key_lock(key);
        let _guard = lock_ignoring_poison(&lock);
        self.write_raw(key, text);
    }

    pub fn remove(&self, key: &str) {
        let lock = self.key_lock(key);
        let _guard = lock_ignoring_poison(&lock);
        match self.inner.backend.delete(key) {
            Ok(()) => log_debug!("Removed key '{key}'"),
            Err(err) => log_warn!("Failed to remove key '{key}': {err:#}"),
        }
    }

    /// Drops every key. Waits for in-flight writes on any key, so nothing
    /// written before the call survives it.
    pub fn clear(&self) {
        let locks = lock_ignoring_poison(&self.inner.key_locks);
        let held: Vec<Arc<Mutex<()>>> = locks.values().cloned().collect();
        let _guards: Vec<MutexGuard<'_, ()>> =
            held.iter().map(|lock| lock_ignoring_poison(lock)).collect();
        match self.inner.backend.clear() {
            Ok(()) => log_info!("Session store cleared"),
            Err(err) => log_warn!("Failed to clear session store: {err:#}"),
        }
    }

    /// Elements of the JSON array at `key`. Anything else reads as empty.
    fn read_list(&self, key: &str) -> Vec<Value> {
        match self.get::<Value>(key, Value::Null) {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            _ => {
                log_warn!("Key '{key}' does not hold a list, treating as empty");
                Vec::new()
            }
        }
    }

    /// Decoded list at `key`; elements that do not decode as `T` are skipped.
    pub fn get_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read_list(key)
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(value) => Some(value),
                Err(err) => {
                    log_warn!("Skipping malformed entry in list '{key}': {err}");
                    None
                }
            })
            .collect()
    }

    pub fn append_to_list<T: Serialize>(&self, key: &str, item: &T) {
        self.extend_list(key, std::slice::from_ref(item));
    }

    /// Appends `items` in order with a single read-modify-write.
    pub fn extend_list<T: Serialize>(&self, key: &str, items: &[T]) {
        let lock = self.key_lock(key);
        let _guard = lock_ignoring_poison(&lock);

        let mut list = self.read_list(key);
        for item in items {
            match serde_json::to_value(item) {
                Ok(value) => list.push(value),
                Err(err) => {
                    log_warn!("Dropped append to list '{key}', item not serializable: {err}");
                    return;
                }
            }
        }
        self.encode_and_write(key, &list);
    }

    /// Removes the raw element at `index`, keeping the rest in order, and
    /// returns it. Out-of-range indices leave storage untouched.
    pub fn remove_from_list(&self, key: &str, index: usize) -> Option<Value> {
        self.remove_list_element(key, |list| (index < list.len()).then_some(index))
    }

    /// Removes the `index`-th element that decodes as `T`, the same
    /// numbering [`get_list`](Self::get_list) shows. Elements of any other
    /// shape are skipped when counting and stay in place.
    pub fn remove_from_list_as<T: DeserializeOwned>(&self, key: &str, index: usize) -> Option<T> {
        let removed = self.remove_list_element(key, |list| {
            list.iter()
                .enumerate()
                .filter(|(_, item)| T::deserialize(*item).is_ok())
                .nth(index)
                .map(|(position, _)| position)
        })?;
        serde_json::from_value(removed).ok()
    }

    /// Read-modify-write under the key lock. `locate` picks the raw position
    /// to drop; the element is returned only once the shortened list is
    /// stored.
    fn remove_list_element(
        &self,
        key: &str,
        locate: impl FnOnce(&[Value]) -> Option<usize>,
    ) -> Option<Value> {
        let lock = self.key_lock(key);
        let _guard = lock_ignoring_poison(&lock);

        let mut list = self.read_list(key);
        let Some(position) = locate(&list) else {
            log_debug!(
                "No element to remove from list '{key}' of length {}",
                list.len()
            );
            return None;
        };

        let removed = list.remove(position);
        self.encode_and_write(key, &list).then_some(removed)
    }
}
