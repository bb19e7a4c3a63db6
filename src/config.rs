use std::{path::PathBuf, str::FromStr, sync::Arc};

use anyhow::{bail, Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::store::{JsonFileStore, KeyValueStore, MemoryStore, SessionStore, SqliteStore};

const APP_DIR_NAME: &str = "mindwell";
const JSON_STORE_FILE: &str = "session.json";
const SQLITE_STORE_FILE: &str = "mindwell.sqlite3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Nothing survives the process.
    Memory,
    /// One JSON document, `session.json`.
    Json,
    /// SQLite database, `mindwell.sqlite3`.
    Sqlite,
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "memory" => Ok(BackendKind::Memory),
            "json" => Ok(BackendKind::Json),
            "sqlite" => Ok(BackendKind::Sqlite),
            other => bail!("unknown store backend '{other}'"),
        }
    }
}

/// Runtime configuration for the session store and logging.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub backend: BackendKind,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            backend: BackendKind::Json,
            log_level: LevelFilter::Info,
        }
    }
}

/// `<platform data dir>/mindwell`, or `./.mindwell` when the platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR_NAME}")))
}

impl Config {
    pub fn store_path(&self) -> Option<PathBuf> {
        match self.backend {
            BackendKind::Memory => None,
            BackendKind::Json => Some(self.data_dir.join(JSON_STORE_FILE)),
            BackendKind::Sqlite => Some(self.data_dir.join(SQLITE_STORE_FILE)),
        }
    }

    pub fn open_backend(&self) -> Result<Arc<dyn KeyValueStore>> {
        let backend: Arc<dyn KeyValueStore> = match (self.backend, self.store_path()) {
            (BackendKind::Json, Some(path)) => Arc::new(
                JsonFileStore::new(path).context("failed to open JSON session store")?,
            ),
            (BackendKind::Sqlite, Some(path)) => Arc::new(
                SqliteStore::open(path).context("failed to open SQLite session store")?,
            ),
            _ => Arc::new(MemoryStore::new()),
        };
        Ok(backend)
    }

    pub fn open_store(&self) -> Result<SessionStore> {
        let store = SessionStore::new(self.open_backend()?);
        match self.store_path() {
            Some(path) => log::info!("Session store ready at {}", path.display()),
            None => log::info!("Session store ready (in memory)"),
        }
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::keys;
    use tempfile::TempDir;

    #[test]
    fn parses_backend_names() {
        assert_eq!("SQLite".parse::<BackendKind>().unwrap(), BackendKind::Sqlite);
        assert_eq!("json".parse::<BackendKind>().unwrap(), BackendKind::Json);
        assert!("redis".parse::<BackendKind>().is_err());
    }

    #[test]
    fn default_uses_json_backend() {
        let config = Config::default();
        assert_eq!(config.backend, BackendKind::Json);
        assert!(config.data_dir.ends_with("mindwell") || config.data_dir.ends_with(".mindwell"));
    }

    #[test]
    fn every_backend_opens() {
        let dir = TempDir::new().unwrap();
        for backend in [BackendKind::Memory, BackendKind::Json, BackendKind::Sqlite] {
            let config = Config {
                data_dir: dir.path().to_path_buf(),
                backend,
                log_level: LevelFilter::Off,
            };
            let store = config.open_store().unwrap();
            store.set(keys::DASHBOARD_SLEEP, &7.5);
            assert_eq!(store.get::<Option<f64>>(keys::DASHBOARD_SLEEP, None), Some(7.5));
        }
        assert!(dir.path().join("session.json").exists());
        assert!(dir.path().join("mindwell.sqlite3").exists());
    }
}
