pub mod assistant;
pub mod blobs;
pub mod checkin;
pub mod config;
mod db;
pub mod dashboard;
pub mod models;
pub mod settings;
pub mod store;
pub mod utils;

use std::sync::Arc;

use anyhow::Result;

use blobs::BlobRegistry;
use config::Config;
use dashboard::ReportShelf;
use settings::SettingsPage;
use store::SessionStore;

pub use db::Database;

/// Everything a page needs, built once per process.
#[derive(Clone)]
pub struct AppState {
    pub store: SessionStore,
    pub blobs: Arc<BlobRegistry>,
}

impl AppState {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            blobs: Arc::new(BlobRegistry::new()),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.open_store()?))
    }

    pub fn reports(&self) -> ReportShelf {
        ReportShelf::new(self.store.clone(), self.blobs.clone())
    }

    pub fn settings(&self) -> SettingsPage {
        SettingsPage::load(self.store.clone())
    }
}
