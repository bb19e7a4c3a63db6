use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    blobs::BlobRegistry,
    log_debug,
    models::ReportAttachment,
    store::{keys, SessionStore},
};

const ENABLE_LOGS: bool = true;

/// "Attach your reports" panel. Entries persist in the session store; the
/// files they point at are only reachable through this process's
/// [`BlobRegistry`].
#[derive(Clone)]
pub struct ReportShelf {
    store: SessionStore,
    blobs: Arc<BlobRegistry>,
}

impl ReportShelf {
    pub fn new(store: SessionStore, blobs: Arc<BlobRegistry>) -> Self {
        Self { store, blobs }
    }

    pub fn list(&self) -> Vec<ReportAttachment> {
        self.store.get_list(keys::REPORTS)
    }

    /// Appends one entry per file, in the given order, and returns them.
    pub fn upload<P: AsRef<Path>>(&self, files: &[P]) -> Vec<ReportAttachment> {
        let added: Vec<ReportAttachment> = files
            .iter()
            .map(|file| {
                let path = file.as_ref();
                ReportAttachment {
                    name: display_name(path),
                    url: self.blobs.register(path),
                }
            })
            .collect();

        if !added.is_empty() {
            self.store.extend_list(keys::REPORTS, &added);
            log_debug!("Attached {} report(s)", added.len());
        }
        added
    }

    /// Removes the entry [`list`](Self::list) shows at `index` and revokes
    /// its link. Out-of-range indices change nothing.
    pub fn delete(&self, index: usize) -> Option<ReportAttachment> {
        let removed: ReportAttachment = self
            .store
            .remove_from_list_as(keys::REPORTS, index)?;
        self.blobs.revoke(&removed.url);
        log_debug!("Removed report '{}'", removed.name);
        Some(removed)
    }

    /// Live file behind the entry at `index`. `None` for a missing entry or
    /// a link left over from an earlier process.
    pub fn open(&self, index: usize) -> Option<PathBuf> {
        let report = self.list().into_iter().nth(index)?;
        self.blobs.resolve(&report.url)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
