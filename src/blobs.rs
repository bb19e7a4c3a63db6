//! Process-lifetime file handles for uploaded reports.
//!
//! Registering a file hands back an opaque `blob:mindwell/<uuid>` URL that
//! resolves to the file for as long as this registry lives. The URLs end up
//! in the persistent session store while the mapping does not, so after a
//! restart stored report URLs no longer resolve. Callers get `None` and must
//! treat the entry as a dead link.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::RwLock,
};

use uuid::Uuid;

const BLOB_PREFIX: &str = "blob:mindwell/";

#[derive(Debug, Default)]
pub struct BlobRegistry {
    handles: RwLock<HashMap<String, PathBuf>>,
}

impl BlobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, path: &Path) -> String {
        let url = format!("{BLOB_PREFIX}{}", Uuid::new_v4());
        let mut handles = match self.handles.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        handles.insert(url.clone(), path.to_path_buf());
        url
    }

    pub fn resolve(&self, url: &str) -> Option<PathBuf> {
        let handles = match self.handles.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        handles.get(url).cloned()
    }

    /// Forgets `url`. Returns whether it was registered.
    pub fn revoke(&self, url: &str) -> bool {
        let mut handles = match self.handles.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        handles.remove(url).is_some()
    }

    pub fn is_blob_url(url: &str) -> bool {
        url.starts_with(BLOB_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_resolve_revoke() {
        let registry = BlobRegistry::new();
        let url = registry.register(Path::new("/tmp/bloodwork.pdf"));

        assert!(BlobRegistry::is_blob_url(&url));
        assert_eq!(
            registry.resolve(&url),
            Some(PathBuf::from("/tmp/bloodwork.pdf"))
        );

        assert!(registry.revoke(&url));
        assert!(!registry.revoke(&url));
        assert!(registry.resolve(&url).is_none());
    }

    #[test]
    fn urls_do_not_outlive_their_registry() {
        let url = BlobRegistry::new().register(Path::new("/tmp/a.pdf"));
        assert!(BlobRegistry::new().resolve(&url).is_none());
    }

    #[test]
    fn same_file_gets_distinct_urls() {
        let registry = BlobRegistry::new();
        let a = registry.register(Path::new("/tmp/a.pdf"));
        let b = registry.register(Path::new("/tmp/a.pdf"));
        assert_ne!(a, b);
    }
}
