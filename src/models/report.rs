use serde::{Deserialize, Serialize};

/// A user-supplied report on the dashboard shelf.
///
/// `url` is a `blob:` reference from [`crate::blobs::BlobRegistry`]. It only
/// resolves within the process that registered it; entries read back after a
/// restart keep their name but point nowhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAttachment {
    pub name: String,
    pub url: String,
}
