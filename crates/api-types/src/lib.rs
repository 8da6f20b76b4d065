//! Shared request/response types used by API-facing crates.

use serde::{Deserialize, Serialize};

/// Classification of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Folder,
    File,
}

impl EntryType {
    #[must_use]
    pub fn from_is_dir(is_dir: bool) -> Self {
        if is_dir { Self::Folder } else { Self::File }
    }
}

/// One immediate child of a listed directory.
///
/// `entry_type` is only present for listings that carry every entry; the
/// folders-only listing leaves it out of the payload entirely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<EntryType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
