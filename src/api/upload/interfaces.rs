pub use crate::api::profile::interfaces::MediaType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Binary payload handed to the pipeline. The file name is only used
/// for its extension and content type; the stored path is derived by
/// the pipeline.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl MediaFile {
    #[must_use]
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// Extension of the file name, if one can be determined.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
    }
}

/// Caller-supplied description of the item being published. The media
/// type is trusted from the caller; the pipeline does not sniff the
/// payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDescriptor {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub media_type: MediaType,
}

/// Record persisted after a successful blob upload. Constructed only
/// once the storage phase has succeeded, inserted exactly once, never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub media_type: MediaType,
    pub file_url: String,
    pub user_id: String,
    /// Stamped at metadata-write time, not at upload start.
    pub created_at: DateTime<Utc>,
}

/// Successful outcome of a publish: both phases completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    /// Publicly resolvable URL of the stored object.
    pub file_url: String,
    /// Storage path the object was written under.
    pub path: String,
}
