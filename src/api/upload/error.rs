use crate::storage::{BlobError, MetadataError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("upload payload is empty")]
    EmptyFile,

    #[error("file name `{0}` has no extension")]
    MissingExtension(String),

    #[error("owner id must not be empty")]
    EmptyOwner,

    /// The storage phase failed. No metadata write was attempted and no
    /// object exists in storage.
    #[error("storage upload failed: {0}")]
    Storage(#[from] BlobError),

    /// The metadata phase failed after the storage phase succeeded. The
    /// stored object at `file_url` is orphaned: present in storage,
    /// referenced by nothing. The pipeline performs no compensating
    /// delete.
    #[error("metadata insert failed, stored object orphaned at {file_url}: {source}")]
    MetadataWrite {
        file_url: String,
        source: MetadataError,
    },
}

impl UploadError {
    /// URL of the object left behind in storage, if this failure
    /// orphaned one. Callers that want cleanup or reconciliation hang
    /// it off this.
    #[must_use]
    pub fn orphaned_url(&self) -> Option<&str> {
        match self {
            Self::MetadataWrite { file_url, .. } => Some(file_url),
            _ => None,
        }
    }
}
