use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("storage rejected the upload: {0}")]
    Rejected(String),

    #[error("storage unreachable: {0}")]
    Unreachable(String),
}

/// Binary object storage addressed by caller-chosen paths.
///
/// Paths are not hash-derived; the upload pipeline owns the path scheme.
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Stores `content` under `path`. Overwriting semantics are the
    /// backend's concern; the pipeline never reuses a path.
    async fn upload(&self, path: &str, content: &[u8], content_type: &str)
        -> Result<(), BlobError>;

    /// Publicly resolvable URL for an object at `path`. Purely
    /// computational; does not check that the object exists.
    fn public_url(&self, path: &str) -> String;
}
