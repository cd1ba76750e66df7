use crate::api::upload::error::UploadError;
use crate::api::upload::interfaces::{
    MediaFile, MediaType, Published, UploadDescriptor, UploadMetadata,
};
use crate::storage::{BlobStorage, MetadataError, MetadataStore};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Table the metadata record is inserted into.
pub const CONTENT_TABLE: &str = "content";

/// Orchestrates blob storage and the metadata store into one logical
/// "publish a media item" operation.
///
/// The two phases are strictly sequential and NOT transactional: a
/// storage failure aborts cleanly with no side effect, while a metadata
/// failure after a successful upload leaves the stored object orphaned
/// (see [`UploadError::MetadataWrite`]). No retries happen here; retry
/// policy belongs to the caller.
pub struct UploadPipeline {
    blob: Arc<dyn BlobStorage>,
    metadata: Arc<dyn MetadataStore>,
}

impl UploadPipeline {
    #[must_use]
    pub fn new(blob: Arc<dyn BlobStorage>, metadata: Arc<dyn MetadataStore>) -> Self {
        Self { blob, metadata }
    }

    /// Publishes a media item: uploads the payload, then persists its
    /// metadata record referencing the resolved public URL.
    pub async fn publish(
        &self,
        file: &MediaFile,
        owner_id: &str,
        descriptor: UploadDescriptor,
    ) -> Result<Published, UploadError> {
        if file.content.is_empty() {
            return Err(UploadError::EmptyFile);
        }
        if owner_id.trim().is_empty() {
            return Err(UploadError::EmptyOwner);
        }
        let extension = file
            .extension()
            .ok_or_else(|| UploadError::MissingExtension(file.file_name.clone()))?;

        // Phase 1: storage.
        let path = storage_path(descriptor.media_type, owner_id, extension);
        let content_type = mime_guess::from_path(&file.file_name).first_or_octet_stream();
        debug!(%path, size = file.content.len(), "uploading media object");
        self.blob
            .upload(&path, &file.content, content_type.essence_str())
            .await?;

        // Phase 2: metadata, referencing the resolved URL.
        let file_url = self.blob.public_url(&path);
        let record = UploadMetadata {
            title: descriptor.title,
            description: descriptor.description,
            tags: descriptor.tags,
            media_type: descriptor.media_type,
            file_url: file_url.clone(),
            user_id: owner_id.to_owned(),
            created_at: Utc::now(),
        };
        let record = serde_json::to_value(&record).map_err(|err| UploadError::MetadataWrite {
            file_url: file_url.clone(),
            source: MetadataError {
                table: CONTENT_TABLE.to_owned(),
                message: format!("failed to encode record: {err}"),
            },
        })?;

        match self.metadata.insert(CONTENT_TABLE, record).await {
            Ok(()) => {
                info!(%file_url, owner_id, "published media item");
                Ok(Published { file_url, path })
            }
            Err(source) => {
                warn!(%file_url, "metadata insert failed, stored object is orphaned");
                Err(UploadError::MetadataWrite { file_url, source })
            }
        }
    }
}

/// Derives a unique storage path, namespaced by media type and owner.
/// The millisecond timestamp alone is not collision-proof for
/// concurrent uploads from one owner, hence the random suffix.
fn storage_path(media_type: MediaType, owner_id: &str, extension: &str) -> String {
    let stamp = Utc::now().timestamp_millis();
    let salt = fastrand::u32(..);
    format!("{}/{owner_id}/{stamp}-{salt:08x}.{extension}", media_type.folder())
}
