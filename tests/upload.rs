use async_trait::async_trait;
use prism_client::api::upload::error::UploadError;
use prism_client::api::upload::interfaces::{MediaFile, MediaType, UploadDescriptor};
use prism_client::api::upload::service::{UploadPipeline, CONTENT_TABLE};
use prism_client::storage::{BlobError, BlobStorage, MetadataError, MetadataStore};
use rstest::rstest;
use serde_json::Value;
use std::sync::{Arc, Mutex};

struct RecordedUpload {
    path: String,
    size: usize,
    content_type: String,
}

struct FakeBlobStorage {
    fail: bool,
    uploads: Mutex<Vec<RecordedUpload>>,
}

impl FakeBlobStorage {
    fn working() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            uploads: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            uploads: Mutex::new(Vec::new()),
        })
    }

    fn stored_paths(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|upload| upload.path.clone())
            .collect()
    }
}

#[async_trait]
impl BlobStorage for FakeBlobStorage {
    async fn upload(
        &self,
        path: &str,
        content: &[u8],
        content_type: &str,
    ) -> Result<(), BlobError> {
        if self.fail {
            return Err(BlobError::Unreachable("storage is down".to_owned()));
        }
        self.uploads.lock().unwrap().push(RecordedUpload {
            path: path.to_owned(),
            size: content.len(),
            content_type: content_type.to_owned(),
        });
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("https://cdn.example.com/media/{path}")
    }
}

struct FakeMetadataStore {
    fail: bool,
    inserts: Mutex<Vec<(String, Value)>>,
}

impl FakeMetadataStore {
    fn working() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            inserts: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            inserts: Mutex::new(Vec::new()),
        })
    }

    fn records(&self) -> Vec<(String, Value)> {
        self.inserts.lock().unwrap().clone()
    }
}

#[async_trait]
impl MetadataStore for FakeMetadataStore {
    async fn insert(&self, table: &str, record: Value) -> Result<(), MetadataError> {
        if self.fail {
            return Err(MetadataError {
                table: table.to_owned(),
                message: "constraint violation".to_owned(),
            });
        }
        self.inserts.lock().unwrap().push((table.to_owned(), record));
        Ok(())
    }
}

fn image_descriptor() -> UploadDescriptor {
    UploadDescriptor {
        title: "T".to_owned(),
        description: "A test image".to_owned(),
        tags: vec!["a".to_owned()],
        media_type: MediaType::Image,
    }
}

fn sample_image() -> MediaFile {
    MediaFile::new("photo.jpg", vec![0u8; 5 * 1024])
}

#[tokio::test]
async fn storage_failure_writes_no_metadata() {
    let blob = FakeBlobStorage::failing();
    let metadata = FakeMetadataStore::working();
    let pipeline = UploadPipeline::new(blob.clone(), metadata.clone());

    let result = pipeline
        .publish(&sample_image(), "u1", image_descriptor())
        .await;

    assert!(matches!(result, Err(UploadError::Storage(_))));
    assert!(metadata.records().is_empty(), "no metadata record expected");
    assert!(blob.stored_paths().is_empty());
}

#[tokio::test]
async fn successful_publish_links_one_record_to_the_stored_object() {
    let blob = FakeBlobStorage::working();
    let metadata = FakeMetadataStore::working();
    let pipeline = UploadPipeline::new(blob.clone(), metadata.clone());

    let published = pipeline
        .publish(&sample_image(), "u1", image_descriptor())
        .await
        .expect("publish should succeed");

    // The returned URL is the one resolved from the storage phase.
    let paths = blob.stored_paths();
    assert_eq!(paths.len(), 1);
    assert_eq!(published.path, paths[0]);
    assert_eq!(published.file_url, blob.public_url(&paths[0]));
    assert!(paths[0].starts_with("images/u1/"));
    assert!(paths[0].ends_with(".jpg"));

    // Exactly one metadata record, referencing that URL.
    let records = metadata.records();
    assert_eq!(records.len(), 1);
    let (table, record) = &records[0];
    assert_eq!(table, CONTENT_TABLE);
    assert_eq!(record["title"], "T");
    assert_eq!(record["mediaType"], "image");
    assert_eq!(record["tags"], serde_json::json!(["a"]));
    assert_eq!(record["fileUrl"], published.file_url.as_str());
    assert_eq!(record["userId"], "u1");
    let created_at = record["createdAt"].as_str().expect("createdAt is a string");
    assert!(!created_at.is_empty());
}

#[tokio::test]
async fn metadata_failure_leaves_the_stored_object_orphaned() {
    let blob = FakeBlobStorage::working();
    let metadata = FakeMetadataStore::failing();
    let pipeline = UploadPipeline::new(blob.clone(), metadata.clone());

    let result = pipeline
        .publish(&sample_image(), "u1", image_descriptor())
        .await;

    let err = result.expect_err("metadata failure must surface");
    // The object is still present in storage, referenced by nothing.
    let paths = blob.stored_paths();
    assert_eq!(paths.len(), 1);
    assert_eq!(err.orphaned_url(), Some(blob.public_url(&paths[0]).as_str()));
    assert!(metadata.records().is_empty());
}

#[tokio::test]
async fn content_type_is_derived_from_the_file_name() {
    let blob = FakeBlobStorage::working();
    let metadata = FakeMetadataStore::working();
    let pipeline = UploadPipeline::new(blob.clone(), metadata);

    pipeline
        .publish(&sample_image(), "u1", image_descriptor())
        .await
        .expect("publish should succeed");

    let uploads = blob.uploads.lock().unwrap();
    assert_eq!(uploads[0].content_type, "image/jpeg");
    assert_eq!(uploads[0].size, 5 * 1024);
}

#[tokio::test]
async fn concurrent_publishes_for_one_owner_use_distinct_paths() {
    let blob = FakeBlobStorage::working();
    let metadata = FakeMetadataStore::working();
    let pipeline = UploadPipeline::new(blob.clone(), metadata);

    let file_a = sample_image();
    let file_b = sample_image();
    let first = pipeline.publish(&file_a, "u1", image_descriptor());
    let second = pipeline.publish(&file_b, "u1", image_descriptor());
    let (first, second) = tokio::join!(first, second);

    let first = first.expect("first publish");
    let second = second.expect("second publish");
    assert_ne!(first.path, second.path);
}

#[rstest]
#[case::empty_payload(MediaFile::new("photo.jpg", Vec::new()), "u1")]
#[case::empty_owner(sample_image(), "")]
#[case::no_extension(MediaFile::new("photo", vec![1]), "u1")]
#[tokio::test]
async fn invalid_input_is_rejected_before_any_side_effect(
    #[case] file: MediaFile,
    #[case] owner_id: &str,
) {
    let blob = FakeBlobStorage::working();
    let metadata = FakeMetadataStore::working();
    let pipeline = UploadPipeline::new(blob.clone(), metadata.clone());

    let result = pipeline.publish(&file, owner_id, image_descriptor()).await;

    assert!(result.is_err());
    assert!(blob.stored_paths().is_empty());
    assert!(metadata.records().is_empty());
}
