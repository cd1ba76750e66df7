pub mod blob;
pub mod metadata;

pub use blob::{BlobError, BlobStorage};
pub use metadata::{MetadataError, MetadataStore};
