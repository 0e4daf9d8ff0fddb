//! Object storage gateway.
//!
//! Uploads binary files (slide images, PDFs, cover images) to an
//! S3-compatible bucket under collision-resistant keys and returns public
//! URLs. Works against MinIO and similar providers via a custom endpoint
//! with path-style addressing.

mod client;

pub use client::{StorageClient, StorageConfig, StorageError, UploadFile};
