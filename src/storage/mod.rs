use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

#[cfg(test)]
pub mod memory;
pub mod s3;

pub use s3::S3ObjectStore;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by an object storage backend. Only "the object does not
/// exist" is distinguished; every other failure is opaque and carries its
/// cause for logging.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found")]
    NotFound,

    #[error("object storage request failed")]
    Backend(#[source] BoxError),
}

impl StorageError {
    pub fn backend(cause: impl Into<BoxError>) -> Self {
        Self::Backend(cause.into())
    }
}

/// Storage backend consumed by the asset service: metadata reads, full
/// metadata replacement, deletion, and presigned upload/download URLs.
/// Injected as a trait object so tests can substitute an in-memory double.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// User metadata of the object stored under `key`.
    async fn head_metadata(&self, key: &str) -> Result<HashMap<String, String>, StorageError>;

    /// Replace the full user-metadata mapping of the object under `key`.
    /// The backend has no partial-attribute update, so callers
    /// read-modify-write the whole mapping.
    async fn replace_metadata(
        &self,
        key: &str,
        metadata: HashMap<String, String>,
    ) -> Result<(), StorageError>;

    /// Delete the object under `key`. Deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Presigned URL authorizing a single PUT of `key`, valid for `expires_in`.
    async fn presign_put(&self, key: &str, expires_in: Duration) -> Result<String, StorageError>;

    /// Presigned URL authorizing a single GET of `key`, valid for `expires_in`.
    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, StorageError>;
}
