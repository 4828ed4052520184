use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::head_object::HeadObjectError;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::types::MetadataDirective;
use std::collections::HashMap;
use std::time::Duration;

use super::{ObjectStore, StorageError};

/// S3-backed object store. Metadata updates ride on CopyObject with the
/// REPLACE directive since S3 cannot mutate metadata in place.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn head_metadata(&self, key: &str) -> Result<HashMap<String, String>, StorageError> {
        let result = self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        match result {
            Ok(output) => Ok(output.metadata().cloned().unwrap_or_default()),
            // Only the missing-object case becomes NotFound; 403s and other
            // service errors stay opaque backend failures.
            Err(SdkError::ServiceError(err))
                if matches!(err.err(), HeadObjectError::NotFound(_)) =>
            {
                Err(StorageError::NotFound)
            }
            Err(err) => Err(StorageError::backend(err)),
        }
    }

    async fn replace_metadata(
        &self,
        key: &str,
        metadata: HashMap<String, String>,
    ) -> Result<(), StorageError> {
        self.client
            .copy_object()
            .bucket(&self.bucket)
            .copy_source(format!("{}/{}", self.bucket, key))
            .key(key)
            .set_metadata(Some(metadata))
            .metadata_directive(MetadataDirective::Replace)
            .send()
            .await
            .map_err(StorageError::backend)?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(StorageError::backend)?;

        Ok(())
    }

    async fn presign_put(&self, key: &str, expires_in: Duration) -> Result<String, StorageError> {
        let config = PresigningConfig::expires_in(expires_in).map_err(StorageError::backend)?;

        let presigned = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(config)
            .await
            .map_err(StorageError::backend)?;

        Ok(presigned.uri().to_string())
    }

    async fn presign_get(&self, key: &str, expires_in: Duration) -> Result<String, StorageError> {
        let config = PresigningConfig::expires_in(expires_in).map_err(StorageError::backend)?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(config)
            .await
            .map_err(StorageError::backend)?;

        Ok(presigned.uri().to_string())
    }
}
