use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    AssetStatus, CreateAssetResponse, DownloadResponse, STATUS_ATTRIBUTE, STATUS_UPLOADED,
};
use crate::storage::{ObjectStore, StorageError};

/// Core asset lifecycle service. Status lives entirely in object metadata
/// on the backend; the service holds nothing beyond the injected store
/// handle and the two expiry defaults.
#[derive(Clone)]
pub struct AssetService {
    store: Arc<dyn ObjectStore>,
    upload_expiry: Duration,
    download_expiry: Duration,
}

impl AssetService {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        upload_expiry_secs: u64,
        download_expiry_secs: u64,
    ) -> Self {
        Self {
            store,
            upload_expiry: Duration::from_secs(upload_expiry_secs),
            download_expiry: Duration::from_secs(download_expiry_secs),
        }
    }

    /// Register a new asset: mint an id and issue the upload URL. No object
    /// exists until the client uploads against the URL.
    pub async fn create_asset(&self) -> Result<CreateAssetResponse, AppError> {
        let id = Uuid::new_v4();

        let upload_url = self
            .store
            .presign_put(&id.to_string(), self.upload_expiry)
            .await
            .map_err(|err| AppError::internal_with("Could not create upload URL", err))?;

        tracing::info!("Created asset {}", id);
        Ok(CreateAssetResponse { id, upload_url })
    }

    /// Mark an asset's upload as completed. Rejects any status other than
    /// the uploaded marker, unknown assets, and duplicate completions.
    pub async fn complete_asset(&self, asset_id: &str, status: &str) -> Result<(), AppError> {
        if status != STATUS_UPLOADED {
            return Err(AppError::invalid_request("Invalid status"));
        }

        let mut metadata = self.fetch_metadata(asset_id).await?;
        if AssetStatus::from_metadata(&metadata) == AssetStatus::Uploaded {
            return Err(AppError::conflict(format!(
                "Upload of asset {} is already completed",
                asset_id
            )));
        }

        // Head-then-copy is not atomic: two concurrent completions can both
        // observe a pending status and both write the replacement. The guard
        // above only rejects sequential duplicates.
        metadata.insert(STATUS_ATTRIBUTE.to_string(), STATUS_UPLOADED.to_string());
        self.store
            .replace_metadata(asset_id, metadata)
            .await
            .map_err(|err| storage_error(asset_id, err))?;

        tracing::info!("Completed upload of asset {}", asset_id);
        Ok(())
    }

    /// Issue a download URL for a completed asset. `timeout_secs` overrides
    /// the default expiry when supplied; callers validate positivity.
    pub async fn download_url(
        &self,
        asset_id: &str,
        timeout_secs: Option<u64>,
    ) -> Result<DownloadResponse, AppError> {
        let expires_in = timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(self.download_expiry);

        let metadata = self.fetch_metadata(asset_id).await?;
        if AssetStatus::from_metadata(&metadata) != AssetStatus::Uploaded {
            return Err(AppError::conflict(format!(
                "Asset {} has not been uploaded",
                asset_id
            )));
        }

        let download_url = self
            .store
            .presign_get(asset_id, expires_in)
            .await
            .map_err(|err| AppError::internal_with("Could not create download URL", err))?;

        Ok(DownloadResponse { download_url })
    }

    /// Delete the stored object. No existence check first: deleting an
    /// unknown id is benign success.
    pub async fn delete_asset(&self, asset_id: &str) -> Result<(), AppError> {
        self.store
            .delete(asset_id)
            .await
            .map_err(|err| storage_error(asset_id, err))?;

        tracing::info!("Deleted asset {}", asset_id);
        Ok(())
    }

    async fn fetch_metadata(&self, asset_id: &str) -> Result<HashMap<String, String>, AppError> {
        self.store
            .head_metadata(asset_id)
            .await
            .map_err(|err| storage_error(asset_id, err))
    }
}

fn storage_error(asset_id: &str, err: StorageError) -> AppError {
    match err {
        StorageError::NotFound => AppError::not_found(format!("Asset {} not found", asset_id)),
        StorageError::Backend(cause) => {
            AppError::internal_with("Object storage request failed", cause)
        }
    }
}
