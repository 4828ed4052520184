use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// User-metadata attribute holding an asset's lifecycle status. The AWS SDK
/// returns metadata keys lowercased, so the key is kept that way.
pub const STATUS_ATTRIBUTE: &str = "asset-status";

/// Marker value for a completed upload.
pub const STATUS_UPLOADED: &str = "uploaded";

/// Lifecycle status of a registered asset, projected from the status
/// attribute on the stored object. An object carrying no attribute has been
/// uploaded but never marked complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Uploaded,
}

impl AssetStatus {
    /// Project the status out of an object's user metadata. The attribute is
    /// interpreted here and nowhere else.
    pub fn from_metadata(metadata: &HashMap<String, String>) -> Self {
        match metadata.get(STATUS_ATTRIBUTE).map(String::as_str) {
            Some(STATUS_UPLOADED) => Self::Uploaded,
            _ => Self::Pending,
        }
    }
}

/// Body of POST /asset responses.
#[derive(Debug, Serialize)]
pub struct CreateAssetResponse {
    pub id: Uuid,
    pub upload_url: String,
}

/// Body of PUT /asset/{asset_id} requests. The field is capitalized on the
/// wire.
#[derive(Debug, Deserialize)]
pub struct UpdateAssetRequest {
    #[serde(rename = "Status")]
    pub status: String,
}

/// Query parameters of GET /asset/{asset_id}. `timeout` stays a raw string
/// so a non-numeric value maps to the envelope's 400 rather than an
/// extractor rejection.
#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    pub timeout: Option<String>,
}

/// Body of GET /asset/{asset_id} responses.
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub download_url: String,
}
