use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::errors::AppError;
use crate::models::{CreateAssetResponse, DownloadQuery, DownloadResponse, UpdateAssetRequest};
use crate::services::asset_service::AssetService;

/// POST /asset
pub async fn create_asset(
    State(service): State<AssetService>,
) -> Result<Json<CreateAssetResponse>, AppError> {
    service.create_asset().await.map(Json)
}

/// PUT /asset/{asset_id}
///
/// The body comes in through its rejection so malformed JSON maps to the
/// envelope's 400 instead of the extractor's default reply.
pub async fn update_asset(
    State(service): State<AssetService>,
    Path(asset_id): Path<String>,
    body: Result<Json<UpdateAssetRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = body.map_err(|_| AppError::invalid_request("Invalid request"))?;

    service.complete_asset(&asset_id, &request.status).await?;
    Ok(StatusCode::OK)
}

/// GET /asset/{asset_id}?timeout=<seconds>
pub async fn get_asset(
    State(service): State<AssetService>,
    Path(asset_id): Path<String>,
    Query(query): Query<DownloadQuery>,
) -> Result<Json<DownloadResponse>, AppError> {
    let timeout = parse_timeout(query.timeout.as_deref())?;

    service.download_url(&asset_id, timeout).await.map(Json)
}

/// DELETE /asset/{asset_id}
pub async fn delete_asset(
    State(service): State<AssetService>,
    Path(asset_id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete_asset(&asset_id).await?;
    Ok(StatusCode::OK)
}

/// Parse the raw `timeout` value, requiring a positive number of seconds.
fn parse_timeout(raw: Option<&str>) -> Result<Option<u64>, AppError> {
    match raw {
        None => Ok(None),
        Some(value) => match value.parse::<i64>() {
            Ok(secs) if secs > 0 => Ok(Some(secs as u64)),
            _ => Err(AppError::invalid_request("Invalid timeout")),
        },
    }
}
