use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::assets;
use crate::services::asset_service::AssetService;

/// Route table: register, complete, download, delete.
pub fn routes() -> Router<AssetService> {
    Router::new()
        .route("/asset", post(assets::create_asset))
        .route(
            "/asset/{asset_id}",
            get(assets::get_asset)
                .put(assets::update_asset)
                .delete(assets::delete_asset),
        )
}
