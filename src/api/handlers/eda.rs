use axum::extract::State;
use axum::Json;

use crate::assets::{eda_catalogue, EdaCatalogue};
use crate::AppState;

use super::ApiResponse;

/// GET /api/eda — EDA images with availability and warnings, plus the
/// written summary
pub async fn list(State(state): State<AppState>) -> Json<ApiResponse<EdaCatalogue>> {
    Json(ApiResponse::ok(eda_catalogue(&state.config.asset_dir)))
}
