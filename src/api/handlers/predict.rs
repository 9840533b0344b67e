use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::inference::process_submission;
use crate::models::{PassengerInput, PredictionResult};
use crate::AppState;

use super::ApiResponse;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct PredictRequest {
    pub input: PassengerInput,
    /// Falls back to the configured default threshold.
    pub threshold: Option<f64>,
}

#[derive(Serialize)]
pub struct PredictResponse {
    #[serde(flatten)]
    pub result: PredictionResult,
    /// Advisory shown when the probability falls below the threshold.
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/predict — score one passenger submission
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<PredictResponse>>, AppError> {
    let Json(body) = payload?;

    let problems = body.input.out_of_range();
    if !problems.is_empty() {
        return Err(AppError::BadRequest(problems.join("; ")));
    }

    let threshold = body.threshold.unwrap_or(state.config.default_threshold);
    let result = process_submission(&state.artifacts, &body.input, threshold)?;

    let message = (!result.is_satisfied()).then(|| {
        format!(
            "The model probability is below the selected threshold ({}). \
             You may try adjusting inputs or lowering the threshold.",
            result.threshold
        )
    });

    Ok(Json(ApiResponse::ok(PredictResponse { result, message })))
}
