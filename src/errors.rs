use std::path::PathBuf;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Failures of the artifact → assembly → inference path.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("artifact not found: {}", path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("artifact {} is corrupt: {reason}", path.display())]
    ArtifactCorrupt { path: PathBuf, reason: String },

    #[error("unknown category {value:?} for field {field:?}")]
    UnknownCategory { field: String, value: String },

    #[error("threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),

    #[error("inference failed: {0}")]
    InferenceError(String),
}

impl PredictError {
    pub fn corrupt(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        PredictError::ArtifactCorrupt {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn unknown_category(field: &str, value: &str) -> Self {
        PredictError::UnknownCategory {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

impl From<PredictError> for AppError {
    fn from(e: PredictError) -> Self {
        match e {
            PredictError::UnknownCategory { .. } => AppError::Unprocessable(e.to_string()),
            PredictError::InvalidThreshold(_) => AppError::BadRequest(e.to_string()),
            other => AppError::Internal(other.into()),
        }
    }
}

/// Malformed request bodies (wrong types, negative or fractional ratings)
/// are caller errors, reported in the same envelope as range violations.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
