use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::artifacts::ArtifactFingerprints;
use crate::models::input::CLASS;
use crate::models::{PassengerInput, TravelClass};
use crate::AppState;

use super::ApiResponse;

#[derive(Serialize)]
pub struct ModelDescription {
    pub kind: &'static str,
    pub columns: Vec<String>,
    /// Accepted values for every categorical field.
    pub categories: BTreeMap<String, Vec<String>>,
    pub default_threshold: f64,
    pub defaults: PassengerInput,
    pub fingerprints: ArtifactFingerprints,
}

/// GET /api/model — what the loaded model accepts
pub async fn describe(State(state): State<AppState>) -> Json<ApiResponse<ModelDescription>> {
    let store = &state.artifacts;

    let mut categories: BTreeMap<String, Vec<String>> = store
        .encoders()
        .iter()
        .map(|(field, encoder)| (field.clone(), encoder.classes().to_vec()))
        .collect();
    categories.insert(
        CLASS.to_string(),
        TravelClass::ALL.iter().map(|c| c.as_str().to_string()).collect(),
    );

    Json(ApiResponse::ok(ModelDescription {
        kind: store.classifier().kind(),
        columns: store.schema().columns().to_vec(),
        categories,
        default_threshold: state.config.default_threshold,
        defaults: PassengerInput::default(),
        fingerprints: store.fingerprints().clone(),
    }))
}
