use metrics::{counter, histogram};
use std::time::Instant;

use crate::artifacts::ArtifactStore;
use crate::errors::PredictError;
use crate::models::{PassengerInput, PredictionResult};

use super::{assemble, predict};

/// Run one submission through the pipeline:
/// 1. Assemble the feature row
/// 2. Validate the threshold, score and label the row
pub fn process_submission(
    store: &ArtifactStore,
    input: &PassengerInput,
    threshold: f64,
) -> Result<PredictionResult, PredictError> {
    let start = Instant::now();

    let outcome = assemble(store, input)
        .and_then(|vector| predict(store.classifier(), &vector, threshold));

    match &outcome {
        Ok(result) => {
            histogram!("inference_latency_seconds").record(start.elapsed().as_secs_f64());
            counter!("predictions_total", "label" => result.label.metric_key()).increment(1);
            tracing::info!(
                id = %result.id,
                probability = result.probability,
                threshold = result.threshold,
                label = %result.label,
                "Prediction served"
            );
        }
        Err(e @ (PredictError::UnknownCategory { .. } | PredictError::InvalidThreshold(_))) => {
            counter!("predictions_rejected_total").increment(1);
            tracing::warn!(error = %e, "Submission rejected");
        }
        Err(e) => {
            counter!("prediction_failures_total").increment(1);
            tracing::error!(error = %e, "Inference failed");
        }
    }

    outcome
}
