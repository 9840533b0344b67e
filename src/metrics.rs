use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::artifacts::ArtifactStore;
use crate::models::SatisfactionLabel;

/// Install the Prometheus exporter and register all application metrics.
/// Returns a `PrometheusHandle` whose `render()` method produces the
/// text/plain Prometheus scrape payload.
pub fn init_metrics(store: &ArtifactStore) -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;

    // Pre-register counters so they appear even before the first increment.
    for label in [
        SatisfactionLabel::Satisfied,
        SatisfactionLabel::NeutralOrDissatisfied,
    ] {
        counter!("predictions_total", "label" => label.metric_key()).absolute(0);
    }
    counter!("predictions_rejected_total").absolute(0);
    counter!("prediction_failures_total").absolute(0);

    gauge!("model_columns").set(store.schema().len() as f64);

    // Histogram is lazily created on first record; force creation.
    histogram!("inference_latency_seconds").record(0.0);

    Ok(handle)
}
