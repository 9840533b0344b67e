pub mod api;
pub mod artifacts;
pub mod assets;
pub mod config;
pub mod errors;
pub mod inference;
pub mod metrics;
pub mod models;

use std::sync::Arc;

use crate::artifacts::ArtifactStore;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub artifacts: Arc<ArtifactStore>,
    pub config: AppConfig,
    pub metrics_handle: metrics_exporter_prometheus::PrometheusHandle,
}
