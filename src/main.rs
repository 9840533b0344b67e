use std::sync::Arc;

use passenger_satisfaction::api::router::create_router;
use passenger_satisfaction::artifacts::ArtifactStore;
use passenger_satisfaction::config::AppConfig;
use passenger_satisfaction::{assets, metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    // --- Trained artifacts: without them nothing can be served ---
    tracing::info!(dir = %config.artifact_dir.display(), "Loading artifacts...");
    let artifacts = ArtifactStore::load(&config).map_err(|e| {
        tracing::error!(error = %e, "Failed to load artifacts");
        e
    })?;

    assets::warn_missing(&config.asset_dir);

    let metrics_handle = metrics::init_metrics(&artifacts)?;

    tracing::info!(
        default_threshold = config.default_threshold,
        auth = config.has_api_token(),
        "Prediction API configured"
    );

    let state = AppState {
        artifacts: Arc::new(artifacts),
        config,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

/// `RUST_LOG` picks the filter; `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
