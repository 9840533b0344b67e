use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_FILE: &str = "best_model.json";
pub const DEFAULT_ENCODERS_FILE: &str = "label_encoders.json";
pub const DEFAULT_COLUMNS_FILE: &str = "columns.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    // Trained artifacts
    pub artifact_dir: PathBuf,
    pub model_file: String,
    pub encoders_file: String,
    pub columns_file: String,

    // Optional EDA images
    pub asset_dir: PathBuf,

    pub default_threshold: f64,

    /// Bearer token for /api routes; auth is disabled when unset.
    pub api_token: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let default_threshold: f64 = env::var("DEFAULT_THRESHOLD")
            .unwrap_or_else(|_| "0.5".into())
            .parse()?;
        if !(0.0..=1.0).contains(&default_threshold) {
            anyhow::bail!("DEFAULT_THRESHOLD must be within [0, 1], got {default_threshold}");
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()?,

            artifact_dir: env::var("ARTIFACT_DIR")
                .unwrap_or_else(|_| "artifacts".into())
                .into(),
            model_file: env::var("MODEL_FILE").unwrap_or_else(|_| DEFAULT_MODEL_FILE.into()),
            encoders_file: env::var("ENCODERS_FILE")
                .unwrap_or_else(|_| DEFAULT_ENCODERS_FILE.into()),
            columns_file: env::var("COLUMNS_FILE").unwrap_or_else(|_| DEFAULT_COLUMNS_FILE.into()),

            asset_dir: env::var("ASSET_DIR").unwrap_or_else(|_| "assets".into()).into(),

            default_threshold,

            api_token: env::var("API_TOKEN").ok().filter(|t| !t.is_empty()),
        })
    }

    /// Config rooted at `artifact_dir` with every other setting at its default.
    pub fn with_artifact_dir(artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 0,
            artifact_dir: artifact_dir.into(),
            model_file: DEFAULT_MODEL_FILE.into(),
            encoders_file: DEFAULT_ENCODERS_FILE.into(),
            columns_file: DEFAULT_COLUMNS_FILE.into(),
            asset_dir: "assets".into(),
            default_threshold: 0.5,
            api_token: None,
        }
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.model_file)
    }

    pub fn encoders_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.encoders_file)
    }

    pub fn columns_path(&self) -> PathBuf {
        self.artifact_dir.join(&self.columns_file)
    }

    /// Returns true if bearer-token auth is configured.
    pub fn has_api_token(&self) -> bool {
        self.api_token.is_some()
    }
}
