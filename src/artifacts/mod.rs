pub mod classifier;
pub mod encoder;
pub mod schema;

pub use classifier::{Classifier, DecisionTree, ProbabilisticClassifier, TreeNode};
pub use encoder::LabelEncoder;
pub use schema::ColumnSchema;

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::AppConfig;
use crate::errors::PredictError;
use crate::models::input::LABEL_ENCODED_FIELDS;

/// SHA-256 digests of the files a store was loaded from.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArtifactFingerprints {
    pub model: String,
    pub encoders: String,
    pub columns: String,
}

/// The trained artifacts, loaded once and read-only afterwards.
#[derive(Debug)]
pub struct ArtifactStore {
    classifier: Classifier,
    encoders: BTreeMap<String, LabelEncoder>,
    schema: ColumnSchema,
    fingerprints: ArtifactFingerprints,
}

impl ArtifactStore {
    /// Read and validate all three artifacts named by `config`.
    pub fn load(config: &AppConfig) -> Result<Self, PredictError> {
        let columns_path = config.columns_path();
        let (schema, columns_digest) = read_json::<ColumnSchema>(&columns_path)?;

        let encoders_path = config.encoders_path();
        let (encoders, encoders_digest) =
            read_json::<BTreeMap<String, LabelEncoder>>(&encoders_path)?;
        if let Some(field) = missing_encoder(&encoders) {
            return Err(PredictError::corrupt(
                &encoders_path,
                format!("no encoder for field {field:?}"),
            ));
        }

        let model_path = config.model_path();
        let (classifier, model_digest) = read_json::<Classifier>(&model_path)?;
        classifier
            .validate(schema.len())
            .map_err(|reason| PredictError::corrupt(&model_path, reason))?;

        tracing::info!(
            model = classifier.kind(),
            columns = schema.len(),
            encoders = encoders.len(),
            model_sha256 = %model_digest,
            "Artifacts loaded"
        );

        Ok(Self {
            classifier,
            encoders,
            schema,
            fingerprints: ArtifactFingerprints {
                model: model_digest,
                encoders: encoders_digest,
                columns: columns_digest,
            },
        })
    }

    /// Assemble a store from already-deserialized parts, applying the same
    /// checks as [`ArtifactStore::load`].
    pub fn from_parts(
        classifier: Classifier,
        encoders: BTreeMap<String, LabelEncoder>,
        schema: ColumnSchema,
    ) -> Result<Self, String> {
        if let Some(field) = missing_encoder(&encoders) {
            return Err(format!("no encoder for field {field:?}"));
        }
        classifier.validate(schema.len())?;

        Ok(Self {
            classifier,
            encoders,
            schema,
            fingerprints: ArtifactFingerprints::default(),
        })
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn encoder(&self, field: &str) -> Option<&LabelEncoder> {
        self.encoders.get(field)
    }

    pub fn encoders(&self) -> &BTreeMap<String, LabelEncoder> {
        &self.encoders
    }

    pub fn schema(&self) -> &ColumnSchema {
        &self.schema
    }

    pub fn fingerprints(&self) -> &ArtifactFingerprints {
        &self.fingerprints
    }
}

fn missing_encoder(encoders: &BTreeMap<String, LabelEncoder>) -> Option<&'static str> {
    LABEL_ENCODED_FIELDS
        .into_iter()
        .find(|f| !encoders.contains_key(*f))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<(T, String), PredictError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PredictError::ArtifactMissing {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(PredictError::corrupt(path, e)),
    };

    let value = serde_json::from_slice(&bytes).map_err(|e| PredictError::corrupt(path, e))?;
    let digest = format!("{:x}", Sha256::digest(&bytes));
    Ok((value, digest))
}
