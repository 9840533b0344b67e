use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::PredictError;

/// Category ↔ code mapping fixed at training time. The code of a category
/// is its index in `classes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "EncoderDocument", into = "EncoderDocument")]
pub struct LabelEncoder {
    classes: Vec<String>,
    index: HashMap<String, usize>,
}

#[derive(Serialize, Deserialize)]
struct EncoderDocument {
    classes: Vec<String>,
}

impl TryFrom<EncoderDocument> for LabelEncoder {
    type Error = String;

    fn try_from(doc: EncoderDocument) -> Result<Self, Self::Error> {
        LabelEncoder::new(doc.classes)
    }
}

impl From<LabelEncoder> for EncoderDocument {
    fn from(encoder: LabelEncoder) -> Self {
        EncoderDocument {
            classes: encoder.classes,
        }
    }
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self, String> {
        if classes.is_empty() {
            return Err("encoder has no classes".into());
        }

        let mut index = HashMap::with_capacity(classes.len());
        for (code, class) in classes.iter().enumerate() {
            if index.insert(class.clone(), code).is_some() {
                return Err(format!("duplicate class {class:?}"));
            }
        }

        Ok(Self { classes, index })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn try_encode(&self, value: &str) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// Encode `value` of categorical `field`; unseen values are an error.
    pub fn encode(&self, field: &str, value: &str) -> Result<usize, PredictError> {
        self.try_encode(value)
            .ok_or_else(|| PredictError::unknown_category(field, value))
    }
}
