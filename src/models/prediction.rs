use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// SatisfactionLabel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SatisfactionLabel {
    Satisfied,
    #[serde(rename = "Neutral or Dissatisfied")]
    NeutralOrDissatisfied,
}

impl SatisfactionLabel {
    /// Inclusive: a probability equal to the threshold is `Satisfied`.
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        if probability >= threshold {
            SatisfactionLabel::Satisfied
        } else {
            SatisfactionLabel::NeutralOrDissatisfied
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SatisfactionLabel::Satisfied => "Satisfied",
            SatisfactionLabel::NeutralOrDissatisfied => "Neutral or Dissatisfied",
        }
    }

    /// Metric label value.
    pub fn metric_key(&self) -> &'static str {
        match self {
            SatisfactionLabel::Satisfied => "satisfied",
            SatisfactionLabel::NeutralOrDissatisfied => "neutral_or_dissatisfied",
        }
    }
}

impl fmt::Display for SatisfactionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PredictionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub id: Uuid,
    /// Probability of the positive ("Satisfied") class.
    pub probability: f64,
    pub threshold: f64,
    pub label: SatisfactionLabel,
    pub predicted_at: DateTime<Utc>,
}

impl PredictionResult {
    pub fn new(probability: f64, threshold: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            probability,
            threshold,
            label: SatisfactionLabel::from_probability(probability, threshold),
            predicted_at: Utc::now(),
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.label == SatisfactionLabel::Satisfied
    }
}
