use crate::artifacts::ProbabilisticClassifier;
use crate::errors::PredictError;
use crate::models::{FeatureVector, PredictionResult};

/// Reject thresholds outside [0, 1], including NaN.
pub fn check_threshold(threshold: f64) -> Result<f64, PredictError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(PredictError::InvalidThreshold(threshold))
    }
}

/// Score `vector` and label it against `threshold`.
pub fn predict<C>(
    classifier: &C,
    vector: &FeatureVector,
    threshold: f64,
) -> Result<PredictionResult, PredictError>
where
    C: ProbabilisticClassifier + ?Sized,
{
    let threshold = check_threshold(threshold)?;
    let probability = classifier.predict_proba(vector.values())?;
    Ok(PredictionResult::new(probability, threshold))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::ColumnSchema;
    use crate::models::SatisfactionLabel;

    /// Returns a fixed probability regardless of input.
    struct Fixed(f64);

    impl ProbabilisticClassifier for Fixed {
        fn n_features(&self) -> usize {
            1
        }

        fn predict_proba(&self, _features: &[f64]) -> Result<f64, PredictError> {
            Ok(self.0)
        }
    }

    struct Failing;

    impl ProbabilisticClassifier for Failing {
        fn n_features(&self) -> usize {
            1
        }

        fn predict_proba(&self, _features: &[f64]) -> Result<f64, PredictError> {
            Err(PredictError::InferenceError("shape mismatch".into()))
        }
    }

    fn vector() -> FeatureVector {
        let schema = ColumnSchema::new(vec!["Age".into()]).unwrap();
        FeatureVector::align(&schema, &[("Age", 30.0)]).0
    }

    #[test]
    fn test_threshold_monotonicity() {
        let p = 0.62;
        for step in 0..=100 {
            let threshold = step as f64 / 100.0;
            let result = predict(&Fixed(p), &vector(), threshold).unwrap();
            let expected = if threshold <= p {
                SatisfactionLabel::Satisfied
            } else {
                SatisfactionLabel::NeutralOrDissatisfied
            };
            assert_eq!(result.label, expected, "threshold {threshold}");
        }
    }

    #[test]
    fn test_probability_equal_to_threshold_is_satisfied() {
        let result = predict(&Fixed(0.5), &vector(), 0.5).unwrap();
        assert!(result.is_satisfied());
        assert_eq!(result.probability, 0.5);
        assert_eq!(result.threshold, 0.5);
    }

    #[test]
    fn test_extreme_thresholds() {
        assert!(predict(&Fixed(0.0), &vector(), 0.0).unwrap().is_satisfied());
        assert!(!predict(&Fixed(0.999), &vector(), 1.0).unwrap().is_satisfied());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        for threshold in [-0.01, 1.01, f64::NAN] {
            assert!(matches!(
                predict(&Fixed(0.5), &vector(), threshold),
                Err(PredictError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn test_classifier_failure_surfaces() {
        assert!(matches!(
            predict(&Failing, &vector(), 0.5),
            Err(PredictError::InferenceError(_))
        ));
    }
}
