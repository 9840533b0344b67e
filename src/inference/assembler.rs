use crate::artifacts::ArtifactStore;
use crate::errors::PredictError;
use crate::models::input::{LABEL_ENCODED_FIELDS, CLASS};
use crate::models::{FeatureVector, PassengerInput, TravelClass};

/// Turn one submission into a row aligned to the store's column schema.
///
/// - `Gender`, `Customer Type`, `Type of Travel` → trained label codes
/// - `Class` → `Class_Eco` / `Class_Eco Plus` indicators (Business is 0/0)
/// - numeric fields and ratings → passed through
/// - schema columns not produced above → 0
pub fn assemble(store: &ArtifactStore, input: &PassengerInput) -> Result<FeatureVector, PredictError> {
    let mut entries: Vec<(&str, f64)> = Vec::with_capacity(store.schema().len());

    for field in LABEL_ENCODED_FIELDS {
        let value = input.categorical(field).unwrap_or_default();
        let encoder = store.encoder(field).ok_or_else(|| {
            PredictError::InferenceError(format!("no encoder loaded for {field:?}"))
        })?;
        let code = encoder.encode(field, value)?;
        entries.push((field, code as f64));
    }

    let class = TravelClass::from_label(&input.class)
        .ok_or_else(|| PredictError::unknown_category(CLASS, &input.class))?;
    entries.extend(class.indicators());

    entries.extend(input.numeric_columns());
    entries.extend(
        input
            .ratings
            .columns()
            .into_iter()
            .map(|(name, score)| (name, f64::from(score))),
    );

    let (vector, unmatched) = FeatureVector::align(store.schema(), &entries);
    if !unmatched.is_empty() {
        tracing::debug!(columns = ?unmatched, "Assembled columns absent from schema were dropped");
    }

    Ok(vector)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::artifacts::{Classifier, ColumnSchema, LabelEncoder};
    use crate::models::ServiceRatings;

    fn schema_columns() -> Vec<String> {
        [
            "Gender",
            "Customer Type",
            "Age",
            "Type of Travel",
            "Flight Distance",
            "Inflight wifi service",
            "Departure/Arrival time convenient",
            "Ease of Online booking",
            "Gate location",
            "Food and drink",
            "Online boarding",
            "Seat comfort",
            "Inflight entertainment",
            "On-board service",
            "Leg room service",
            "Baggage handling",
            "Checkin service",
            "Inflight service",
            "Cleanliness",
            "Departure Delay in Minutes",
            "Arrival Delay in Minutes",
            "Class_Eco",
            "Class_Eco Plus",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn store_with(columns: Vec<String>) -> ArtifactStore {
        let encoder = |classes: &[&str]| {
            LabelEncoder::new(classes.iter().map(|s| s.to_string()).collect()).unwrap()
        };
        let mut encoders = BTreeMap::new();
        encoders.insert("Gender".to_string(), encoder(&["Female", "Male"]));
        encoders.insert(
            "Customer Type".to_string(),
            encoder(&["Loyal Customer", "disloyal Customer"]),
        );
        encoders.insert(
            "Type of Travel".to_string(),
            encoder(&["Business travel", "Personal Travel"]),
        );

        let width = columns.len();
        let classifier = Classifier::LogisticRegression {
            coefficients: vec![0.01; width],
            intercept: 0.0,
        };
        ArtifactStore::from_parts(classifier, encoders, ColumnSchema::new(columns).unwrap()).unwrap()
    }

    fn store() -> ArtifactStore {
        store_with(schema_columns())
    }

    fn business_input() -> PassengerInput {
        PassengerInput {
            gender: "Female".into(),
            customer_type: "Loyal Customer".into(),
            type_of_travel: "Business travel".into(),
            class: "Business".into(),
            age: 30.0,
            flight_distance: 500.0,
            departure_delay: 0.0,
            arrival_delay: 0.0,
            ratings: ServiceRatings::uniform(3),
        }
    }

    #[test]
    fn test_business_scenario() {
        let store = store();
        let v = assemble(&store, &business_input()).unwrap();

        assert_eq!(v.get("Class_Eco"), Some(0.0));
        assert_eq!(v.get("Class_Eco Plus"), Some(0.0));
        assert_eq!(v.get("Gender"), Some(0.0));
        assert_eq!(v.get("Customer Type"), Some(0.0));
        assert_eq!(v.get("Type of Travel"), Some(0.0));
        assert_eq!(v.get("Age"), Some(30.0));
        assert_eq!(v.get("Seat comfort"), Some(3.0));
        assert_eq!(v.get("Arrival Delay in Minutes"), Some(0.0));
    }

    #[test]
    fn test_class_one_hot_policy() {
        let store = store();
        let cases = [
            ("Business", 0.0, 0.0),
            ("Eco", 1.0, 0.0),
            ("Eco Plus", 0.0, 1.0),
        ];
        for (class, eco, eco_plus) in cases {
            let input = PassengerInput {
                class: class.into(),
                ..business_input()
            };
            let v = assemble(&store, &input).unwrap();
            assert_eq!(v.get("Class_Eco"), Some(eco), "{class}");
            assert_eq!(v.get("Class_Eco Plus"), Some(eco_plus), "{class}");
        }
    }

    #[test]
    fn test_codes_follow_encoder() {
        let store = store();
        let input = PassengerInput {
            gender: "Male".into(),
            type_of_travel: "Personal Travel".into(),
            ..business_input()
        };
        let v = assemble(&store, &input).unwrap();
        let gender = store.encoder("Gender").unwrap();

        assert_eq!(v.get("Gender"), Some(gender.try_encode("Male").unwrap() as f64));
        assert_eq!(v.get("Type of Travel"), Some(1.0));
    }

    #[test]
    fn test_unknown_categories_are_rejected() {
        let store = store();

        let bad_gender = PassengerInput {
            gender: "Other".into(),
            ..business_input()
        };
        assert!(matches!(
            assemble(&store, &bad_gender),
            Err(PredictError::UnknownCategory { ref field, .. }) if field == "Gender"
        ));

        let bad_class = PassengerInput {
            class: "First".into(),
            ..business_input()
        };
        assert!(matches!(
            assemble(&store, &bad_class),
            Err(PredictError::UnknownCategory { ref field, .. }) if field == "Class"
        ));
    }

    #[test]
    fn test_output_matches_schema_order() {
        let mut columns = schema_columns();
        columns.reverse();
        let store = store_with(columns.clone());

        let v = assemble(&store, &business_input()).unwrap();
        assert_eq!(v.columns(), columns.as_slice());
        assert_eq!(v.len(), columns.len());
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let store = store();
        let input = business_input();
        assert_eq!(assemble(&store, &input).unwrap(), assemble(&store, &input).unwrap());
    }

    #[test]
    fn test_extra_schema_columns_default_to_zero() {
        let mut columns = schema_columns();
        columns.push("Loyalty Tier".into());
        let store = store_with(columns);

        let v = assemble(&store, &business_input()).unwrap();
        assert_eq!(v.get("Loyalty Tier"), Some(0.0));
    }
}
