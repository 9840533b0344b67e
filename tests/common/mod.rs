use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;

use passenger_satisfaction::config::AppConfig;

/// Column order of the trained model.
pub const COLUMNS: [&str; 23] = [
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
];

/// Two-tree forest:
/// - `Online boarding` <= 3.5 → 0.25, else 0.85
/// - `Type of Travel` <= 0.5 (Business travel) → 0.7, else 0.2
#[allow(dead_code)]
pub fn forest_json() -> Value {
    json!({
        "kind": "random_forest",
        "n_features": COLUMNS.len(),
        "trees": [
            {"nodes": [
                {"feature": 10, "threshold": 3.5, "left": 1, "right": 2},
                {"value": 0.25},
                {"value": 0.85}
            ]},
            {"nodes": [
                {"feature": 3, "threshold": 0.5, "left": 1, "right": 2},
                {"value": 0.7},
                {"value": 0.2}
            ]}
        ]
    })
}

#[allow(dead_code)]
pub fn encoders_json() -> Value {
    json!({
        "Gender": {"classes": ["Female", "Male"]},
        "Customer Type": {"classes": ["Loyal Customer", "disloyal Customer"]},
        "Type of Travel": {"classes": ["Business travel", "Personal Travel"]}
    })
}

/// Write model, encoders and columns into `dir`.
#[allow(dead_code)]
pub fn write_artifacts(dir: &Path) {
    write_json(dir, "best_model.json", &forest_json());
    write_json(dir, "label_encoders.json", &encoders_json());
    write_json(dir, "columns.json", &json!(COLUMNS));
}

#[allow(dead_code)]
pub fn write_json(dir: &Path, name: &str, value: &Value) {
    std::fs::write(dir.join(name), serde_json::to_vec_pretty(value).unwrap())
        .expect("Failed to write fixture artifact");
}

/// A temp directory holding a complete artifact set.
#[allow(dead_code)]
pub fn artifact_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_artifacts(dir.path());
    dir
}

#[allow(dead_code)]
pub fn test_config(dir: &Path) -> AppConfig {
    let mut config = AppConfig::with_artifact_dir(dir);
    config.asset_dir = dir.to_path_buf();
    config
}

/// Female / Loyal Customer / Business travel / Business, age 30, every
/// rating 3, no delays. The fixture forest scores it at 0.475.
#[allow(dead_code)]
pub fn business_input_json() -> Value {
    json!({
        "Gender": "Female",
        "Customer Type": "Loyal Customer",
        "Type of Travel": "Business travel",
        "Class": "Business",
        "Age": 30,
        "Flight Distance": 500,
        "Departure Delay in Minutes": 0,
        "Arrival Delay in Minutes": 0,
        "Inflight wifi service": 3,
        "Cleanliness": 3,
        "Online boarding": 3,
        "Inflight entertainment": 3,
        "Gate location": 3,
        "Food and drink": 3,
        "Seat comfort": 3,
        "On-board service": 3,
        "Leg room service": 3,
        "Baggage handling": 3,
        "Checkin service": 3,
        "Inflight service": 3,
        "Ease of Online booking": 3,
        "Departure/Arrival time convenient": 3
    })
}
