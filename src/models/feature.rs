use serde::Serialize;

use crate::artifacts::ColumnSchema;

/// A single row of model inputs, ordered exactly as the [`ColumnSchema`]
/// it was aligned against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Build the row in schema order from `(column, value)` pairs. Schema
    /// columns with no pair are 0; pairs naming no schema column are
    /// returned as the second element.
    pub fn align<'a>(
        schema: &ColumnSchema,
        entries: &[(&'a str, f64)],
    ) -> (Self, Vec<&'a str>) {
        let values = schema
            .columns()
            .iter()
            .map(|column| {
                entries
                    .iter()
                    .find(|(name, _)| *name == column.as_str())
                    .map(|(_, value)| *value)
                    .unwrap_or(0.0)
            })
            .collect();

        let unmatched = entries
            .iter()
            .filter(|(name, _)| schema.position(name).is_none())
            .map(|(name, _)| *name)
            .collect();

        let vector = Self {
            columns: schema.columns().to_vec(),
            values,
        };
        (vector, unmatched)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }
}
