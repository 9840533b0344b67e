use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Ordered feature columns the classifier was trained on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ColumnSchema(Vec<String>);

impl TryFrom<Vec<String>> for ColumnSchema {
    type Error = String;

    fn try_from(columns: Vec<String>) -> Result<Self, Self::Error> {
        ColumnSchema::new(columns)
    }
}

impl From<ColumnSchema> for Vec<String> {
    fn from(schema: ColumnSchema) -> Self {
        schema.0
    }
}

impl ColumnSchema {
    pub fn new(columns: Vec<String>) -> Result<Self, String> {
        if columns.is_empty() {
            return Err("column schema is empty".into());
        }

        let mut seen = HashSet::with_capacity(columns.len());
        if let Some(dup) = columns.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(format!("duplicate column {dup:?}"));
        }

        Ok(Self(columns))
    }

    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.0.iter().position(|c| c == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.position(column).is_some()
    }
}
