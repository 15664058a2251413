use crate::errors::DriftwatchError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Reference schema a dataset is validated against.
///
/// Loaded once from a YAML file and treated as read-only configuration from
/// then on. `columns` drives the column count check, `numerical_columns` the
/// numeric presence check; the latter is expected to be a subset of the former
/// but this is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSchema {
    columns: Vec<String>,
    numerical_columns: Vec<String>,
}

impl DatasetSchema {
    /// Load a schema from a YAML file.
    ///
    /// * `path` - Path of the schema file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DriftwatchError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| DriftwatchError::InvalidSchema(path.display().to_string(), e.to_string()))?;
        serde_yaml::from_str(&raw)
            .map_err(|e| DriftwatchError::InvalidSchema(path.display().to_string(), e.to_string()))
    }

    /// Build a schema directly from column name lists.
    pub fn new(columns: Vec<String>, numerical_columns: Vec<String>) -> Self {
        DatasetSchema {
            columns,
            numerical_columns,
        }
    }

    /// Ordered names of all expected columns.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Names of the columns expected to hold numeric data.
    pub fn numerical_columns(&self) -> &[String] {
        &self.numerical_columns
    }

    /// Number of expected columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}
