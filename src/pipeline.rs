//! The validation stage itself: read, check structure, detect drift, emit the
//! artifact handed to the next pipeline stage.
use crate::config::DataValidationConfig;
use crate::data::Frame;
use crate::drift::DriftDetector;
use crate::errors::DriftwatchError;
use crate::schema::DatasetSchema;
use crate::validation::{check_numeric_columns, validate_column_count};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Immutable record of one validation run, consumed by the next pipeline
/// stage.
///
/// `valid_*_path` point at the original input files; this stage never writes
/// separate copies of the data, and `invalid_*_path` are always `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationArtifact {
    /// `true` when no column of the test dataset drifted from the train
    /// dataset.
    pub overall_status: bool,
    /// Path of the train dataset that passed validation.
    pub valid_train_path: PathBuf,
    /// Path of the test dataset that passed validation.
    pub valid_test_path: PathBuf,
    /// Path of a rejected train dataset.
    pub invalid_train_path: Option<PathBuf>,
    /// Path of a rejected test dataset.
    pub invalid_test_path: Option<PathBuf>,
    /// Path the drift report was written to.
    pub drift_report_path: PathBuf,
}

impl ValidationArtifact {
    /// Save the artifact to a json file.
    ///
    /// * `path` - Path to save the artifact to.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DriftwatchError> {
        fs::write(path.as_ref(), self.json_dump()?)
            .map_err(|e| DriftwatchError::UnableToWrite(path.as_ref().display().to_string(), e.to_string()))
    }

    /// Dump the artifact as a json object.
    pub fn json_dump(&self) -> Result<String, DriftwatchError> {
        serde_json::to_string(self).map_err(|e| DriftwatchError::UnableToWrite("artifact".to_string(), e.to_string()))
    }

    /// Load an artifact from a json string.
    ///
    /// * `json_str` - String object, which can be deserialized from json.
    pub fn from_json(json_str: &str) -> Result<Self, DriftwatchError> {
        serde_json::from_str::<Self>(json_str)
            .map_err(|e| DriftwatchError::UnableToRead("artifact".to_string(), e.to_string()))
    }

    /// Load an artifact from a path to a json artifact object.
    ///
    /// * `path` - Path to load the artifact from.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DriftwatchError> {
        let json_str = fs::read_to_string(path.as_ref())
            .map_err(|e| DriftwatchError::UnableToRead(path.as_ref().display().to_string(), e.to_string()))?;
        Self::from_json(&json_str)
    }
}

/// Runs the validation stage over one train/test dataset pair.
///
/// The schema is loaded once at construction and held read-only; each call to
/// [`DataValidator::validate`] is an independent run.
#[derive(Debug)]
pub struct DataValidator {
    schema: DatasetSchema,
    config: DataValidationConfig,
    detector: DriftDetector,
}

impl DataValidator {
    /// Create a validator, loading the schema from a YAML file.
    ///
    /// * `schema_path` - Path of the schema file.
    /// * `config` - File-system layout for this stage's outputs.
    pub fn new<P: AsRef<Path>>(schema_path: P, config: DataValidationConfig) -> Result<Self, DriftwatchError> {
        let schema = DatasetSchema::from_file(schema_path)?;
        Ok(DataValidator {
            schema,
            config,
            detector: DriftDetector::default(),
        })
    }

    /// Set the drift detector to use instead of the default one.
    pub fn set_detector(mut self, detector: DriftDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Validate a train/test dataset pair and produce the stage artifact.
    ///
    /// Reads both datasets, runs the structural checks on each (all four
    /// checks always run, failures are aggregated into one error), and only
    /// when the structure is sound runs drift detection, writes the report
    /// and assembles the artifact.
    pub fn validate<P: AsRef<Path>>(&self, train_path: P, test_path: P) -> Result<ValidationArtifact, DriftwatchError> {
        let train = Frame::read_csv(&train_path)?;
        let test = Frame::read_csv(&test_path)?;

        let mut error_message = String::new();
        if !validate_column_count(&train, &self.schema) {
            error_message.push_str("Train dataset does not contain all columns.\n");
        }
        if !validate_column_count(&test, &self.schema) {
            error_message.push_str("Test dataset does not contain all columns.\n");
        }
        let train_numeric = check_numeric_columns(&train, &self.schema);
        if !train_numeric.is_satisfied() {
            error_message.push_str(&format!(
                "Numerical columns are missing from the train dataset: {}.\n",
                train_numeric.missing_columns().join(", ")
            ));
        }
        let test_numeric = check_numeric_columns(&test, &self.schema);
        if !test_numeric.is_satisfied() {
            error_message.push_str(&format!(
                "Numerical columns are missing from the test dataset: {}.\n",
                test_numeric.missing_columns().join(", ")
            ));
        }
        if !error_message.is_empty() {
            return Err(DriftwatchError::FailedValidation(error_message));
        }

        let (overall_status, report) = self.detector.detect(&train, &test)?;
        DriftDetector::write_report(&report, &self.config.drift_report_path)?;
        info!("Drift report written to {}", self.config.drift_report_path.display());

        let artifact = ValidationArtifact {
            overall_status,
            valid_train_path: train_path.as_ref().to_path_buf(),
            valid_test_path: test_path.as_ref().to_path_buf(),
            invalid_train_path: None,
            invalid_test_path: None,
            drift_report_path: self.config.drift_report_path.clone(),
        };
        info!("Validation artifact: {:?}", artifact);
        Ok(artifact)
    }
}
