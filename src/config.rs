use std::path::{Path, PathBuf};

/// File name of the drift report within the report directory.
pub const DRIFT_REPORT_FILE_NAME: &str = "report.yaml";

/// File-system layout of one validation stage run.
///
/// Pure path construction; no directory is created until something is written
/// to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataValidationConfig {
    /// Directory datasets that passed validation are recorded under.
    pub valid_data_dir: PathBuf,
    /// Directory datasets that failed validation are recorded under.
    pub invalid_data_dir: PathBuf,
    /// Path the drift report is written to.
    pub drift_report_path: PathBuf,
}

impl DataValidationConfig {
    /// Derive the stage layout from a stage root directory.
    ///
    /// * `stage_dir` - Root directory of this validation stage's outputs.
    pub fn from_stage_dir<P: AsRef<Path>>(stage_dir: P) -> Self {
        let stage_dir = stage_dir.as_ref();
        DataValidationConfig {
            valid_data_dir: stage_dir.join("validated"),
            invalid_data_dir: stage_dir.join("invalid"),
            drift_report_path: stage_dir.join("drift_report").join(DRIFT_REPORT_FILE_NAME),
        }
    }
}
