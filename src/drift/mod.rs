//! Per-column distribution drift detection between two datasets.
pub mod stats;

use crate::data::Frame;
use crate::errors::DriftwatchError;
use hashbrown::HashMap;
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use stats::ks_2samp;

/// Significance level below which a column is flagged as drifted.
pub const DEFAULT_DRIFT_THRESHOLD: f64 = 0.05;

/// Drift outcome for a single column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnDrift {
    /// Raw p-value of the two-sample test.
    pub p_value: f64,
    /// Whether the p-value fell below the detector threshold.
    pub drift_detected: bool,
}

/// Mapping from column name to its drift outcome, one entry per column of the
/// base dataset.
pub type DriftReport = HashMap<String, ColumnDrift>;

/// Detects distribution drift between a base and a current dataset with a
/// per-column two-sample Kolmogorov-Smirnov test.
#[derive(Debug, Clone, Copy)]
pub struct DriftDetector {
    threshold: f64,
}

impl Default for DriftDetector {
    fn default() -> Self {
        DriftDetector {
            threshold: DEFAULT_DRIFT_THRESHOLD,
        }
    }
}

impl DriftDetector {
    /// Create a detector with a custom significance threshold.
    ///
    /// * `threshold` - Columns with a p-value below this are flagged.
    pub fn new(threshold: f64) -> Self {
        DriftDetector { threshold }
    }

    /// Test every column of `base` against the same-named column of `current`.
    ///
    /// Columns are taken in the base dataset's order and looked up by name in
    /// the current dataset; a name without a counterpart is a hard error, it
    /// is never skipped. Returns the overall status, `true` only when no
    /// column drifted, together with the full per-column report.
    pub fn detect(&self, base: &Frame, current: &Frame) -> Result<(bool, DriftReport), DriftwatchError> {
        // Resolve every column pair up front so a missing or empty column
        // fails before any test has run.
        let pairs = base
            .column_names()
            .iter()
            .map(|name| {
                let base_values = base
                    .column(name)
                    .ok_or_else(|| DriftwatchError::ColumnMissing(name.clone()))?;
                let current_values = current
                    .column(name)
                    .ok_or_else(|| DriftwatchError::ColumnMissing(name.clone()))?;
                if base_values.is_empty() || current_values.is_empty() {
                    return Err(DriftwatchError::EmptyColumn(name.clone()));
                }
                Ok((name, base_values, current_values))
            })
            .collect::<Result<Vec<_>, DriftwatchError>>()?;

        // Per-column tests are independent; run them on the rayon pool and
        // collect in base column order so results stay deterministic.
        let tested: Vec<(String, ColumnDrift)> = pairs
            .into_par_iter()
            .map(|(name, base_values, current_values)| {
                let test = ks_2samp(base_values, current_values);
                let drift = ColumnDrift {
                    p_value: test.p_value,
                    drift_detected: test.p_value < self.threshold,
                };
                (name.clone(), drift)
            })
            .collect();

        let mut status = true;
        let mut report = DriftReport::with_capacity(tested.len());
        for (name, drift) in tested {
            if drift.drift_detected {
                status = false;
                info!("Drift detected in column {} (p-value: {})", name, drift.p_value);
            }
            report.insert(name, drift);
        }
        Ok((status, report))
    }

    /// Write a drift report to a YAML file, creating the containing directory
    /// if it does not exist. An existing report at the same path is replaced.
    pub fn write_report<P: AsRef<Path>>(report: &DriftReport, path: P) -> Result<(), DriftwatchError> {
        let path = path.as_ref();
        let unwritable = |e: String| DriftwatchError::UnableToWrite(path.display().to_string(), e);

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| unwritable(e.to_string()))?;
        }
        let content = serde_yaml::to_string(report).map_err(|e| unwritable(e.to_string()))?;
        fs::write(path, content).map_err(|e| unwritable(e.to_string()))
    }

    /// Read a drift report back from a YAML file.
    pub fn read_report<P: AsRef<Path>>(path: P) -> Result<DriftReport, DriftwatchError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| DriftwatchError::UnableToRead(path.display().to_string(), e.to_string()))?;
        serde_yaml::from_str(&raw)
            .map_err(|e| DriftwatchError::UnableToRead(path.display().to_string(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    fn normal_sample(mean: f64, n: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        let normal = Normal::new(mean, 1.0).unwrap();
        (0..n).map(|_| normal.sample(&mut rng)).collect()
    }

    fn two_column_frame(a: Vec<f64>, b: Vec<f64>) -> Frame {
        let rows = a.len();
        let mut data = a;
        data.extend(b);
        Frame::new(vec!["a".to_string(), "b".to_string()], data, rows)
    }

    #[test]
    fn test_no_drift_on_identical_frames() {
        let frame = two_column_frame(normal_sample(0.0, 100, 1), normal_sample(0.0, 100, 2));
        let (status, report) = DriftDetector::default().detect(&frame, &frame).unwrap();
        assert!(status);
        assert_eq!(report.len(), 2);
        for drift in report.values() {
            assert!(!drift.drift_detected);
            assert_eq!(drift.p_value, 1.0);
        }
    }

    #[test]
    fn test_shifted_column_is_flagged() {
        let base = two_column_frame(normal_sample(0.0, 100, 1), normal_sample(0.0, 100, 2));
        // shift column "a" by 10 standard deviations, leave "b" untouched
        let current = two_column_frame(normal_sample(10.0, 100, 3), normal_sample(0.0, 100, 2));

        let (status, report) = DriftDetector::default().detect(&base, &current).unwrap();
        assert!(!status);
        assert!(report["a"].drift_detected);
        assert!(report["a"].p_value < DEFAULT_DRIFT_THRESHOLD);
        assert!(!report["b"].drift_detected);
    }

    #[test]
    fn test_detect_is_deterministic() {
        let base = two_column_frame(normal_sample(0.0, 50, 4), normal_sample(1.0, 50, 5));
        let current = two_column_frame(normal_sample(0.5, 50, 6), normal_sample(1.0, 50, 7));

        let detector = DriftDetector::default();
        let (first_status, first) = detector.detect(&base, &current).unwrap();
        let (second_status, second) = detector.detect(&base, &current).unwrap();
        assert_eq!(first_status, second_status);
        for (name, drift) in &first {
            assert_eq!(second[name].p_value, drift.p_value);
            assert_eq!(second[name].drift_detected, drift.drift_detected);
        }
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let base = two_column_frame(vec![1.0, 2.0], vec![3.0, 4.0]);
        let current = Frame::new(vec!["a".to_string()], vec![1.0, 2.0], 2);

        let err = DriftDetector::default().detect(&base, &current).unwrap_err();
        assert!(matches!(err, DriftwatchError::ColumnMissing(name) if name == "b"));
    }

    #[test]
    fn test_empty_column_is_an_error() {
        let base = Frame::new(vec!["a".to_string()], vec![], 0);
        let current = Frame::new(vec!["a".to_string()], vec![1.0, 2.0], 2);

        let err = DriftDetector::default().detect(&base, &current).unwrap_err();
        assert!(matches!(err, DriftwatchError::EmptyColumn(name) if name == "a"));
    }

    #[test]
    fn test_threshold_controls_flagging() {
        let base = two_column_frame(normal_sample(0.0, 50, 8), normal_sample(0.0, 50, 9));
        let current = two_column_frame(normal_sample(0.0, 50, 10), normal_sample(0.0, 50, 11));

        // p-values are in (0, 1]; a threshold above every p-value flags all
        // columns, a threshold of zero flags none
        let (status, report) = DriftDetector::new(0.0).detect(&base, &current).unwrap();
        assert!(status);
        assert!(report.values().all(|d| !d.drift_detected));

        let (status, report) = DriftDetector::new(1.1).detect(&base, &current).unwrap();
        assert!(!status);
        assert!(report.values().all(|d| d.drift_detected));
    }

    #[test]
    fn test_report_round_trip() {
        let base = two_column_frame(normal_sample(0.0, 60, 12), normal_sample(2.0, 60, 13));
        let current = two_column_frame(normal_sample(8.0, 60, 14), normal_sample(2.0, 60, 15));
        let (_, report) = DriftDetector::default().detect(&base, &current).unwrap();

        let dir = tempfile::tempdir().unwrap();
        // parent directories are created as needed
        let path = dir.path().join("drift_report").join("report.yaml");
        DriftDetector::write_report(&report, &path).unwrap();
        let restored = DriftDetector::read_report(&path).unwrap();
        assert_eq!(restored, report);
    }
}
