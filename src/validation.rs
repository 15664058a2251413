use crate::data::Frame;
use crate::schema::DatasetSchema;
use log::info;

/// Outcome of the numeric column presence check.
///
/// Carries the names of every schema numeric column the frame is missing so
/// failures can be reported with the concrete columns involved.
#[derive(Debug, Clone)]
pub struct NumericColumnCheck {
    missing: Vec<String>,
}

impl NumericColumnCheck {
    /// True when no numeric column was missing.
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
    }

    /// Names of the schema numeric columns absent from the frame.
    pub fn missing_columns(&self) -> &[String] {
        &self.missing
    }
}

/// Check that the frame has exactly as many columns as the schema expects.
///
/// Cardinality only: names and order are not compared, so a frame with the
/// right number of wrongly named columns passes.
pub fn validate_column_count(frame: &Frame, schema: &DatasetSchema) -> bool {
    let required = schema.n_columns();
    info!("Required number of columns: {}", required);
    info!("Dataset has columns: {}", frame.n_cols());
    frame.n_cols() == required
}

/// Check that every numeric column the schema declares is present in the frame.
///
/// Columns present in the frame but absent from the schema are ignored.
pub fn check_numeric_columns(frame: &Frame, schema: &DatasetSchema) -> NumericColumnCheck {
    let missing: Vec<String> = schema
        .numerical_columns()
        .iter()
        .filter(|name| !frame.contains_column(name))
        .cloned()
        .collect();
    if !missing.is_empty() {
        info!("Missing numerical columns: {:?}", missing);
    }
    NumericColumnCheck { missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> DatasetSchema {
        DatasetSchema::new(
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["a".to_string(), "b".to_string()],
        )
    }

    fn frame(names: &[&str]) -> Frame {
        let data = vec![0.0; names.len() * 2];
        Frame::new(names.iter().map(|s| s.to_string()).collect(), data, 2)
    }

    #[test]
    fn test_column_count_match() {
        assert!(validate_column_count(&frame(&["a", "b", "c"]), &schema()));
        assert!(!validate_column_count(&frame(&["a", "b"]), &schema()));
        assert!(!validate_column_count(&frame(&["a", "b", "c", "d"]), &schema()));
    }

    #[test]
    fn test_column_count_is_name_blind() {
        // Cardinality is all that is compared: three arbitrarily named
        // columns pass even though none of them is in the schema.
        assert!(validate_column_count(&frame(&["x", "y", "z"]), &schema()));
    }

    #[test]
    fn test_numeric_columns_present() {
        let check = check_numeric_columns(&frame(&["a", "b", "c"]), &schema());
        assert!(check.is_satisfied());
        assert!(check.missing_columns().is_empty());
    }

    #[test]
    fn test_numeric_columns_missing_are_recorded() {
        let check = check_numeric_columns(&frame(&["a", "c", "d"]), &schema());
        assert!(!check.is_satisfied());
        assert_eq!(check.missing_columns(), &["b".to_string()]);
    }

    #[test]
    fn test_numeric_check_ignores_extra_columns() {
        let check = check_numeric_columns(&frame(&["a", "b", "c", "extra"]), &schema());
        assert!(check.is_satisfied());
    }
}
