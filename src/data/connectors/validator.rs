use crate::error::{PromptevoError, Result};
use polars::prelude::*;
use std::collections::HashMap;

pub struct DataValidator;

impl DataValidator {
    /// Validate that the DataFrame carries every required column
    pub fn validate_columns(df: &DataFrame, required: &[String]) -> Result<()> {
        let columns = df.get_column_names();
        let missing: Vec<&str> = required
            .iter()
            .map(String::as_str)
            .filter(|name| !columns.iter().any(|col| col.as_str() == *name))
            .collect();

        if !missing.is_empty() {
            return Err(PromptevoError::DataLoading(format!(
                "Missing required columns: {:?} (found: {:?})",
                missing,
                columns.iter().map(|c| c.as_str()).collect::<Vec<_>>()
            )));
        }
        Ok(())
    }

    /// Validate minimum number of rows
    pub fn validate_minimum_rows(df: &DataFrame, min_rows: usize) -> Result<()> {
        if df.height() < min_rows {
            return Err(PromptevoError::DataLoading(format!(
                "Dataset has {} rows, need at least {}",
                df.height(),
                min_rows
            )));
        }
        Ok(())
    }

    /// Null counts for the given columns, omitting columns without nulls
    pub fn check_nulls(df: &DataFrame, columns: &[String]) -> Result<HashMap<String, usize>> {
        let mut report = HashMap::new();
        for name in columns {
            let nulls = df.column(name)?.null_count();
            if nulls > 0 {
                report.insert(name.clone(), nulls);
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_validate_good_data() {
        let df = df! {
            "input" => &["not ( True ) and ( True ) is", "True and False is"],
            "target" => &["False", "False"],
        }
        .unwrap();

        assert!(DataValidator::validate_columns(&df, &fields(&["input", "target"])).is_ok());
        assert!(DataValidator::validate_minimum_rows(&df, 2).is_ok());
    }

    #[test]
    fn test_validate_missing_column() {
        let df = df! {
            "input" => &["q1", "q2"],
        }
        .unwrap();

        let result = DataValidator::validate_columns(&df, &fields(&["input", "target"]));
        assert!(matches!(result, Err(PromptevoError::DataLoading(ref msg)) if msg.contains("target")));
    }

    #[test]
    fn test_null_report() {
        let df = df! {
            "input" => &[Some("q1"), None, None],
            "target" => &[Some("A"), Some("B"), Some("C")],
        }
        .unwrap();

        let report = DataValidator::check_nulls(&df, &fields(&["input", "target"])).unwrap();
        assert_eq!(report.get("input"), Some(&2));
        assert!(!report.contains_key("target"));
    }

    #[test]
    fn test_too_few_rows() {
        let df = df! { "input" => &["q1"] }.unwrap();
        assert!(DataValidator::validate_minimum_rows(&df, 2).is_err());
    }
}
