use crate::error::{PromptevoError, Result};
use crate::types::Example;
use polars::prelude::*;
use std::path::Path;
use super::validator::DataValidator;

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame with every column read as text
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| PromptevoError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load, validate and convert a CSV file into examples
    pub fn load_examples<P: AsRef<Path>>(path: P, required: &[String]) -> Result<Vec<Example>> {
        let df = Self::load(&path)?;

        DataValidator::validate_columns(&df, required)?;
        DataValidator::validate_minimum_rows(&df, 1)?;

        // Warn about nulls but don't fail
        let null_report = DataValidator::check_nulls(&df, required)?;
        if !null_report.is_empty() {
            log::warn!("Null values detected (read as empty strings): {:?}", null_report);
        }

        Self::to_examples(&df)
    }

    /// One example per row, every column as a field. Nulls become "".
    pub fn to_examples(df: &DataFrame) -> Result<Vec<Example>> {
        let mut examples = vec![Example::new(); df.height()];

        for name in df.get_column_names() {
            let column = df.column(name.as_str())?.cast(&DataType::String)?;
            let values = column.str()?;
            for (row, value) in values.into_iter().enumerate() {
                examples[row]
                    .fields_mut()
                    .insert(name.to_string(), value.unwrap_or("").to_string());
            }
        }

        Ok(examples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_rows_to_examples() {
        let df = df! {
            "input" => &[Some("Sort: pear apple"), None],
            "target" => &["apple pear", "x"],
        }
        .unwrap();

        let examples = CsvConnector::to_examples(&df).unwrap();
        assert_eq!(examples.len(), 2);
        assert_eq!(examples[0].get("input").unwrap(), "Sort: pear apple");
        assert_eq!(examples[0].get("target").unwrap(), "apple pear");
        assert_eq!(examples[1].get("input").unwrap(), "");
    }
}
