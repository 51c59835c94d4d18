mod csv;
mod json;
mod validator;

pub use csv::CsvConnector;
pub use json::JsonConnector;
pub use validator::DataValidator;

use crate::error::{PromptevoError, Result};
use crate::types::Example;
use std::path::Path;

/// Load examples, picking the connector from the file extension
pub fn load_examples<P: AsRef<Path>>(path: P, required: &[String]) -> Result<Vec<Example>> {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => CsvConnector::load_examples(path, required),
        Some(ext) if ext.eq_ignore_ascii_case("json") => JsonConnector::load_examples(path, required),
        _ => Err(PromptevoError::DataLoading(format!(
            "Unsupported dataset file: {} (expected .csv or .json)",
            path.display()
        ))),
    }
}
