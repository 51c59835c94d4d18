use crate::error::{PromptevoError, Result};
use crate::types::Example;
use serde_json::Value;
use std::path::Path;

/// Reads examples from JSON: either a top-level array of objects or an
/// object with an `examples` array (the BIG-Bench-Hard task file layout).
pub struct JsonConnector;

impl JsonConnector {
    pub fn load_examples<P: AsRef<Path>>(path: P, required: &[String]) -> Result<Vec<Example>> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let examples = Self::parse_examples(&contents)?;

        for (i, example) in examples.iter().enumerate() {
            if let Some(field) = required.iter().find(|f| !example.contains(f)) {
                return Err(PromptevoError::DataLoading(format!(
                    "Example {} is missing required field '{}'",
                    i, field
                )));
            }
        }
        Ok(examples)
    }

    pub fn parse_examples(contents: &str) -> Result<Vec<Example>> {
        let root: Value = serde_json::from_str(contents)?;
        let items = match root {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("examples") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(PromptevoError::DataLoading(
                        "Expected an \"examples\" array".to_string(),
                    ))
                }
            },
            _ => {
                return Err(PromptevoError::DataLoading(
                    "Expected a JSON array or object".to_string(),
                ))
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Object(map) => Ok(map
                    .into_iter()
                    .map(|(key, value)| (key, value_to_text(value)))
                    .collect()),
                other => Err(PromptevoError::DataLoading(format!(
                    "Example {} is not an object: {}",
                    i, other
                ))),
            })
            .collect()
    }
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
