use super::traits::ConfigSection;
use crate::error::PromptevoError;
use serde::{Deserialize, Serialize};

/// Which example fields the worker sees and which one it must reproduce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskConfig {
    pub input_fields: Vec<String>,
    pub target_field: String,
    /// BIG-Bench-Hard task id, enables input normalization when set
    pub task_name: Option<String>,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            input_fields: vec!["input".to_string()],
            target_field: "target".to_string(),
            task_name: None,
        }
    }
}

impl TaskConfig {
    /// Input fields followed by the target field
    pub fn required_fields(&self) -> Vec<String> {
        let mut fields = self.input_fields.clone();
        fields.push(self.target_field.clone());
        fields
    }
}

impl ConfigSection for TaskConfig {
    fn section_name() -> &'static str {
        "task"
    }

    fn validate(&self) -> Result<(), PromptevoError> {
        if self.input_fields.is_empty() {
            return Err(PromptevoError::Configuration(
                "At least one input field is required".to_string()
            ));
        }
        if self.input_fields.len() > 26 {
            return Err(PromptevoError::Configuration(
                "At most 26 input fields are supported".to_string()
            ));
        }
        if self.input_fields.contains(&self.target_field) {
            return Err(PromptevoError::Configuration(format!(
                "Target field '{}' is also listed as an input",
                self.target_field
            )));
        }
        Ok(())
    }
}
