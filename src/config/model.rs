use super::traits::ConfigSection;
use crate::error::PromptevoError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Registry key of the client implementation
    pub provider: String,
    pub model_name: String,
    /// Program run by the `command` provider
    pub command: Option<String>,
    /// `{model}` and `{max_tokens}` are substituted per query
    pub args: Vec<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: "command".to_string(),
            model_name: "claude-instant-v1".to_string(),
            command: Some("claude".to_string()),
            args: vec![
                "--print".to_string(),
                "--model".to_string(),
                "{model}".to_string(),
            ],
        }
    }
}

impl ConfigSection for ModelConfig {
    fn section_name() -> &'static str {
        "model"
    }

    fn validate(&self) -> Result<(), PromptevoError> {
        if self.provider.trim().is_empty() {
            return Err(PromptevoError::Configuration(
                "Model provider must not be empty".to_string()
            ));
        }
        Ok(())
    }
}
