use super::command::CommandModel;
use super::traits::ModelClient;
use crate::config::ModelConfig;
use crate::error::{PromptevoError, Result};
use std::collections::HashMap;

pub type ModelFactory = Box<dyn Fn(&ModelConfig) -> Result<Box<dyn ModelClient>>>;

/// Provider name -> client constructor
pub struct ModelRegistry {
    factories: HashMap<String, ModelFactory>,
}

impl ModelRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry with the providers shipped in this crate
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("command", |config: &ModelConfig| {
            let program = config.command.clone().ok_or_else(|| {
                PromptevoError::Configuration(
                    "The command provider needs model.command to be set".to_string(),
                )
            })?;
            let client: Box<dyn ModelClient> = Box::new(CommandModel::new(
                config.model_name.clone(),
                program,
                config.args.clone(),
            ));
            Ok(client)
        });
        registry
    }

    pub fn register<F>(&mut self, provider: impl Into<String>, factory: F)
    where
        F: Fn(&ModelConfig) -> Result<Box<dyn ModelClient>> + 'static,
    {
        self.factories.insert(provider.into(), Box::new(factory));
    }

    pub fn create(&self, config: &ModelConfig) -> Result<Box<dyn ModelClient>> {
        let factory = self.factories.get(&config.provider).ok_or_else(|| {
            PromptevoError::Configuration(format!(
                "Unknown model provider: {} (registered: {:?})",
                config.provider,
                self.providers()
            ))
        })?;
        factory(config)
    }

    pub fn providers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
