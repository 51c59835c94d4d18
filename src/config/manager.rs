use super::{
    evolution::EvolutionConfig,
    model::ModelConfig,
    task::TaskConfig,
    traits::ConfigSection,
};
use crate::error::PromptevoError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Prefix for environment overrides, e.g. `PROMPTEVO__EVOLUTION__NUM_GENERATIONS=3`
pub const ENV_PREFIX: &str = "PROMPTEVO";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub task: TaskConfig,
    pub model: ModelConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PromptevoError> {
        self.evolution.validate()?;
        self.task.validate()?;
        self.model.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a config file (format from its extension), then apply environment
    /// overrides.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PromptevoError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .add_source(env_source())
            .build();
        self.install(settings)
    }

    /// Load TOML text, then apply environment overrides.
    pub fn load_from_str(&self, contents: &str) -> Result<(), PromptevoError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from_str(contents, ::config::FileFormat::Toml))
            .add_source(env_source())
            .build();
        self.install(settings)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PromptevoError> {
        let config = self.get();
        let toml_str = toml::to_string_pretty(&config)
            .map_err(|e| PromptevoError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| PromptevoError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Apply `f` and keep the result only if it validates
    pub fn update<F>(&self, f: F) -> Result<(), PromptevoError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.get();
        f(&mut candidate);
        candidate.validate()?;
        *self.config.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = candidate;
        Ok(())
    }

    fn install(
        &self,
        settings: std::result::Result<::config::Config, ::config::ConfigError>,
    ) -> Result<(), PromptevoError> {
        let config: AppConfig = settings
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| PromptevoError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);

        *self.config.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn env_source() -> ::config::Environment {
    ::config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
