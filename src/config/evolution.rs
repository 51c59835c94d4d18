use super::traits::ConfigSection;
use crate::error::PromptevoError;
use crate::model::DEFAULT_MAX_OUTPUT_TOKENS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Instruction sets elicited for generation 0
    pub num_initial: usize,
    /// Examples drawn (with replacement) per generation
    pub num_eval_examples: usize,
    pub num_survive: usize,
    /// Children bred from each survivor
    pub num_children: usize,
    /// Leading eval examples left out of the improve prompt's critique table
    pub num_context_examples: usize,
    pub num_generations: usize,
    /// Currently inert: parents rejoin the next population either way
    pub keep_parents: bool,
    pub max_output_tokens: usize,
    /// Fixes eval sampling and tie-breaking; entropy-seeded when unset
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            num_initial: 5,
            num_eval_examples: 10,
            num_survive: 3,
            num_children: 3,
            num_context_examples: 5,
            num_generations: 5,
            keep_parents: false,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), PromptevoError> {
        if self.num_initial == 0 {
            return Err(PromptevoError::Configuration(
                "num_initial must be at least 1".to_string()
            ));
        }
        if self.num_eval_examples == 0 {
            return Err(PromptevoError::Configuration(
                "num_eval_examples must be at least 1".to_string()
            ));
        }
        if self.num_survive == 0 {
            return Err(PromptevoError::Configuration(
                "num_survive must be at least 1".to_string()
            ));
        }
        if self.num_survive > self.num_initial {
            return Err(PromptevoError::Configuration(format!(
                "num_survive ({}) cannot exceed the initial population ({})",
                self.num_survive, self.num_initial
            )));
        }
        if self.num_generations == 0 {
            return Err(PromptevoError::Configuration(
                "num_generations must be at least 1".to_string()
            ));
        }
        if self.max_output_tokens == 0 {
            return Err(PromptevoError::Configuration(
                "max_output_tokens must be positive".to_string()
            ));
        }
        Ok(())
    }
}
