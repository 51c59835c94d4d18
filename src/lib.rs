//! Evolutionary search for worker-model instructions.
//!
//! Given labeled examples and a [`model::ModelClient`], the
//! [`engines::generation::EvolutionEngine`] elicits candidate instruction
//! sets, scores them on sampled examples, keeps the best and asks the model to
//! improve them, for a fixed number of generations.

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod model;
pub mod types;

pub use engines::generation::{EvolutionEngine, InstructionSet};
pub use error::{PromptevoError, Result};
pub use types::{EvolutionResult, Example};
