use crate::engines::generation::genome::InstructionSet;
use crate::error::{PromptevoError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One labeled example: field name -> value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Example {
    fields: BTreeMap<String, String>,
}

impl Example {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field, failing if the example does not carry it
    pub fn get(&self, field: &str) -> Result<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .ok_or_else(|| PromptevoError::MissingField {
                field: field.to_string(),
            })
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub(crate) fn fields_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.fields
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Example {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Human-readable judgement shown to the model in improve prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Wrong,
}

impl From<bool> for Verdict {
    fn from(correct: bool) -> Self {
        if correct {
            Verdict::Correct
        } else {
            Verdict::Wrong
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "CORRECT"),
            Verdict::Wrong => write!(f, "WRONG"),
        }
    }
}

/// Outcome of running one instruction set over a generation's eval sample.
///
/// Every per-example vector is index-aligned with the eval sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub raw_responses: Vec<String>,
    pub workings: Vec<String>,
    pub answers: Vec<String>,
    pub correct: Vec<bool>,
    pub verdicts: Vec<Verdict>,
    pub accuracy: f64,
}

/// A member that made it through selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivorRecord {
    pub instructions: InstructionSet,
    pub evaluation: EvaluationRecord,
    pub tie_break: f64,
}

/// How generation 0 was seeded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitialRecord {
    pub prompt: String,
    pub raw_responses: Vec<String>,
    pub population: Vec<InstructionSet>,
}

/// Snapshot of one full generation.
///
/// `improve_prompts[i]` and `improve_responses[i]` produced `children[i]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRecord {
    pub generation: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub eval_indices: Vec<usize>,
    pub evaluations: Vec<EvaluationRecord>,
    pub survivors: Vec<SurvivorRecord>,
    pub children: Vec<InstructionSet>,
    pub improve_prompts: Vec<String>,
    pub improve_responses: Vec<String>,
}

/// Terminal output of an evolution run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionResult {
    pub initial: InitialRecord,
    pub history: Vec<GenerationRecord>,
    pub best: InstructionSet,
    pub best_score: f64,
}
