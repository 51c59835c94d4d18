use super::scorer::{aggregate, ExactMatchScorer, Scorer};
use crate::engines::generation::genome::InstructionSet;
use crate::engines::prompting::{parse_tagged, PromptBuilder};
use crate::error::{PromptevoError, Result};
use crate::model::ModelClient;
use crate::types::{EvaluationRecord, Example, Verdict};

/// Runs one instruction set over an eval sample and scores the answers.
pub struct Evaluator {
    prompts: PromptBuilder,
    scorer: Box<dyn Scorer>,
    max_output_tokens: usize,
}

impl Evaluator {
    pub fn new(prompts: PromptBuilder, max_output_tokens: usize) -> Self {
        Self {
            prompts,
            scorer: Box::new(ExactMatchScorer),
            max_output_tokens,
        }
    }

    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// One model query per example, in sample order.
    pub fn evaluate<M: ModelClient + ?Sized>(
        &self,
        model: &mut M,
        instructions: &InstructionSet,
        examples: &[Example],
    ) -> Result<EvaluationRecord> {
        let mut raw_responses = Vec::with_capacity(examples.len());
        let mut workings = Vec::with_capacity(examples.len());
        let mut answers = Vec::with_capacity(examples.len());
        let mut correct = Vec::with_capacity(examples.len());

        for example in examples {
            let prompt = self.prompts.render_attempt(example, instructions)?;
            let raw = model
                .query(&prompt, self.max_output_tokens)
                .map_err(PromptevoError::Model)?;

            let working = parse_tagged(&raw, "working");
            let answer = parse_tagged(&raw, "answer");
            let truth = example.get(self.prompts.target_field())?;
            let is_correct = self.scorer.score(&answer, truth);
            log::debug!("Attempt answer={:?} truth={:?} correct={}", answer, truth, is_correct);

            raw_responses.push(raw);
            workings.push(working);
            answers.push(answer);
            correct.push(is_correct);
        }

        let verdicts = correct.iter().map(|&c| Verdict::from(c)).collect();
        let accuracy = aggregate(&correct);

        Ok(EvaluationRecord {
            raw_responses,
            workings,
            answers,
            correct,
            verdicts,
            accuracy,
        })
    }
}
