use crate::config::{ConfigSection, EvolutionConfig, TaskConfig};
use crate::data::Dataset;
use crate::engines::evaluation::{Evaluator, Scorer};
use crate::engines::generation::{
    genome::InstructionSet,
    operators::select_survivors,
};
use crate::engines::prompting::{parse_instruction_list, PromptBuilder};
use crate::error::{PromptevoError, Result};
use crate::model::ModelClient;
use crate::types::{
    EvolutionResult, Example, GenerationRecord, InitialRecord, SurvivorRecord,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_member_evaluated(&mut self, member: usize, total: usize, accuracy: f64);
    fn on_generation_complete(&mut self, generation: usize, best_accuracy: f64, next_population: usize);
}

/// Silent progress
impl ProgressCallback for () {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_member_evaluated(&mut self, _member: usize, _total: usize, _accuracy: f64) {}
    fn on_generation_complete(&mut self, _generation: usize, _best_accuracy: f64, _next_population: usize) {}
}

/// Evolves instruction sets for one task against one model.
///
/// The loop is strictly sequential: each model query blocks until it returns.
/// All randomness (eval sampling and survivor tie-breaks) comes from a single
/// RNG seeded from `EvolutionConfig::seed`.
pub struct EvolutionEngine<M: ModelClient> {
    config: EvolutionConfig,
    prompts: PromptBuilder,
    evaluator: Evaluator,
    model: M,
    rng: StdRng,
}

impl<M: ModelClient> EvolutionEngine<M> {
    pub fn new(config: EvolutionConfig, task: &TaskConfig, model: M) -> Result<Self> {
        config.validate()?;
        task.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let prompts = PromptBuilder::new(task.input_fields.clone(), task.target_field.clone())?;
        let evaluator = Evaluator::new(prompts.clone(), config.max_output_tokens);

        Ok(Self {
            config,
            prompts,
            evaluator,
            model,
            rng,
        })
    }

    /// Replace the exact-match scorer
    pub fn with_scorer(mut self, scorer: Box<dyn Scorer>) -> Self {
        self.evaluator = self.evaluator.with_scorer(scorer);
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn into_model(self) -> M {
        self.model
    }

    /// Run the evolution process
    pub fn run<D, C>(&mut self, data: &D, mut callback: C) -> Result<EvolutionResult>
    where
        D: Dataset + ?Sized,
        C: ProgressCallback,
    {
        if data.is_empty() {
            return Err(PromptevoError::Configuration(
                "Dataset must contain at least one example".to_string(),
            ));
        }
        let examples = collect_examples(data)?;
        if self.config.num_context_examples >= self.config.num_eval_examples {
            log::warn!(
                "num_context_examples ({}) leaves no examples to critique out of {}",
                self.config.num_context_examples,
                self.config.num_eval_examples
            );
        }

        let initial = self.initialize_population(&examples)?;
        let mut population = initial.population.clone();

        let mut history: Vec<GenerationRecord> = Vec::with_capacity(self.config.num_generations);
        for generation in 0..self.config.num_generations {
            callback.on_generation_start(generation);
            let started_at = Utc::now();

            let eval_indices = self.sample_eval_indices(examples.len());
            let eval_examples: Vec<Example> =
                eval_indices.iter().map(|&i| examples[i].clone()).collect();

            // Evaluate every member on the same sample
            let mut evaluations = Vec::with_capacity(population.len());
            for (i, instructions) in population.iter().enumerate() {
                let record = self.evaluator.evaluate(&mut self.model, instructions, &eval_examples)?;
                log::debug!("  [{}] accuracy {:.3} with {} instructions", i + 1, record.accuracy, instructions.len());
                callback.on_member_evaluated(i + 1, population.len(), record.accuracy);
                evaluations.push(record);
            }

            let survivors = select_survivors(
                &population,
                &evaluations,
                self.config.num_survive,
                &mut self.rng,
            )?;

            let (children, improve_prompts, improve_responses) =
                self.breed_children(&survivors, &eval_examples)?;

            population = next_population(children.clone(), &survivors, self.config.keep_parents);

            let best_accuracy = survivors.first().map(|s| s.evaluation.accuracy).unwrap_or(0.0);
            log::info!(
                "Generation {}: best accuracy {:.4}, {} survivors, {} children",
                generation + 1,
                best_accuracy,
                survivors.len(),
                children.len()
            );
            callback.on_generation_complete(generation, best_accuracy, population.len());

            history.push(GenerationRecord {
                generation,
                started_at,
                finished_at: Utc::now(),
                eval_indices,
                evaluations,
                survivors,
                children,
                improve_prompts,
                improve_responses,
            });
        }

        let best = history
            .last()
            .and_then(|record| record.survivors.first())
            .ok_or_else(|| PromptevoError::Generation("No survivors in the final generation".to_string()))?;
        let (best, best_score) = (best.instructions.clone(), best.evaluation.accuracy);

        Ok(EvolutionResult {
            initial,
            history,
            best,
            best_score,
        })
    }

    /// Elicit generation 0 from the full dataset
    fn initialize_population(&mut self, examples: &[Example]) -> Result<InitialRecord> {
        let prompt = self.prompts.render_initial(examples)?;

        let mut raw_responses = Vec::with_capacity(self.config.num_initial);
        let mut population = Vec::with_capacity(self.config.num_initial);
        for i in 0..self.config.num_initial {
            let raw = self.query(&prompt)?;
            let instructions = parse_instruction_list(&raw);
            if instructions.is_empty() {
                log::warn!("Initial member {} parsed to an empty instruction set", i + 1);
            }
            raw_responses.push(raw);
            population.push(instructions);
        }

        Ok(InitialRecord {
            prompt,
            raw_responses,
            population,
        })
    }

    /// Indices drawn uniformly with replacement
    fn sample_eval_indices(&mut self, len: usize) -> Vec<usize> {
        (0..self.config.num_eval_examples)
            .map(|_| self.rng.gen_range(0..len))
            .collect()
    }

    /// One improve prompt per survivor, `num_children` queries per prompt.
    ///
    /// The first `num_context_examples` of the sample are left out of the
    /// critique table.
    fn breed_children(
        &mut self,
        survivors: &[SurvivorRecord],
        eval_examples: &[Example],
    ) -> Result<(Vec<InstructionSet>, Vec<String>, Vec<String>)> {
        let skip = self.config.num_context_examples.min(eval_examples.len());
        let critique_examples = &eval_examples[skip..];

        let capacity = survivors.len() * self.config.num_children;
        let mut children = Vec::with_capacity(capacity);
        let mut prompts = Vec::with_capacity(capacity);
        let mut responses = Vec::with_capacity(capacity);

        for survivor in survivors {
            let prompt = self.prompts.render_improve(
                critique_examples,
                &survivor.instructions,
                &survivor.evaluation.answers[skip..],
                None,
                Some(&survivor.evaluation.verdicts[skip..]),
            )?;

            for _ in 0..self.config.num_children {
                let raw = self.query(&prompt)?;
                let child = parse_instruction_list(&raw);
                if child.is_empty() {
                    log::warn!("Child parsed to an empty instruction set");
                }
                children.push(child);
                prompts.push(prompt.clone());
                responses.push(raw);
            }
        }

        Ok((children, prompts, responses))
    }

    fn query(&mut self, prompt: &str) -> Result<String> {
        log::debug!("Querying {} ({} prompt bytes)", self.model.name(), prompt.len());
        self.model
            .query(prompt, self.config.max_output_tokens)
            .map_err(PromptevoError::Model)
    }
}

/// Children first, then the survivors' instruction sets.
///
/// `keep_parents` does not change the outcome yet: parents rejoin the
/// population in both branches. Whether `false` should mean "children only"
/// is undecided.
pub fn next_population(
    children: Vec<InstructionSet>,
    survivors: &[SurvivorRecord],
    keep_parents: bool,
) -> Vec<InstructionSet> {
    let parents = survivors.iter().map(|s| s.instructions.clone());
    let mut next = children;
    if keep_parents {
        next.extend(parents);
    } else {
        // TODO: decide with the prompt owners whether this branch should drop parents
        next.extend(parents);
    }
    next
}

fn collect_examples<D: Dataset + ?Sized>(data: &D) -> Result<Vec<Example>> {
    (0..data.len())
        .map(|i| {
            data.get(i).cloned().ok_or_else(|| {
                PromptevoError::DataLoading(format!("Dataset has no example at index {}", i))
            })
        })
        .collect()
}
