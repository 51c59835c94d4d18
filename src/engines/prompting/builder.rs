//! Rendering of the three prompts exchanged with the model.
//!
//! The tag layout is a wire contract with the prompted model and is reproduced
//! byte for byte, including `<true-answer>` being closed by `</true>`. Field
//! values are inserted as-is: a value containing tag delimiters will produce
//! ambiguous markup.

use crate::engines::generation::genome::InstructionSet;
use crate::error::{PromptevoError, Result};
use crate::types::{Example, Verdict};

const INPUT_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

const DATASET_PREAMBLE: &str = "The following is a dataset for a task that we are trying to train a worker for.";

const INSTRUCTION_FORMAT: &str = "The instructions should follow the following format:
    <thinking>...</thinking>
    <li>...</li>
    <li>...</li>
    <li>...</li>
    ";

const INITIAL_DIRECTIVE: &str = "Based on the above, think step-by-step to determine what the task is. Describe what is consistent across examples, highlight what seems unclear, and make your best guess. Then, write a set of instructions for how the worker should perform the task. Be as detailed as necessary. ";

const ATTEMPT_DIRECTIVE: [&str; 3] = [
    "Your answer should consist of a 'working' and an 'answer' component, in the following format:",
    "First, think step-by-step through the problem in <working>...</working>",
    "Finally, provide the answer in <answer>...</answer>",
];

const IMPROVE_TABLE_HEADER: &str = "The following are the inputs and answers they submitted, along with the true answers for each example. The task inputs are shown in <input> or <input-*> tags, the worker's answers are shown in <answer> tags, and the true answers are shown in <true-answer> tags (which are not shown to workers). We want the worker's answers to match the true answers.";

const IMPROVE_DIRECTIVE: [&str; 4] = [
    "The instructions provided above may be partially correct, or completely incorrect and from a different task (in which case the previous set of task instructions should be discarded and new ones written from scratch).",
    "Based on the above, think step-by-step about what the task is, why each answer was marked correct or wrong (using at least one example explicitly), and how to modify the instructions accordingly.",
    "Then, describe in detail the exact formatting of the answers in <true-answer> (e.g. parenthesis, capitalization, spacing).",
    "Then, rewrite the instructions to let future workers perform better on the above task. Be specific in the instructions, particularly on matching the exact format of the answer.",
];

/// Renders prompts for one task definition (its input fields and label field).
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    input_fields: Vec<String>,
    target_field: String,
}

impl PromptBuilder {
    pub fn new(input_fields: Vec<String>, target_field: impl Into<String>) -> Result<Self> {
        if input_fields.is_empty() {
            return Err(PromptevoError::Configuration(
                "At least one input field is required".to_string(),
            ));
        }
        if input_fields.len() > INPUT_LETTERS.len() {
            return Err(PromptevoError::Configuration(format!(
                "At most {} input fields are supported, got {}",
                INPUT_LETTERS.len(),
                input_fields.len()
            )));
        }
        Ok(Self {
            input_fields,
            target_field: target_field.into(),
        })
    }

    pub fn input_fields(&self) -> &[String] {
        &self.input_fields
    }

    pub fn target_field(&self) -> &str {
        &self.target_field
    }

    /// Prompt asking the model to infer the task from labeled examples and
    /// write the first instruction set.
    pub fn render_initial(&self, examples: &[Example]) -> Result<String> {
        let mut formatted = Vec::with_capacity(examples.len() * 4);
        for example in examples {
            formatted.push("<example>".to_string());
            formatted.push(self.render_inputs(example)?);
            formatted.push(format!("  <label>{}</label>", example.get(&self.target_field)?));
            formatted.push("</example>\n".to_string());
        }

        let mut s = format!(
            "{} The worker will be provided the inputs and is required to output the corresponding label.",
            DATASET_PREAMBLE
        );
        s.push_str("\n\n");
        s.push_str(&formatted.join("\n"));
        s.push_str("\n\n");
        s.push_str(INITIAL_DIRECTIVE);
        s.push_str(INSTRUCTION_FORMAT);
        Ok(s)
    }

    /// Prompt asking the worker to solve one example under `instructions`.
    pub fn render_attempt(&self, example: &Example, instructions: &InstructionSet) -> Result<String> {
        let mut lines = Vec::with_capacity(instructions.len() + 7);
        lines.push("Follow these instructions and complete the task:".to_string());
        lines.extend(instructions.iter().map(|inst| format!("- {}", inst)));
        lines.push(String::new());
        lines.extend(ATTEMPT_DIRECTIVE.iter().map(|line| line.to_string()));
        lines.push(String::new());
        lines.push(self.render_inputs(example)?);
        Ok(lines.join("\n"))
    }

    /// Prompt asking the model to critique `instructions` against the worker's
    /// submitted answers and rewrite them.
    ///
    /// `answers`, and `workings`/`evaluations` when given, must be aligned
    /// with `examples`.
    pub fn render_improve(
        &self,
        examples: &[Example],
        instructions: &InstructionSet,
        answers: &[String],
        workings: Option<&[String]>,
        evaluations: Option<&[Verdict]>,
    ) -> Result<String> {
        check_aligned("answers", examples.len(), answers.len())?;
        if let Some(workings) = workings {
            check_aligned("workings", examples.len(), workings.len())?;
        }
        if let Some(evaluations) = evaluations {
            check_aligned("evaluations", examples.len(), evaluations.len())?;
        }

        let mut formatted = Vec::with_capacity(examples.len() * 7);
        for (i, example) in examples.iter().enumerate() {
            formatted.push("<example>".to_string());
            formatted.push(self.render_inputs(example)?);
            if let Some(workings) = workings {
                formatted.push(format!("  <submitted-working>{}</submitted-working>", workings[i]));
            }
            formatted.push(format!("  <answer>{}</answer>", answers[i]));
            formatted.push(format!("  <true-answer>{}</true>", example.get(&self.target_field)?));
            if let Some(evaluations) = evaluations {
                formatted.push(format!("  <evaluation>{}</evaluation>", evaluations[i]));
            }
            formatted.push("</example>\n".to_string());
        }

        let mut s = format!(
            "{} The worker was provided with the following instructions.\n",
            DATASET_PREAMBLE
        );
        s.push('\n');
        s.push_str(&instructions.to_bullets());
        s.push_str("\n\n");
        s.push_str(IMPROVE_TABLE_HEADER);
        if evaluations.is_some() {
            s.push_str("\nThe worker's answers are scored in <evaluation> tags.");
        }
        s.push_str("\n\n");
        s.push_str(&formatted.join("\n"));
        s.push_str("\n\n");
        for line in IMPROVE_DIRECTIVE {
            s.push('\n');
            s.push_str(line);
        }
        s.push('\n');
        s.push_str(INSTRUCTION_FORMAT);
        Ok(s)
    }

    /// `<input>` for single-input tasks, `<input-a>`, `<input-b>`, ... otherwise.
    fn render_inputs(&self, example: &Example) -> Result<String> {
        if let [field] = self.input_fields.as_slice() {
            return Ok(format!("  <input>{}</input>", example.get(field)?.trim()));
        }

        let mut lines = Vec::with_capacity(self.input_fields.len());
        for (field, letter) in self.input_fields.iter().zip(INPUT_LETTERS) {
            let letter = *letter as char;
            lines.push(format!(
                "  <input-{}>{}</input-{}>",
                letter,
                example.get(field)?.trim(),
                letter
            ));
        }
        Ok(lines.join("\n"))
    }
}

fn check_aligned(what: &str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(PromptevoError::Prompt(format!(
            "Expected {} {} to match the examples, got {}",
            expected, what, actual
        )));
    }
    Ok(())
}
