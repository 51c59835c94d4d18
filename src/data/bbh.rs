//! BIG-Bench-Hard task preparation.
//!
//! Many BBH inputs open with a sentence that states the task outright. For the
//! tasks where the task is not obvious from the bare input, that boilerplate is
//! stripped so the evolved instructions have to carry the task description.

use crate::error::{PromptevoError, Result};
use crate::types::Example;

pub const NON_OBVIOUS_TASKS: &[&str] = &[
    "disambiguation_qa",
    "dyck_languages",
    "hyperbaton",
    "movie_recommendation",
    "navigate",
    "ruin_names",
    "snarks",
    "sports_understanding",
    "word_sorting",
];

pub const SEMI_OBVIOUS_TASKS: &[&str] = &["geometric_shapes"];

/// Tasks that are obvious from the input, or whose input spells out the task
pub const OBVIOUS_OR_SELF_DESCRIBING_TASKS: &[&str] = &[
    "boolean_expressions",
    "causal_judgement",
    "date_understanding",
    "formal_fallacies",
    "logical_deduction_five_objects",
    "logical_deduction_seven_objects",
    "logical_deduction_three_objects",
    "multistep_arithmetic_two",
    "object_counting",
    "penguins_in_a_table",
    "reasoning_about_colored_objects",
    "salient_translation_error_detection",
    "temporal_sequences",
    "tracking_shuffled_objects_five_objects",
    "tracking_shuffled_objects_seven_objects",
    "tracking_shuffled_objects_three_objects",
    "web_of_lies",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskCategory {
    NonObvious,
    SemiObvious,
    ObviousOrSelfDescribing,
    Unknown,
}

impl TaskCategory {
    pub fn of(task: &str) -> Self {
        if NON_OBVIOUS_TASKS.contains(&task) {
            TaskCategory::NonObvious
        } else if SEMI_OBVIOUS_TASKS.contains(&task) {
            TaskCategory::SemiObvious
        } else if OBVIOUS_OR_SELF_DESCRIBING_TASKS.contains(&task) {
            TaskCategory::ObviousOrSelfDescribing
        } else {
            TaskCategory::Unknown
        }
    }
}

/// Strip the task statement from one raw BBH input.
///
/// Tasks without a known lead-in are returned unchanged.
pub fn normalize_input(task: &str, input: &str) -> Result<String> {
    let stripped = match task {
        "disambiguation_qa" => remove_before(input, "In the following sentences, explain the antecedent of the pronoun (which thing the pronoun refers to), or state that it is ambiguous.\n")?,
        "dyck_languages" => remove_before(input, "Complete the rest of the sequence, making sure that the parentheses are closed properly. Input: ")?,
        "geometric_shapes" => remove_all(input, &["This SVG path element ", " draws a"]),
        "hyperbaton" => remove_before(input, "Which sentence has the correct adjective order:\n")?,
        "movie_recommendation" => remove_before(input, "Find a movie similar to \n")?,
        "navigate" => remove_before(input, "If you follow these instructions, do you return to the starting point? ")?,
        "ruin_names" => remove_all(input, &["Which of the following is a humorous edit of this artist or movie name: ", "?"]),
        "snarks" => remove_before(input, "Which statement is sarcastic?\n")?,
        "sports_understanding" => remove_before(input, "Is the following sentence plausible? ")?,
        "word_sorting" => remove_before(input, "Sort the following words alphabetically: List: ")?,
        _ => input.to_string(),
    };
    Ok(stripped)
}

/// Apply [`normalize_input`] to every input field of every example
pub fn prepare_examples(examples: &mut [Example], task: &str, input_fields: &[String]) -> Result<()> {
    for example in examples.iter_mut() {
        for field in input_fields {
            let normalized = normalize_input(task, example.get(field)?)?;
            example.fields_mut().insert(field.clone(), normalized);
        }
    }
    Ok(())
}

/// `text` without `prefix`, which it must start with
pub fn remove_before(text: &str, prefix: &str) -> Result<String> {
    text.strip_prefix(prefix)
        .map(str::to_string)
        .ok_or_else(|| PromptevoError::DataLoading(format!("Input does not start with {:?}", prefix)))
}

pub fn remove_all(text: &str, patterns: &[&str]) -> String {
    patterns
        .iter()
        .fold(text.to_string(), |acc, pattern| acc.replace(pattern, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(TaskCategory::of("snarks"), TaskCategory::NonObvious);
        assert_eq!(TaskCategory::of("geometric_shapes"), TaskCategory::SemiObvious);
        assert_eq!(TaskCategory::of("web_of_lies"), TaskCategory::ObviousOrSelfDescribing);
        assert_eq!(TaskCategory::of("made_up"), TaskCategory::Unknown);
    }

    #[test]
    fn test_word_sorting_prefix() {
        let input = "Sort the following words alphabetically: List: pear apple fig";
        assert_eq!(normalize_input("word_sorting", input).unwrap(), "pear apple fig");
    }

    #[test]
    fn test_missing_prefix_is_error() {
        assert!(normalize_input("navigate", "Take 3 steps.").is_err());
    }

    #[test]
    fn test_ruin_names_drops_question_marks() {
        let input = "Which of the following is a humorous edit of this artist or movie name: 'star wars'?";
        assert_eq!(normalize_input("ruin_names", input).unwrap(), "'star wars'");
    }

    #[test]
    fn test_geometric_shapes() {
        let input = "This SVG path element <path d=\"M 1,1 L 2,2\"/> draws a";
        assert_eq!(normalize_input("geometric_shapes", input).unwrap(), "<path d=\"M 1,1 L 2,2\"/>");
    }

    #[test]
    fn test_unlisted_task_passes_through() {
        assert_eq!(normalize_input("boolean_expressions", "True or False is").unwrap(), "True or False is");
    }

    #[test]
    fn test_prepare_examples() {
        let mut examples = vec![Example::new()
            .with_field("input", "Is the following sentence plausible? Joao Moutinho caught the screen pass.")
            .with_field("target", "no")];
        prepare_examples(&mut examples, "sports_understanding", &["input".to_string()]).unwrap();
        assert_eq!(examples[0].get("input").unwrap(), "Joao Moutinho caught the screen pass.");
        assert_eq!(examples[0].get("target").unwrap(), "no");
    }
}
