use promptevo::engines::generation::InstructionSet;
use promptevo::engines::prompting::{parse_instruction_list, parse_tagged, PromptBuilder};
use promptevo::types::{Example, Verdict};

fn two_field_builder() -> PromptBuilder {
    PromptBuilder::new(vec!["premise".to_string(), "hypothesis".to_string()], "label").unwrap()
}

fn two_field_example(i: usize) -> Example {
    Example::new()
        .with_field("premise", format!(" premise {} ", i))
        .with_field("hypothesis", format!("hypothesis {}", i))
        .with_field("label", "entailment")
}

#[test]
fn test_single_field_uses_plain_input_tag() {
    let builder = PromptBuilder::new(vec!["input".to_string()], "target").unwrap();
    let examples: Vec<Example> = (0..3)
        .map(|i| Example::new().with_field("input", format!("q{}", i)).with_field("target", "yes"))
        .collect();

    let prompt = builder.render_initial(&examples).unwrap();

    assert_eq!(prompt.matches("<input>").count(), 3);
    assert!(!prompt.contains("<input-a>"));
    assert_eq!(prompt.matches("<example>").count(), 3);
    assert_eq!(prompt.matches("<label>yes</label>").count(), 3);
}

#[test]
fn test_two_fields_use_lettered_tags() {
    let examples: Vec<Example> = (0..2).map(two_field_example).collect();
    let prompt = two_field_builder().render_initial(&examples).unwrap();

    assert_eq!(prompt.matches("<input-a>").count(), 2);
    assert_eq!(prompt.matches("<input-b>").count(), 2);
    assert!(!prompt.contains("<input>"));
    assert!(prompt.contains("  <input-a>premise 0</input-a>\n  <input-b>hypothesis 0</input-b>"));
}

#[test]
fn test_initial_asks_for_thinking_and_items() {
    let prompt = two_field_builder().render_initial(&[two_field_example(0)]).unwrap();
    assert!(prompt.starts_with("The following is a dataset for a task that we are trying to train a worker for."));
    assert!(prompt.contains("<thinking>...</thinking>"));
    assert_eq!(prompt.matches("<li>...</li>").count(), 3);
}

#[test]
fn test_improve_layout() {
    let examples: Vec<Example> = (0..2).map(two_field_example).collect();
    let instructions = InstructionSet::from(vec!["Decide entailment.".to_string()]);
    let answers = vec!["entailment".to_string(), "neutral".to_string()];
    let workings = vec!["w0".to_string(), "w1".to_string()];
    let verdicts = [Verdict::Correct, Verdict::Wrong];

    let prompt = two_field_builder()
        .render_improve(&examples, &instructions, &answers, Some(&workings), Some(&verdicts))
        .unwrap();

    assert!(prompt.contains("instructions.\n\n- Decide entailment.\n\n"));
    assert!(prompt.contains(
        "<example>\n  <input-a>premise 1</input-a>\n  <input-b>hypothesis 1</input-b>\n  \
         <submitted-working>w1</submitted-working>\n  <answer>neutral</answer>\n  \
         <true-answer>entailment</true>\n  <evaluation>WRONG</evaluation>\n</example>\n"
    ));
    assert!(prompt.contains("<evaluation>CORRECT</evaluation>"));
    assert!(prompt.contains("using at least one example explicitly"));
    assert!(prompt.contains("exact formatting of the answers in <true-answer>"));
    assert!(prompt.ends_with("<li>...</li>\n    "));
}

#[test]
fn test_improve_without_evaluations() {
    let builder = PromptBuilder::new(vec!["input".to_string()], "target").unwrap();
    let example = Example::new().with_field("input", "q").with_field("target", "A");
    let prompt = builder
        .render_improve(&[example], &InstructionSet::new(), &["B".to_string()], None, None)
        .unwrap();
    assert!(!prompt.contains("<evaluation>"));
}

#[test]
fn test_parse_model_reply_to_improve_prompt() {
    let reply = "<thinking>The worker confused neutral and entailment, e.g. example 2.</thinking>\n\
                 The answers are lowercase single words.\n\
                 <li>Compare the hypothesis against the premise.</li>\n\
                 <li>Answer with exactly one of: entailment, neutral, contradiction.</li>\n\
                 <li>Never add punctuation";

    let instructions = parse_instruction_list(reply);
    assert_eq!(instructions.len(), 2);
    assert_eq!(
        instructions.as_slice()[1],
        "Answer with exactly one of: entailment, neutral, contradiction."
    );
    assert_eq!(
        parse_tagged(reply, "thinking"),
        "The worker confused neutral and entailment, e.g. example 2."
    );
}

#[test]
fn test_attempt_round_trip() {
    let builder = PromptBuilder::new(vec!["input".to_string()], "target").unwrap();
    let example = Example::new().with_field("input", "2 + 2").with_field("target", "4");
    let instructions = parse_instruction_list("<li>Compute the sum.</li><li>Reply with digits only.</li>");

    let prompt = builder.render_attempt(&example, &instructions).unwrap();
    assert!(prompt.contains("- Compute the sum.\n- Reply with digits only.\n"));
    assert!(prompt.ends_with("  <input>2 + 2</input>"));

    let reply = "<working>\n2 plus 2 is 4\n</working>\n<answer>\n4\n</answer>";
    assert_eq!(parse_tagged(reply, "working"), "2 plus 2 is 4");
    assert_eq!(parse_tagged(reply, "answer"), example.get("target").unwrap());
}
