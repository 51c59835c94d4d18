use promptevo::data::{bbh, load_examples, Dataset};
use promptevo::PromptevoError;
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("promptevo_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

fn required() -> Vec<String> {
    vec!["input".to_string(), "target".to_string()]
}

#[test]
fn test_csv_keeps_text_verbatim() {
    let path = temp_file(
        "bool.csv",
        "input,target\n\"not ( True ) and ( True ) is\",False\n\"True and True is\",True\n\"1 + 1 =\",02\n",
    );
    let examples = load_examples(&path, &required()).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(Dataset::len(&examples), 3);
    assert_eq!(examples[0].get("input").unwrap(), "not ( True ) and ( True ) is");
    assert_eq!(examples[0].get("target").unwrap(), "False");
    assert_eq!(examples[2].get("target").unwrap(), "02");
}

#[test]
fn test_csv_missing_column() {
    let path = temp_file("nolabel.csv", "input,answer\nq,a\n");
    let result = load_examples(&path, &required());
    let _ = std::fs::remove_file(&path);

    assert!(matches!(result, Err(PromptevoError::DataLoading(_))));
}

#[test]
fn test_json_bbh_file_with_normalization() {
    let path = temp_file(
        "word_sorting.json",
        r#"{"examples": [
            {"input": "Sort the following words alphabetically: List: syndrome therefrom", "target": "syndrome therefrom"},
            {"input": "Sort the following words alphabetically: List: pear apple", "target": "apple pear"}
        ]}"#,
    );
    let mut examples = load_examples(&path, &required()).unwrap();
    let _ = std::fs::remove_file(&path);

    bbh::prepare_examples(&mut examples, "word_sorting", &["input".to_string()]).unwrap();
    assert_eq!(examples[1].get("input").unwrap(), "pear apple");
    assert_eq!(examples[1].get("target").unwrap(), "apple pear");
}

#[test]
fn test_json_missing_field() {
    let path = temp_file("partial.json", r#"[{"input": "q"}]"#);
    let result = load_examples(&path, &required());
    let _ = std::fs::remove_file(&path);

    assert!(matches!(result, Err(PromptevoError::DataLoading(ref msg)) if msg.contains("target")));
}

#[test]
fn test_unsupported_extension() {
    let result = load_examples("examples.parquet", &required());
    assert!(matches!(result, Err(PromptevoError::DataLoading(_))));
}
