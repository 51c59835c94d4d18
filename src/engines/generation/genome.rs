use serde::{Deserialize, Serialize};

/// Genome representation for prompt evolution
///
/// An instruction set is the ordered list of natural-language directives handed
/// to the worker model. It is the unit the evolution loop selects and breeds:
/// - Generation 0 is parsed from the model's answer to the elicitation prompt
/// - Children are parsed from the model's answer to an improve prompt
///
/// Instruction sets are never edited in place. Improving one always produces a
/// fresh set, so a survivor stays comparable with the record it was scored by.
///
/// An empty set is legal: it is what a malformed model response parses to, and
/// it simply scores poorly.
///
/// # Example
///
/// ```
/// use promptevo::engines::generation::InstructionSet;
///
/// let set = InstructionSet::from(vec!["Answer with a single letter.".to_string()]);
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstructionSet(Vec<String>);

impl InstructionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Bulleted rendering, one `- ` line per instruction
    pub fn to_bullets(&self) -> String {
        self.0
            .iter()
            .map(|inst| format!("- {}", inst))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<String>> for InstructionSet {
    fn from(instructions: Vec<String>) -> Self {
        Self(instructions)
    }
}

impl FromIterator<String> for InstructionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a InstructionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
