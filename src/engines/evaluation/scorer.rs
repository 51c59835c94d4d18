/// Decides whether a parsed answer matches the label
pub trait Scorer {
    fn score(&self, predicted: &str, truth: &str) -> bool;
}

/// Byte-for-byte equality. Parsing already trims surrounding whitespace;
/// nothing else is normalised.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchScorer;

impl Scorer for ExactMatchScorer {
    fn score(&self, predicted: &str, truth: &str) -> bool {
        score(predicted, truth)
    }
}

pub fn score(predicted: &str, truth: &str) -> bool {
    predicted == truth
}

/// Fraction of `true` entries.
///
/// Callers guarantee a non-empty slice (eval sample size is validated to be at
/// least one); an empty slice reports 0.0.
pub fn aggregate(correct: &[bool]) -> f64 {
    debug_assert!(!correct.is_empty(), "accuracy over an empty eval sample");
    if correct.is_empty() {
        return 0.0;
    }
    correct.iter().filter(|&&c| c).count() as f64 / correct.len() as f64
}
