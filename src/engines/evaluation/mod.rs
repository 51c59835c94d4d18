pub mod evaluator;
pub mod scorer;

pub use evaluator::Evaluator;
pub use scorer::{aggregate, score, ExactMatchScorer, Scorer};
