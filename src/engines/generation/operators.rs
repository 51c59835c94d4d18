use crate::engines::generation::genome::InstructionSet;
use crate::error::{PromptevoError, Result};
use crate::types::{EvaluationRecord, SurvivorRecord};
use rand::Rng;
use std::cmp::Ordering;

/// Member indices ordered best first: accuracy descending, then tie-break
/// descending.
pub fn rank_members(accuracies: &[f64], tie_breaks: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..accuracies.len()).collect();
    order.sort_by(|&a, &b| {
        match accuracies[b].partial_cmp(&accuracies[a]).unwrap_or(Ordering::Equal) {
            Ordering::Equal => tie_breaks[b]
                .partial_cmp(&tie_breaks[a])
                .unwrap_or(Ordering::Equal),
            other => other,
        }
    });
    order
}

/// Keep the `num_survive` best members.
///
/// Every member gets a fresh uniform tie-break draw on each call, so members
/// with equal accuracy take turns surviving across generations.
pub fn select_survivors<R: Rng>(
    population: &[InstructionSet],
    evaluations: &[EvaluationRecord],
    num_survive: usize,
    rng: &mut R,
) -> Result<Vec<SurvivorRecord>> {
    if population.len() != evaluations.len() {
        return Err(PromptevoError::Generation(format!(
            "{} members but {} evaluations",
            population.len(),
            evaluations.len()
        )));
    }
    if num_survive > population.len() {
        return Err(PromptevoError::Configuration(format!(
            "Cannot keep {} survivors from a population of {}",
            num_survive,
            population.len()
        )));
    }

    let tie_breaks: Vec<f64> = (0..population.len()).map(|_| rng.gen::<f64>()).collect();
    let accuracies: Vec<f64> = evaluations.iter().map(|e| e.accuracy).collect();

    Ok(rank_members(&accuracies, &tie_breaks)
        .into_iter()
        .take(num_survive)
        .map(|i| SurvivorRecord {
            instructions: population[i].clone(),
            evaluation: evaluations[i].clone(),
            tie_break: tie_breaks[i],
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(accuracy: f64) -> EvaluationRecord {
        EvaluationRecord {
            raw_responses: vec![],
            workings: vec![],
            answers: vec![],
            correct: vec![],
            verdicts: vec![],
            accuracy,
        }
    }

    fn member(name: &str) -> InstructionSet {
        InstructionSet::from(vec![name.to_string()])
    }

    #[test]
    fn test_rank_accuracy_first() {
        let order = rank_members(&[0.5, 0.9, 0.7], &[0.99, 0.01, 0.5]);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_rank_tie_break_second() {
        assert_eq!(rank_members(&[0.9, 0.9, 0.5], &[0.2, 0.8, 0.9]), vec![1, 0, 2]);
        assert_eq!(rank_members(&[0.9, 0.9, 0.5], &[0.8, 0.2, 0.9]), vec![0, 1, 2]);
    }

    #[test]
    fn test_equal_top_scores_always_survive() {
        let population = vec![member("a"), member("b"), member("c")];
        let evaluations = vec![record(0.9), record(0.9), record(0.5)];

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let survivors = select_survivors(&population, &evaluations, 2, &mut rng).unwrap();
            assert_eq!(survivors.len(), 2);
            assert!(survivors.iter().all(|s| s.evaluation.accuracy == 0.9));
            assert!(survivors[0].tie_break >= survivors[1].tie_break);
        }
    }

    #[test]
    fn test_ties_are_not_starved() {
        let population = vec![member("a"), member("b")];
        let evaluations = vec![record(0.5), record(0.5)];
        let mut rng = StdRng::seed_from_u64(7);

        let mut winners = std::collections::HashSet::new();
        for _ in 0..64 {
            let survivors = select_survivors(&population, &evaluations, 1, &mut rng).unwrap();
            winners.insert(survivors[0].instructions.clone());
        }
        assert_eq!(winners.len(), 2);
    }

    #[test]
    fn test_too_many_survivors() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = select_survivors(&[member("a")], &[record(1.0)], 2, &mut rng);
        assert!(matches!(result, Err(PromptevoError::Configuration(_))));
    }

    #[test]
    fn test_misaligned_evaluations() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = select_survivors(&[member("a"), member("b")], &[record(1.0)], 1, &mut rng);
        assert!(matches!(result, Err(PromptevoError::Generation(_))));
    }
}
