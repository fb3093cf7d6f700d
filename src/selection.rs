//! Candidate selection.
//!
//! [`pick_best`] is the greedy selector driving convergence: lowest fitness
//! wins, ties broken by first-encountered order. [`pick_random`] supplies
//! the uniform peer choice used by both the GA and PSO paths.

use crate::evaluator::Evaluator;
use crate::types::Objective;
use rand::Rng;

/// Returns the candidate with the lowest fitness.
///
/// Ties are broken by first-encountered order: a later candidate replaces
/// the incumbent only on a strict improvement. The scan is stable, never
/// randomized.
///
/// # Panics
/// Panics if `candidates` is empty.
pub fn pick_best<'a, O: Objective>(
    candidates: &[&'a [f64]],
    evaluator: &mut Evaluator<'_, O>,
) -> &'a [f64] {
    assert!(!candidates.is_empty(), "cannot pick from empty candidates");

    let mut best = candidates[0];
    let mut best_fitness = evaluator.fitness(best);
    for &candidate in &candidates[1..] {
        let fitness = evaluator.fitness(candidate);
        if fitness < best_fitness {
            best = candidate;
            best_fitness = fitness;
        }
    }
    best
}

/// Returns a uniformly random member of the population.
///
/// # Panics
/// Panics if `population` is empty.
pub fn pick_random<'a, R: Rng>(population: &'a [Vec<f64>], rng: &mut R) -> &'a [f64] {
    assert!(
        !population.is_empty(),
        "cannot pick from empty population"
    );
    &population[rng.random_range(0..population.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::types::SumTarget;

    #[test]
    fn test_pick_best_returns_lowest_fitness() {
        let objective = SumTarget::new(10.0);
        let mut evaluator = Evaluator::new(&objective);

        let far = vec![1.0, 1.0]; // fitness 8
        let close = vec![4.0, 5.0]; // fitness 1
        let mid = vec![2.0, 4.0]; // fitness 4
        let picked = pick_best(&[&far, &close, &mid], &mut evaluator);
        assert_eq!(picked, close.as_slice());
    }

    #[test]
    fn test_pick_best_tie_keeps_first() {
        let objective = SumTarget::new(10.0);
        let mut evaluator = Evaluator::new(&objective);

        // Both sum to 8: fitness 2 each.
        let a = vec![3.0, 5.0];
        let b = vec![4.0, 4.0];
        let picked = pick_best(&[&a, &b], &mut evaluator);
        assert_eq!(picked, a.as_slice());

        let picked = pick_best(&[&b, &a], &mut evaluator);
        assert_eq!(picked, b.as_slice());
    }

    #[test]
    fn test_pick_best_single_candidate() {
        let objective = SumTarget::default();
        let mut evaluator = Evaluator::new(&objective);
        let only = vec![1.0];
        assert_eq!(pick_best(&[&only], &mut evaluator), only.as_slice());
    }

    #[test]
    #[should_panic(expected = "cannot pick from empty candidates")]
    fn test_pick_best_empty_panics() {
        let objective = SumTarget::default();
        let mut evaluator = Evaluator::new(&objective);
        pick_best(&[], &mut evaluator);
    }

    #[test]
    fn test_pick_random_roughly_uniform() {
        let mut rng = create_rng(42);
        let population: Vec<Vec<f64>> = (0..4).map(|i| vec![i as f64]).collect();

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            let picked = pick_random(&population, &mut rng);
            counts[picked[0] as usize] += 1;
        }
        for &c in &counts {
            assert!(c > 2000, "expected roughly uniform picks, got {counts:?}");
        }
    }

    #[test]
    fn test_pick_random_single_member() {
        let mut rng = create_rng(42);
        let population = vec![vec![7.0]];
        assert_eq!(pick_random(&population, &mut rng), [7.0].as_slice());
    }

    #[test]
    #[should_panic(expected = "cannot pick from empty population")]
    fn test_pick_random_empty_panics() {
        let mut rng = create_rng(42);
        let population: Vec<Vec<f64>> = vec![];
        pick_random(&population, &mut rng);
    }
}
