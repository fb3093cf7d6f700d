//! Generation engine.
//!
//! [`create_child`] is the GA reproduction step; [`next_generation`] routes
//! each individual to it or to the PSO [`approach`](crate::swarm::approach)
//! with equal probability, producing the replacement population.

use crate::evaluator::Evaluator;
use crate::operators::{crossover, mutate, random_individual};
use crate::selection::{pick_best, pick_random};
use crate::swarm::approach;
use crate::types::Objective;
use rand::Rng;

/// Probability that an individual takes the GA path instead of the PSO path.
const GA_BRANCH_PROBABILITY: f64 = 0.5;

/// Produces one GA offspring from two parents.
///
/// Identical parents carry no recombination signal, so that case returns a
/// fresh random individual instead — a restart that reintroduces diversity
/// after premature convergence. Otherwise a child is cut at a uniform random
/// cross point in `[0, len - 1]`, a mutant is derived from it, and the
/// fittest of `{parent1, parent2, child, mutant}` is returned. The result
/// therefore never has worse fitness than either parent.
///
/// # Panics
/// Panics if the parents have different lengths, are empty, or if
/// `mutation_rate` is outside `[0, 1]`.
pub fn create_child<O: Objective, R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    mutation_rate: f64,
    evaluator: &mut Evaluator<'_, O>,
    rng: &mut R,
) -> Vec<f64> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(!parent1.is_empty(), "parents must not be empty");

    if parent1 == parent2 {
        return random_individual(parent1.len(), rng);
    }

    let cross_point = rng.random_range(0..parent1.len());
    let child = crossover(parent1, parent2, cross_point);
    let mutant = mutate(&child, mutation_rate, rng);

    pick_best(&[parent1, parent2, &child, &mutant], evaluator).to_vec()
}

/// Produces the next population.
///
/// Each individual independently takes one of two paths:
///
/// - with probability 0.5, GA reproduction: [`create_child`] against a
///   uniformly random peer from the current population;
/// - otherwise, PSO movement: [`approach`] toward a uniformly random entry
///   of the personal-best collection and the global best.
///
/// The output has the same length as `population` and preserves index
/// correspondence with `personal_best`; input vectors are never mutated.
///
/// # Panics
/// Panics if `population` and `personal_best` have different lengths or if
/// `mutation_rate` is outside `[0, 1]`.
pub fn next_generation<O: Objective, R: Rng>(
    population: &[Vec<f64>],
    personal_best: &[Vec<f64>],
    global_best: &[f64],
    mutation_rate: f64,
    evaluator: &mut Evaluator<'_, O>,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    assert_eq!(
        population.len(),
        personal_best.len(),
        "population and personal-best collection must have equal length"
    );

    population
        .iter()
        .map(|individual| {
            if rng.random::<f64>() < GA_BRANCH_PROBABILITY {
                let peer = pick_random(population, rng);
                create_child(individual, peer, mutation_rate, evaluator, rng)
            } else {
                let peer = pick_random(personal_best, rng);
                approach(individual, peer, global_best, rng)
            }
        })
        .collect()
}
