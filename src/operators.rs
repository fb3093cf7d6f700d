//! Genetic operators for real-valued vectors.
//!
//! Free functions over `&[f64]` slices: single-point crossover, per-element
//! mutation, and random individual/population synthesis. All of them return
//! freshly allocated vectors; inputs are never mutated in place.
//!
//! Randomness comes from an explicit `&mut impl Rng` so callers control
//! seeding (see [`crate::random::create_rng`]).

use rand::Rng;

/// Single-point crossover.
///
/// Returns a new vector whose first `cross_point` elements come from
/// `parent1` and whose remaining elements come from `parent2`.
///
/// `crossover(p1, p2, 0)` equals `p2`; `crossover(p1, p2, p1.len())`
/// equals `p1`.
///
/// # Panics
/// Panics if the parents have different lengths or if
/// `cross_point > parent1.len()`.
pub fn crossover(parent1: &[f64], parent2: &[f64], cross_point: usize) -> Vec<f64> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    assert!(
        cross_point <= parent1.len(),
        "cross_point {} out of bounds for length {}",
        cross_point,
        parent1.len()
    );

    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..cross_point]);
    child.extend_from_slice(&parent2[cross_point..]);
    child
}

/// Per-element mutation.
///
/// Each element independently has probability `rate` of being replaced by
/// `e * r1 + r2`, where `r1` and `r2` are fresh uniform draws in `[0, 1)`;
/// otherwise it is copied unchanged.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn mutate<R: Rng>(individual: &[f64], rate: f64, rng: &mut R) -> Vec<f64> {
    assert!(
        (0.0..=1.0).contains(&rate),
        "mutation rate must be in [0, 1], got {rate}"
    );

    individual
        .iter()
        .map(|&e| {
            if rng.random::<f64>() < rate {
                e * rng.random::<f64>() + rng.random::<f64>()
            } else {
                e
            }
        })
        .collect()
}

/// Creates a random individual: `length` uniform draws in `[0, 1)`.
pub fn random_individual<R: Rng>(length: usize, rng: &mut R) -> Vec<f64> {
    (0..length).map(|_| rng.random::<f64>()).collect()
}

/// Creates a random population of `size` individuals of dimension `dim`.
pub fn random_population<R: Rng>(size: usize, dim: usize, rng: &mut R) -> Vec<Vec<f64>> {
    (0..size).map(|_| random_individual(dim, rng)).collect()
}
