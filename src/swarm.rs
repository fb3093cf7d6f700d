//! PSO-style position update.
//!
//! The swarm half of the hybrid: instead of recombining genes, an individual
//! is pulled toward its personal best and a social peer, the canonical
//! particle-swarm velocity terms with acceleration coefficients fixed at 2.

use rand::Rng;

/// Moves `current` toward `best` and `peer`.
///
/// For each index `i` the result is
/// `|current[i] + 2*r1*(best[i] - current[i]) + 2*r2*(peer[i] - current[i])|`
/// where `r1` and `r2` are fresh uniform draws in `[0, 1)` per index.
///
/// The absolute value clamps the position to the non-negative domain. When
/// the unclamped value is strongly negative this reflects into a large
/// positive jump; that is intentional, established behavior.
///
/// If `current`, `peer`, and `best` coincide, the attraction terms vanish
/// and the input is returned unchanged (assuming non-negative elements).
///
/// # Panics
/// Panics if the three vectors have different lengths.
pub fn approach<R: Rng>(current: &[f64], peer: &[f64], best: &[f64], rng: &mut R) -> Vec<f64> {
    assert_eq!(
        current.len(),
        peer.len(),
        "current and peer must have equal length"
    );
    assert_eq!(
        current.len(),
        best.len(),
        "current and best must have equal length"
    );

    current
        .iter()
        .enumerate()
        .map(|(i, &e)| {
            let r1 = rng.random::<f64>();
            let r2 = rng.random::<f64>();
            (e + 2.0 * r1 * (best[i] - e) + 2.0 * r2 * (peer[i] - e)).abs()
        })
        .collect()
}
