//! Core trait definitions.
//!
//! [`Objective`] is the single trait a user implements to plug a problem
//! into the optimizer: it maps a candidate vector to a scalar score.
//! Lower scores are better (minimization).

/// A scalar objective function over a real-valued vector.
///
/// The optimizer treats the objective as a black box. It must be **pure and
/// deterministic**: identical input vectors must produce identical scores,
/// because the fitness evaluator memoizes results by exact input value.
///
/// Scores are expected to be non-negative and finite; lower is better.
/// For maximization problems, negate or invert the score.
///
/// # Implementing
///
/// ```
/// use gapso::Objective;
///
/// /// Minimize the distance of the vector sum from 100.
/// struct SumTo100;
///
/// impl Objective for SumTo100 {
///     fn evaluate(&self, v: &[f64]) -> f64 {
///         (v.iter().sum::<f64>() - 100.0).abs()
///     }
/// }
/// ```
pub trait Objective {
    /// Computes the score of a candidate vector.
    ///
    /// Lower values are considered better (minimization).
    fn evaluate(&self, v: &[f64]) -> f64;

    /// Called at the end of each generation with the current global best.
    ///
    /// Useful for progress reporting or external communication.
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best: &[f64], _best_fitness: f64) {}
}

/// Reference objective: absolute distance of the element sum from a target.
///
/// `evaluate(v) = |sum(v) - target|`. The minimum (score 0) is any vector
/// whose elements sum exactly to the target.
#[derive(Debug, Clone, Copy)]
pub struct SumTarget {
    target: f64,
}

impl SumTarget {
    /// Creates a sum-target objective with the given target value.
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// Returns the target value.
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Default for SumTarget {
    /// The reference scenario targets a sum of 50.
    fn default() -> Self {
        Self { target: 50.0 }
    }
}

impl Objective for SumTarget {
    fn evaluate(&self, v: &[f64]) -> f64 {
        (v.iter().sum::<f64>() - self.target).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_target_exact() {
        let obj = SumTarget::new(10.0);
        assert_eq!(obj.evaluate(&[4.0, 6.0]), 0.0);
    }

    #[test]
    fn test_sum_target_distance_is_symmetric() {
        let obj = SumTarget::new(10.0);
        assert_eq!(obj.evaluate(&[13.0]), 3.0);
        assert_eq!(obj.evaluate(&[7.0]), 3.0);
    }

    #[test]
    fn test_sum_target_default_is_50() {
        let obj = SumTarget::default();
        assert_eq!(obj.target(), 50.0);
        assert_eq!(obj.evaluate(&[50.0]), 0.0);
        assert_eq!(obj.evaluate(&[0.0]), 50.0);
    }

    #[test]
    fn test_sum_target_non_negative() {
        let obj = SumTarget::default();
        assert!(obj.evaluate(&[1.0, 2.0, 3.0]) >= 0.0);
        assert!(obj.evaluate(&[100.0; 20]) >= 0.0);
    }
}
