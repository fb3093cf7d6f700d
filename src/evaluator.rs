//! Memoizing fitness evaluation.
//!
//! [`Evaluator`] wraps an [`Objective`] with a cache keyed by the exact bit
//! pattern of the input vector. The objective is pure for the duration of a
//! run, so a cached score is never invalidated.

use crate::types::Objective;
use std::collections::HashMap;

/// Caching wrapper around an [`Objective`].
///
/// Scores are memoized by the exact sequence of element bit patterns
/// (order- and value-sensitive), so two vectors compare equal as cache keys
/// only when they are element-wise identical. The cache is unbounded by
/// default; see [`with_max_entries`](Evaluator::with_max_entries).
///
/// # Examples
///
/// ```
/// use gapso::{Evaluator, SumTarget};
///
/// let objective = SumTarget::default();
/// let mut evaluator = Evaluator::new(&objective);
///
/// let v = vec![25.0, 25.0];
/// assert_eq!(evaluator.fitness(&v), 0.0);
/// assert_eq!(evaluator.fitness(&v), 0.0); // served from cache
/// assert_eq!(evaluator.hits(), 1);
/// assert_eq!(evaluator.misses(), 1);
/// ```
pub struct Evaluator<'a, O: Objective> {
    objective: &'a O,
    cache: HashMap<Vec<u64>, f64>,
    max_entries: Option<usize>,
    hits: usize,
    misses: usize,
}

impl<'a, O: Objective> Evaluator<'a, O> {
    /// Creates an evaluator with an unbounded cache.
    pub fn new(objective: &'a O) -> Self {
        Self {
            objective,
            cache: HashMap::new(),
            max_entries: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Caps the cache at `max_entries` scores.
    ///
    /// When inserting would exceed the cap, the cache is cleared first.
    /// This trades recall for bounded memory on very long runs; correctness
    /// is unaffected because the objective is pure.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries);
        self
    }

    /// Returns the fitness of `v`, computing and caching it on first sight.
    ///
    /// Deterministic: identical vectors (by value) always yield the
    /// identical score.
    pub fn fitness(&mut self, v: &[f64]) -> f64 {
        let key = bit_key(v);
        if let Some(&score) = self.cache.get(&key) {
            self.hits += 1;
            return score;
        }

        self.misses += 1;
        let score = self.objective.evaluate(v);
        if let Some(cap) = self.max_entries {
            if self.cache.len() >= cap {
                self.cache.clear();
            }
        }
        self.cache.insert(key, score);
        score
    }

    /// Number of scores currently cached.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Number of lookups served from the cache.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of lookups that invoked the objective.
    pub fn misses(&self) -> usize {
        self.misses
    }
}

/// Exact cache key: the bit pattern of every element, in order.
fn bit_key(v: &[f64]) -> Vec<u64> {
    v.iter().map(|e| e.to_bits()).collect()
}
