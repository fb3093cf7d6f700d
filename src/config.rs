//! Run configuration.
//!
//! [`HybridConfig`] holds all parameters that control an optimization run.

/// Configuration for a hybrid GA/PSO run.
///
/// # Defaults
///
/// The defaults reproduce the reference scenario: a population of 500
/// twenty-dimensional vectors evolved for 20 generations at mutation
/// rate 0.4.
///
/// ```
/// use gapso::HybridConfig;
///
/// let config = HybridConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.dimension, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use gapso::HybridConfig;
///
/// let config = HybridConfig::default()
///     .with_population_size(100)
///     .with_dimension(10)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridConfig {
    /// Number of individuals in the population.
    ///
    /// Fixed for the whole run; every generation replaces the population
    /// with one of the same size.
    pub population_size: usize,

    /// Dimensionality of every vector in the run.
    pub dimension: usize,

    /// Probability of each element being mutated in a GA offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of generations to run.
    ///
    /// This is the only termination condition; there is no
    /// convergence-based early stop.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            dimension: 20,
            mutation_rate: 0.4,
            max_generations: 20,
            seed: None,
        }
    }
}

impl HybridConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the vector dimensionality.
    pub fn with_dimension(mut self, dim: usize) -> Self {
        self.dimension = dim;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.dimension == 0 {
            return Err("dimension must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be in [0, 1]".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        Ok(())
    }
}
