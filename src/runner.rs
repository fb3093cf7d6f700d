//! Optimization loop execution.
//!
//! [`HybridRunner`] orchestrates the complete run: random seeding →
//! generation replacement → personal-best and global-best bookkeeping →
//! fixed-count termination.

use crate::config::HybridConfig;
use crate::engine::next_generation;
use crate::evaluator::Evaluator;
use crate::operators::{random_individual, random_population};
use crate::random::create_rng;
use crate::types::Objective;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a hybrid GA/PSO run.
#[derive(Debug, Clone)]
pub struct HybridResult {
    /// The global-best vector at the end of the run.
    pub best: Vec<f64>,

    /// Fitness of the global best.
    pub best_fitness: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Global-best fitness before the first generation and after each one.
    pub fitness_history: Vec<f64>,
}

/// Executes the hybrid GA/PSO loop.
///
/// # Usage
///
/// ```
/// use gapso::{HybridConfig, HybridRunner, SumTarget};
///
/// let objective = SumTarget::default();
/// let config = HybridConfig::default().with_seed(42);
/// let result = HybridRunner::run(&objective, &config);
/// println!("best fitness: {:.2}", result.best_fitness);
/// ```
pub struct HybridRunner;

impl HybridRunner {
    /// Runs the optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`HybridConfig::validate`] first to get a descriptive error).
    pub fn run<O: Objective>(objective: &O, config: &HybridConfig) -> HybridResult {
        Self::run_with_cancel(objective, config, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the best solution found so
    /// far.
    pub fn run_with_cancel<O: Objective>(
        objective: &O,
        config: &HybridConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> HybridResult {
        config.validate().expect("invalid HybridConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let mut evaluator = Evaluator::new(objective);

        // Seed population, personal bests, and global best with uniform
        // random vectors. The global best is not synchronized with the
        // personal bests up front; it catches up on the first strict
        // improvement.
        let mut population = random_population(config.population_size, config.dimension, &mut rng);
        let mut personal_best =
            random_population(config.population_size, config.dimension, &mut rng);
        let mut global_best = random_individual(config.dimension, &mut rng);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(evaluator.fitness(&global_best));

        let mut generations = 0usize;
        let mut cancelled = false;

        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population = next_generation(
                &population,
                &personal_best,
                &global_best,
                config.mutation_rate,
                &mut evaluator,
                &mut rng,
            );

            // Strict improvement only, for both tiers of bests.
            for (individual, best) in population.iter().zip(personal_best.iter_mut()) {
                if evaluator.fitness(individual) < evaluator.fitness(best) {
                    *best = individual.clone();
                }
                if evaluator.fitness(best) < evaluator.fitness(&global_best) {
                    global_best = best.clone();
                }
            }

            generations = gen + 1;
            let best_fitness = evaluator.fitness(&global_best);
            fitness_history.push(best_fitness);
            objective.on_generation(generations, &global_best, best_fitness);
        }

        HybridResult {
            best_fitness: evaluator.fitness(&global_best),
            best: global_best,
            generations,
            cancelled,
            fitness_history,
        }
    }
}
