//! Hybrid GA/PSO metaheuristic optimizer.
//!
//! Evolves a population of real-valued vectors toward minimizing a scalar
//! objective by blending two strategies per generation:
//!
//! - **Genetic Algorithm (GA)**: single-point crossover against a random
//!   peer, per-element mutation, and greedy survivor selection that never
//!   regresses relative to the parents.
//! - **Particle Swarm Optimization (PSO)**: attraction toward a random
//!   personal-best entry and the global best, with acceleration
//!   coefficients fixed at 2.
//!
//! Each individual is routed to one of the two paths with equal probability
//! every generation, so the population mixes exploitative recombination
//! with swarm-style social movement.
//!
//! # Quick Start
//!
//! ```
//! use gapso::{HybridConfig, HybridRunner, SumTarget};
//!
//! // Minimize |sum(v) - 50| over 20-dimensional vectors.
//! let objective = SumTarget::default();
//! let config = HybridConfig::default().with_seed(42);
//!
//! let result = HybridRunner::run(&objective, &config);
//! assert!(result.best_fitness <= result.fitness_history[0]);
//! ```
//!
//! Custom problems implement [`Objective`]; fitness is memoized by exact
//! vector value in [`Evaluator`], so objectives must be pure and
//! deterministic. All randomness flows through an explicit seedable RNG
//! ([`random::create_rng`]), making runs reproducible.

pub mod config;
pub mod engine;
pub mod evaluator;
pub mod operators;
pub mod random;
pub mod runner;
pub mod selection;
pub mod swarm;
pub mod types;

pub use config::HybridConfig;
pub use engine::{create_child, next_generation};
pub use evaluator::Evaluator;
pub use runner::{HybridResult, HybridRunner};
pub use types::{Objective, SumTarget};
