//! Ant Colony Optimization (ACO) for the travelling-salesman problem.
//!
//! A fixed population of ants repeatedly builds closed tours over a
//! complete graph of cities. Each move is a roulette-wheel draw weighted by
//! `sqrt(pheromone / distance)`. After every ant finishes, the pheromone
//! matrix evaporates and each traversed edge is reinforced by
//! `1 / tour_length`. The run stops once the population-average tour length
//! changes by less than a relative threshold between iterations.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: Colony size, evaporation rate, threshold, seed
//! - [`AcoRunner`]: Executes the iteration loop
//! - [`AcoResult`]: Best tour, its length, and per-iteration statistics
//! - [`Colony`]: Single-iteration driver, for callers that own the loop
//!
//! # Concurrency
//!
//! Ants construct tours in parallel with rayon. They share only
//! `&DistanceOracle` and `&PheromoneMatrix`, and each owns its own random
//! generator. The pheromone update runs only after every ant completes.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod colony;
mod config;
mod convergence;
mod pheromone;
mod runner;

pub use ant::{roulette_select, Ant, AntState, DISTANCE_EPSILON};
pub use colony::{Colony, IterationStats};
pub use config::AcoConfig;
pub use convergence::{Convergence, ConvergenceMonitor};
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
