//! Parallel Ant Colony Optimization for the travelling-salesman problem.
//!
//! - **Geometry**: immutable 2-D point sets and the [`geometry::DistanceOracle`]
//!   trait through which the colony reads distances.
//! - **ACO**: ants, the shared pheromone matrix, the colony that drives
//!   construct/update iterations, and the convergence-checked run loop.
//! - **Random**: per-ant seeded generators derived from a single run seed.
//!
//! # Example
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner};
//! use u_aco::geometry::PointSet;
//! use u_aco::random::create_rng;
//!
//! let mut rng = create_rng(1);
//! let cities = PointSet::random_uniform(30, 1000.0, &mut rng);
//! let config = AcoConfig::default()
//!     .with_ant_count(8)
//!     .with_max_iterations(100)
//!     .with_seed(42);
//!
//! let result = AcoRunner::run(&cities, &config)?;
//! assert_eq!(result.best_tour.len(), 30);
//! # Ok::<(), u_aco::AcoError>(())
//! ```
//!
//! # Architecture
//!
//! Point generation and reporting are left to callers. The crate logs
//! through `tracing` and never installs a subscriber.

pub mod aco;
pub mod error;
pub mod geometry;
pub mod random;

pub use error::AcoError;
