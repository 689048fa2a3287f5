//! Error types.

use thiserror::Error;

/// Errors rejected before any colony iteration runs.
///
/// Degenerate geometry (coincident points) is deliberately *not* an error:
/// zero-length edges are absorbed by the distance floor described in
/// [`crate::aco::DISTANCE_EPSILON`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AcoError {
    #[error("ant_count must be at least 1")]
    NoAgents,

    #[error("evaporation_rate must be in (0, 1), got {0}")]
    InvalidEvaporationRate(f64),

    #[error("initial_pheromone must be finite and positive, got {0}")]
    InvalidInitialPheromone(f64),

    #[error("convergence_threshold must be in (0, 1), got {0}")]
    InvalidConvergenceThreshold(f64),

    #[error("num_threads must be at least 1")]
    InvalidThreadCount,

    #[error("point set is empty")]
    EmptyPointSet,

    #[error("point {index} has non-finite coordinates ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for AcoError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        AcoError::ThreadPool(err.to_string())
    }
}
