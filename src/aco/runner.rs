//! ACO run loop.

use super::colony::{Colony, IterationStats};
use super::config::AcoConfig;
use super::convergence::{Convergence, ConvergenceMonitor};
use crate::error::AcoError;
use crate::geometry::DistanceOracle;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best tour found, a permutation of `0..N`.
    pub best_tour: Vec<usize>,

    /// Closed-cycle length of `best_tour`.
    pub best_length: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Population-average tour length of the last iteration.
    pub final_average: f64,

    /// Whether the relative-change criterion was met.
    ///
    /// `false` means the run hit `max_iterations` or was cancelled; the
    /// best solution found so far is still reported.
    pub converged: bool,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Statistics of every iteration, in order.
    pub history: Vec<IterationStats>,
}

/// Executes the ant colony until the average tour length stabilizes.
///
/// The stopping rule looks only at the population-average length, so a
/// stable population can stop the run on a tour that is not optimal. On the
/// 4-city unit square with two ants, both ants taking the crossed tour
/// (length 2 + 2√2) in consecutive iterations gives zero relative change and
/// ends the run there. A larger colony makes this rare.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner};
/// use u_aco::geometry::PointSet;
///
/// let cities = PointSet::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// let config = AcoConfig::default().with_ant_count(4).with_max_iterations(50).with_seed(7);
///
/// let result = AcoRunner::run(&cities, &config).unwrap();
/// assert_eq!(result.best_tour.len(), 4);
/// assert!(result.iterations <= 50);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO optimization.
    pub fn run<D: DistanceOracle + ?Sized>(
        oracle: &D,
        config: &AcoConfig,
    ) -> Result<AcoResult, AcoError> {
        Self::run_with_cancel(oracle, config, None)
    }

    /// Runs ACO with an optional cancellation token.
    ///
    /// The first iteration always runs so that a valid tour is reported.
    /// After that, if `cancel` is set the run stops before the next
    /// iteration and returns the best solution found so far.
    pub fn run_with_cancel<D: DistanceOracle + ?Sized>(
        oracle: &D,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult, AcoError> {
        config.validate()?;
        if oracle.is_empty() {
            return Err(AcoError::EmptyPointSet);
        }

        match config.num_threads {
            Some(requested) => {
                let threads = worker_count(requested);
                if threads < requested {
                    warn!(requested, threads, "worker pool clamped to hardware parallelism");
                }
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("aco-worker-{i}"))
                    .build()?;
                pool.install(|| run_loop(oracle, config, cancel))
            }
            None => run_loop(oracle, config, cancel),
        }
    }
}

/// Caps a requested pool size at the available hardware parallelism.
fn worker_count(requested: usize) -> usize {
    let available = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    requested.clamp(1, available)
}

fn run_loop<D: DistanceOracle + ?Sized>(
    oracle: &D,
    config: &AcoConfig,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<AcoResult, AcoError> {
    let mut colony = Colony::new(oracle, config)?;
    let mut monitor = ConvergenceMonitor::new(config.convergence_threshold);

    if oracle.has_zero_length_edges() {
        warn!(
            epsilon = super::ant::DISTANCE_EPSILON,
            "point set contains coincident cities; zero distances are floored when scoring"
        );
    }
    info!(
        cities = oracle.len(),
        ants = config.ant_count,
        evaporation_rate = config.evaporation_rate,
        threshold = config.convergence_threshold,
        max_iterations = config.max_iterations,
        "starting ant colony run"
    );

    let mut history = Vec::new();
    let mut converged = false;
    let mut cancelled = false;

    loop {
        if colony.iteration() > 0 {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
        }

        let stats = colony.run_iteration();
        let verdict = monitor.observe(stats.average_length);
        debug!(
            iteration = stats.iteration,
            average = stats.average_length,
            best = stats.best_length,
            relative_change = monitor.relative_change(),
            "iteration complete"
        );
        history.push(stats);

        if verdict == Convergence::Converged {
            converged = true;
            break;
        }
        if config.max_iterations > 0 && colony.iteration() >= config.max_iterations {
            warn!(
                iterations = colony.iteration(),
                relative_change = monitor.relative_change(),
                "iteration cap reached before convergence"
            );
            break;
        }
    }

    let result = AcoResult {
        best_tour: colony.best_tour().to_vec(),
        best_length: colony.best_length(),
        iterations: colony.iteration(),
        final_average: monitor.current_average(),
        converged,
        cancelled,
        history,
    };
    info!(
        iterations = result.iterations,
        best = result.best_length,
        average = result.final_average,
        converged = result.converged,
        cancelled = result.cancelled,
        "ant colony run finished"
    );
    Ok(result)
}
