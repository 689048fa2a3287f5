//! ACO configuration.

use crate::error::AcoError;

/// Configuration for the ant colony.
///
/// # Examples
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ant_count(16)
///     .with_evaporation_rate(0.3)
///     .with_max_iterations(200)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcoConfig {
    /// Number of ants constructing a tour each iteration. Must be ≥ 1.
    pub ant_count: usize,

    /// Fraction of pheromone lost each iteration (rho), in (0, 1).
    pub evaporation_rate: f64,

    /// Value every pheromone cell starts at (tau_0). Must be positive.
    pub initial_pheromone: f64,

    /// Relative change of the population-average tour length below which
    /// the run is considered converged, in (0, 1).
    pub convergence_threshold: f64,

    /// Safety cap on the number of iterations. 0 = no limit.
    pub max_iterations: usize,

    /// Whether ants construct their tours in parallel using rayon.
    pub parallel: bool,

    /// Size of a dedicated worker pool, capped at the available hardware
    /// parallelism. `None` uses rayon's global pool, which is sized the
    /// same way.
    pub num_threads: Option<usize>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ant_count: 8,
            evaporation_rate: 0.5,
            initial_pheromone: 1.0,
            convergence_threshold: 0.01,
            max_iterations: 0,
            parallel: true,
            num_threads: None,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = Some(n);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.ant_count == 0 {
            return Err(AcoError::NoAgents);
        }
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(AcoError::InvalidEvaporationRate(self.evaporation_rate));
        }
        if !(self.initial_pheromone > 0.0 && self.initial_pheromone.is_finite()) {
            return Err(AcoError::InvalidInitialPheromone(self.initial_pheromone));
        }
        if !(self.convergence_threshold > 0.0 && self.convergence_threshold < 1.0) {
            return Err(AcoError::InvalidConvergenceThreshold(
                self.convergence_threshold,
            ));
        }
        if self.num_threads == Some(0) {
            return Err(AcoError::InvalidThreadCount);
        }
        Ok(())
    }
}
