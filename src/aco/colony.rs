//! The colony: ant population plus the shared pheromone matrix.

use super::ant::{Ant, AntState};
use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::error::AcoError;
use crate::geometry::DistanceOracle;
use crate::random::{create_rng, derive_seed};
use rayon::prelude::*;

/// Summary of one colony iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Mean tour length over all ants this iteration.
    pub average_length: f64,
    /// Shortest tour length this iteration.
    pub iteration_best: f64,
    /// Shortest tour length seen in any iteration so far.
    pub best_length: f64,
}

/// Owns the ants and the pheromone matrix and drives one iteration at a time.
///
/// Each [`run_iteration`](Self::run_iteration) has two phases separated by
/// a rayon join:
///
/// 1. **Construct**: every ant resets to a random start city and builds a
///    tour, reading `&PheromoneMatrix` and `&D` only.
/// 2. **Update**: once all ants are complete, the matrix is evaporated and
///    reinforced through `&mut PheromoneMatrix`.
///
/// The phases never overlap, and the exclusive borrow in phase 2 makes any
/// overlap a compile error rather than a timing accident.
pub struct Colony<'a, D: DistanceOracle + ?Sized> {
    oracle: &'a D,
    ants: Vec<Ant>,
    pheromones: PheromoneMatrix,
    evaporation_rate: f64,
    parallel: bool,
    iteration: usize,
    best_tour: Vec<usize>,
    best_length: f64,
}

impl<'a, D: DistanceOracle + ?Sized> Colony<'a, D> {
    /// Validates `config` and builds the population.
    ///
    /// Ant `i` gets a generator seeded with `derive_seed(seed, i)`, so a
    /// seeded colony is reproducible regardless of thread scheduling.
    pub fn new(oracle: &'a D, config: &AcoConfig) -> Result<Self, AcoError> {
        config.validate()?;
        let n = oracle.len();
        if n == 0 {
            return Err(AcoError::EmptyPointSet);
        }

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let ants = (0..config.ant_count)
            .map(|id| Ant::new(id, n, create_rng(derive_seed(base_seed, id as u64))))
            .collect();

        Ok(Self {
            oracle,
            ants,
            pheromones: PheromoneMatrix::new(n, config.initial_pheromone),
            evaporation_rate: config.evaporation_rate,
            parallel: config.parallel,
            iteration: 0,
            best_tour: Vec::new(),
            best_length: f64::INFINITY,
        })
    }

    /// Runs one construct/update cycle and returns its statistics.
    pub fn run_iteration(&mut self) -> IterationStats {
        self.construct_tours();
        debug_assert!(self.ants.iter().all(|a| a.state() == AntState::Complete));

        self.pheromones.update(
            self.evaporation_rate,
            self.ants.iter().map(|a| (a.tour(), a.length())),
        );

        let mut total = 0.0;
        let mut iteration_best: Option<&Ant> = None;
        for ant in &self.ants {
            total += ant.length();
            if iteration_best.is_none_or(|b| ant.length() < b.length()) {
                iteration_best = Some(ant);
            }
        }
        let average_length = total / self.ants.len() as f64;

        let mut best_of_iteration = f64::INFINITY;
        if let Some(ant) = iteration_best {
            best_of_iteration = ant.length();
            if ant.length() < self.best_length {
                self.best_length = ant.length();
                self.best_tour.clear();
                self.best_tour.extend_from_slice(ant.tour());
            }
        }

        self.iteration += 1;
        IterationStats {
            iteration: self.iteration,
            average_length,
            iteration_best: best_of_iteration,
            best_length: self.best_length,
        }
    }

    /// Construct phase. Returns only after every ant is complete.
    fn construct_tours(&mut self) {
        let oracle = self.oracle;
        let pheromones = &self.pheromones;
        if self.parallel {
            self.ants.par_iter_mut().for_each(|ant| {
                ant.reset_random();
                ant.construct(oracle, pheromones);
            });
        } else {
            for ant in &mut self.ants {
                ant.reset_random();
                ant.construct(oracle, pheromones);
            }
        }
    }

    /// Number of completed iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Best tour seen so far; empty before the first iteration.
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    /// Length of [`best_tour`](Self::best_tour); infinite before the first iteration.
    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn oracle(&self) -> &D {
        self.oracle
    }
}
