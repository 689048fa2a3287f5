//! Convergence test on the population-average tour length.

/// Verdict after observing one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    Continue,
    Converged,
}

/// Tracks the population-average tour length across iterations.
///
/// The previous average starts at `f64::MAX`, so the first observation
/// always yields a relative change near 1 and the loop never stops after a
/// single iteration on account of a division by zero.
#[derive(Debug, Clone)]
pub struct ConvergenceMonitor {
    threshold: f64,
    prev_avg: f64,
    curr_avg: f64,
    observations: usize,
}

impl ConvergenceMonitor {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            prev_avg: f64::MAX,
            curr_avg: f64::MAX,
            observations: 0,
        }
    }

    /// Records this iteration's average and decides whether to keep going.
    pub fn observe(&mut self, average: f64) -> Convergence {
        self.prev_avg = self.curr_avg;
        self.curr_avg = average;
        self.observations += 1;
        if self.relative_change() > self.threshold {
            Convergence::Continue
        } else {
            Convergence::Converged
        }
    }

    /// `|curr - prev| / prev` for the latest observation.
    ///
    /// Identical averages (including two zero-length averages on fully
    /// coincident point sets) report zero.
    pub fn relative_change(&self) -> f64 {
        if self.curr_avg == self.prev_avg {
            return 0.0;
        }
        (self.curr_avg - self.prev_avg).abs() / self.prev_avg.abs()
    }

    pub fn previous_average(&self) -> f64 {
        self.prev_avg
    }

    pub fn current_average(&self) -> f64 {
        self.curr_avg
    }

    pub fn observations(&self) -> usize {
        self.observations
    }
}
