//! Pheromone trail matrix.

use rayon::prelude::*;

/// Directed `N×N` desirability weights, stored row-major.
///
/// The colony holds this by value and lends it out as `&PheromoneMatrix`
/// while ants construct tours; [`update`](Self::update) needs `&mut self`,
/// so the borrow checker guarantees no ant can observe a half-updated cell.
///
/// Cells stay non-negative: evaporation multiplies by `1 - rho` with
/// `rho` in (0, 1) and deposits are positive.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    data: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n×n` matrix with every cell set to `initial`.
    pub fn new(n: usize, initial: f64) -> Self {
        Self {
            n,
            data: vec![initial; n * n],
        }
    }

    /// Number of cities (rows).
    pub fn size(&self) -> usize {
        self.n
    }

    /// Resets every cell to `value`.
    pub fn initialize(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Weight of the directed edge `i -> j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// Outgoing weights of city `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Evaporates every cell and deposits reinforcement from completed tours.
    ///
    /// New weight: `(1 - rho) * w(i, j) + sum(1 / L_k)` over every tour `k`
    /// that moves directly from `i` to `j`. Tours are closed cycles, so the
    /// edge from the last city back to the first is reinforced too. Tours
    /// with a non-positive or non-finite length deposit nothing.
    ///
    /// The rescale runs one row per rayon task; deposits are then added in
    /// place (O(ants × N)), so no second `N×N` buffer is allocated.
    pub fn update<'a, I>(&mut self, evaporation_rate: f64, contributions: I)
    where
        I: IntoIterator<Item = (&'a [usize], f64)>,
    {
        let n = self.n;
        if n == 0 {
            return;
        }
        self.evaporate(evaporation_rate);

        for (tour, length) in contributions {
            if tour.len() < 2 || !(length > 0.0 && length.is_finite()) {
                continue;
            }
            let amount = 1.0 / length;
            for w in tour.windows(2) {
                self.data[w[0] * n + w[1]] += amount;
            }
            self.data[tour[tour.len() - 1] * n + tour[0]] += amount;
        }
    }

    /// Pure evaporation: every cell scales by `1 - rho`.
    pub fn evaporate(&mut self, evaporation_rate: f64) {
        let keep = 1.0 - evaporation_rate;
        if self.n == 0 {
            return;
        }
        self.data.par_chunks_mut(self.n).for_each(|row| {
            for cell in row {
                *cell *= keep;
            }
        });
    }

    /// Smallest cell value, or `None` for an empty matrix.
    pub fn min_value(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::min)
    }
}
