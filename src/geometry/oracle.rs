//! Distance lookups shared by every ant.

use super::points::PointSet;
use rayon::prelude::*;

/// Read-only distance lookup between cities `0..len()`.
///
/// Implementations must be pure: the colony calls [`distance`](Self::distance)
/// concurrently from every ant without synchronization. The result must be
/// symmetric, non-negative, and zero for `i == j`.
pub trait DistanceOracle: Send + Sync {
    /// Number of cities.
    fn len(&self) -> usize;

    /// Distance between city `i` and city `j`.
    fn distance(&self, i: usize, j: usize) -> f64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether two distinct cities are at distance zero.
    ///
    /// Used only for diagnostics; the default reports `false`.
    fn has_zero_length_edges(&self) -> bool {
        false
    }
}

impl DistanceOracle for PointSet {
    fn len(&self) -> usize {
        self.points().len()
    }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        let p = self.points();
        p[i].distance_to(&p[j])
    }

    fn has_zero_length_edges(&self) -> bool {
        self.has_coincident_points()
    }
}

/// Dense, precomputed `N×N` distance table.
///
/// Trades `8·N²` bytes for a lookup instead of a `hypot` per query. Worth it
/// for a few thousand cities at most; beyond that use [`PointSet`] directly.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Tabulates every pair of `oracle`, one row per rayon task.
    pub fn from_oracle<D: DistanceOracle + ?Sized>(oracle: &D) -> Self {
        let n = oracle.len();
        let mut data = vec![0.0; n * n];
        if n > 0 {
            data.par_chunks_mut(n).enumerate().for_each(|(i, row)| {
                for (j, cell) in row.iter_mut().enumerate() {
                    *cell = oracle.distance(i, j);
                }
            });
        }
        Self { n, data }
    }

    /// Row `i` of the table.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

impl DistanceOracle for DistanceMatrix {
    fn len(&self) -> usize {
        self.n
    }

    #[inline]
    fn distance(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    fn has_zero_length_edges(&self) -> bool {
        (0..self.n).any(|i| {
            self.row(i)
                .iter()
                .enumerate()
                .any(|(j, &d)| j != i && d == 0.0)
        })
    }
}
