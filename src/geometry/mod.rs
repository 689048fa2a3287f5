//! Planar geometry: point sets and the distance oracle.
//!
//! The colony only ever sees cities through [`DistanceOracle`]. Two
//! implementations are provided:
//!
//! - [`PointSet`]: computes Euclidean distances on demand (O(N) memory)
//! - [`DistanceMatrix`]: a precomputed dense table (O(N²) memory)

mod oracle;
mod points;
mod tour;

pub use oracle::{DistanceMatrix, DistanceOracle};
pub use points::{Point, PointSet};
pub use tour::{is_permutation, tour_length};
