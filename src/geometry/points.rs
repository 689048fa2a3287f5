//! Immutable 2-D point sets.

use crate::error::AcoError;
use rand::Rng;

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An ordered, immutable set of cities indexed `0..len()`.
///
/// Construction validates that every coordinate is finite; after that the
/// set is never mutated, so it can be shared freely across worker threads.
///
/// # Examples
///
/// ```
/// use u_aco::geometry::{DistanceOracle, PointSet};
///
/// let square = PointSet::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// assert_eq!(square.len(), 4);
/// assert!((square.distance(0, 2) - 2f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Creates a point set, rejecting NaN or infinite coordinates.
    pub fn new(points: Vec<Point>) -> Result<Self, AcoError> {
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(AcoError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            });
        }
        Ok(Self { points })
    }

    /// Creates a point set from `(x, y)` tuples.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self, AcoError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Generates `n` points uniformly distributed in `[0, side)²`.
    pub fn random_uniform<R: Rng>(n: usize, side: f64, rng: &mut R) -> Self {
        let points = (0..n)
            .map(|_| Point::new(rng.random::<f64>() * side, rng.random::<f64>() * side))
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Returns `true` if at least two cities share the same location.
    ///
    /// Sorts a copy of the coordinates, so this is O(N log N).
    pub fn has_coincident_points(&self) -> bool {
        let mut sorted: Vec<(f64, f64)> = self.points.iter().map(|p| (p.x, p.y)).collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        sorted.windows(2).any(|w| w[0] == w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_rejects_nan() {
        let err = PointSet::from_coords(&[(0.0, 0.0), (f64::NAN, 1.0)]).unwrap_err();
        match err {
            AcoError::NonFiniteCoordinate { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_rejects_infinity() {
        assert!(PointSet::from_coords(&[(f64::INFINITY, 0.0)]).is_err());
    }

    #[test]
    fn test_empty_is_allowed_at_construction() {
        let set = PointSet::new(Vec::new()).unwrap();
        assert!(set.points().is_empty());
    }

    #[test]
    fn test_random_uniform_in_bounds() {
        let mut rng = create_rng(3);
        let set = PointSet::random_uniform(200, 1000.0, &mut rng);
        assert_eq!(set.points().len(), 200);
        for p in set.points() {
            assert!((0.0..1000.0).contains(&p.x));
            assert!((0.0..1000.0).contains(&p.y));
        }
    }

    #[test]
    fn test_coincident_detection() {
        let distinct = PointSet::from_coords(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
        assert!(!distinct.has_coincident_points());

        let dup = PointSet::from_coords(&[(2.0, 3.0), (1.0, 0.0), (2.0, 3.0)]).unwrap();
        assert!(dup.has_coincident_points());
    }

    #[test]
    fn test_get_by_index() {
        let set = PointSet::from_coords(&[(1.0, 2.0), (3.0, 4.0)]).unwrap();
        assert_eq!(set.get(1), Some(&Point::new(3.0, 4.0)));
        assert_eq!(set.get(2), None);
    }

    #[test]
    fn test_distance_to() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }
}
