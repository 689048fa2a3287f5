//! Tour helpers.

use super::oracle::DistanceOracle;

/// Length of `tour` treated as a closed cycle (last city returns to the first).
///
/// Empty and single-city tours have length zero.
pub fn tour_length<D: DistanceOracle + ?Sized>(oracle: &D, tour: &[usize]) -> f64 {
    match tour {
        [] | [_] => 0.0,
        [first, .., last] => {
            let open: f64 = tour.windows(2).map(|w| oracle.distance(w[0], w[1])).sum();
            open + oracle.distance(*last, *first)
        }
    }
}

/// Returns `true` if `tour` visits every city in `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
