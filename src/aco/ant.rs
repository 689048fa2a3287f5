//! A single ant and its tour-construction state machine.

use super::pheromone::PheromoneMatrix;
use crate::geometry::DistanceOracle;
use rand::rngs::StdRng;
use rand::Rng;

/// Lower bound applied to distances when scoring candidate cities.
///
/// Coincident points would otherwise divide by zero. Only the score uses the
/// floored value; tour lengths always use the true distance.
pub const DISTANCE_EPSILON: f64 = 1e-9;

/// Lifecycle of an ant within one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntState {
    /// Created but never reset.
    Idle,
    /// Has a start city and unvisited cities remain (or the closing edge is pending).
    Constructing,
    /// Tour is a full cycle and its length is final.
    Complete,
}

/// An agent that builds one tour per iteration.
///
/// Each ant owns its tour buffer, visited flags, scoring scratch space and
/// random generator, so ants can run on separate threads while sharing only
/// `&D` and `&PheromoneMatrix`.
#[derive(Debug, Clone)]
pub struct Ant {
    id: usize,
    tour: Vec<usize>,
    visited: Vec<bool>,
    candidates: Vec<usize>,
    scores: Vec<f64>,
    start: usize,
    current: usize,
    length: f64,
    state: AntState,
    rng: StdRng,
}

impl Ant {
    /// Creates an idle ant for a problem with `n` cities.
    pub fn new(id: usize, n: usize, rng: StdRng) -> Self {
        Self {
            id,
            tour: Vec::with_capacity(n),
            visited: vec![false; n],
            candidates: Vec::with_capacity(n),
            scores: Vec::with_capacity(n),
            start: 0,
            current: 0,
            length: 0.0,
            state: AntState::Idle,
            rng,
        }
    }

    /// Clears the previous tour and places the ant on `start`.
    ///
    /// # Panics
    /// Panics if `start` is not a valid city index.
    pub fn reset(&mut self, start: usize) {
        assert!(
            start < self.visited.len(),
            "start city {start} out of range for {} cities",
            self.visited.len()
        );
        self.visited.fill(false);
        self.visited[start] = true;
        self.tour.clear();
        self.tour.push(start);
        self.start = start;
        self.current = start;
        self.length = 0.0;
        self.state = AntState::Constructing;
    }

    /// Resets onto a start city drawn from the ant's own generator.
    ///
    /// Returns the chosen city.
    pub fn reset_random(&mut self) -> usize {
        let start = self.rng.random_range(0..self.visited.len());
        self.reset(start);
        start
    }

    /// Performs one move.
    ///
    /// While unvisited cities remain, picks the next city by roulette-wheel
    /// selection over `sqrt(pheromone(current, k) / distance(current, k))`.
    /// Once every city is on the tour, adds the closing edge back to the
    /// start and transitions to [`AntState::Complete`].
    ///
    /// Calling `step` on an idle or complete ant is a no-op.
    pub fn step<D: DistanceOracle + ?Sized>(
        &mut self,
        oracle: &D,
        pheromones: &PheromoneMatrix,
    ) -> AntState {
        if self.state != AntState::Constructing {
            return self.state;
        }

        if self.tour.len() == self.visited.len() {
            self.length += oracle.distance(self.current, self.start);
            self.state = AntState::Complete;
            return self.state;
        }

        self.candidates.clear();
        self.scores.clear();
        let mut denominator = 0.0;
        for (k, &seen) in self.visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = oracle.distance(self.current, k).max(DISTANCE_EPSILON);
            let score = (pheromones.get(self.current, k) / d).sqrt();
            self.candidates.push(k);
            self.scores.push(score);
            denominator += score;
        }

        let pick = if denominator > 0.0 && denominator.is_finite() {
            let draw = self.rng.random_range(0.0..denominator);
            roulette_select(&self.scores, draw)
        } else {
            // Every score underflowed to zero (or overflowed): fall back to a
            // uniform choice so the tour can still complete.
            self.rng.random_range(0..self.candidates.len())
        };

        let next = self.candidates[pick];
        self.visited[next] = true;
        self.tour.push(next);
        self.length += oracle.distance(self.current, next);
        self.current = next;
        self.state
    }

    /// Steps until the tour is complete.
    pub fn construct<D: DistanceOracle + ?Sized>(
        &mut self,
        oracle: &D,
        pheromones: &PheromoneMatrix,
    ) {
        while self.step(oracle, pheromones) == AntState::Constructing {}
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn state(&self) -> AntState {
        self.state
    }

    /// Cities in visiting order, starting at the start city.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Accumulated length; includes the closing edge once complete.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn start_city(&self) -> usize {
        self.start
    }

    pub fn current_city(&self) -> usize {
        self.current
    }
}

/// Roulette-wheel selection.
///
/// Returns the first position whose running sum of `scores` exceeds `draw`.
/// Equal scores therefore resolve to the lowest position. If rounding leaves
/// the draw at or above the total, the last position is returned.
///
/// # Panics
/// Panics if `scores` is empty.
pub fn roulette_select(scores: &[f64], draw: f64) -> usize {
    assert!(!scores.is_empty(), "cannot select from empty scores");
    let mut cumulative = 0.0;
    for (i, &s) in scores.iter().enumerate() {
        cumulative += s;
        if draw < cumulative {
            return i;
        }
    }
    scores.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{is_permutation, tour_length, PointSet};
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn square() -> PointSet {
        PointSet::from_coords(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_new_ant_is_idle() {
        let ant = Ant::new(3, 5, create_rng(1));
        assert_eq!(ant.id(), 3);
        assert_eq!(ant.state(), AntState::Idle);
        assert!(ant.tour().is_empty());
    }

    #[test]
    fn test_step_on_idle_is_noop() {
        let pts = square();
        let pher = PheromoneMatrix::new(4, 1.0);
        let mut ant = Ant::new(0, 4, create_rng(1));
        assert_eq!(ant.step(&pts, &pher), AntState::Idle);
        assert!(ant.tour().is_empty());
    }

    #[test]
    fn test_reset_places_ant() {
        let mut ant = Ant::new(0, 4, create_rng(1));
        ant.reset(2);
        assert_eq!(ant.state(), AntState::Constructing);
        assert_eq!(ant.tour(), &[2]);
        assert_eq!(ant.start_city(), 2);
        assert_eq!(ant.current_city(), 2);
        assert_eq!(ant.length(), 0.0);
    }

    #[test]
    fn test_construct_square() {
        let pts = square();
        let pher = PheromoneMatrix::new(4, 1.0);
        let mut ant = Ant::new(0, 4, create_rng(9));
        ant.reset(0);
        ant.construct(&pts, &pher);

        assert_eq!(ant.state(), AntState::Complete);
        assert!(is_permutation(ant.tour(), 4));
        assert_eq!(ant.tour()[0], 0);
        assert!((ant.length() - tour_length(&pts, ant.tour())).abs() < 1e-9);
    }

    #[test]
    fn test_single_city_tour() {
        let pts = PointSet::from_coords(&[(1.0, 1.0)]).unwrap();
        let pher = PheromoneMatrix::new(1, 1.0);
        let mut ant = Ant::new(0, 1, create_rng(0));
        assert_eq!(ant.reset_random(), 0);
        ant.construct(&pts, &pher);
        assert_eq!(ant.state(), AntState::Complete);
        assert_eq!(ant.tour(), &[0]);
        assert_eq!(ant.length(), 0.0);
    }

    #[test]
    fn test_coincident_points_complete() {
        // Every cycle leaves the origin cluster once and returns once: 5 + 5.
        let pts =
            PointSet::from_coords(&[(0.0, 0.0), (0.0, 0.0), (3.0, 4.0), (0.0, 0.0)]).unwrap();
        let pher = PheromoneMatrix::new(4, 1.0);
        let mut ant = Ant::new(0, 4, create_rng(5));
        ant.reset(0);
        ant.construct(&pts, &pher);
        assert!(is_permutation(ant.tour(), 4));
        assert!(ant.length().is_finite());
        assert!((ant.length() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_pheromone_falls_back_to_uniform() {
        let pts = square();
        let pher = PheromoneMatrix::new(4, 0.0);
        let mut ant = Ant::new(0, 4, create_rng(2));
        ant.reset(1);
        ant.construct(&pts, &pher);
        assert!(is_permutation(ant.tour(), 4));
    }

    #[test]
    fn test_strong_trail_is_followed() {
        // Only 0->2 carries pheromone from city 0; the ant must go there.
        let pts = square();
        let mut pher = PheromoneMatrix::new(4, 1e-300);
        pher.update(0.5, [([0usize, 2].as_slice(), 1e-3)]);
        let mut ant = Ant::new(0, 4, create_rng(4));
        ant.reset(0);
        ant.step(&pts, &pher);
        assert_eq!(ant.tour(), &[0, 2]);
    }

    #[test]
    fn test_roulette_select_cumulative() {
        let scores = [1.0, 2.0, 3.0];
        assert_eq!(roulette_select(&scores, 0.0), 0);
        assert_eq!(roulette_select(&scores, 0.999), 0);
        assert_eq!(roulette_select(&scores, 1.0), 1);
        assert_eq!(roulette_select(&scores, 2.5), 1);
        assert_eq!(roulette_select(&scores, 3.0), 2);
        assert_eq!(roulette_select(&scores, 5.999), 2);
    }

    #[test]
    fn test_roulette_select_ties_lowest_first() {
        let scores = [0.5, 0.5, 0.5];
        assert_eq!(roulette_select(&scores, 0.25), 0);
    }

    #[test]
    fn test_roulette_select_rounding_overflow() {
        assert_eq!(roulette_select(&[0.1, 0.2], 0.3 + 1e-12), 1);
    }

    #[test]
    fn test_roulette_skips_zero_scores() {
        assert_eq!(roulette_select(&[0.0, 1.0, 0.0], 0.0), 1);
    }

    proptest! {
        #[test]
        fn prop_tour_is_permutation_with_matching_length(
            coords in proptest::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 2..40),
            seed in any::<u64>(),
        ) {
            let pts = PointSet::from_coords(&coords).unwrap();
            let n = coords.len();
            let pher = PheromoneMatrix::new(n, 1.0);
            let mut ant = Ant::new(0, n, create_rng(seed));
            ant.reset_random();
            ant.construct(&pts, &pher);

            prop_assert_eq!(ant.state(), AntState::Complete);
            prop_assert!(is_permutation(ant.tour(), n));
            let expected = tour_length(&pts, ant.tour());
            prop_assert!((ant.length() - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }
}
