//! Step and completion predicates applied while tracing lines.
//!
//! Step checkers run after every integration step and may veto further
//! advancement; completion checkers run once a line stops and may veto
//! committing it at all. Both sets are open: implement the trait and hand
//! the checker to the tracer in the order it should run.
use glam::Vec2;

use crate::trace::point_set::PointSet;

/// Predicate consulted after each integration step.
pub trait StepChecker {
    /// Returns `true` when the candidate point may be appended to the
    /// line; `false` stops the line at the previously accepted point.
    fn permits(&mut self, candidate: Vec2, placed: &PointSet) -> bool;
}

/// Predicate consulted once a line stops.
pub trait CompletionChecker {
    /// Returns `true` when a line of `point_count` points may be
    /// committed; `false` discards the whole line.
    fn accepts(&mut self, point_count: usize) -> bool;
}

/// Vetoes candidates within `radius` of any committed point.
///
/// This is the spacing device: it keeps distinct strokes at least one
/// exclusion radius apart. A line is never blocked by its own points
/// because those are committed only after the line completes.
#[derive(Clone, Copy, Debug)]
pub struct DistanceChecker {
    /// Exclusion radius in canvas units.
    pub radius: f32,
}

impl DistanceChecker {
    /// Create a new DistanceChecker with the specified exclusion radius.
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl StepChecker for DistanceChecker {
    fn permits(&mut self, candidate: Vec2, placed: &PointSet) -> bool {
        !placed.query_any_within(candidate, self.radius)
    }
}

/// Discards lines with too few points to be visually meaningful.
#[derive(Clone, Copy, Debug)]
pub struct LineLengthChecker {
    /// A line is kept only when its point count is strictly greater.
    pub min_points: usize,
}

impl LineLengthChecker {
    /// Create a new LineLengthChecker with the specified threshold.
    pub fn new(min_points: usize) -> Self {
        Self { min_points }
    }
}

impl CompletionChecker for LineLengthChecker {
    fn accepts(&mut self, point_count: usize) -> bool {
        point_count > self.min_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_checker_vetoes_inside_the_radius() {
        let mut placed = PointSet::new();
        placed.commit(&[Vec2::new(5.0, 5.0)]);

        let mut checker = DistanceChecker::new(2.0);
        assert!(!checker.permits(Vec2::new(5.0, 6.0), &placed));
        assert!(!checker.permits(Vec2::new(5.0, 7.0), &placed)); // exactly on the radius
        assert!(checker.permits(Vec2::new(5.0, 7.5), &placed));
    }

    #[test]
    fn distance_checker_permits_everything_on_an_empty_set() {
        let placed = PointSet::new();
        let mut checker = DistanceChecker::new(10.0);
        assert!(checker.permits(Vec2::ZERO, &placed));
    }

    #[test]
    fn length_checker_threshold_is_strict() {
        let mut checker = LineLengthChecker::new(2);
        assert!(!checker.accepts(1));
        assert!(!checker.accepts(2));
        assert!(checker.accepts(3));
    }
}
