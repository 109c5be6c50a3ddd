//! Flow-line tracing pipeline: committed-point storage, checker pipelines,
//! the per-line tracer, and the canvas runner that sequences seeds.
use glam::Vec2;

pub mod checker;
pub mod point_set;
pub mod runner;
pub mod sink;
pub mod tracer;

/// One traced stroke: an ordered, append-only point sequence.
///
/// A line grows while tracing and is then either committed whole or
/// discarded whole; there are no partial commits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Vec2>,
}

impl Polyline {
    /// Creates an empty line.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            points: Vec::with_capacity(cap),
        }
    }

    /// Appends a point to the end of the line.
    pub fn push(&mut self, point: Vec2) {
        self.points.push(point);
    }

    /// Points in trajectory order.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Vec2> {
        self.points
    }
}

/// Integration parameters shared by every traced line.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepConfig {
    /// Upper bound on integration steps per line.
    ///
    /// Zero is a valid degenerate bound: every line is exactly its seed.
    pub steps_count: usize,
    /// Euclidean distance advanced per step.
    pub steps_length: f32,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            steps_count: 1000,
            steps_length: 1.0,
        }
    }
}

impl StepConfig {
    /// Creates a new [`StepConfig`].
    pub fn new(steps_count: usize, steps_length: f32) -> Self {
        Self {
            steps_count,
            steps_length,
        }
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.steps_length.is_finite() || self.steps_length <= 0.0 {
            return Err(crate::error::Error::InvalidConfig(
                "steps_length must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_keeps_trajectory_order() {
        let mut line = Polyline::new();
        line.push(Vec2::new(0.0, 0.0));
        line.push(Vec2::new(1.0, 0.0));
        line.push(Vec2::new(2.0, 0.0));

        assert_eq!(line.len(), 3);
        assert_eq!(line.first(), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(line.last(), Some(Vec2::new(2.0, 0.0)));
        assert_eq!(line.into_points().len(), 3);
    }

    #[test]
    fn non_positive_step_length_is_rejected() {
        assert!(StepConfig::new(10, 0.0).validate().is_err());
        assert!(StepConfig::new(10, -1.0).validate().is_err());
        assert!(StepConfig::new(10, f32::NAN).validate().is_err());
        assert!(StepConfig::new(10, 1.0).validate().is_ok());
    }

    #[test]
    fn zero_steps_count_is_a_valid_bound() {
        assert!(StepConfig::new(0, 1.0).validate().is_ok());
    }
}
