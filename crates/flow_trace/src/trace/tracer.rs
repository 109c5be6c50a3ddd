//! The per-line integration loop.
use glam::Vec2;

use crate::error::Result;
use crate::field::AngleField;
use crate::trace::checker::{CompletionChecker, StepChecker};
use crate::trace::point_set::PointSet;
use crate::trace::{Polyline, StepConfig};

/// Traces one flow line at a time through an [`AngleField`], consulting
/// step checkers after every step and completion checkers once the line
/// stops.
///
/// Lines stop for one of three reasons: the step bound is reached, a step
/// checker vetoes the next point, or the trajectory leaves the canvas.
/// A stopped line is then either committed whole into the shared
/// [`PointSet`] or discarded whole; its own points never block it while
/// it is being traced.
pub struct FlowLineTracer<'a> {
    field: &'a AngleField,
    config: StepConfig,
    step_checkers: Vec<Box<dyn StepChecker>>,
    completion_checkers: Vec<Box<dyn CompletionChecker>>,
}

impl<'a> FlowLineTracer<'a> {
    /// Creates a tracer over `field`, validating `config` up front.
    pub fn try_new(field: &'a AngleField, config: StepConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            field,
            config,
            step_checkers: Vec::new(),
            completion_checkers: Vec::new(),
        })
    }

    /// Appends a step checker; checkers run in the order they were added.
    pub fn with_step_checker(mut self, checker: impl StepChecker + 'static) -> Self {
        self.step_checkers.push(Box::new(checker));
        self
    }

    /// Appends a completion checker; checkers run in the order they were
    /// added.
    pub fn with_completion_checker(mut self, checker: impl CompletionChecker + 'static) -> Self {
        self.completion_checkers.push(Box::new(checker));
        self
    }

    /// The field this tracer integrates over.
    pub fn field(&self) -> &AngleField {
        self.field
    }

    /// The shared integration parameters.
    pub fn config(&self) -> StepConfig {
        self.config
    }

    /// Traces one line from `seed`.
    ///
    /// Returns `Ok(Some(line))` for a committed line (its points are now
    /// in `placed`), `Ok(None)` for a line discarded by a completion
    /// checker, and an error only when `seed` itself lies outside the
    /// field, which is a caller bug.
    pub fn trace_line(&mut self, seed: Vec2, placed: &mut PointSet) -> Result<Option<Polyline>> {
        let mut angle = self.field.angle_at(seed)?;

        let mut line = Polyline::with_capacity(self.config.steps_count.saturating_add(1));
        line.push(seed);
        let mut position = seed;

        for _ in 0..self.config.steps_count {
            position += Vec2::new(angle.cos(), angle.sin()) * self.config.steps_length;

            if self
                .step_checkers
                .iter_mut()
                .any(|checker| !checker.permits(position, placed))
            {
                break;
            }

            line.push(position);

            // Bounds exit keeps the crossing point as the last point; the
            // field is never read outside its cells.
            if !self.field.contains(position) {
                break;
            }
            angle = self.field.angle_at(position)?;
        }

        if self
            .completion_checkers
            .iter_mut()
            .any(|checker| !checker.accepts(line.len()))
        {
            return Ok(None);
        }

        placed.commit(line.points());
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::trace::checker::{DistanceChecker, LineLengthChecker};

    fn rightward_field(size: usize) -> AngleField {
        AngleField::filled(size, size, 0.0).unwrap()
    }

    #[test]
    fn line_advances_along_the_field_direction() {
        let field = rightward_field(10);
        let mut tracer = FlowLineTracer::try_new(&field, StepConfig::new(3, 1.0)).unwrap();
        let mut placed = PointSet::new();

        let line = tracer
            .trace_line(Vec2::new(1.0, 5.0), &mut placed)
            .unwrap()
            .unwrap();

        assert_eq!(
            line.points(),
            &[
                Vec2::new(1.0, 5.0),
                Vec2::new(2.0, 5.0),
                Vec2::new(3.0, 5.0),
                Vec2::new(4.0, 5.0),
            ]
        );
        assert_eq!(placed.len(), 4);
    }

    #[test]
    fn boundary_exit_keeps_the_crossing_point() {
        let field = rightward_field(10);
        let mut tracer = FlowLineTracer::try_new(&field, StepConfig::new(50, 1.0)).unwrap();
        let mut placed = PointSet::new();

        let line = tracer
            .trace_line(Vec2::new(8.0, 2.0), &mut placed)
            .unwrap()
            .unwrap();

        // (10, 2) rounds outside [0, 10) and stops the line, but is kept.
        assert_eq!(line.last(), Some(Vec2::new(10.0, 2.0)));
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn vetoed_candidate_is_not_appended() {
        let field = rightward_field(10);
        let mut placed = PointSet::new();
        placed.commit(&[Vec2::new(5.0, 5.0)]);

        let mut tracer = FlowLineTracer::try_new(&field, StepConfig::new(50, 1.0))
            .unwrap()
            .with_step_checker(DistanceChecker::new(1.0));

        let line = tracer
            .trace_line(Vec2::new(1.0, 5.0), &mut placed)
            .unwrap()
            .unwrap();

        // Candidate (4, 5) is exactly one radius from (5, 5) and is vetoed;
        // the line ends at the previously accepted point.
        assert_eq!(line.last(), Some(Vec2::new(3.0, 5.0)));
        assert_eq!(line.len(), 3);
    }

    #[test]
    fn immediate_veto_leaves_a_single_point_line() {
        let field = rightward_field(10);
        let mut placed = PointSet::new();
        placed.commit(&[Vec2::new(2.0, 5.0)]);

        let mut tracer = FlowLineTracer::try_new(&field, StepConfig::new(50, 1.0))
            .unwrap()
            .with_step_checker(DistanceChecker::new(1.0));

        let line = tracer
            .trace_line(Vec2::new(1.0, 5.0), &mut placed)
            .unwrap()
            .unwrap();
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn discarded_line_commits_nothing() {
        let field = rightward_field(10);
        let mut placed = PointSet::new();
        placed.commit(&[Vec2::new(2.0, 5.0)]);
        let committed_before = placed.len();

        let mut tracer = FlowLineTracer::try_new(&field, StepConfig::new(50, 1.0))
            .unwrap()
            .with_step_checker(DistanceChecker::new(1.0))
            .with_completion_checker(LineLengthChecker::new(2));

        let outcome = tracer.trace_line(Vec2::new(1.0, 5.0), &mut placed).unwrap();
        assert!(outcome.is_none());
        assert_eq!(placed.len(), committed_before);
    }

    #[test]
    fn zero_steps_leaves_only_the_seed() {
        let field = rightward_field(10);
        let mut tracer = FlowLineTracer::try_new(&field, StepConfig::new(0, 1.0)).unwrap();
        let mut placed = PointSet::new();

        let line = tracer
            .trace_line(Vec2::new(4.0, 4.0), &mut placed)
            .unwrap()
            .unwrap();
        assert_eq!(line.points(), &[Vec2::new(4.0, 4.0)]);

        let mut rejecting = FlowLineTracer::try_new(&field, StepConfig::new(0, 1.0))
            .unwrap()
            .with_completion_checker(LineLengthChecker::new(1));
        let outcome = rejecting
            .trace_line(Vec2::new(4.0, 4.0), &mut PointSet::new())
            .unwrap();
        assert!(outcome.is_none());
    }

    #[test]
    fn out_of_bounds_seed_is_a_caller_error() {
        let field = rightward_field(10);
        let mut tracer = FlowLineTracer::try_new(&field, StepConfig::new(10, 1.0)).unwrap();
        let err = tracer
            .trace_line(Vec2::new(20.0, 5.0), &mut PointSet::new())
            .unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
    }

    #[test]
    fn invalid_step_config_fails_fast() {
        let field = rightward_field(4);
        assert!(FlowLineTracer::try_new(&field, StepConfig::new(10, 0.0)).is_err());
    }
}
