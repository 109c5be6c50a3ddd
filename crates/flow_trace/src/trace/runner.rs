//! Canvas runner sequencing seed points over the tracer.
//!
//! The runner owns the run's [`PointSet`] and the tracer, processes seeds
//! in exactly the order given, and forwards each committed line to the
//! render sink before the next seed is traced. Seed order is a first-class
//! part of the contract: the point set is cumulative, so swapping two
//! seeds can change which of their lines survives.
use glam::Vec2;
use tracing::{debug, info};

use crate::error::Result;
use crate::trace::point_set::PointSet;
use crate::trace::sink::RenderSink;
use crate::trace::tracer::FlowLineTracer;
use crate::trace::Polyline;

/// Aggregated outcome of one canvas run.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default)]
pub struct RunStats {
    /// Lines committed and forwarded to the sink.
    pub lines_committed: usize,
    /// Lines discarded by completion checkers.
    pub lines_discarded: usize,
    /// Total points committed across all lines.
    pub points_committed: usize,
}

/// Drives a full run: one tracer, one growing point set, one sink.
pub struct CanvasRunner<'a> {
    tracer: FlowLineTracer<'a>,
    points: PointSet,
}

impl<'a> CanvasRunner<'a> {
    /// Creates a runner with an empty default [`PointSet`].
    pub fn new(tracer: FlowLineTracer<'a>) -> Self {
        Self {
            tracer,
            points: PointSet::new(),
        }
    }

    /// Creates a runner with a caller-provided point set, e.g. one whose
    /// bucket size suits the configured exclusion radius.
    pub fn with_point_set(tracer: FlowLineTracer<'a>, points: PointSet) -> Self {
        Self { tracer, points }
    }

    /// Traces every seed in order, forwarding committed lines to `sink`.
    ///
    /// A discarded line is a normal outcome: it contributes nothing to the
    /// point set or the sink and is counted in [`RunStats`], never raised
    /// as an error.
    pub fn run(&mut self, seeds: &[Vec2], sink: &mut dyn RenderSink) -> Result<RunStats> {
        let mut stats = RunStats::default();

        for (index, seed) in seeds.iter().copied().enumerate() {
            match self.tracer.trace_line(seed, &mut self.points)? {
                Some(line) => {
                    stats.lines_committed += 1;
                    stats.points_committed += line.len();
                    debug!("Line {}: committed {} points.", index, line.len());
                    forward(&line, sink);
                }
                None => {
                    stats.lines_discarded += 1;
                    debug!("Line {}: discarded.", index);
                }
            }
        }

        info!(
            "Canvas run: {} seeds, {} lines committed, {} discarded, {} points.",
            seeds.len(),
            stats.lines_committed,
            stats.lines_discarded,
            stats.points_committed
        );
        Ok(stats)
    }

    /// The cumulative point set.
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn into_points(self) -> PointSet {
        self.points
    }
}

fn forward(line: &Polyline, sink: &mut dyn RenderSink) {
    let mut points = line.points().iter().copied();
    if let Some(first) = points.next() {
        sink.start_line(first);
    }
    for point in points {
        sink.extend_line(point);
    }
    sink.commit_line();
}
