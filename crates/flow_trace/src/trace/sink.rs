//! Render sinks receiving committed lines from the canvas runner.
//!
//! The runner forwards every committed line point by point, in trajectory
//! order, and notifies the sink when the line is complete. Sinks know
//! nothing about tracing; the core knows nothing about stroke styling or
//! file formats.
use std::path::Path;

use glam::Vec2;

use crate::error::Result;
use crate::trace::Polyline;

/// Capability handed to the canvas runner for emitting committed lines.
pub trait RenderSink {
    /// Begins a new line at `point`.
    fn start_line(&mut self, point: Vec2);

    /// Appends `point` to the line in progress.
    fn extend_line(&mut self, point: Vec2);

    /// Marks the line in progress as complete.
    fn commit_line(&mut self);

    /// Flushes all drawn geometry to durable storage.
    fn persist(&mut self, destination: &Path) -> Result<()>;
}

/// A no-op render sink.
impl RenderSink for () {
    #[inline]
    fn start_line(&mut self, _point: Vec2) {}

    #[inline]
    fn extend_line(&mut self, _point: Vec2) {}

    #[inline]
    fn commit_line(&mut self) {}

    fn persist(&mut self, _destination: &Path) -> Result<()> {
        Ok(())
    }
}

/// A render sink that collects committed lines in memory.
#[derive(Default)]
pub struct CollectSink {
    lines: Vec<Polyline>,
    current: Polyline,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed lines in commit order.
    pub fn lines(&self) -> &[Polyline] {
        &self.lines
    }

    pub fn into_inner(self) -> Vec<Polyline> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl RenderSink for CollectSink {
    fn start_line(&mut self, point: Vec2) {
        self.current = Polyline::new();
        self.current.push(point);
    }

    fn extend_line(&mut self, point: Vec2) {
        self.current.push(point);
    }

    fn commit_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
    }

    fn persist(&mut self, _destination: &Path) -> Result<()> {
        Ok(())
    }
}
