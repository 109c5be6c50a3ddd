//! SVG render surface.
//!
//! Implements [`RenderSink`] over the `svg` crate: each committed line
//! becomes a `<path>` element with `M`/`L` commands, and `persist` writes
//! the assembled document. Stroke and fill styling stay out of the
//! tracing core entirely.
use std::path::Path;

use glam::Vec2;
use svg::node::element::path::Data;
use svg::node::element::Path as SvgPath;
use svg::Document;
use tracing::info;

use crate::error::Result;
use crate::trace::sink::RenderSink;

/// Render surface writing committed lines as SVG paths.
pub struct SvgSurface {
    width: u32,
    height: u32,
    stroke: String,
    stroke_width: f32,
    fill: String,
    paths: Vec<SvgPath>,
    current: Option<Data>,
    current_points: usize,
}

impl SvgSurface {
    /// Creates a surface with a `width` x `height` view box and default
    /// styling (black hairline stroke, no fill).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            stroke: "black".into(),
            stroke_width: 1.0,
            fill: "none".into(),
            paths: Vec::new(),
            current: None,
            current_points: 0,
        }
    }

    /// Sets the stroke color and width applied to every line.
    pub fn with_stroke(mut self, stroke: impl Into<String>, stroke_width: f32) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the fill applied to every line.
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Number of lines drawn so far.
    pub fn line_count(&self) -> usize {
        self.paths.len()
    }

    fn document(&self) -> Document {
        let mut document = Document::new().set("viewBox", (0, 0, self.width, self.height));
        for path in &self.paths {
            document = document.add(path.clone());
        }
        document
    }
}

impl RenderSink for SvgSurface {
    fn start_line(&mut self, point: Vec2) {
        self.current = Some(Data::new().move_to((point.x, point.y)));
        self.current_points = 1;
    }

    fn extend_line(&mut self, point: Vec2) {
        if let Some(data) = self.current.take() {
            self.current = Some(data.line_to((point.x, point.y)));
            self.current_points += 1;
        }
    }

    fn commit_line(&mut self) {
        let Some(data) = self.current.take() else {
            return;
        };
        // A single-point line has no extent and renders to nothing.
        if self.current_points < 2 {
            return;
        }
        let path = SvgPath::new()
            .set("stroke", self.stroke.clone())
            .set("stroke-width", self.stroke_width)
            .set("fill", self.fill.clone())
            .set("d", data);
        self.paths.push(path);
    }

    fn persist(&mut self, destination: &Path) -> Result<()> {
        svg::save(destination, &self.document())?;
        info!(
            "Saved {} lines to {}.",
            self.paths.len(),
            destination.display()
        );
        Ok(())
    }
}
