#![forbid(unsafe_code)]
//! flow_trace: Flow-field line tracing with spacing-aware stroke placement.
//!
//! Modules:
//! - field: per-cell direction fields and noise-based synthesis
//! - seeding: seed layout generation (random, regular grid, border)
//! - trace: point storage, checker pipelines, the line tracer, and the canvas runner
//! - render: SVG render surface
//!
//! For examples and docs, see README and docs.rs.
pub mod error;
pub mod field;
pub mod render;
pub mod seeding;
pub mod trace;

/// Convenient re-exports for common types. Import with `use flow_trace::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::field::noise::{NoiseFieldConfig, NoiseKind};
    pub use crate::field::AngleField;
    pub use crate::render::SvgSurface;
    pub use crate::seeding::{BorderSeeds, RandomSeeds, RegularSeeds, SeedLayout};
    pub use crate::trace::checker::{
        CompletionChecker, DistanceChecker, LineLengthChecker, StepChecker,
    };
    pub use crate::trace::point_set::PointSet;
    pub use crate::trace::runner::{CanvasRunner, RunStats};
    pub use crate::trace::sink::{CollectSink, RenderSink};
    pub use crate::trace::tracer::FlowLineTracer;
    pub use crate::trace::{Polyline, StepConfig};
}
