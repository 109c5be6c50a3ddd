//! Noise-based direction field synthesis.
//!
//! Maps coherent noise over the canvas grid to angles. The recognized
//! options are enumerated on [`NoiseFieldConfig`]; generation itself is a
//! pure mapping from cell coordinates to radians.
use noise::{NoiseFn, OpenSimplex, Perlin};
use tracing::debug;

use crate::error::{Error, Result};
use crate::field::AngleField;

/// Noise function used to drive the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoiseKind {
    Perlin,
    OpenSimplex,
}

/// Configuration for synthesizing an [`AngleField`] from coherent noise.
///
/// A raw noise sample in `[-1, 1]` is scaled by `2 * PI` to an angle; when
/// `angle_step` is set, the angle is then quantized upward to the nearest
/// multiple of the step, which turns smooth flow into discrete directions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoiseFieldConfig {
    /// Seed for the noise generator.
    pub seed: u32,
    /// Noise frequency applied to cell coordinates.
    pub frequency: f64,
    /// Noise function to sample.
    pub kind: NoiseKind,
    /// Optional angle quantization step in radians.
    pub angle_step: Option<f32>,
}

impl Default for NoiseFieldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            frequency: 0.01,
            kind: NoiseKind::Perlin,
            angle_step: None,
        }
    }
}

impl NoiseFieldConfig {
    /// Creates a config with the given seed and defaults for the rest.
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Sets the noise frequency.
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the noise function.
    pub fn with_kind(mut self, kind: NoiseKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the angle quantization step in radians.
    pub fn with_angle_step(mut self, angle_step: f32) -> Self {
        self.angle_step = Some(angle_step);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(Error::InvalidConfig("frequency must be > 0".into()));
        }
        if let Some(step) = self.angle_step {
            if !step.is_finite() || step <= 0.0 {
                return Err(Error::InvalidConfig("angle_step must be > 0".into()));
            }
        }
        Ok(())
    }

    /// Generates a `height` x `width` angle field.
    pub fn generate(&self, height: usize, width: usize) -> Result<AngleField> {
        self.validate()?;
        let sampler: Box<dyn NoiseFn<f64, 2>> = match self.kind {
            NoiseKind::Perlin => Box::new(Perlin::new(self.seed)),
            NoiseKind::OpenSimplex => Box::new(OpenSimplex::new(self.seed)),
        };
        let field = AngleField::from_fn(height, width, |row, col| {
            let sample = sampler.get([col as f64 * self.frequency, row as f64 * self.frequency]);
            let angle = sample as f32 * std::f32::consts::TAU;
            match self.angle_step {
                Some(step) => (angle / step).ceil() * step,
                None => angle,
            }
        })?;
        debug!(
            "Generated {}x{} {:?} angle field (frequency {}).",
            width, height, self.kind, self.frequency
        );
        Ok(field)
    }
}
