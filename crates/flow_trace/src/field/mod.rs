//! Direction fields assigning an angle to every cell of the canvas grid.
//!
//! This module defines [`AngleField`], the immutable per-cell direction
//! assignment consumed by the tracer, and noise-based synthesis in
//! [`noise`](crate::field::noise).
use glam::Vec2;

use crate::error::{Error, Result};

pub mod noise;

/// Immutable 2D array of direction values (radians), one per integer grid
/// cell of a `width` x `height` canvas.
///
/// Continuous coordinates are mapped to cells by rounding each component
/// half away from zero (`f32::round`). The rounding rule is observable at
/// cell edges, so it is part of the lookup contract.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleField {
    width: usize,
    height: usize,
    angles: Vec<f32>,
}

impl AngleField {
    /// Builds a field by evaluating `f(row, col)` for every cell.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> f32) -> Result<Self> {
        if height == 0 || width == 0 {
            return Err(Error::InvalidConfig(
                "field dimensions must be > 0 in both components".into(),
            ));
        }
        let mut angles = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                angles.push(f(row, col));
            }
        }
        Ok(Self {
            width,
            height,
            angles,
        })
    }

    /// Builds a field from row-major rows of radians. All rows must have
    /// the same non-zero length.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(Error::InvalidConfig(
                "field dimensions must be > 0 in both components".into(),
            ));
        }
        if rows.iter().any(|row| row.len() != width) {
            return Err(Error::InvalidConfig("field rows have unequal lengths".into()));
        }
        let mut angles = Vec::with_capacity(height * width);
        for row in rows {
            angles.extend(row);
        }
        Ok(Self {
            width,
            height,
            angles,
        })
    }

    /// Builds a field with the same angle in every cell.
    pub fn filled(height: usize, width: usize, angle: f32) -> Result<Self> {
        Self::from_fn(height, width, |_, _| angle)
    }

    /// Field width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` when `p` rounds to a cell inside
    /// `[0, width) x [0, height)`.
    pub fn contains(&self, p: Vec2) -> bool {
        self.cell_of(p).is_some()
    }

    /// Looks up the direction at the cell `p` rounds to.
    ///
    /// Out-of-range lookups are a caller error and fail with
    /// [`Error::OutOfBounds`].
    pub fn angle_at(&self, p: Vec2) -> Result<f32> {
        let (col, row) = self.cell_of(p).ok_or(Error::OutOfBounds {
            x: p.x,
            y: p.y,
            width: self.width,
            height: self.height,
        })?;
        Ok(self.angles[row * self.width + col])
    }

    /// Rounds `p` half away from zero to `(col, row)` cell indices.
    fn cell_of(&self, p: Vec2) -> Option<(usize, usize)> {
        let cx = p.x.round();
        let cy = p.y.round();
        if cx < 0.0 || cy < 0.0 || cx >= self.width as f32 || cy >= self.height as f32 {
            return None;
        }
        Some((cx as usize, cy as usize))
    }
}
