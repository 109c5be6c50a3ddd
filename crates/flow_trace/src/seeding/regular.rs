//! Regular grid seed layout.
use mint::Vector2;
use rand::rand_core::RngCore;

use crate::seeding::SeedLayout;

/// Seeds on every `step`-th cell, row-major from the origin.
#[derive(Debug, Clone)]
pub struct RegularSeeds {
    /// Cell stride between seeds.
    pub step: usize,
}

impl RegularSeeds {
    /// Create a new RegularSeeds layout with the specified stride.
    pub fn new(step: usize) -> Self {
        Self { step }
    }
}

impl SeedLayout for RegularSeeds {
    fn generate(&self, extent: Vector2<f32>, _rng: &mut dyn RngCore) -> Vec<Vector2<f32>> {
        if self.step == 0 || extent.x < 1.0 || extent.y < 1.0 {
            return Vec::new();
        }

        let width = extent.x as usize;
        let height = extent.y as usize;

        let mut seeds = Vec::new();
        for y in (0..height).step_by(self.step) {
            for x in (0..width).step_by(self.step) {
                seeds.push(Vector2 {
                    x: x as f32,
                    y: y as f32,
                });
            }
        }
        seeds
    }
}
