//! Uniform random seed layout.
use mint::Vector2;
use rand::rand_core::RngCore;

use crate::seeding::{rand01, SeedLayout};

/// Uniform random seeds on integer cells.
#[derive(Debug, Clone)]
pub struct RandomSeeds {
    /// Number of seeds to generate.
    pub count: usize,
}

impl RandomSeeds {
    /// Create a new RandomSeeds layout with the specified seed count.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl SeedLayout for RandomSeeds {
    fn generate(&self, extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>> {
        if extent.x < 1.0 || extent.y < 1.0 {
            return Vec::new();
        }

        let max_x = extent.x - 1.0;
        let max_y = extent.y - 1.0;

        let mut seeds = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let x = (rand01(rng) * extent.x).floor().min(max_x);
            let y = (rand01(rng) * extent.y).floor().min(max_y);
            seeds.push(Vector2 { x, y });
        }
        seeds
    }
}
