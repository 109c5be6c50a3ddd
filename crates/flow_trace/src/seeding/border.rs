//! Border seed layout.
use mint::Vector2;
use rand::rand_core::RngCore;

use crate::seeding::SeedLayout;

/// Seeds along all four canvas edges, every `step` cells.
///
/// Emission order is bottom edge, top edge, left edge, right edge; corner
/// cells may appear twice, which is harmless because duplicate seeds are
/// repelled by the first committed line.
#[derive(Debug, Clone)]
pub struct BorderSeeds {
    /// Cell stride between seeds along each edge.
    pub step: usize,
}

impl BorderSeeds {
    /// Create a new BorderSeeds layout with the specified stride.
    pub fn new(step: usize) -> Self {
        Self { step }
    }
}

impl SeedLayout for BorderSeeds {
    fn generate(&self, extent: Vector2<f32>, _rng: &mut dyn RngCore) -> Vec<Vector2<f32>> {
        if self.step == 0 || extent.x < 1.0 || extent.y < 1.0 {
            return Vec::new();
        }

        let width = extent.x as usize;
        let height = extent.y as usize;
        let top = (height - 1) as f32;
        let right = (width - 1) as f32;

        let mut seeds = Vec::new();
        for x in (0..width).step_by(self.step) {
            seeds.push(Vector2 { x: x as f32, y: 0.0 });
        }
        for x in (0..width).step_by(self.step) {
            seeds.push(Vector2 { x: x as f32, y: top });
        }
        for y in (0..height).step_by(self.step) {
            seeds.push(Vector2 { x: 0.0, y: y as f32 });
        }
        for y in (0..height).step_by(self.step) {
            seeds.push(Vector2 { x: right, y: y as f32 });
        }
        seeds
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn seeds_lie_on_canvas_edges() {
        let layout = BorderSeeds::new(3);
        let mut rng = StdRng::seed_from_u64(0);
        let seeds = layout.generate(Vector2 { x: 9.0, y: 6.0 }, &mut rng);

        assert!(!seeds.is_empty());
        for seed in &seeds {
            let on_horizontal = seed.y == 0.0 || seed.y == 5.0;
            let on_vertical = seed.x == 0.0 || seed.x == 8.0;
            assert!(
                on_horizontal || on_vertical,
                "seed ({}, {}) is not on an edge",
                seed.x,
                seed.y
            );
        }
    }

    #[test]
    fn bottom_edge_comes_first() {
        let layout = BorderSeeds::new(2);
        let mut rng = StdRng::seed_from_u64(0);
        let seeds = layout.generate(Vector2 { x: 6.0, y: 6.0 }, &mut rng);

        assert_eq!(seeds[0], Vector2 { x: 0.0, y: 0.0 });
        assert_eq!(seeds[1], Vector2 { x: 2.0, y: 0.0 });
        assert_eq!(seeds[2], Vector2 { x: 4.0, y: 0.0 });
        assert_eq!(seeds[3], Vector2 { x: 0.0, y: 5.0 });
    }
}
