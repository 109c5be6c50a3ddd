//! Seed layout strategies for generating line start positions.
//!
//! This module defines the trait and concrete layouts used to propose the
//! ordered seed array consumed by the canvas runner. Seed order is
//! significant: the runner traces seeds in exactly the order a layout
//! returns them, and earlier lines repel later ones.
use mint::Vector2;
use rand::rand_core::RngCore;

pub mod border;
pub mod random;
pub mod regular;

pub use border::BorderSeeds;
pub use random::RandomSeeds;
pub use regular::RegularSeeds;

/// Trait for seed layout generation.
///
/// `extent` is the canvas size in cells; layouts return integer-valued
/// coordinates inside `[0, extent.x) x [0, extent.y)`.
pub trait SeedLayout: Send + Sync {
    fn generate(&self, extent: Vector2<f32>, rng: &mut dyn RngCore) -> Vec<Vector2<f32>>;
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}
