//! Uniform random candidate sampling over the footprint rectangle.
use mint::Vector2;
use rand::RngCore;

use crate::sampling::{rand01, CandidateSampling};

/// Uniform i.i.d. sampling over `[cx - hw, cx + hw] x [cz - hd, cz + hd]`.
///
/// Draws exactly two values per candidate: x first, then z.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformAreaSampling;

impl UniformAreaSampling {
    pub fn new() -> Self {
        Self
    }
}

impl CandidateSampling for UniformAreaSampling {
    fn sample(
        &self,
        center: Vector2<f32>,
        half_extents: Vector2<f32>,
        rng: &mut dyn RngCore,
    ) -> Vector2<f32> {
        let u = rand01(rng);
        let v = rand01(rng);

        let hw = half_extents.x.max(0.0);
        let hd = half_extents.y.max(0.0);

        let x = center.x - hw + u * (2.0 * hw);
        let y = center.y - hd + v * (2.0 * hd);

        // Rounding near the far edge must not escape the footprint.
        Vector2 {
            x: x.clamp(center.x - hw, center.x + hw),
            y: y.clamp(center.y - hd, center.y + hd),
        }
    }
}
