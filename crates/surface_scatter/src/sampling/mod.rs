//! Candidate sampling inside the footprint.
//!
//! This module defines the [`CandidateSampling`] trait the engine draws
//! candidates from, the default [`UniformAreaSampling`] strategy, and the
//! small random helpers shared by the rest of the crate.
use mint::Vector2;
use rand::RngCore;

pub mod uniform_area;

pub use uniform_area::UniformAreaSampling;

/// Trait for drawing a single candidate point inside a rectangular footprint.
///
/// `center` and `half_extents` are given in the horizontal plane as (x, z).
/// Implementations must be callable any number of times within one retry loop
/// and may only consume randomness from `rng`.
pub trait CandidateSampling: Send + Sync {
    fn sample(
        &self,
        center: Vector2<f32>,
        half_extents: Vector2<f32>,
        rng: &mut dyn RngCore,
    ) -> Vector2<f32>;
}

/// Generate a random float in the range [0, 1).
///
/// Uses the upper 24 bits of one `u32` draw so the result is exactly
/// representable and never rounds up to 1.0.
#[inline]
pub fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 * (1.0 / (1u32 << 24) as f32)
}

/// Generate a random float in `[min, max]` from a single draw.
///
/// Returns `min` when the range is empty or inverted.
#[inline]
pub fn rand_range(rng: &mut dyn RngCore, min: f32, max: f32) -> f32 {
    let t = rand01(rng);
    if max <= min {
        return min;
    }
    (min + t * (max - min)).clamp(min, max)
}
