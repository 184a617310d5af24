//! Footprint and ray-cast configuration for a scatter run.
use glam::{Vec2, Vec3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::surface::LayerMask;

pub const DEFAULT_AREA_SIZE: Vec2 = Vec2::new(50.0, 50.0);
pub const DEFAULT_RAY_CLEARANCE: f32 = 200.0;
pub const DEFAULT_MAX_RAY_LENGTH: f32 = 400.0;

/// Rectangular footprint in the horizontal (x, z) plane plus the parameters of
/// the downward surface ray.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AreaSpec {
    /// Footprint center as (x, z).
    pub center: Vec2,
    /// Half width (x) and half depth (z).
    pub half_extents: Vec2,
    /// Lowest expected surface height; surface rays start above it.
    pub min_height: f32,
    /// Height added to `min_height` to get the surface ray origin.
    pub ray_clearance: f32,
    /// Maximum distance a surface ray travels.
    pub max_ray_length: f32,
    /// Passed untouched to the surface provider.
    pub layer_mask: LayerMask,
}

impl Default for AreaSpec {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            half_extents: DEFAULT_AREA_SIZE * 0.5,
            min_height: 0.0,
            ray_clearance: DEFAULT_RAY_CLEARANCE,
            max_ray_length: DEFAULT_MAX_RAY_LENGTH,
            layer_mask: LayerMask::ALL,
        }
    }
}

impl AreaSpec {
    /// Creates a footprint centered at `center` with the given half extents.
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
            ..Default::default()
        }
    }

    /// Creates a footprint centered at the origin from its full width and depth.
    pub fn from_size(size: Vec2) -> Self {
        Self::new(Vec2::ZERO, size * 0.5)
    }

    pub fn with_center(mut self, center: Vec2) -> Self {
        self.center = center;
        self
    }

    pub fn with_half_extents(mut self, half_extents: Vec2) -> Self {
        self.half_extents = half_extents;
        self
    }

    pub fn with_min_height(mut self, min_height: f32) -> Self {
        self.min_height = min_height;
        self
    }

    pub fn with_ray_clearance(mut self, ray_clearance: f32) -> Self {
        self.ray_clearance = ray_clearance;
        self
    }

    pub fn with_max_ray_length(mut self, max_ray_length: f32) -> Self {
        self.max_ray_length = max_ray_length;
        self
    }

    pub fn with_layer_mask(mut self, layer_mask: LayerMask) -> Self {
        self.layer_mask = layer_mask;
        self
    }

    /// Full width and depth of the footprint.
    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Height at which surface rays start.
    pub fn ray_origin_height(&self) -> f32 {
        self.min_height + self.ray_clearance
    }

    /// Min and max corners of the footprint as (x, z).
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.center - self.half_extents, self.center + self.half_extents)
    }

    /// Whether `point` (x, z) lies inside the footprint, edges included.
    pub fn contains(&self, point: Vec2) -> bool {
        let (min, max) = self.bounds();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Footprint corners at height `y`, counter-clockwise seen from above.
    ///
    /// Consecutive pairs (wrapping) form the wireframe outline of the area.
    pub fn outline(&self, y: f32) -> [Vec3; 4] {
        let (min, max) = self.bounds();
        [
            Vec3::new(min.x, y, min.y),
            Vec3::new(min.x, y, max.y),
            Vec3::new(max.x, y, max.y),
            Vec3::new(max.x, y, min.y),
        ]
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.center.is_finite() {
            return Err(Error::InvalidConfig("area center must be finite".into()));
        }
        if !self.half_extents.is_finite() || self.half_extents.x < 0.0 || self.half_extents.y < 0.0
        {
            return Err(Error::InvalidConfig(
                "area half_extents must be finite and >= 0 in both components".into(),
            ));
        }
        if !self.min_height.is_finite() {
            return Err(Error::InvalidConfig("min_height must be finite".into()));
        }
        if !self.ray_clearance.is_finite() {
            return Err(Error::InvalidConfig("ray_clearance must be finite".into()));
        }
        if !self.max_ray_length.is_finite() || self.max_ray_length <= 0.0 {
            return Err(Error::InvalidConfig(
                "max_ray_length must be finite and > 0".into(),
            ));
        }

        Ok(())
    }
}
