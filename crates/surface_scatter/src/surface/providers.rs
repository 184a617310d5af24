//! Self-contained surface providers.
use glam::Vec3;

use crate::surface::{LayerMask, Ray, SurfaceHit, SurfaceQuery};

const VERTICAL_EPSILON: f32 = 1e-6;

/// Infinite horizontal plane at a fixed height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatSurface {
    pub height: f32,
    /// Layers this plane belongs to; rays whose mask misses it pass through.
    pub layer: LayerMask,
}

impl FlatSurface {
    pub fn new(height: f32) -> Self {
        Self {
            height,
            layer: LayerMask::ALL,
        }
    }

    pub fn with_layer(mut self, layer: LayerMask) -> Self {
        self.layer = layer;
        self
    }
}

impl SurfaceQuery for FlatSurface {
    fn raycast(&self, ray: &Ray, layers: LayerMask) -> Option<SurfaceHit> {
        if !layers.intersects(self.layer) {
            return None;
        }
        if ray.direction.y.abs() < VERTICAL_EPSILON {
            return None;
        }
        let t = (self.height - ray.origin.y) / ray.direction.y;
        if !(0.0..=ray.max_distance).contains(&t) {
            return None;
        }
        Some(SurfaceHit::new(ray.point_at(t), Vec3::Y, t))
    }
}

/// Terrain described by a height function `height(x, z)`.
///
/// Answers only downward vertical rays. Normals come from central differences
/// over `normal_step`. A non-finite height is treated as a hole.
pub struct HeightfieldSurface<F>
where
    F: Fn(f32, f32) -> f32,
{
    height: F,
    normal_step: f32,
    layer: LayerMask,
}

impl<F> HeightfieldSurface<F>
where
    F: Fn(f32, f32) -> f32,
{
    pub fn new(height: F) -> Self {
        Self {
            height,
            normal_step: 0.05,
            layer: LayerMask::ALL,
        }
    }

    pub fn with_normal_step(mut self, normal_step: f32) -> Self {
        self.normal_step = normal_step.abs().max(f32::EPSILON);
        self
    }

    pub fn with_layer(mut self, layer: LayerMask) -> Self {
        self.layer = layer;
        self
    }

    /// Height of the terrain at `(x, z)`.
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        (self.height)(x, z)
    }

    /// Unit normal at `(x, z)`; falls back to +Y where the gradient is not finite.
    pub fn normal_at(&self, x: f32, z: f32) -> Vec3 {
        let e = self.normal_step;
        let dx = self.height_at(x - e, z) - self.height_at(x + e, z);
        let dz = self.height_at(x, z - e) - self.height_at(x, z + e);
        let n = Vec3::new(dx, 2.0 * e, dz);
        if n.is_finite() {
            n.normalize_or(Vec3::Y)
        } else {
            Vec3::Y
        }
    }
}

impl<F> SurfaceQuery for HeightfieldSurface<F>
where
    F: Fn(f32, f32) -> f32,
{
    fn raycast(&self, ray: &Ray, layers: LayerMask) -> Option<SurfaceHit> {
        if !layers.intersects(self.layer) {
            return None;
        }
        let d = ray.direction;
        if d.y >= 0.0 || d.x.abs() > VERTICAL_EPSILON || d.z.abs() > VERTICAL_EPSILON {
            return None;
        }
        let (x, z) = (ray.origin.x, ray.origin.z);
        let h = self.height_at(x, z);
        if !h.is_finite() {
            return None;
        }
        let t = ray.origin.y - h;
        if !(0.0..=ray.max_distance).contains(&t) {
            return None;
        }
        Some(SurfaceHit::new(Vec3::new(x, h, z), self.normal_at(x, z), t))
    }
}

/// A provider that never reports a hit.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSurface;

impl SurfaceQuery for NoSurface {
    #[inline]
    fn raycast(&self, _ray: &Ray, _layers: LayerMask) -> Option<SurfaceHit> {
        None
    }
}

/// A provider that forwards to a user-provided closure.
pub struct FnSurface<F>
where
    F: Fn(&Ray, LayerMask) -> Option<SurfaceHit>,
{
    f: F,
}

impl<F> FnSurface<F>
where
    F: Fn(&Ray, LayerMask) -> Option<SurfaceHit>,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> SurfaceQuery for FnSurface<F>
where
    F: Fn(&Ray, LayerMask) -> Option<SurfaceHit>,
{
    #[inline]
    fn raycast(&self, ray: &Ray, layers: LayerMask) -> Option<SurfaceHit> {
        (self.f)(ray, layers)
    }
}
