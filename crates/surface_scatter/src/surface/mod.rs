//! Surface query abstraction consumed by the scatter engine.
//!
//! The host scene owns the real geometry and answers downward ray queries
//! through [`SurfaceQuery`]. The engine never interprets [`LayerMask`]; it is
//! forwarded untouched from [`crate::scatter::area::AreaSpec`] to the provider.
//!
//! A few self-contained providers live in [`providers`] for tests, demos and
//! hosts whose ground is analytic.
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod providers;
pub mod resolver;

pub use providers::{FlatSurface, FnSurface, HeightfieldSurface, NoSurface};

/// Opaque layer filter passed through to the surface provider.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: LayerMask = LayerMask(u32::MAX);
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask with a single layer bit set. Layers above 31 yield an empty mask.
    pub fn layer(index: u32) -> Self {
        LayerMask(1u32.checked_shl(index).unwrap_or(0))
    }

    pub fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

/// A ray with a normalized direction and a maximum travel distance.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub max_distance: f32,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
            max_distance,
        }
    }

    /// Straight down from `origin`.
    pub fn down(origin: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction: Vec3::NEG_Y,
            max_distance,
        }
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Nearest intersection reported by a surface provider.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// World position of the intersection.
    pub point: Vec3,
    /// Surface normal at the intersection. Providers should return unit length.
    pub normal: Vec3,
    /// Distance travelled along the ray.
    pub distance: f32,
}

impl SurfaceHit {
    pub fn new(point: Vec3, normal: Vec3, distance: f32) -> Self {
        Self {
            point,
            normal,
            distance,
        }
    }
}

/// Answers ray queries against the host's surface.
///
/// Implementations are expected to be fast and side-effect free; the engine
/// calls [`SurfaceQuery::raycast`] once per sampling attempt.
pub trait SurfaceQuery {
    fn raycast(&self, ray: &Ray, layers: LayerMask) -> Option<SurfaceHit>;
}

impl<T: SurfaceQuery + ?Sized> SurfaceQuery for &T {
    #[inline]
    fn raycast(&self, ray: &Ray, layers: LayerMask) -> Option<SurfaceHit> {
        (**self).raycast(ray, layers)
    }
}

impl<T: SurfaceQuery + ?Sized> SurfaceQuery for Box<T> {
    #[inline]
    fn raycast(&self, ray: &Ray, layers: LayerMask) -> Option<SurfaceHit> {
        (**self).raycast(ray, layers)
    }
}
