//! Snaps a horizontal candidate onto the surface with a single downward ray.
use glam::{Vec2, Vec3};
use tracing::trace;

use crate::scatter::area::AreaSpec;
use crate::surface::{Ray, SurfaceHit, SurfaceQuery};

/// Outcome of querying the surface below a candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceLookup {
    Hit(SurfaceHit),
    Miss,
}

impl SurfaceLookup {
    pub fn hit(self) -> Option<SurfaceHit> {
        match self {
            SurfaceLookup::Hit(hit) => Some(hit),
            SurfaceLookup::Miss => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, SurfaceLookup::Hit(_))
    }
}

/// Builds the downward surface ray for a candidate `(x, z)`.
///
/// The ray starts at `min_height + ray_clearance` and travels `max_ray_length`.
pub fn candidate_ray(candidate: Vec2, area: &AreaSpec) -> Ray {
    let origin = Vec3::new(candidate.x, area.ray_origin_height(), candidate.y);
    Ray::down(origin, area.max_ray_length)
}

/// Queries `surface` below `candidate` using the area's ray parameters and layer mask.
///
/// Hits with a non-finite point are reported as misses.
pub fn resolve_candidate(
    surface: &dyn SurfaceQuery,
    candidate: Vec2,
    area: &AreaSpec,
) -> SurfaceLookup {
    let ray = candidate_ray(candidate, area);
    match surface.raycast(&ray, area.layer_mask) {
        Some(hit) if hit.point.is_finite() => SurfaceLookup::Hit(hit),
        Some(hit) => {
            trace!("Discarding non-finite surface hit at {:?}.", hit.point);
            SurfaceLookup::Miss
        }
        None => SurfaceLookup::Miss,
    }
}
