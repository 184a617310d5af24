//! Randomized scale and orientation for an accepted surface hit.
use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sampling::{rand01, rand_range};
use crate::scatter::rule::PlacementRule;

/// Scale and rotation chosen for a placement.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementTransform {
    /// Uniform scale factor.
    pub scale: f32,
    /// Final orientation.
    pub rotation: Quat,
    /// Yaw about the (possibly tilted) up axis, in radians within [0, 2π).
    pub yaw: f32,
    /// Unit axis `rotation` maps +Y onto: the cleaned surface normal when
    /// aligning, +Y otherwise.
    pub up: Vec3,
}

impl PlacementTransform {
    pub fn yaw_degrees(&self) -> f32 {
        self.yaw.to_degrees()
    }
}

/// Draws a scale factor and yaw for a hit with surface `normal`.
///
/// Exactly two draws are taken from `rng`, scale first, then yaw. With
/// `align_to_normal` the rotation maps +Y onto `normal` and then yaws about
/// the local up axis, which equals a yaw about `normal` itself. Without it the
/// rotation is a plain yaw about +Y. A degenerate normal falls back to +Y.
pub fn synthesize_transform(
    normal: Vec3,
    rule: &PlacementRule,
    rng: &mut dyn RngCore,
) -> PlacementTransform {
    let scale = rand_range(rng, rule.scale_range.min, rule.scale_range.max);
    let yaw = rand01(rng) * TAU;

    let spin = Quat::from_rotation_y(yaw);
    let (rotation, up) = if rule.align_to_normal {
        let up = surface_up(normal);
        ((Quat::from_rotation_arc(Vec3::Y, up) * spin).normalize(), up)
    } else {
        (spin, Vec3::Y)
    };

    PlacementTransform {
        scale,
        rotation,
        yaw,
        up,
    }
}

/// Unit-length `normal`, or +Y when it is zero or not finite.
pub fn surface_up(normal: Vec3) -> Vec3 {
    if normal.is_finite() {
        normal.normalize_or(Vec3::Y)
    } else {
        Vec3::Y
    }
}
