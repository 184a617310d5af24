//! Separation, orientation and scale rules applied to every placement.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_MIN_DISTANCE: f32 = 2.0;

/// Closed range a uniform scale factor is drawn from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    pub min: f32,
    pub max: f32,
}

impl ScaleRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// A range that always yields `scale`.
    pub fn fixed(scale: f32) -> Self {
        Self::new(scale, scale)
    }

    pub fn contains(&self, scale: f32) -> bool {
        (self.min..=self.max).contains(&scale)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidConfig("scale range must be finite".into()));
        }
        if self.min <= 0.0 {
            return Err(Error::InvalidConfig("scale range min must be > 0".into()));
        }
        if self.min > self.max {
            return Err(Error::InvalidConfig(format!(
                "scale range min ({}) must be <= max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self::fixed(1.0)
    }
}

/// Rules applied to every accepted placement.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRule {
    /// Minimum 3D distance between any two placed positions. Zero disables rejection.
    pub min_distance: f32,
    /// Tilt placements onto the surface normal before applying yaw.
    pub align_to_normal: bool,
    /// Range of the uniform scale factor.
    pub scale_range: ScaleRange,
}

impl Default for PlacementRule {
    fn default() -> Self {
        Self {
            min_distance: DEFAULT_MIN_DISTANCE,
            align_to_normal: true,
            scale_range: ScaleRange::default(),
        }
    }
}

impl PlacementRule {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            ..Default::default()
        }
    }

    pub fn with_min_distance(mut self, min_distance: f32) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_align_to_normal(mut self, align_to_normal: bool) -> Self {
        self.align_to_normal = align_to_normal;
        self
    }

    pub fn with_scale_range(mut self, min: f32, max: f32) -> Self {
        self.scale_range = ScaleRange::new(min, max);
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.min_distance.is_finite() || self.min_distance < 0.0 {
            return Err(Error::InvalidConfig(
                "min_distance must be finite and >= 0".into(),
            ));
        }
        self.scale_range.validate()
    }
}
