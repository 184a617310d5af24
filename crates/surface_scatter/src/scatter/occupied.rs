//! Positions accepted so far and the minimum-separation test against them.
//!
//! The set is a flat list scanned in full for every candidate, O(n) per check
//! and O(n^2) for a run of n placements. That is fine for tens to a few hundred
//! placements; a uniform grid keyed by `min_distance` would be the upgrade path
//! without changing [`OccupiedSet::is_clear`].
use glam::Vec3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OccupiedSet {
    positions: Vec<Vec3>,
}

impl OccupiedSet {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            positions: Vec::with_capacity(cap),
        }
    }

    /// True if `position` is at least `min_distance` (full 3D) from every occupied position.
    ///
    /// Compares squared distances; with `min_distance == 0` every position is clear.
    pub fn is_clear(&self, position: Vec3, min_distance: f32) -> bool {
        let min_sq = min_distance * min_distance;
        self.positions
            .iter()
            .all(|p| p.distance_squared(position) >= min_sq)
    }

    pub fn insert(&mut self, position: Vec3) {
        self.positions.push(position);
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn as_slice(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.positions.iter()
    }
}

impl FromIterator<Vec3> for OccupiedSet {
    fn from_iter<I: IntoIterator<Item = Vec3>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Vec3> for OccupiedSet {
    fn extend<I: IntoIterator<Item = Vec3>>(&mut self, iter: I) {
        self.positions.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_accepts_everything() {
        let set = OccupiedSet::new();
        assert!(set.is_empty());
        assert!(set.is_clear(Vec3::ZERO, 1000.0));
    }

    #[test]
    fn exact_min_distance_is_accepted() {
        let mut set = OccupiedSet::new();
        set.insert(Vec3::ZERO);
        assert!(set.is_clear(Vec3::new(3.0, 4.0, 0.0), 5.0));
        assert!(!set.is_clear(Vec3::new(3.0, 3.9, 0.0), 5.0));
    }

    #[test]
    fn height_counts_toward_distance() {
        let mut set = OccupiedSet::new();
        set.insert(Vec3::ZERO);
        // Same (x, z), 2 units apart vertically.
        assert!(set.is_clear(Vec3::new(0.0, 2.0, 0.0), 2.0));
        assert!(!set.is_clear(Vec3::new(0.0, 1.0, 0.0), 2.0));
    }

    #[test]
    fn zero_min_distance_never_rejects() {
        let set: OccupiedSet = [Vec3::ZERO, Vec3::ONE].into_iter().collect();
        assert!(set.is_clear(Vec3::ZERO, 0.0));
        assert!(set.is_clear(Vec3::ONE, 0.0));
    }

    #[test]
    fn checks_every_position() {
        let mut set = OccupiedSet::with_capacity(3);
        set.extend([Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 10.0)]);
        set.insert(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(set.len(), 3);
        assert!(!set.is_clear(Vec3::ZERO, 2.0));
        set.clear();
        assert!(set.is_clear(Vec3::ZERO, 2.0));
        assert_eq!(set.as_slice(), &[] as &[Vec3]);
    }
}
