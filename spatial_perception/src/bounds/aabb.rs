/// Aabb - axis-aligned bounding box for 3D and 2.5D worlds.

use glam::Vec3;
use super::bounds::{Bounds, Dimension};

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl Aabb {
    /// Create a box from two opposite corners (in any order).
    ///
    /// NaN components are kept, so the result is not `is_valid()`.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        let ordered = a.cmple(b);
        Self {
            min: Vec3::select(ordered, a, b),
            max: Vec3::select(ordered, b, a),
        }
    }

    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Corner selected by a 3-bit mask (bit0 = X, bit1 = Y, bit2 = Z; 1 = max).
    pub fn corner(&self, mask: usize) -> Vec3 {
        Vec3::new(
            if mask & 1 == 0 { self.min.x } else { self.max.x },
            if mask & 2 == 0 { self.min.y } else { self.max.y },
            if mask & 4 == 0 { self.min.z } else { self.max.z },
        )
    }
}

impl Bounds for Aabb {
    type Point = Vec3;
    const DIMENSION: Dimension = Dimension::Three;

    fn from_point(point: Vec3) -> Self {
        Self { min: point, max: point }
    }

    fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    fn contains(&self, other: &Self) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    fn contains_point(&self, point: Vec3) -> bool {
        self.min.cmple(point).all() && self.max.cmpge(point).all()
    }

    fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min.cmple(self.max).all()
    }

    fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    fn orthant(reference: Vec3, point: Vec3) -> usize {
        ((point.x >= reference.x) as usize)
            | (((point.y >= reference.y) as usize) << 1)
            | (((point.z >= reference.z) as usize) << 2)
    }

    fn orthant_bounds(&self, reference: Vec3, orthant: usize) -> Self {
        let split = reference.max(self.min).min(self.max);
        Self {
            min: Vec3::new(
                if orthant & 1 == 0 { self.min.x } else { split.x },
                if orthant & 2 == 0 { self.min.y } else { split.y },
                if orthant & 4 == 0 { self.min.z } else { split.z },
            ),
            max: Vec3::new(
                if orthant & 1 == 0 { split.x } else { self.max.x },
                if orthant & 2 == 0 { split.y } else { self.max.y },
                if orthant & 4 == 0 { split.z } else { self.max.z },
            ),
        }
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
