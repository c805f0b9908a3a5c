/// Rect - axis-aligned rectangle for planar (2D) worlds.

use glam::Vec2;
use super::bounds::{Bounds, Dimension};

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum corner (x, y)
    pub min: Vec2,
    /// Maximum corner (x, y)
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from two opposite corners (in any order).
    ///
    /// NaN components are kept, so the result is not `is_valid()`.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        let ordered = a.cmple(b);
        Self {
            min: Vec2::select(ordered, a, b),
            max: Vec2::select(ordered, b, a),
        }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

impl Bounds for Rect {
    type Point = Vec2;
    const DIMENSION: Dimension = Dimension::Two;

    fn from_point(point: Vec2) -> Self {
        Self { min: point, max: point }
    }

    fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    fn contains(&self, other: &Self) -> bool {
        self.min.cmple(other.min).all() && self.max.cmpge(other.max).all()
    }

    fn contains_point(&self, point: Vec2) -> bool {
        self.min.cmple(point).all() && self.max.cmpge(point).all()
    }

    fn intersects(&self, other: &Self) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
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

    fn orthant(reference: Vec2, point: Vec2) -> usize {
        ((point.x >= reference.x) as usize)
            | (((point.y >= reference.y) as usize) << 1)
    }

    fn orthant_bounds(&self, reference: Vec2, orthant: usize) -> Self {
        let split = reference.max(self.min).min(self.max);
        Self {
            min: Vec2::new(
                if orthant & 1 == 0 { self.min.x } else { split.x },
                if orthant & 2 == 0 { self.min.y } else { split.y },
            ),
            max: Vec2::new(
                if orthant & 1 == 0 { split.x } else { self.max.x },
                if orthant & 2 == 0 { split.y } else { self.max.y },
            ),
        }
    }
}

#[cfg(test)]
#[path = "rect_tests.rs"]
mod tests;
