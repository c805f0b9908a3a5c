/// Interval - one-dimensional bounds (curvilinear coordinates along a path).

use super::bounds::{Bounds, Dimension};

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create an interval; the bounds are reordered if needed.
    ///
    /// A NaN bound is kept, so the interval is not `is_valid()`.
    pub fn new(a: f32, b: f32) -> Self {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        Self { min, max }
    }

    pub fn length(&self) -> f32 {
        self.max - self.min
    }
}

impl Bounds for Interval {
    type Point = f32;
    const DIMENSION: Dimension = Dimension::One;

    fn from_point(point: f32) -> Self {
        Self { min: point, max: point }
    }

    fn center(&self) -> f32 {
        (self.min + self.max) * 0.5
    }

    fn contains(&self, other: &Self) -> bool {
        self.min <= other.min && self.max >= other.max
    }

    fn contains_point(&self, point: f32) -> bool {
        self.min <= point && point <= self.max
    }

    fn intersects(&self, other: &Self) -> bool {
        self.min <= other.max && self.max >= other.min
    }

    fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    fn orthant(reference: f32, point: f32) -> usize {
        (point >= reference) as usize
    }

    fn orthant_bounds(&self, reference: f32, orthant: usize) -> Self {
        let split = reference.max(self.min).min(self.max);
        if orthant & 1 == 0 {
            Self { min: self.min, max: split }
        } else {
            Self { min: split, max: self.max }
        }
    }
}

#[cfg(test)]
#[path = "interval_tests.rs"]
mod tests;
