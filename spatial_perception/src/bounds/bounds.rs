/// Dimension-agnostic bounding volume capability.
///
/// A perception tree is generic over one `Bounds` type. Everything the
/// tree, the partition policies and the cullers need from geometry goes
/// through this trait: containment, overlap, center, union, and the
/// orthant split used by partition fields.

use std::fmt::Debug;
use glam::{Vec2, Vec3};

/// Spatial dimensionality of a bounds type.
///
/// 2.5D data (ground plane + elevation) uses the `Three` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    One,
    Two,
    Three,
}

impl Dimension {
    /// Number of child slots of an interior node:
    /// 2 (binary tree), 4 (quadtree) or 8 (octree).
    pub const fn child_count(self) -> usize {
        match self {
            Dimension::One => 2,
            Dimension::Two => 4,
            Dimension::Three => 8,
        }
    }
}

/// A point type usable as a partition reference.
///
/// `to_vec3` pads missing axes with zero; `from_vec3` drops them.
pub trait Position: Copy + Debug + PartialEq + Send + Sync + 'static {
    fn to_vec3(self) -> Vec3;
    fn from_vec3(v: Vec3) -> Self;
}

impl Position for f32 {
    fn to_vec3(self) -> Vec3 {
        Vec3::new(self, 0.0, 0.0)
    }

    fn from_vec3(v: Vec3) -> Self {
        v.x
    }
}

impl Position for Vec2 {
    fn to_vec3(self) -> Vec3 {
        self.extend(0.0)
    }

    fn from_vec3(v: Vec3) -> Self {
        v.truncate()
    }
}

impl Position for Vec3 {
    fn to_vec3(self) -> Vec3 {
        self
    }

    fn from_vec3(v: Vec3) -> Self {
        v
    }
}

/// Bounding volume capability.
pub trait Bounds: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Point type of this space
    type Point: Position;

    /// Dimensionality of this space
    const DIMENSION: Dimension;

    /// Degenerate volume reduced to a single point.
    fn from_point(point: Self::Point) -> Self;

    /// Geometric center.
    fn center(&self) -> Self::Point;

    /// `true` if `other` lies entirely within `self` (touching faces count).
    fn contains(&self, other: &Self) -> bool;

    fn contains_point(&self, point: Self::Point) -> bool;

    /// `true` if the volumes overlap or touch.
    fn intersects(&self, other: &Self) -> bool;

    /// Smallest volume enclosing both.
    fn union(&self, other: &Self) -> Self;

    /// Finite coordinates and `min <= max` on every axis.
    fn is_valid(&self) -> bool;

    /// Collapsed to a single point (zero extent on every axis).
    fn is_degenerate(&self) -> bool;

    /// Orthant of `point` relative to `reference`.
    ///
    /// Bit layout: bit0 = X, bit1 = Y, bit2 = Z (0 = low, 1 = high).
    /// A coordinate equal to the reference goes to the high side.
    fn orthant(reference: Self::Point, point: Self::Point) -> usize;

    /// Sub-volume of `self` covering one orthant around `reference`.
    ///
    /// The reference is clamped into `self` first, so the result is
    /// always enclosed by `self`.
    fn orthant_bounds(&self, reference: Self::Point, orthant: usize) -> Self;

    /// Dimensionality of this volume.
    fn dimension(&self) -> Dimension {
        Self::DIMENSION
    }
}
