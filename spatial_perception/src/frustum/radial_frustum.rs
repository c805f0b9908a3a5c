/// Radial sensing volumes: a disc in planar worlds, a ball in 3D.
///
/// A box is `Outside` when its nearest point is beyond the radius and
/// `Inside` when its farthest corner is within it.

use glam::{Vec2, Vec3};
use crate::bounds::{Aabb, Rect};
use super::frustum::{Frustum, FrustumId, Classification};

/// 2D disc of perception around a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularFrustum {
    id: FrustumId,
    center: Vec2,
    radius: f32,
}

impl CircularFrustum {
    /// Negative or NaN radii are treated as zero.
    pub fn new(id: FrustumId, center: Vec2, radius: f32) -> Self {
        Self { id, center, radius: radius.max(0.0) }
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Frustum<Rect> for CircularFrustum {
    fn id(&self) -> FrustumId {
        self.id
    }

    fn classify(&self, rect: &Rect) -> Classification {
        let nearest = self.center.clamp(rect.min, rect.max);
        let farthest = (self.center - rect.min).abs().max((self.center - rect.max).abs());
        radial_classification(
            self.center.distance_squared(nearest),
            farthest.length_squared(),
            self.radius,
        )
    }
}

/// 3D ball of perception around a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalFrustum {
    id: FrustumId,
    center: Vec3,
    radius: f32,
}

impl SphericalFrustum {
    /// Negative or NaN radii are treated as zero.
    pub fn new(id: FrustumId, center: Vec3, radius: f32) -> Self {
        Self { id, center, radius: radius.max(0.0) }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Frustum<Aabb> for SphericalFrustum {
    fn id(&self) -> FrustumId {
        self.id
    }

    fn classify(&self, aabb: &Aabb) -> Classification {
        let nearest = self.center.clamp(aabb.min, aabb.max);
        let farthest = (self.center - aabb.min).abs().max((self.center - aabb.max).abs());
        radial_classification(
            self.center.distance_squared(nearest),
            farthest.length_squared(),
            self.radius,
        )
    }
}

fn radial_classification(nearest_sq: f32, farthest_sq: f32, radius: f32) -> Classification {
    let radius_sq = radius * radius;
    if nearest_sq > radius_sq {
        Classification::Outside
    } else if farthest_sq <= radius_sq {
        Classification::Inside
    } else {
        Classification::Intersecting
    }
}

#[cfg(test)]
#[path = "radial_frustum_tests.rs"]
mod tests;
