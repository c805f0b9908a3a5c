/// BoxFrustum - axis-aligned sensing volume of any dimension.

use crate::bounds::Bounds;
use super::frustum::{Frustum, FrustumId, Classification};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxFrustum<B: Bounds> {
    id: FrustumId,
    volume: B,
}

impl<B: Bounds> BoxFrustum<B> {
    pub fn new(id: FrustumId, volume: B) -> Self {
        Self { id, volume }
    }

    pub fn volume(&self) -> &B {
        &self.volume
    }
}

impl<B: Bounds> Frustum<B> for BoxFrustum<B> {
    fn id(&self) -> FrustumId {
        self.id
    }

    fn classify(&self, bounds: &B) -> Classification {
        if !self.volume.intersects(bounds) {
            Classification::Outside
        } else if self.volume.contains(bounds) {
            Classification::Inside
        } else {
            Classification::Intersecting
        }
    }
}

#[cfg(test)]
#[path = "box_frustum_tests.rs"]
mod tests;
