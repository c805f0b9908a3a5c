/// CullingResult - one perceived entity with its classification.

use crate::bounds::Bounds;
use crate::entity::{Entity, EntityId};
use crate::frustum::{Classification, FrustumId};

/// Immutable pairing of an entity with its classification against one frustum.
///
/// Borrows the entity from the tree that was culled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CullingResult<'a, B: Bounds> {
    frustum: FrustumId,
    classification: Classification,
    entity: &'a Entity<B>,
}

impl<'a, B: Bounds> CullingResult<'a, B> {
    pub(crate) fn new(frustum: FrustumId, classification: Classification, entity: &'a Entity<B>) -> Self {
        Self { frustum, classification, entity }
    }

    pub fn frustum(&self) -> FrustumId {
        self.frustum
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn entity(&self) -> &'a Entity<B> {
        self.entity
    }

    pub fn entity_id(&self) -> EntityId {
        self.entity.id()
    }
}
