/// CullingRequest - what one sensing agent perceives with.

use crate::bounds::Bounds;
use crate::entity::{Entity, EntityId};
use crate::frustum::{Classification, Frustum};
use super::culling_result::CullingResult;
use super::filter::{InterestFilter, PhysicalPerceptionAlterator};

/// A frustum plus the optional hooks applied to the entities it sees.
///
/// The sensing entity, when set, lets bottom-up cullers start from its leaf.
pub struct CullingRequest<'a, B: Bounds> {
    frustum: &'a dyn Frustum<B>,
    sensing_entity: Option<EntityId>,
    alterator: Option<&'a dyn PhysicalPerceptionAlterator<B>>,
    filter: Option<&'a dyn InterestFilter<B>>,
}

impl<'a, B: Bounds> Clone for CullingRequest<'a, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, B: Bounds> Copy for CullingRequest<'a, B> {}

impl<'a, B: Bounds> CullingRequest<'a, B> {
    pub fn new(frustum: &'a dyn Frustum<B>) -> Self {
        Self {
            frustum,
            sensing_entity: None,
            alterator: None,
            filter: None,
        }
    }

    pub fn with_sensing_entity(mut self, id: EntityId) -> Self {
        self.sensing_entity = Some(id);
        self
    }

    pub fn with_alterator(mut self, alterator: &'a dyn PhysicalPerceptionAlterator<B>) -> Self {
        self.alterator = Some(alterator);
        self
    }

    pub fn with_filter(mut self, filter: &'a dyn InterestFilter<B>) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn frustum(&self) -> &'a dyn Frustum<B> {
        self.frustum
    }

    pub fn sensing_entity(&self) -> Option<EntityId> {
        self.sensing_entity
    }

    pub fn alterator(&self) -> Option<&'a dyn PhysicalPerceptionAlterator<B>> {
        self.alterator
    }

    pub fn filter(&self) -> Option<&'a dyn InterestFilter<B>> {
        self.filter
    }

    /// Accept or reject one entity given its frustum classification.
    ///
    /// `Outside` is rejected; the alterator runs next (and may reject by
    /// returning `Outside`), then the interest filter.
    pub(crate) fn judge<'e>(
        &self,
        entity: &'e Entity<B>,
        classification: Classification,
    ) -> Option<CullingResult<'e, B>> {
        if classification == Classification::Outside {
            return None;
        }
        let frustum = self.frustum.id();
        let bounds = entity.bounds();

        let classification = match self.alterator {
            Some(alterator) => alterator.alter(bounds, entity, classification, frustum),
            None => classification,
        };
        if classification == Classification::Outside {
            return None;
        }

        if let Some(filter) = self.filter {
            if !filter.keep(bounds, entity, classification, frustum) {
                return None;
            }
        }
        Some(CullingResult::new(frustum, classification, entity))
    }
}

#[cfg(test)]
#[path = "culling_request_tests.rs"]
mod tests;
