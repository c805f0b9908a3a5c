/// Hooks applied to every entity that survives the frustum test.
///
/// Both are implemented for closures with the matching signature.

use crate::bounds::Bounds;
use crate::entity::{Entity, SemanticTags};
use crate::frustum::{Classification, FrustumId};

/// Physical model of perception (occlusion, sensor range, ...).
///
/// May demote a classification; returning `Outside` rejects the entity.
pub trait PhysicalPerceptionAlterator<B: Bounds> {
    fn alter(
        &self,
        bounds: &B,
        entity: &Entity<B>,
        classification: Classification,
        frustum: FrustumId,
    ) -> Classification;
}

impl<B, F> PhysicalPerceptionAlterator<B> for F
where
    B: Bounds,
    F: Fn(&B, &Entity<B>, Classification, FrustumId) -> Classification,
{
    fn alter(
        &self,
        bounds: &B,
        entity: &Entity<B>,
        classification: Classification,
        frustum: FrustumId,
    ) -> Classification {
        self(bounds, entity, classification, frustum)
    }
}

/// Agent-specific interest: `false` drops the entity from the results.
pub trait InterestFilter<B: Bounds> {
    fn keep(
        &self,
        bounds: &B,
        entity: &Entity<B>,
        classification: Classification,
        frustum: FrustumId,
    ) -> bool;
}

impl<B, F> InterestFilter<B> for F
where
    B: Bounds,
    F: Fn(&B, &Entity<B>, Classification, FrustumId) -> bool,
{
    fn keep(
        &self,
        bounds: &B,
        entity: &Entity<B>,
        classification: Classification,
        frustum: FrustumId,
    ) -> bool {
        self(bounds, entity, classification, frustum)
    }
}

/// Keeps entities carrying at least one of the given tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInterestFilter {
    tags: SemanticTags,
}

impl TagInterestFilter {
    pub fn new(tags: SemanticTags) -> Self {
        Self { tags }
    }

    pub fn tags(&self) -> SemanticTags {
        self.tags
    }
}

impl<B: Bounds> InterestFilter<B> for TagInterestFilter {
    fn keep(&self, _bounds: &B, entity: &Entity<B>, _classification: Classification, _frustum: FrustumId) -> bool {
        entity.tags().intersects(self.tags)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
