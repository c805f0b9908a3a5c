/// World entities indexed by the perception trees.
///
/// An entity is a plain value: identifier, bounds, semantic tags and
/// kind. Trees own their entities; cullers hand out shared references.

use std::fmt;
use bitflags::bitflags;
use crate::bounds::Bounds;

/// Stable, externally assigned entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

bitflags! {
    /// Semantic tags attached to an entity, matched by interest filters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SemanticTags: u32 {
        /// Blocks movement and line of sight
        const OBSTACLE   = 1 << 0;
        /// Body of a situated agent
        const AGENT      = 1 << 1;
        /// Pedestrian body
        const PEDESTRIAN = 1 << 2;
        /// Vehicle body
        const VEHICLE    = 1 << 3;
        /// Road sign, traffic light, signpost
        const SIGN       = 1 << 4;
        /// Walkable or drivable ground patch
        const GROUND     = 1 << 5;
        /// Goal, waypoint or spawn marker
        const MARKER     = 1 << 6;
    }
}

impl Default for SemanticTags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Whether an entity may move after insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Never moves; lives in a static tree
    Static,
    /// Relocated every tick through the dynamic entity manager
    Mobile,
}

/// An entity of the simulated world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity<B: Bounds> {
    id: EntityId,
    bounds: B,
    tags: SemanticTags,
    kind: EntityKind,
}

impl<B: Bounds> Entity<B> {
    pub fn new_static(id: EntityId, bounds: B) -> Self {
        Self {
            id,
            bounds,
            tags: SemanticTags::empty(),
            kind: EntityKind::Static,
        }
    }

    pub fn new_mobile(id: EntityId, bounds: B) -> Self {
        Self {
            id,
            bounds,
            tags: SemanticTags::empty(),
            kind: EntityKind::Mobile,
        }
    }

    pub fn with_tags(mut self, tags: SemanticTags) -> Self {
        self.tags = tags;
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn bounds(&self) -> &B {
        &self.bounds
    }

    pub fn tags(&self) -> SemanticTags {
        self.tags
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn is_mobile(&self) -> bool {
        self.kind == EntityKind::Mobile
    }

    /// Same entity at another location.
    pub(crate) fn relocated(mut self, bounds: B) -> Self {
        self.bounds = bounds;
        self
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
