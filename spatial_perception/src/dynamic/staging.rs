/// StagedChanges - intents recorded between two commits.
///
/// At most one change is kept per entity; later calls fold into it:
///
/// | staged      | register    | unregister  |
/// |-------------|-------------|-------------|
/// | nothing     | Insert / Relocate (if committed) | Remove (if committed), else nothing |
/// | Insert      | Insert      | cancelled   |
/// | Relocate    | Relocate    | Remove      |
/// | Remove      | Relocate    | Remove      |
///
/// Changes are drained in staging order.

use rustc_hash::FxHashMap;
use crate::bounds::Bounds;
use crate::entity::{Entity, EntityId};

/// One pending change of an entity.
#[derive(Debug, Clone, PartialEq)]
pub enum StagedChange<B: Bounds> {
    /// Entity not in the tree yet
    Insert(Entity<B>),
    /// Entity already in the tree, with its new value
    Relocate(Entity<B>),
    /// Entity leaves the tree
    Remove,
}

impl<B: Bounds> StagedChange<B> {
    /// Value the entity will have after commit, if it stays.
    pub fn entity(&self) -> Option<&Entity<B>> {
        match self {
            StagedChange::Insert(entity) | StagedChange::Relocate(entity) => Some(entity),
            StagedChange::Remove => None,
        }
    }
}

/// Changes drained for one commit, split by phase.
pub(crate) struct CommitPlan<B: Bounds> {
    pub(crate) removals: Vec<EntityId>,
    pub(crate) upserts: Vec<StagedChange<B>>,
}

#[derive(Debug, Clone)]
pub struct StagedChanges<B: Bounds> {
    /// Staging order (may hold ids whose change was cancelled)
    order: Vec<EntityId>,
    changes: FxHashMap<EntityId, StagedChange<B>>,
}

impl<B: Bounds> StagedChanges<B> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            changes: FxHashMap::default(),
        }
    }

    /// Stage an insertion or a relocation.
    ///
    /// `committed` tells whether the entity is currently in the tree.
    pub fn register(&mut self, entity: Entity<B>, committed: bool) {
        let id = entity.id();
        let change = match self.changes.get(&id) {
            Some(StagedChange::Insert(_)) => StagedChange::Insert(entity),
            Some(StagedChange::Relocate(_)) | Some(StagedChange::Remove) => StagedChange::Relocate(entity),
            None if committed => StagedChange::Relocate(entity),
            None => StagedChange::Insert(entity),
        };
        self.stage(id, change);
    }

    /// Stage a removal. Returns `false` when there is nothing to remove.
    pub fn unregister(&mut self, id: EntityId, committed: bool) -> bool {
        match self.changes.get(&id) {
            Some(StagedChange::Insert(_)) => {
                self.changes.remove(&id);
                true
            }
            Some(StagedChange::Relocate(_)) => {
                self.stage(id, StagedChange::Remove);
                true
            }
            Some(StagedChange::Remove) => true,
            None if committed => {
                self.stage(id, StagedChange::Remove);
                true
            }
            None => false,
        }
    }

    fn stage(&mut self, id: EntityId, change: StagedChange<B>) {
        if self.changes.insert(id, change).is_none() {
            self.order.push(id);
        }
    }

    pub fn get(&self, id: EntityId) -> Option<&StagedChange<B>> {
        self.changes.get(&id)
    }

    /// Number of entities with a pending change
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.changes.clear();
    }

    /// Take every pending change, in staging order, split by commit phase.
    pub(crate) fn drain(&mut self) -> CommitPlan<B> {
        let mut plan = CommitPlan {
            removals: Vec::new(),
            upserts: Vec::new(),
        };
        for id in std::mem::take(&mut self.order) {
            match self.changes.remove(&id) {
                Some(StagedChange::Remove) => plan.removals.push(id),
                Some(change) => plan.upserts.push(change),
                None => {}
            }
        }
        self.changes.clear();
        plan
    }
}

impl<B: Bounds> Default for StagedChanges<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "staging_tests.rs"]
mod tests;
