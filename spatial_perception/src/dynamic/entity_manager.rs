/// DynamicEntityManager - staged mutation of a tree of mobile entities.
///
/// `register_mobile_entity`, `unregister_mobile_entity` and
/// `relocate_mobile_entity` only record intents; the tree is untouched
/// until `commit()`, which applies everything in four phases:
///
/// 1. Removals: detach entities from their leaves
/// 2. Insertions and relocations: route from the root (or from the nearest
///    ancestor whose region still contains the new position) to a leaf
/// 3. Refit: restore the bounding invariant up to the root, dropping
///    leaves left empty when the merge policy asks for it
/// 4. Splits: re-run the builder on leaves now over the split threshold
///
/// Readers of `tree()` never see a partially applied commit.

use rustc_hash::FxHashSet;
use crate::bounds::Bounds;
use crate::config::{MergePolicy, OutOfBoundsPolicy, TreeConfig};
use crate::entity::{Entity, EntityId};
use crate::error::{Error, Result};
use crate::partition::PolicyRegistry;
use crate::tree::{NodeKey, PerceptionTree, TreeBuilder};
use crate::{perception_debug, perception_err};
use super::staging::{StagedChange, StagedChanges};

const SOURCE: &str = "perception::DynamicEntityManager";

/// What a commit changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitReport {
    pub inserted: usize,
    pub relocated: usize,
    pub removed: usize,
    /// Leaves turned into interior nodes
    pub split_leaves: usize,
    /// Empty nodes dropped by the merge policy
    pub collapsed_nodes: usize,
}

impl CommitReport {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Leaves touched by a commit, deduplicated, in first-touch order
#[derive(Default)]
struct DirtyNodes {
    order: Vec<NodeKey>,
    seen: FxHashSet<NodeKey>,
}

impl DirtyNodes {
    fn mark(&mut self, key: NodeKey) {
        if self.seen.insert(key) {
            self.order.push(key);
        }
    }
}

pub struct DynamicEntityManager<B: Bounds> {
    tree: PerceptionTree<B>,
    builder: TreeBuilder<B>,
    out_of_bounds: OutOfBoundsPolicy,
    merge: MergePolicy,
    staged: StagedChanges<B>,
}

impl<B: Bounds> DynamicEntityManager<B> {
    /// Manager over an empty tree covering `world_bounds`.
    pub fn new(builder: TreeBuilder<B>, world_bounds: B) -> Result<Self> {
        Self::build(builder, Vec::new(), Some(world_bounds))
    }

    /// Manager over a tree built from an initial mobile population.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a static entity, `OutOfWorldBounds` for an
    /// entity outside `world_bounds` (the manager starts with
    /// `OutOfBoundsPolicy::Reject`), plus the errors of `TreeBuilder::build`.
    pub fn build<I>(builder: TreeBuilder<B>, entities: I, world_bounds: Option<B>) -> Result<Self>
    where
        I: IntoIterator<Item = Entity<B>>,
    {
        let entities: Vec<Entity<B>> = entities.into_iter().collect();
        if let Some(entity) = entities.iter().find(|e| !e.is_mobile()) {
            return Err(perception_err!(
                SOURCE,
                Error::InvalidArgument(format!("{} is not a mobile entity", entity.id()))
            ));
        }
        if let Some(world) = world_bounds.filter(|world| world.is_valid()) {
            let outside = entities
                .iter()
                .find(|e| e.bounds().is_valid() && !world.contains(e.bounds()));
            if let Some(entity) = outside {
                return Err(perception_err!(
                    SOURCE,
                    Error::OutOfWorldBounds(format!("{} at {:?}", entity.id(), entity.bounds()))
                ));
            }
        }
        let tree = builder.build(entities, world_bounds)?;
        let defaults = TreeConfig::default();
        Ok(Self {
            tree,
            builder,
            out_of_bounds: defaults.out_of_bounds,
            merge: defaults.merge,
            staged: StagedChanges::new(),
        })
    }

    /// Manager configured from a `TreeConfig`.
    pub fn from_config(config: &TreeConfig, registry: &PolicyRegistry<B>, world_bounds: B) -> Result<Self> {
        let builder = TreeBuilder::from_config(config, registry)?;
        Ok(Self::new(builder, world_bounds)?
            .with_out_of_bounds(config.out_of_bounds)
            .with_merge(config.merge))
    }

    pub fn with_out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
        self.out_of_bounds = policy;
        self
    }

    pub fn with_merge(mut self, policy: MergePolicy) -> Self {
        self.merge = policy;
        self
    }

    /// Committed tree.
    pub fn tree(&self) -> &PerceptionTree<B> {
        &self.tree
    }

    pub fn staged(&self) -> &StagedChanges<B> {
        &self.staged
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.staged.is_empty()
    }

    pub fn out_of_bounds_policy(&self) -> OutOfBoundsPolicy {
        self.out_of_bounds
    }

    pub fn merge_policy(&self) -> MergePolicy {
        self.merge
    }

    // ===== STAGING =====

    /// Stage the insertion of a mobile entity, or its new value if already present.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a static entity or invalid bounds,
    /// `OutOfWorldBounds` outside the world under `OutOfBoundsPolicy::Reject`.
    pub fn register_mobile_entity(&mut self, entity: Entity<B>) -> Result<()> {
        if !entity.is_mobile() {
            return Err(perception_err!(
                SOURCE,
                Error::InvalidArgument(format!("{} is not a mobile entity", entity.id()))
            ));
        }
        self.check_bounds(entity.id(), entity.bounds())?;
        let committed = self.tree.contains(entity.id());
        self.staged.register(entity, committed);
        Ok(())
    }

    /// Stage the removal of an entity. Unknown entities are ignored.
    pub fn unregister_mobile_entity(&mut self, id: EntityId) {
        let committed = self.tree.contains(id);
        self.staged.unregister(id, committed);
    }

    /// Stage a move of a known entity, keeping its tags.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the entity is neither committed nor staged
    /// (or is staged for removal), plus the bounds checks of `register_mobile_entity`.
    pub fn relocate_mobile_entity(&mut self, id: EntityId, bounds: B) -> Result<()> {
        let current = match self.staged.get(id) {
            Some(change) => change.entity().copied(),
            None => self.tree.entity(id).copied(),
        };
        let Some(current) = current else {
            return Err(perception_err!(
                SOURCE,
                Error::InvalidArgument(format!("cannot relocate unknown {}", id))
            ));
        };
        self.register_mobile_entity(current.relocated(bounds))
    }

    fn check_bounds(&self, id: EntityId, bounds: &B) -> Result<()> {
        if !bounds.is_valid() {
            return Err(perception_err!(
                SOURCE,
                Error::InvalidArgument(format!("{} has invalid bounds", id))
            ));
        }
        if self.out_of_bounds == OutOfBoundsPolicy::Reject && !self.tree.world_bounds().contains(bounds) {
            return Err(perception_err!(
                SOURCE,
                Error::OutOfWorldBounds(format!("{} at {:?}", id, bounds))
            ));
        }
        Ok(())
    }

    // ===== COMMIT =====

    /// Apply every staged change.
    ///
    /// Does nothing when nothing is staged.
    pub fn commit(&mut self) -> Result<CommitReport> {
        let mut report = CommitReport::default();
        if self.staged.is_empty() {
            return Ok(report);
        }
        let plan = self.staged.drain();
        let mut dirty = DirtyNodes::default();
        let root = self.tree.root();

        // Phase 1: removals
        for id in plan.removals {
            if let Some((_, leaf)) = self.tree.detach(id) {
                dirty.mark(leaf);
                report.removed += 1;
            }
        }

        // Phase 2: insertions and relocations
        for change in plan.upserts {
            let (entity, relocation) = match change {
                StagedChange::Insert(entity) => (entity, false),
                StagedChange::Relocate(entity) => (entity, true),
                StagedChange::Remove => continue,
            };
            if self.tree.expand_world(entity.bounds()) {
                dirty.mark(root);
            }

            let start = match self.tree.leaf_of(entity.id()) {
                Some(current) => {
                    let start = self.tree.relocation_start(current, entity.bounds());
                    if self.tree.find_target(start, entity.bounds()) == Some(current) {
                        self.tree.update_in_place(entity);
                        dirty.mark(current);
                        report.relocated += 1;
                        continue;
                    }
                    self.tree.detach(entity.id());
                    dirty.mark(current);
                    start
                }
                None => root,
            };

            let Some(leaf) = self.tree.descend(start, entity.bounds()) else {
                return Err(perception_err!(
                    SOURCE,
                    Error::InvariantViolation(format!("no leaf reachable for {}", entity.id()))
                ));
            };
            self.tree.attach(leaf, entity);
            dirty.mark(leaf);
            if relocation {
                report.relocated += 1;
            } else {
                report.inserted += 1;
            }
        }

        // Phase 3: merge and refit
        let mut refit = Vec::with_capacity(dirty.order.len());
        for &key in &dirty.order {
            if self.merge == MergePolicy::WhenEmpty {
                let (removed, survivor) = self.tree.prune_empty(key);
                report.collapsed_nodes += removed;
                refit.extend(survivor);
            } else {
                refit.push(key);
            }
        }

        for &key in &refit {
            self.tree.refit_upward(key);
        }

        // Phase 4: splits
        for &key in &refit {
            report.split_leaves += self.builder.split_subtree(&mut self.tree, key)?;
        }

        debug_assert!(self.tree.check_invariants().is_ok(), "{:?}", self.tree.check_invariants());
        perception_debug!(
            SOURCE,
            "Commit: {} inserted, {} relocated, {} removed, {} splits, {} collapsed",
            report.inserted,
            report.relocated,
            report.removed,
            report.split_leaves,
            report.collapsed_nodes
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "entity_manager_tests.rs"]
mod tests;
