/// PerceptionTree - arena-backed spatial tree over entities.
///
/// Every entity is owned by exactly one leaf. A node's bounds cover its
/// region (the partition cell given by the parent's field) and everything
/// beneath it. Readers get shared access; structural mutation is reserved
/// to `TreeBuilder` and `DynamicEntityManager`.

use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::bounds::Bounds;
use crate::entity::{Entity, EntityId};
use crate::error::{Error, Result};
use crate::partition::PartitionField;
use super::node::{NodeKey, TreeNode, NodeKind, LeafNode, InteriorNode, FreezeReason};

/// Entity stored in the tree with its owning leaf
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EntityEntry<B: Bounds> {
    pub(crate) entity: Entity<B>,
    pub(crate) leaf: NodeKey,
}

/// Shape summary of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub node_count: usize,
    pub leaf_count: usize,
    pub interior_count: usize,
    /// Deepest level (root = 0)
    pub depth: u32,
    pub entity_count: usize,
    /// Leaves left over the split threshold
    pub frozen_leaf_count: usize,
    /// Entity count of the fullest leaf
    pub largest_leaf: usize,
}

#[derive(Debug, Clone)]
pub struct PerceptionTree<B: Bounds> {
    nodes: SlotMap<NodeKey, TreeNode<B>>,
    root: NodeKey,
    /// Reverse lookup: entity id → (entity, owning leaf)
    entities: FxHashMap<EntityId, EntityEntry<B>>,
    world_bounds: B,
    split_threshold: usize,
    max_depth: u32,
}

impl<B: Bounds> PerceptionTree<B> {
    /// Tree with a single empty root leaf covering the world bounds.
    pub(crate) fn with_root(world_bounds: B, split_threshold: usize, max_depth: u32) -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(TreeNode::new_leaf(world_bounds, None, 0, 0));
        Self {
            nodes,
            root,
            entities: FxHashMap::default(),
            world_bounds,
            split_threshold,
            max_depth,
        }
    }

    // ===== READ ACCESS =====

    pub fn root(&self) -> NodeKey {
        self.root
    }

    pub fn node(&self, key: NodeKey) -> Option<&TreeNode<B>> {
        self.nodes.get(key)
    }

    /// All nodes, in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeKey, &TreeNode<B>)> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn parent(&self, key: NodeKey) -> Option<NodeKey> {
        self.nodes.get(key).and_then(|node| node.parent)
    }

    pub fn children(&self, key: NodeKey) -> impl Iterator<Item = NodeKey> + '_ {
        self.nodes.get(key).into_iter().flat_map(|node| node.children())
    }

    /// Bounds of the root node.
    pub fn bounds(&self) -> B {
        self.nodes
            .get(self.root)
            .map(|root| root.bounds)
            .unwrap_or(self.world_bounds)
    }

    pub fn world_bounds(&self) -> &B {
        &self.world_bounds
    }

    pub fn split_threshold(&self) -> usize {
        self.split_threshold
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity<B>> {
        self.entities.get(&id).map(|entry| &entry.entity)
    }

    /// Leaf currently owning an entity.
    pub fn leaf_of(&self, id: EntityId) -> Option<NodeKey> {
        self.entities.get(&id).map(|entry| entry.leaf)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entities, in no particular order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity<B>> {
        self.entities.values().map(|entry| &entry.entity)
    }

    /// Entity `id` if `leaf` is its owner.
    pub(crate) fn owned_entity(&self, id: EntityId, leaf: NodeKey) -> Option<&Entity<B>> {
        self.entities
            .get(&id)
            .filter(|entry| entry.leaf == leaf)
            .map(|entry| &entry.entity)
    }

    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            entity_count: self.entities.len(),
            ..TreeStats::default()
        };
        for node in self.nodes.values() {
            stats.node_count += 1;
            stats.depth = stats.depth.max(node.level);
            match &node.kind {
                NodeKind::Leaf(leaf) => {
                    stats.leaf_count += 1;
                    stats.largest_leaf = stats.largest_leaf.max(leaf.entities.len());
                    if leaf.frozen.is_some() {
                        stats.frozen_leaf_count += 1;
                    }
                }
                NodeKind::Interior(_) => stats.interior_count += 1,
            }
        }
        stats
    }

    /// Verify the structural invariants.
    ///
    /// - bounding: every node's bounds cover its region, its children and its entities
    /// - exclusivity: every entity is held by exactly the leaf recorded for it
    /// - leaf size: a leaf holds at most `split_threshold` entities unless frozen
    /// - links: parent and child keys agree
    pub fn check_invariants(&self) -> Result<()> {
        let violation = |msg: String| Err(Error::InvariantViolation(msg));

        let Some(root) = self.nodes.get(self.root) else {
            return violation("root node is missing".to_string());
        };
        if root.parent.is_some() {
            return violation("root node has a parent".to_string());
        }

        let mut held = 0usize;
        for (key, node) in self.nodes.iter() {
            if !node.bounds.contains(&node.region) {
                return violation(format!("node {:?} bounds do not cover its region", key));
            }
            match node.parent {
                Some(parent) => {
                    let linked = self
                        .nodes
                        .get(parent)
                        .map_or(false, |p| p.child(node.slot) == Some(key));
                    if !linked {
                        return violation(format!("node {:?} is not linked from its parent", key));
                    }
                }
                None if key != self.root => {
                    return violation(format!("node {:?} has no parent", key));
                }
                None => {}
            }

            match &node.kind {
                NodeKind::Leaf(leaf) => {
                    if leaf.entities.len() > self.split_threshold && leaf.frozen.is_none() {
                        return violation(format!(
                            "leaf {:?} holds {} entities over threshold {}",
                            key,
                            leaf.entities.len(),
                            self.split_threshold
                        ));
                    }
                    for id in &leaf.entities {
                        let Some(entry) = self.entities.get(id) else {
                            return violation(format!("leaf {:?} holds unknown {}", key, id));
                        };
                        if entry.leaf != key {
                            return violation(format!("{} is held by more than one leaf", id));
                        }
                        if !node.bounds.contains(entry.entity.bounds()) {
                            return violation(format!("leaf {:?} bounds do not cover {}", key, id));
                        }
                        held += 1;
                    }
                }
                NodeKind::Interior(interior) => {
                    for &child in interior.children.iter().flatten() {
                        let Some(child_node) = self.nodes.get(child) else {
                            return violation(format!("node {:?} has a stale child", key));
                        };
                        if child_node.parent != Some(key) {
                            return violation(format!("child {:?} does not point back to {:?}", child, key));
                        }
                        if !node.bounds.contains(&child_node.bounds) {
                            return violation(format!("node {:?} bounds do not cover child {:?}", key, child));
                        }
                    }
                }
            }
        }

        if held != self.entities.len() {
            return violation(format!(
                "{} entities indexed but {} held by leaves",
                self.entities.len(),
                held
            ));
        }
        Ok(())
    }

    // ===== STRUCTURAL MUTATION (builder / dynamic manager) =====

    /// Put an entity into a leaf. Bounds are refitted separately.
    ///
    /// A `PartitionFailed` freeze is lifted: the membership changed.
    pub(crate) fn attach(&mut self, leaf: NodeKey, entity: Entity<B>) -> bool {
        let id = entity.id();
        match self.nodes.get_mut(leaf) {
            Some(TreeNode { kind: NodeKind::Leaf(node), .. }) => node.entities.push(id),
            _ => return false,
        }
        self.lift_partition_freeze(leaf);
        self.entities.insert(id, EntityEntry { entity, leaf });
        true
    }

    /// Remove an entity from its leaf.
    pub(crate) fn detach(&mut self, id: EntityId) -> Option<(Entity<B>, NodeKey)> {
        let entry = self.entities.remove(&id)?;
        if let Some(TreeNode { kind: NodeKind::Leaf(leaf), .. }) = self.nodes.get_mut(entry.leaf) {
            if let Some(pos) = leaf.entities.iter().position(|&e| e == id) {
                leaf.entities.swap_remove(pos);
            }
        }
        self.lift_partition_freeze(entry.leaf);
        Some((entry.entity, entry.leaf))
    }

    /// Replace the stored value of an entity without moving it.
    ///
    /// New bounds lift a `PartitionFailed` freeze like a membership change.
    pub(crate) fn update_in_place(&mut self, entity: Entity<B>) -> bool {
        let Some(entry) = self.entities.get_mut(&entity.id()) else {
            return false;
        };
        let moved = entry.entity.bounds() != entity.bounds();
        let leaf = entry.leaf;
        entry.entity = entity;
        if moved {
            self.lift_partition_freeze(leaf);
        }
        true
    }

    /// Let the next split pass retry a leaf whose partition failed.
    fn lift_partition_freeze(&mut self, key: NodeKey) {
        if let Some(TreeNode { kind: NodeKind::Leaf(leaf), .. }) = self.nodes.get_mut(key) {
            if leaf.frozen == Some(FreezeReason::PartitionFailed) {
                leaf.frozen = None;
            }
        }
    }

    pub(crate) fn freeze(&mut self, key: NodeKey, reason: FreezeReason) {
        if let Some(TreeNode { kind: NodeKind::Leaf(leaf), .. }) = self.nodes.get_mut(key) {
            leaf.frozen = Some(reason);
        }
    }

    /// Grow the world and root region to cover `bounds`.
    pub(crate) fn expand_world(&mut self, bounds: &B) -> bool {
        if self.world_bounds.contains(bounds) {
            return false;
        }
        self.world_bounds = self.world_bounds.union(bounds);
        if let Some(root) = self.nodes.get_mut(self.root) {
            root.region = root.region.union(bounds);
        }
        true
    }

    /// Leaf reached by routing `bounds` from `start`, without creating nodes.
    ///
    /// `None` when the route ends on an empty slot.
    pub(crate) fn find_target(&self, start: NodeKey, bounds: &B) -> Option<NodeKey> {
        let mut key = start;
        loop {
            let node = self.nodes.get(key)?;
            match &node.kind {
                NodeKind::Leaf(_) => return Some(key),
                NodeKind::Interior(interior) => {
                    key = node.child(interior.field.classify(bounds))?;
                }
            }
        }
    }

    /// Leaf reached by routing `bounds` from `start`, creating the missing child leaf.
    pub(crate) fn descend(&mut self, start: NodeKey, bounds: &B) -> Option<NodeKey> {
        let mut key = start;
        loop {
            let node = self.nodes.get(key)?;
            let (field, slot) = match &node.kind {
                NodeKind::Leaf(_) => return Some(key),
                NodeKind::Interior(interior) => (interior.field, interior.field.classify(bounds)),
            };
            key = match node.child(slot) {
                Some(child) => child,
                None => self.create_child(key, &field, slot)?,
            };
        }
    }

    /// Deepest node of `leaf`'s lineage (the leaf included) on the route of
    /// `bounds` from the root.
    ///
    /// Starting there, routing gives the same leaf as an insertion from the root.
    pub(crate) fn relocation_start(&self, leaf: NodeKey, bounds: &B) -> NodeKey {
        let mut lineage = Vec::new();
        let mut current = Some(leaf);
        while let Some(key) = current {
            lineage.push(key);
            current = self.nodes.get(key).and_then(|node| node.parent);
        }

        let mut start = self.root;
        while let Some(node) = self.nodes.get(start) {
            let NodeKind::Interior(interior) = &node.kind else {
                break;
            };
            match node.child(interior.field.classify(bounds)) {
                Some(child) if lineage.contains(&child) => start = child,
                _ => break,
            }
        }
        start
    }

    fn create_child(&mut self, parent: NodeKey, field: &PartitionField<B>, slot: usize) -> Option<NodeKey> {
        let (region, level) = {
            let node = self.nodes.get(parent)?;
            (field.child_region(&node.region, slot), node.level + 1)
        };
        let child = self.nodes.insert(TreeNode::new_leaf(region, Some(parent), slot, level));
        if let Some(TreeNode { kind: NodeKind::Interior(interior), .. }) = self.nodes.get_mut(parent) {
            if let Some(entry) = interior.children.get_mut(slot) {
                *entry = Some(child);
            }
        }
        Some(child)
    }

    /// Turn a leaf into an interior node and move its entities to new child leaves.
    ///
    /// Returns the children, in slot order.
    pub(crate) fn split_leaf(&mut self, key: NodeKey, field: PartitionField<B>) -> Vec<NodeKey> {
        let Some(node) = self.nodes.get_mut(key) else {
            return Vec::new();
        };
        let ids = match &mut node.kind {
            NodeKind::Leaf(leaf) => std::mem::take(&mut leaf.entities),
            NodeKind::Interior(_) => return Vec::new(),
        };
        node.kind = NodeKind::Interior(InteriorNode {
            field,
            children: vec![None; field.child_count()].into_boxed_slice(),
        });

        for id in ids {
            let Some(entry) = self.entities.get(&id) else {
                continue;
            };
            let slot = field.classify(entry.entity.bounds());
            let existing = self.nodes.get(key).and_then(|node| node.child(slot));
            let Some(child) = existing.or_else(|| self.create_child(key, &field, slot)) else {
                continue;
            };
            if let Some(TreeNode { kind: NodeKind::Leaf(leaf), .. }) = self.nodes.get_mut(child) {
                leaf.entities.push(id);
            }
            if let Some(entry) = self.entities.get_mut(&id) {
                entry.leaf = child;
            }
        }

        let children: Vec<NodeKey> = self.children(key).collect();
        for &child in &children {
            self.refresh_bounds(child);
        }
        children
    }

    /// Drop an empty non-root leaf; interior nodes left without children
    /// become empty leaves and are dropped in turn.
    ///
    /// Returns the number of removed nodes and the surviving node to refit.
    pub(crate) fn prune_empty(&mut self, leaf: NodeKey) -> (usize, Option<NodeKey>) {
        let mut removed = 0;
        let mut current = leaf;
        loop {
            let Some(node) = self.nodes.get(current) else {
                return (removed, None);
            };
            let empty = matches!(&node.kind, NodeKind::Leaf(l) if l.entities.is_empty());
            let (Some(parent), true) = (node.parent, empty) else {
                return (removed, Some(current));
            };
            let slot = node.slot;
            self.nodes.remove(current);
            removed += 1;

            if let Some(parent_node) = self.nodes.get_mut(parent) {
                if let NodeKind::Interior(interior) = &mut parent_node.kind {
                    if let Some(entry) = interior.children.get_mut(slot) {
                        *entry = None;
                    }
                    if interior.children.iter().all(Option::is_none) {
                        parent_node.kind = NodeKind::Leaf(LeafNode {
                            entities: Vec::new(),
                            frozen: None,
                        });
                    }
                }
            }
            current = parent;
        }
    }

    fn compute_bounds(&self, key: NodeKey) -> Option<B> {
        let node = self.nodes.get(key)?;
        let mut bounds = node.region;
        match &node.kind {
            NodeKind::Leaf(leaf) => {
                for id in &leaf.entities {
                    if let Some(entry) = self.entities.get(id) {
                        bounds = bounds.union(entry.entity.bounds());
                    }
                }
            }
            NodeKind::Interior(interior) => {
                for &child in interior.children.iter().flatten() {
                    if let Some(child_node) = self.nodes.get(child) {
                        bounds = bounds.union(&child_node.bounds);
                    }
                }
            }
        }
        Some(bounds)
    }

    /// Recompute one node's bounds; `true` if they changed.
    fn refresh_bounds(&mut self, key: NodeKey) -> bool {
        let Some(bounds) = self.compute_bounds(key) else {
            return false;
        };
        match self.nodes.get_mut(key) {
            Some(node) if node.bounds != bounds => {
                node.bounds = bounds;
                true
            }
            _ => false,
        }
    }

    /// Refit bounds from a node toward the root, stopping at the first unchanged node.
    pub(crate) fn refit_upward(&mut self, from: NodeKey) {
        let mut current = Some(from);
        while let Some(key) = current {
            if !self.refresh_bounds(key) {
                break;
            }
            current = self.parent(key);
        }
    }
}

impl<B: Bounds> PartialEq for PerceptionTree<B> {
    /// Structural equality: same arena layout, same entities, same settings.
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
            && self.world_bounds == other.world_bounds
            && self.split_threshold == other.split_threshold
            && self.max_depth == other.max_depth
            && self.entities == other.entities
            && self.nodes.iter().eq(other.nodes.iter())
    }
}

/// Structure corruption for traversal tests.
#[cfg(test)]
impl<B: Bounds> PerceptionTree<B> {
    pub(crate) fn corrupt_owner(&mut self, id: EntityId, leaf: NodeKey) {
        if let Some(entry) = self.entities.get_mut(&id) {
            entry.leaf = leaf;
        }
    }

    pub(crate) fn corrupt_parent(&mut self, key: NodeKey, parent: Option<NodeKey>) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.parent = parent;
        }
    }

    /// Drop a node from the arena, leaving its parent's slot pointing at it.
    pub(crate) fn corrupt_remove_node(&mut self, key: NodeKey) {
        self.nodes.remove(key);
    }
}

#[cfg(test)]
#[path = "perception_tree_tests.rs"]
mod tests;
