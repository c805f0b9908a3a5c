/// TreeBuilder - builds perception trees and splits over-threshold leaves.
///
/// Splitting is iterative (explicit worklist), one leaf at a time: the
/// policy computes a field, the leaf becomes an interior node and its
/// entities move to the children. A field that routes every entity to
/// the same child is handed back to the policy as a prior failure; when
/// the policy gives up, the leaf is frozen over the threshold.

use crate::bounds::Bounds;
use crate::config::{TreeConfig, MAX_DEPTH_LIMIT};
use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::partition::{PartitionField, PartitionPolicy, PolicyRegistry};
use crate::{perception_debug, perception_err, perception_trace};
use super::node::{NodeKey, NodeKind, FreezeReason};
use super::perception_tree::PerceptionTree;

const SOURCE: &str = "perception::TreeBuilder";

/// Upper bound on fields tried per leaf, for policies ignoring prior failures
const MAX_PARTITION_ATTEMPTS: usize = 4;

pub struct TreeBuilder<B: Bounds> {
    policy: Box<dyn PartitionPolicy<B>>,
    split_threshold: usize,
    max_depth: u32,
}

impl<B: Bounds> TreeBuilder<B> {
    /// Builder with the default threshold and depth of `TreeConfig`.
    pub fn new(policy: Box<dyn PartitionPolicy<B>>) -> Self {
        let defaults = TreeConfig::default();
        Self {
            policy,
            split_threshold: defaults.split_threshold,
            max_depth: defaults.max_depth,
        }
    }

    /// Builder resolved from a configuration and a policy registry.
    pub fn from_config(config: &TreeConfig, registry: &PolicyRegistry<B>) -> Result<Self> {
        config.validate().map_err(|e| perception_err!(SOURCE, e))?;
        let builder = Self {
            policy: registry.create(&config.partition_policy)?,
            split_threshold: config.split_threshold,
            max_depth: config.max_depth,
        };
        builder.validate()?;
        Ok(builder)
    }

    pub fn with_split_threshold(mut self, count: usize) -> Self {
        self.split_threshold = count;
        self
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn split_threshold(&self) -> usize {
        self.split_threshold
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn policy(&self) -> &dyn PartitionPolicy<B> {
        self.policy.as_ref()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.split_threshold == 0 {
            return Err(perception_err!(
                SOURCE,
                Error::InvalidArgument("split threshold must be greater than zero".to_string())
            ));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(perception_err!(
                SOURCE,
                Error::InvalidArgument(format!(
                    "max depth {} exceeds the limit of {}",
                    self.max_depth, MAX_DEPTH_LIMIT
                ))
            ));
        }
        if !self.policy.supports(B::DIMENSION) {
            return Err(perception_err!(
                SOURCE,
                Error::InvalidArgument(format!(
                    "partition policy '{}' does not support {:?} bounds",
                    self.policy.name(),
                    B::DIMENSION
                ))
            ));
        }
        Ok(())
    }

    /// Build a tree over an entity population.
    ///
    /// # Arguments
    ///
    /// * `entities` - Initial population (identifiers must be unique)
    /// * `world_bounds` - Root region; the union of the entity bounds when `None`
    ///
    /// # Errors
    ///
    /// `EmptyBounds` without world bounds and without entities,
    /// `InvalidArgument` on invalid bounds, duplicate identifiers or settings.
    pub fn build<I>(&self, entities: I, world_bounds: Option<B>) -> Result<PerceptionTree<B>>
    where
        I: IntoIterator<Item = Entity<B>>,
    {
        self.validate()?;
        let entities: Vec<Entity<B>> = entities.into_iter().collect();

        let mut content: Option<B> = None;
        for entity in &entities {
            if !entity.bounds().is_valid() {
                return Err(perception_err!(
                    SOURCE,
                    Error::InvalidArgument(format!("{} has invalid bounds", entity.id()))
                ));
            }
            content = Some(match content {
                Some(bounds) => bounds.union(entity.bounds()),
                None => *entity.bounds(),
            });
        }

        let world = match world_bounds {
            Some(world) if !world.is_valid() => {
                return Err(perception_err!(
                    SOURCE,
                    Error::InvalidArgument(format!("invalid world bounds {:?}", world))
                ));
            }
            Some(world) => world,
            None => content.ok_or_else(|| perception_err!(SOURCE, Error::EmptyBounds))?,
        };

        let mut tree = PerceptionTree::with_root(world, self.split_threshold, self.max_depth);
        let root = tree.root();
        for entity in entities {
            if tree.contains(entity.id()) {
                return Err(perception_err!(
                    SOURCE,
                    Error::InvalidArgument(format!("duplicate {}", entity.id()))
                ));
            }
            tree.attach(root, entity);
        }
        tree.refit_upward(root);

        let splits = self.split_subtree(&mut tree, root)?;
        debug_assert!(tree.check_invariants().is_ok(), "{:?}", tree.check_invariants());

        let stats = tree.stats();
        perception_debug!(
            SOURCE,
            "Built {} tree: {} entities, {} nodes, depth {}, {} splits, {} frozen leaves",
            self.policy.name(),
            stats.entity_count,
            stats.node_count,
            stats.depth,
            splits,
            stats.frozen_leaf_count
        );
        Ok(tree)
    }

    /// Split every over-threshold leaf of a subtree.
    ///
    /// Returns the number of leaves turned into interior nodes.
    pub(crate) fn split_subtree(&self, tree: &mut PerceptionTree<B>, start: NodeKey) -> Result<usize> {
        let mut splits = 0;
        let mut worklist = vec![start];

        while let Some(key) = worklist.pop() {
            let Some(node) = tree.node(key) else {
                continue;
            };
            let NodeKind::Leaf(leaf) = node.kind() else {
                continue;
            };
            if leaf.entities.len() <= self.split_threshold || leaf.frozen.is_some() {
                continue;
            }

            let level = node.level();
            if level >= self.max_depth {
                perception_trace!(SOURCE, "Leaf {:?} frozen at depth limit {}", key, level);
                tree.freeze(key, FreezeReason::DepthLimit);
                continue;
            }

            let slot = node.slot();
            let node_bounds = *node.bounds();
            let entity_bounds: Vec<B> = leaf
                .entities
                .iter()
                .filter_map(|&id| tree.entity(id))
                .map(|entity| *entity.bounds())
                .collect();

            match self.find_field(slot, &node_bounds, &entity_bounds)? {
                Some(field) => {
                    worklist.extend(tree.split_leaf(key, field));
                    splits += 1;
                }
                None => {
                    perception_debug!(
                        SOURCE,
                        "No partition for leaf {:?} at level {}: keeping {} entities",
                        key,
                        level,
                        entity_bounds.len()
                    );
                    tree.freeze(key, FreezeReason::PartitionFailed);
                }
            }
        }
        Ok(splits)
    }

    /// Ask the policy for a field that actually separates the entities.
    fn find_field(&self, slot: usize, node_bounds: &B, entities: &[B]) -> Result<Option<PartitionField<B>>> {
        let mut failures: Vec<PartitionField<B>> = Vec::new();
        while failures.len() < MAX_PARTITION_ATTEMPTS {
            match self.policy.compute_partition_field(slot, node_bounds, entities, &failures)? {
                Some(field) if field.occupied_slots(entities) > 1 => return Ok(Some(field)),
                Some(field) => failures.push(field),
                None => return Ok(None),
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
