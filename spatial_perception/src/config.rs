/// Configuration for perception trees and the perception phase.
///
/// Plain data with `Default` values; components resolve it once at
/// construction (policy names are looked up in a `PolicyRegistry`).

use crate::error::{Error, Result};

/// Upper bound accepted for `TreeConfig::max_depth`.
pub const MAX_DEPTH_LIMIT: u32 = 64;

/// What to do with a mobile entity registered outside the world bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutOfBoundsPolicy {
    /// Refuse the registration with `Error::OutOfWorldBounds`.
    Reject,
    /// Accept it; the world and root bounds grow to the union at commit.
    Expand,
}

/// What to do with leaves emptied by removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Keep empty leaves in place.
    Never,
    /// Drop empty non-root leaves, collapsing childless interior nodes back into leaves.
    WhenEmpty,
}

/// Traversal used for the perception phase of mobile sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalStrategy {
    /// Depth-first from the root.
    TopDown,
    /// Ascend from the sensing entity's leaf, then descend.
    BottomUp,
}

/// Construction and mutation parameters of one perception tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeConfig {
    /// Maximal entity count per leaf, when a partition can be found
    pub split_threshold: usize,
    /// Maximal depth of the tree (root = 0)
    pub max_depth: u32,
    /// Name of the partition policy in the `PolicyRegistry`
    pub partition_policy: String,
    /// Mobile entities outside the world bounds
    pub out_of_bounds: OutOfBoundsPolicy,
    /// Leaves emptied by removals
    pub merge: MergePolicy,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            split_threshold: 8,
            max_depth: 16,
            partition_policy: "center".to_string(),
            out_of_bounds: OutOfBoundsPolicy::Reject,
            merge: MergePolicy::WhenEmpty,
        }
    }
}

impl TreeConfig {
    pub fn with_split_threshold(mut self, count: usize) -> Self {
        self.split_threshold = count;
        self
    }

    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_partition_policy(mut self, name: impl Into<String>) -> Self {
        self.partition_policy = name.into();
        self
    }

    pub fn with_out_of_bounds(mut self, policy: OutOfBoundsPolicy) -> Self {
        self.out_of_bounds = policy;
        self
    }

    pub fn with_merge(mut self, policy: MergePolicy) -> Self {
        self.merge = policy;
        self
    }

    /// Check the values before any tree is built with them.
    pub fn validate(&self) -> Result<()> {
        if self.split_threshold == 0 {
            return Err(Error::InvalidArgument(
                "split_threshold must be greater than zero".to_string(),
            ));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(Error::InvalidArgument(format!(
                "max_depth {} exceeds the limit of {}",
                self.max_depth, MAX_DEPTH_LIMIT
            )));
        }
        if self.partition_policy.is_empty() {
            return Err(Error::InvalidArgument(
                "partition_policy name is empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration of a `WorldModel`: one static tree, one dynamic tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PerceptionConfig {
    pub static_tree: TreeConfig,
    pub dynamic_tree: TreeConfig,
    pub traversal: TraversalStrategy,
}

impl Default for PerceptionConfig {
    fn default() -> Self {
        Self {
            static_tree: TreeConfig::default(),
            dynamic_tree: TreeConfig::default(),
            traversal: TraversalStrategy::BottomUp,
        }
    }
}

impl PerceptionConfig {
    pub fn validate(&self) -> Result<()> {
        self.static_tree.validate()?;
        self.dynamic_tree.validate()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
