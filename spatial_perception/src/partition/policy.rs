/// Partition policies - strategies computing the PartitionField of a node.
///
/// A policy may give up and return `Ok(None)` when the subset cannot be
/// meaningfully split; the node then stays an over-threshold leaf.
/// Policies are tried at most once per node: any prior failure makes the
/// built-in policies return `None` immediately.

use glam::Vec3;
use crate::bounds::{Bounds, Dimension, Position};
use crate::error::{Error, Result};
use crate::perception_err;
use super::field::PartitionField;

/// Strategy computing how a node's volume is split among its children.
pub trait PartitionPolicy<B: Bounds>: Send + Sync {
    /// Registry name of the policy
    fn name(&self) -> &str;

    /// Whether the policy can partition volumes of this dimensionality
    fn supports(&self, _dimension: Dimension) -> bool {
        true
    }

    /// Compute the field of a node about to be split.
    ///
    /// # Arguments
    ///
    /// * `node_slot` - Slot of the node in its parent (0 for the root)
    /// * `node_bounds` - Current bounds of the node
    /// * `entities` - Bounds of the entities held by the node
    /// * `prior_failures` - Fields already tried on this node that did not partition it
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the subset cannot be split.
    fn compute_partition_field(
        &self,
        node_slot: usize,
        node_bounds: &B,
        entities: &[B],
        prior_failures: &[PartitionField<B>],
    ) -> Result<Option<PartitionField<B>>>;
}

/// Whether a split attempt is worth making at all.
fn splittable<B: Bounds>(node_bounds: &B, entities: &[B], prior_failures: &[PartitionField<B>]) -> bool {
    prior_failures.is_empty()
        && !entities.is_empty()
        && node_bounds.is_valid()
        && !node_bounds.is_degenerate()
}

/// Splits around the geometric center of the node's bounds.
///
/// O(1). Always succeeds on well-formed bounds; clustered data may give
/// unbalanced trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterPolicy;

impl CenterPolicy {
    pub const NAME: &'static str = "center";
}

impl<B: Bounds> PartitionPolicy<B> for CenterPolicy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn compute_partition_field(
        &self,
        _node_slot: usize,
        node_bounds: &B,
        entities: &[B],
        prior_failures: &[PartitionField<B>],
    ) -> Result<Option<PartitionField<B>>> {
        if !splittable(node_bounds, entities, prior_failures) {
            return Ok(None);
        }
        Ok(Some(PartitionField::new(node_bounds.center())))
    }
}

/// Splits around the mean position of the entities (density centroid).
///
/// O(n) per split. 2D uses x/y, 3D and 2.5D use x/y/z. One-dimensional
/// bounds are refused with `Error::InvalidArgument`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DensityPolicy;

impl DensityPolicy {
    pub const NAME: &'static str = "density";
}

impl<B: Bounds> PartitionPolicy<B> for DensityPolicy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn supports(&self, dimension: Dimension) -> bool {
        matches!(dimension, Dimension::Two | Dimension::Three)
    }

    fn compute_partition_field(
        &self,
        _node_slot: usize,
        node_bounds: &B,
        entities: &[B],
        prior_failures: &[PartitionField<B>],
    ) -> Result<Option<PartitionField<B>>> {
        if !PartitionPolicy::<B>::supports(self, B::DIMENSION) {
            return Err(perception_err!(
                "perception::PartitionPolicy",
                Error::InvalidArgument(format!(
                    "density policy does not support {:?} bounds",
                    B::DIMENSION
                ))
            ));
        }
        if !splittable(node_bounds, entities, prior_failures) {
            return Ok(None);
        }

        let sum = entities
            .iter()
            .fold(Vec3::ZERO, |acc, b| acc + b.center().to_vec3());
        let mean = sum / entities.len() as f32;
        if !mean.is_finite() {
            return Ok(None);
        }
        Ok(Some(PartitionField::new(B::Point::from_vec3(mean))))
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
