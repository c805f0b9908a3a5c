/// Perception culling strategies.
///
/// A PerceptionCuller determines which entities of a tree a sensing
/// agent perceives. Implementations range from a linear scan to the
/// top-down and bottom-up tree walks.

use crate::bounds::Bounds;
use crate::config::TraversalStrategy;
use crate::error::Result;
use crate::tree::PerceptionTree;
use crate::perception_trace;
use super::culling_request::CullingRequest;
use super::culling_result::CullingResult;
use super::frustum_culling_iterator::FrustumCullingIterator;

const SOURCE: &str = "perception::Culling";

/// Strategy for culling one tree against one request.
///
/// Called once per sensing agent and tree during the perceive phase.
/// Strategies only read the tree.
pub trait PerceptionCuller<B: Bounds>: Send + Sync {
    fn name(&self) -> &str;

    fn cull<'a>(
        &self,
        tree: &'a PerceptionTree<B>,
        request: &CullingRequest<'a, B>,
    ) -> Result<Vec<CullingResult<'a, B>>>;
}

/// Culler matching a configured traversal strategy.
pub fn culler_for<B: Bounds>(strategy: TraversalStrategy) -> Box<dyn PerceptionCuller<B>> {
    match strategy {
        TraversalStrategy::TopDown => Box::new(TopDownCuller),
        TraversalStrategy::BottomUp => Box::new(BottomUpCuller),
    }
}

/// Walks the tree from the root, pruning subtrees outside the frustum.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopDownCuller;

impl TopDownCuller {
    pub fn new() -> Self {
        Self
    }
}

impl<B: Bounds> PerceptionCuller<B> for TopDownCuller {
    fn name(&self) -> &str {
        "top-down"
    }

    fn cull<'a>(
        &self,
        tree: &'a PerceptionTree<B>,
        request: &CullingRequest<'a, B>,
    ) -> Result<Vec<CullingResult<'a, B>>> {
        FrustumCullingIterator::top_down(tree, *request).collect()
    }
}

/// Walks the tree from the sensing entity's leaf.
///
/// Without a sensing entity, or when the entity lives in another tree
/// (a mobile agent perceiving the static tree), walks from the root.
#[derive(Debug, Clone, Copy, Default)]
pub struct BottomUpCuller;

impl BottomUpCuller {
    pub fn new() -> Self {
        Self
    }
}

impl<B: Bounds> PerceptionCuller<B> for BottomUpCuller {
    fn name(&self) -> &str {
        "bottom-up"
    }

    fn cull<'a>(
        &self,
        tree: &'a PerceptionTree<B>,
        request: &CullingRequest<'a, B>,
    ) -> Result<Vec<CullingResult<'a, B>>> {
        match request.sensing_entity() {
            Some(sensing) if tree.contains(sensing) => {
                FrustumCullingIterator::bottom_up(tree, sensing, *request)?.collect()
            }
            sensing => {
                perception_trace!(
                    SOURCE,
                    "Bottom-up cull without a seed in this tree ({:?}), walking from the root",
                    sensing
                );
                FrustumCullingIterator::top_down(tree, *request).collect()
            }
        }
    }
}

/// Linear scan of every entity, no tree walk.
///
/// Baseline for comparison; results are ordered by entity id.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl<B: Bounds> PerceptionCuller<B> for BruteForceCuller {
    fn name(&self) -> &str {
        "brute-force"
    }

    fn cull<'a>(
        &self,
        tree: &'a PerceptionTree<B>,
        request: &CullingRequest<'a, B>,
    ) -> Result<Vec<CullingResult<'a, B>>> {
        let mut entities: Vec<_> = tree.entities().collect();
        entities.sort_by_key(|entity| entity.id());

        let frustum = request.frustum();
        Ok(entities
            .into_iter()
            .filter_map(|entity| request.judge(entity, frustum.classify(entity.bounds())))
            .collect())
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
