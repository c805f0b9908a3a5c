/// FrustumCullingIterator - depth-first frustum walk over a perception tree.
///
/// Yields `(entity, classification)` pairs directly as `CullingResult`s:
///
/// - a node whose bounds are invalid or classify `Outside` is skipped
///   with its whole subtree
/// - a node classified `Inside` has every entity beneath it reported
///   `Inside` without further frustum tests
/// - entities of other leaves are classified one by one, then passed to
///   the request's alterator and interest filter
///
/// Top-down walks start at the root. Bottom-up walks start at the leaf of
/// a sensing entity, climb while the frustum fully encloses the node,
/// walk that seed subtree, then keep climbing and walk the remaining
/// sibling subtrees of every ancestor. Both produce the same results.
///
/// The walk checks the structure as it goes (live node keys, parent
/// links, leaf ownership). The first inconsistency is yielded once as
/// `Error::ConcurrentModification` and ends the iteration.

use crate::bounds::Bounds;
use crate::entity::EntityId;
use crate::error::{Error, Result};
use crate::frustum::Classification;
use crate::tree::{NodeKey, PerceptionTree};
use crate::perception_err;
use super::culling_request::CullingRequest;
use super::culling_result::CullingResult;

const SOURCE: &str = "perception::Culling";

/// Pending node visit
#[derive(Debug, Clone, Copy)]
struct Visit {
    node: NodeKey,
    /// Parent the node must point back to
    parent: Option<NodeKey>,
    /// An ancestor classified `Inside`
    inside: bool,
}

/// Position inside the leaf being reported
#[derive(Debug, Clone, Copy)]
struct LeafCursor {
    leaf: NodeKey,
    index: usize,
    inside: bool,
}

pub struct FrustumCullingIterator<'a, B: Bounds> {
    tree: &'a PerceptionTree<B>,
    request: CullingRequest<'a, B>,
    stack: Vec<Visit>,
    cursor: Option<LeafCursor>,
    /// Bottom-up only: last fully walked subtree on the way to the root
    ascent: Option<NodeKey>,
    finished: bool,
}

impl<'a, B: Bounds> FrustumCullingIterator<'a, B> {
    /// Walk the whole tree from the root.
    pub fn top_down(tree: &'a PerceptionTree<B>, request: CullingRequest<'a, B>) -> Self {
        Self {
            tree,
            request,
            stack: vec![Visit {
                node: tree.root(),
                parent: None,
                inside: false,
            }],
            cursor: None,
            ascent: None,
            finished: false,
        }
    }

    /// Walk from the leaf holding `sensing`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `sensing` is not in the tree.
    pub fn bottom_up(
        tree: &'a PerceptionTree<B>,
        sensing: EntityId,
        request: CullingRequest<'a, B>,
    ) -> Result<Self> {
        let Some(leaf) = tree.leaf_of(sensing) else {
            return Err(perception_err!(
                SOURCE,
                Error::InvalidArgument(format!("sensing {} is not in the tree", sensing))
            ));
        };

        // Climb while the frustum encloses the node
        let mut seed = leaf;
        loop {
            let Some(node) = tree.node(seed) else {
                return Err(perception_err!(SOURCE, stale_key(seed)));
            };
            match node.parent() {
                Some(parent) if request.frustum().classify(node.bounds()) == Classification::Inside => {
                    seed = parent;
                }
                _ => break,
            }
        }

        Ok(Self {
            tree,
            request,
            stack: vec![Visit {
                node: seed,
                parent: tree.parent(seed),
                inside: false,
            }],
            cursor: None,
            ascent: Some(seed),
            finished: false,
        })
    }

    /// Node classification, `None` when the subtree is pruned.
    fn classify_node(&self, bounds: &B) -> Option<bool> {
        if !bounds.is_valid() {
            return None;
        }
        match self.request.frustum().classify(bounds) {
            Classification::Outside => None,
            Classification::Inside => Some(true),
            Classification::Intersecting => Some(false),
        }
    }

    fn push_children<I>(&mut self, parent: NodeKey, children: I, inside: bool)
    where
        I: DoubleEndedIterator<Item = NodeKey>,
    {
        // Reversed so that slots pop in ascending order
        self.stack.extend(children.rev().map(|node| Visit {
            node,
            parent: Some(parent),
            inside,
        }));
    }

    fn visit(&mut self, visit: Visit) -> Result<()> {
        let tree = self.tree;
        let Some(node) = tree.node(visit.node) else {
            return Err(stale_key(visit.node));
        };
        if node.parent() != visit.parent {
            return Err(Error::ConcurrentModification(format!(
                "node {:?} no longer points to parent {:?}",
                visit.node, visit.parent
            )));
        }

        let inside = if visit.inside {
            true
        } else {
            match self.classify_node(node.bounds()) {
                Some(inside) => inside,
                None => return Ok(()),
            }
        };

        if node.is_leaf() {
            self.cursor = Some(LeafCursor {
                leaf: visit.node,
                index: 0,
                inside,
            });
        } else {
            let children: Vec<NodeKey> = node.children().collect();
            self.push_children(visit.node, children.into_iter(), inside);
        }
        Ok(())
    }

    /// Climb one level above a walked subtree and queue the parent's other children.
    fn ascend(&mut self, walked: NodeKey) -> Result<()> {
        let tree = self.tree;
        let Some(node) = tree.node(walked) else {
            return Err(stale_key(walked));
        };
        let Some(parent_key) = node.parent() else {
            return Ok(());
        };
        let Some(parent) = tree.node(parent_key) else {
            return Err(stale_key(parent_key));
        };
        if parent.child(node.slot()) != Some(walked) {
            return Err(Error::ConcurrentModification(format!(
                "node {:?} is no longer a child of {:?}",
                walked, parent_key
            )));
        }

        self.ascent = Some(parent_key);
        if let Some(inside) = self.classify_node(parent.bounds()) {
            let siblings: Vec<NodeKey> = parent.children().filter(|&key| key != walked).collect();
            self.push_children(parent_key, siblings.into_iter(), inside);
        }
        Ok(())
    }

    /// Next accepted entity of the current leaf, `None` once the leaf is exhausted.
    fn next_in_leaf(&mut self) -> Result<Option<CullingResult<'a, B>>> {
        let tree = self.tree;
        while let Some(mut cursor) = self.cursor {
            let Some(node) = tree.node(cursor.leaf) else {
                return Err(stale_key(cursor.leaf));
            };
            let Some(&id) = node.entities().get(cursor.index) else {
                self.cursor = None;
                return Ok(None);
            };
            cursor.index += 1;
            self.cursor = Some(cursor);

            let Some(entity) = tree.owned_entity(id, cursor.leaf) else {
                return Err(Error::ConcurrentModification(format!(
                    "{} is not owned by leaf {:?}",
                    id, cursor.leaf
                )));
            };
            let classification = if cursor.inside {
                Classification::Inside
            } else {
                self.request.frustum().classify(entity.bounds())
            };
            if let Some(result) = self.request.judge(entity, classification) {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }

    fn step(&mut self) -> Result<Option<CullingResult<'a, B>>> {
        loop {
            if self.cursor.is_some() {
                if let Some(result) = self.next_in_leaf()? {
                    return Ok(Some(result));
                }
            } else if let Some(visit) = self.stack.pop() {
                self.visit(visit)?;
            } else if let Some(walked) = self.ascent.take() {
                self.ascend(walked)?;
            } else {
                return Ok(None);
            }
        }
    }
}

impl<'a, B: Bounds> Iterator for FrustumCullingIterator<'a, B> {
    type Item = Result<CullingResult<'a, B>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.step() {
            Ok(Some(result)) => Some(Ok(result)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(perception_err!(SOURCE, err)))
            }
        }
    }
}

impl<'a, B: Bounds> std::iter::FusedIterator for FrustumCullingIterator<'a, B> {}

fn stale_key(key: NodeKey) -> Error {
    Error::ConcurrentModification(format!("stale node key {:?}", key))
}

/// Top-down cull of a whole tree.
pub fn cull<'a, B: Bounds>(
    tree: &'a PerceptionTree<B>,
    request: &CullingRequest<'a, B>,
) -> Result<Vec<CullingResult<'a, B>>> {
    FrustumCullingIterator::top_down(tree, *request).collect()
}

/// Bottom-up cull starting at the leaf of a sensing entity.
pub fn cull_from<'a, B: Bounds>(
    tree: &'a PerceptionTree<B>,
    sensing: EntityId,
    request: &CullingRequest<'a, B>,
) -> Result<Vec<CullingResult<'a, B>>> {
    FrustumCullingIterator::bottom_up(tree, sensing, *request)?.collect()
}

#[cfg(test)]
#[path = "frustum_culling_iterator_tests.rs"]
mod tests;
