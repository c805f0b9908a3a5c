/// TreeNode - one node of a perception tree, stored in the tree's arena.
///
/// Parent and children are `NodeKey`s into the same `SlotMap`; a key of a
/// removed node stays detectable (generation mismatch) instead of dangling.

use slotmap::new_key_type;
use crate::bounds::Bounds;
use crate::entity::EntityId;
use crate::partition::PartitionField;

new_key_type! {
    /// Key of a node in a `PerceptionTree`
    pub struct NodeKey;
}

/// Why a leaf holds more entities than the split threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FreezeReason {
    /// The partition policy could not split the leaf
    PartitionFailed,
    /// The leaf sits at the maximal depth
    DepthLimit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub(crate) entities: Vec<EntityId>,
    pub(crate) frozen: Option<FreezeReason>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteriorNode<B: Bounds> {
    pub(crate) field: PartitionField<B>,
    /// One slot per orthant; `None` for an empty orthant
    pub(crate) children: Box<[Option<NodeKey>]>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind<B: Bounds> {
    Leaf(LeafNode),
    Interior(InteriorNode<B>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<B: Bounds> {
    /// Covers the region and everything beneath the node
    pub(crate) bounds: B,
    /// Partition cell assigned by the parent's field (world bounds for the root)
    pub(crate) region: B,
    pub(crate) parent: Option<NodeKey>,
    /// Slot in the parent's children array
    pub(crate) slot: usize,
    /// Depth (root = 0)
    pub(crate) level: u32,
    pub(crate) kind: NodeKind<B>,
}

impl<B: Bounds> TreeNode<B> {
    pub(crate) fn new_leaf(region: B, parent: Option<NodeKey>, slot: usize, level: u32) -> Self {
        Self {
            bounds: region,
            region,
            parent,
            slot,
            level,
            kind: NodeKind::Leaf(LeafNode {
                entities: Vec::new(),
                frozen: None,
            }),
        }
    }

    pub fn bounds(&self) -> &B {
        &self.bounds
    }

    pub fn region(&self) -> &B {
        &self.region
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn kind(&self) -> &NodeKind<B> {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Entities held by a leaf (empty for interior nodes).
    pub fn entities(&self) -> &[EntityId] {
        match &self.kind {
            NodeKind::Leaf(leaf) => &leaf.entities,
            NodeKind::Interior(_) => &[],
        }
    }

    /// Existing children, in slot order (none for leaves).
    pub fn children(&self) -> impl Iterator<Item = NodeKey> + '_ {
        let slots: &[Option<NodeKey>] = match &self.kind {
            NodeKind::Interior(interior) => &interior.children,
            NodeKind::Leaf(_) => &[],
        };
        slots.iter().flatten().copied()
    }

    /// Child in a given slot, if any.
    pub fn child(&self, slot: usize) -> Option<NodeKey> {
        match &self.kind {
            NodeKind::Interior(interior) => interior.children.get(slot).copied().flatten(),
            NodeKind::Leaf(_) => None,
        }
    }

    pub fn field(&self) -> Option<&PartitionField<B>> {
        match &self.kind {
            NodeKind::Interior(interior) => Some(&interior.field),
            NodeKind::Leaf(_) => None,
        }
    }

    pub fn frozen(&self) -> Option<FreezeReason> {
        match &self.kind {
            NodeKind::Leaf(leaf) => leaf.frozen,
            NodeKind::Interior(_) => None,
        }
    }
}
