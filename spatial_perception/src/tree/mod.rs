//! Perception trees - recursive spatial partitions over entities.
//!
//! One generic tree serves every dimension: the `Bounds` type selects
//! binary (1D), quadtree (2D) or octree (3D / 2.5D) arity. Nodes live in
//! a `SlotMap` arena owned by the tree.

mod node;
mod perception_tree;
mod builder;

pub use node::{NodeKey, TreeNode, NodeKind, LeafNode, InteriorNode, FreezeReason};
pub use perception_tree::{PerceptionTree, TreeStats};
pub use builder::TreeBuilder;
