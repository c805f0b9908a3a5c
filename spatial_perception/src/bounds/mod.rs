//! Bounding volumes consumed by the perception trees.
//!
//! The trees only talk to volumes through the `Bounds` trait; the three
//! concrete volumes select the tree arity (binary, quadtree, octree).

mod bounds;
mod interval;
mod rect;
mod aabb;

pub use bounds::{Bounds, Dimension, Position};
pub use interval::Interval;
pub use rect::Rect;
pub use aabb::Aabb;
