//! The perceivable world of one simulation place: a static tree, a
//! dynamic tree and the culler run over both.

mod world_model;

pub use world_model::{WorldModel, Percepts, AgentPercepts};
