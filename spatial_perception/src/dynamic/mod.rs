//! Dynamic entities: staged changes applied to a tree at commit time

mod staging;
mod entity_manager;

pub use staging::{StagedChange, StagedChanges};
pub use entity_manager::{DynamicEntityManager, CommitReport};
