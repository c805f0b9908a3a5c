//! Partitioning of tree nodes among their children.
//!
//! A `PartitionField` routes entities to child slots; a `PartitionPolicy`
//! computes the field of a node from its bounds and its entities. Policies
//! are looked up by name in a `PolicyRegistry`.

mod field;
mod policy;
mod registry;

pub use field::PartitionField;
pub use policy::{PartitionPolicy, CenterPolicy, DensityPolicy};
pub use registry::{PolicyRegistry, PolicyFactory};
