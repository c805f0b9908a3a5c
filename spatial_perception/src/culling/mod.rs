//! Frustum culling over perception trees.
//!
//! A `CullingRequest` bundles a frustum with the optional alterator and
//! interest filter; a `FrustumCullingIterator` walks a tree top-down from
//! the root, or bottom-up from a sensing entity's leaf, and yields
//! `CullingResult`s. `PerceptionCuller` implementations pick the walk.

mod culling_result;
mod filter;
mod culling_request;
mod frustum_culling_iterator;
mod culler;

pub use culling_result::CullingResult;
pub use filter::{PhysicalPerceptionAlterator, InterestFilter, TagInterestFilter};
pub use culling_request::CullingRequest;
pub use frustum_culling_iterator::{FrustumCullingIterator, cull, cull_from};
pub use culler::{PerceptionCuller, TopDownCuller, BottomUpCuller, BruteForceCuller, culler_for};
