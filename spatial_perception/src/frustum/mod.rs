//! Sensing volumes ("frusta") that classify bounds for culling.
//!
//! Every frustum answers a 3-way classification against a bounds value:
//! `Outside` prunes a whole subtree, `Inside` accepts it without further
//! tests, `Intersecting` requires looking at its content.

mod frustum;
mod box_frustum;
mod plane_frustum;
mod radial_frustum;

pub use frustum::{Frustum, FrustumId, Classification};
pub use box_frustum::BoxFrustum;
pub use plane_frustum::{
    PlaneFrustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use radial_frustum::{CircularFrustum, SphericalFrustum};
