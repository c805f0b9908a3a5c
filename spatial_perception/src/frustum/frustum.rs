/// Frustum capability shared by every sensing volume.

use std::fmt;
use crate::bounds::Bounds;

/// Identifier of a frustum, reported with every culling result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrustumId(pub u64);

impl fmt::Display for FrustumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frustum#{}", self.0)
    }
}

/// Result of a 3-way frustum/bounds classification.
///
/// - `Outside` → skip the entire subtree
/// - `Inside` → collect all entities without further testing
/// - `Intersecting` → test individual entities and recurse into children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Bounds entirely outside the frustum
    Outside,
    /// Bounds entirely inside the frustum
    Inside,
    /// Bounds partially overlap the frustum
    Intersecting,
}

impl Classification {
    pub fn is_visible(self) -> bool {
        self != Classification::Outside
    }
}

/// Sensing volume of one agent.
///
/// Implementations must be monotonic: bounds enclosed by an `Inside`
/// volume classify `Inside`, bounds enclosed by an `Outside` volume
/// classify `Outside`. Tree culling relies on it to prune and to skip tests.
pub trait Frustum<B: Bounds>: Send + Sync {
    fn id(&self) -> FrustumId;

    fn classify(&self, bounds: &B) -> Classification;

    /// `true` unless `bounds` is entirely outside.
    fn intersects(&self, bounds: &B) -> bool {
        self.classify(bounds).is_visible()
    }
}
