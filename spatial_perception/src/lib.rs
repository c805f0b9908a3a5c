/*!
# Spatial Perception

Spatial index and frustum culling for multi-agent situated simulations.

This crate maintains recursive spatial trees (binary, quadtree or octree,
selected by the bounds type) over a population of static and mobile
entities, and determines for each sensing agent's frustum which entities
it perceives.

## Architecture

- **PerceptionTree**: Arena-backed spatial tree, built by a `TreeBuilder`
- **PartitionPolicy**: Strategy computing how a node splits among its children
- **DynamicEntityManager**: Staged register/unregister/relocate, applied at commit
- **Frustum**: Sensing volume classifying bounds as inside, outside or intersecting
- **FrustumCullingIterator**: Top-down or bottom-up tree walk yielding culling results
- **WorldModel**: Static tree, dynamic tree and culler of one simulation place

A tick perceives first (shared access to the trees), then commits the
staged mobile changes (exclusive access).
*/

// Internal modules
mod error;
pub mod log;
pub mod config;
pub mod bounds;
pub mod entity;
pub mod partition;
pub mod tree;
pub mod dynamic;
pub mod frustum;
pub mod culling;
pub mod world;

// Main perception namespace module
pub mod perception {
    // Error types
    pub use crate::error::{Error, Result};

    // Configuration
    pub use crate::config::{
        TreeConfig, PerceptionConfig, OutOfBoundsPolicy, MergePolicy, TraversalStrategy,
        MAX_DEPTH_LIMIT,
    };

    // Geometry and entities
    pub use crate::bounds::{Bounds, Position, Dimension, Interval, Rect, Aabb};
    pub use crate::entity::{Entity, EntityId, EntityKind, SemanticTags};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Log, Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Partitioning sub-module
    pub mod partition {
        pub use crate::partition::*;
    }

    // Tree sub-module
    pub mod tree {
        pub use crate::tree::*;
    }

    // Dynamic entities sub-module
    pub mod dynamic {
        pub use crate::dynamic::*;
    }

    // Frustum sub-module
    pub mod frustum {
        pub use crate::frustum::*;
    }

    // Culling sub-module
    pub mod culling {
        pub use crate::culling::*;
    }

    // World sub-module
    pub mod world {
        pub use crate::world::*;
    }
}

// Re-export math library at crate root
pub use glam;
