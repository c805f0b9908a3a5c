/// PlaneFrustum - six clipping planes bounding a 3D sensing volume.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// `from_view_projection()` derives the planes from a sensor's
/// view-projection matrix; `from_planes()` accepts planes computed by
/// other means.

use glam::{Mat4, Vec3, Vec4};
use crate::bounds::Aabb;
use super::frustum::{Frustum, FrustumId, Classification};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFrustum {
    id: FrustumId,
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl PlaneFrustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method.
    pub fn from_view_projection(id: FrustumId, vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        // Planes from rows of the VP matrix
        let planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            Vec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];
        Self::from_planes(id, planes)
    }

    /// Frustum from explicit inward-facing planes, normalized here.
    pub fn from_planes(id: FrustumId, mut planes: [Vec4; 6]) -> Self {
        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }
        Self { id, planes }
    }

    /// `true` if the point is on the inner side of every plane.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.truncate().dot(point) + plane.w >= 0.0)
    }
}

impl Frustum<Aabb> for PlaneFrustum {
    fn id(&self) -> FrustumId {
        self.id
    }

    /// Tests the positive vertex (p-vertex) and negative vertex (n-vertex)
    /// of the box against each plane:
    /// - p-vertex outside any plane → `Outside` (early out)
    /// - n-vertex outside any plane → at least `Intersecting`
    /// - every n-vertex inside → `Inside`
    ///
    /// Conservative near frustum edges: a box outside but close to two
    /// planes may be reported `Intersecting`.
    fn classify(&self, aabb: &Aabb) -> Classification {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            // Corner most in the direction of the normal
            let p_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );
            if normal.dot(p_vertex) + plane.w < 0.0 {
                return Classification::Outside;
            }

            // Corner least in the direction of the normal
            let n_vertex = Vec3::new(
                if normal.x >= 0.0 { aabb.min.x } else { aabb.max.x },
                if normal.y >= 0.0 { aabb.min.y } else { aabb.max.y },
                if normal.z >= 0.0 { aabb.min.z } else { aabb.max.z },
            );
            if normal.dot(n_vertex) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { Classification::Inside } else { Classification::Intersecting }
    }
}

#[cfg(test)]
#[path = "plane_frustum_tests.rs"]
mod tests;
