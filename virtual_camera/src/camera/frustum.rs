/// Frustum — six clipping planes of a camera's view volume.
///
/// Each plane is a DVec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing unit normal
/// - D is the signed distance
/// - A world point P is inside if dot(plane, P_homogeneous) >= 0 for all planes
///
/// Planes are extracted for OpenGL clip space (-w <= x, y, z <= w), which is
/// what `VirtualCamera::projection_matrix` produces.

use glam::{DMat4, DVec3, DVec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six world-space frustum planes: left, right, bottom, top, near, far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub planes: [DVec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix (Gribb & Hartmann).
    pub fn from_view_projection(vp: &DMat4) -> Self {
        let m = vp.to_cols_array_2d();

        let mut planes = [
            // Left:   row3 + row0
            DVec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            DVec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            DVec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            DVec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            DVec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            DVec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Signed distance from `point` to plane `index` (positive = inside).
    pub fn signed_distance(&self, index: usize, point: DVec3) -> f64 {
        let plane = self.planes[index];
        plane.truncate().dot(point) + plane.w
    }

    /// Whether a world-space point lies inside (or on) all six planes.
    pub fn contains_point(&self, point: DVec3) -> bool {
        (0..6).all(|i| self.signed_distance(i, point) >= 0.0)
    }

    /// Conservative sphere test: `false` only if the sphere is fully outside one plane.
    pub fn intersects_sphere(&self, center: DVec3, radius: f64) -> bool {
        (0..6).all(|i| self.signed_distance(i, center) >= -radius)
    }

    /// Test if an axis-aligned box intersects this frustum.
    ///
    /// Uses the "positive vertex" test: for each plane, take the box corner
    /// furthest along the plane normal. If that corner is outside, the box is
    /// fully outside. May return false positives, never false negatives.
    pub fn intersects_aabb(&self, min: DVec3, max: DVec3) -> bool {
        for plane in &self.planes {
            let normal = plane.truncate();

            let p_vertex = DVec3::new(
                if normal.x >= 0.0 { max.x } else { min.x },
                if normal.y >= 0.0 { max.y } else { min.y },
                if normal.z >= 0.0 { max.z } else { min.z },
            );

            if normal.dot(p_vertex) + plane.w < 0.0 {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
