//! Pose helpers — camera-to-world rigid transforms.
//!
//! Poses use OpenCV camera axes: x right, y down, z forward into the scene.
//! OpenGL-style view matrices expect x right, y up, z back toward the eye;
//! `flip_yz_axes` converts between the two.

use glam::{DMat3, DMat4, DVec4};

/// Reflect the Y and Z basis axes of a camera-to-world transform.
///
/// Negates rows 0-2 of columns 1 and 2. Translation and the homogeneous row
/// are untouched. Applying it twice returns the original matrix.
pub fn flip_yz_axes(pose: &DMat4) -> DMat4 {
    let flip = |c: DVec4| DVec4::new(-c.x, -c.y, -c.z, c.w);
    DMat4::from_cols(pose.x_axis, flip(pose.y_axis), flip(pose.z_axis), pose.w_axis)
}

/// Whether `pose` is a rigid transform within `eps`: orthonormal rotation
/// block with determinant +1 and bottom row `[0, 0, 0, 1]`.
pub fn is_rigid(pose: &DMat4, eps: f64) -> bool {
    let bottom = pose.row(3);
    if (bottom - DVec4::W).abs().max_element() > eps {
        return false;
    }

    let rotation = DMat3::from_mat4(*pose);
    let gram = rotation.transpose() * rotation;
    if !gram.abs_diff_eq(DMat3::IDENTITY, eps) {
        return false;
    }

    (rotation.determinant() - 1.0).abs() <= eps
}

#[cfg(test)]
#[path = "pose_tests.rs"]
mod tests;
