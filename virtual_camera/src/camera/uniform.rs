/// Camera uniform block — f32 matrices laid out for GPU upload.

use glam::{DMat4, DVec3};

/// GPU uniform buffer data for a virtual camera.
///
/// Matrices are column-major `[[f32; 4]; 4]` (`columns[c][r]`), matching GLSL
/// and WGSL `mat4x4<f32>` and the `clip = projection * view * world` order.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// World to camera
    pub view: [[f32; 4]; 4],

    /// Camera to clip space
    pub projection: [[f32; 4]; 4],

    /// `projection * view`
    pub view_projection: [[f32; 4]; 4],

    /// Camera center in world space (xyz, w = 1)
    pub position: [f32; 4],

    /// [z_near, z_far, width, height]
    pub planes_and_size: [f32; 4],
}

impl CameraUniform {
    /// Pack double-precision camera state into the f32 layout.
    pub fn new(
        view: &DMat4,
        projection: &DMat4,
        position: DVec3,
        z_near: f64,
        z_far: f64,
        width: u32,
        height: u32,
    ) -> Self {
        let view_projection = *projection * *view;
        Self {
            view: view.as_mat4().to_cols_array_2d(),
            projection: projection.as_mat4().to_cols_array_2d(),
            view_projection: view_projection.as_mat4().to_cols_array_2d(),
            position: position.extend(1.0).as_vec4().to_array(),
            planes_and_size: [z_near as f32, z_far as f32, width as f32, height as f32],
        }
    }

    /// Raw bytes for a uniform buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        let identity = glam::Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view: identity,
            projection: identity,
            view_projection: identity,
            position: [0.0, 0.0, 0.0, 1.0],
            planes_and_size: [0.0; 4],
        }
    }
}

#[cfg(test)]
#[path = "uniform_tests.rs"]
mod tests;
