//! Camera module — virtual pinhole camera and its derived matrices.
//!
//! `VirtualCamera` owns intrinsics, a pose and clip distances and derives the
//! view and projection matrices a rasterizer or ray tracer consumes. Loading
//! intrinsics and driving the pose are left to the caller.

mod config;
mod frustum;
mod intrinsics;
pub mod pose;
mod uniform;
mod virtual_camera;

pub use config::{CameraConfig, ClipPlanes, ResizeMode, Z_FAR, Z_NEAR};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use intrinsics::CameraIntrinsics;
pub use uniform::CameraUniform;
pub use virtual_camera::VirtualCamera;
