/*!
# Virtual Camera

Pinhole camera model for 3D scene renderers.

A [`VirtualCamera`](vcam::camera::VirtualCamera) holds camera intrinsics (focal
lengths, principal point, sensor size), a camera-to-world pose and near/far
clip distances, and derives:

- **View matrix**: world to camera, OpenGL camera axes
- **Projection matrix**: camera to OpenGL clip space
- **Resize**: new intrinsics for a different sensor size, same field of view

Matrices are `glam::DMat4`, column-major, multiplying column vectors.
*/

// Internal modules
mod error;
pub mod camera;
pub mod log;

// Main vcam namespace module
pub mod vcam {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger registry)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, log, log_detailed,
        };
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }
}

// Re-export math library at crate root
pub use glam;
