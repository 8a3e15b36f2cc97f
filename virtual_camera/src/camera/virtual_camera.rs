/// VirtualCamera — intrinsics plus pose, and the matrices derived from them.
///
/// The camera stores state and derives the view and projection matrices on
/// demand; nothing derived is cached. It is owned by one scene and driven from
/// one thread; callers sharing it across threads must synchronize externally.
///
/// # Conventions
///
/// - The pose maps camera coordinates to world coordinates, with OpenCV camera
///   axes (x right, y down, z forward).
/// - The view matrix uses OpenGL camera axes (x right, y up, z toward the eye).
/// - The projection matrix maps to OpenGL clip space, depth in [-1, 1].
/// - glam matrices are column-major and multiply column vectors:
///   `clip = projection * view * world`. Mathematical entry `P[r][c]` is
///   `m.col(c)[r]`.

use glam::{DMat4, DVec3, DVec4};
use crate::error::{Error, Result};
use crate::{vcam_debug, vcam_error, vcam_warn};
use super::config::{CameraConfig, ClipPlanes, ResizeMode};
use super::frustum::Frustum;
use super::intrinsics::CameraIntrinsics;
use super::pose;
use super::uniform::CameraUniform;

const LOG_SOURCE: &str = "vcam::VirtualCamera";

/// Tolerance used when checking an assigned pose for rigidity.
const RIGID_EPSILON: f64 = 1e-6;

/// Poses with |det| below this are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// A virtual camera: intrinsics, optional pose, clip distances.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualCamera {
    intrinsics: CameraIntrinsics,
    pose: Option<DMat4>,
    clip: ClipPlanes,
    resize_mode: ResizeMode,
}

impl VirtualCamera {
    /// Create a camera.
    ///
    /// `pose` may be `None`; the view matrix is unavailable until one is set.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if the intrinsics or clip planes are invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use virtual_camera::vcam::camera::{CameraIntrinsics, ClipPlanes, VirtualCamera};
    ///
    /// let intrinsics = CameraIntrinsics::new("camera", 500.0, 500.0, 319.5, 239.5, 640, 480).unwrap();
    /// let camera = VirtualCamera::new(intrinsics, None, ClipPlanes::default()).unwrap();
    /// assert!(camera.view_matrix().is_err());
    /// ```
    pub fn new(intrinsics: CameraIntrinsics, pose: Option<DMat4>, clip: ClipPlanes) -> Result<Self> {
        Self::from_config(
            intrinsics,
            pose,
            &CameraConfig {
                clip,
                resize_mode: ResizeMode::default(),
            },
        )
    }

    /// Create a camera with clip planes and resize mode taken from `config`.
    pub fn from_config(
        intrinsics: CameraIntrinsics,
        pose: Option<DMat4>,
        config: &CameraConfig,
    ) -> Result<Self> {
        intrinsics.validate().map_err(Self::log_and_return_error)?;
        config.clip.validate().map_err(Self::log_and_return_error)?;

        if let Some(p) = &pose {
            Self::check_rigid(p);
        }

        vcam_debug!(
            LOG_SOURCE,
            "Created camera '{}' {}x{} (z_near={}, z_far={}, resize={:?})",
            intrinsics.frame(),
            intrinsics.width(),
            intrinsics.height(),
            config.clip.z_near(),
            config.clip.z_far(),
            config.resize_mode
        );

        Ok(Self {
            intrinsics,
            pose,
            clip: config.clip,
            resize_mode: config.resize_mode,
        })
    }

    /// Report an error through the logger before handing it back
    fn log_and_return_error(error: Error) -> Error {
        vcam_error!(LOG_SOURCE, "{}", error);
        error
    }

    fn check_rigid(pose: &DMat4) {
        if !pose::is_rigid(pose, RIGID_EPSILON) {
            vcam_warn!(LOG_SOURCE, "Pose is not a rigid transform: {:?}", pose);
        }
    }

    // ===== GETTERS =====

    pub fn intrinsics(&self) -> &CameraIntrinsics {
        &self.intrinsics
    }

    /// Camera-to-world transform, if set.
    pub fn pose(&self) -> Option<&DMat4> {
        self.pose.as_ref()
    }

    pub fn clip_planes(&self) -> ClipPlanes {
        self.clip
    }

    pub fn z_near(&self) -> f64 {
        self.clip.z_near()
    }

    pub fn z_far(&self) -> f64 {
        self.clip.z_far()
    }

    pub fn resize_mode(&self) -> ResizeMode {
        self.resize_mode
    }

    // ===== SETTERS =====

    /// Replace the pose. Non-rigid poses are stored but logged as a warning.
    pub fn set_pose(&mut self, pose: DMat4) {
        Self::check_rigid(&pose);
        self.pose = Some(pose);
    }

    /// Unset the pose.
    pub fn clear_pose(&mut self) {
        self.pose = None;
    }

    /// Replace the intrinsics wholesale (e.g. after recalibration).
    pub fn set_intrinsics(&mut self, intrinsics: CameraIntrinsics) -> Result<()> {
        intrinsics.validate().map_err(Self::log_and_return_error)?;
        self.intrinsics = intrinsics;
        Ok(())
    }

    pub fn set_clip_planes(&mut self, clip: ClipPlanes) -> Result<()> {
        clip.validate().map_err(Self::log_and_return_error)?;
        self.clip = clip;
        Ok(())
    }

    pub fn set_resize_mode(&mut self, mode: ResizeMode) {
        self.resize_mode = mode;
    }

    // ===== DERIVED MATRICES =====

    /// World-to-camera view matrix (OpenGL camera axes).
    ///
    /// Flips the pose's Y and Z axes into OpenGL convention and inverts it.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidState` if no pose is set
    /// - `Error::DegenerateGeometry` if the pose is singular or non-finite
    pub fn view_matrix(&self) -> Result<DMat4> {
        let camera_pose = self.pose.as_ref().ok_or_else(|| {
            Self::log_and_return_error(Error::InvalidState(format!(
                "camera '{}' has no pose",
                self.intrinsics.frame()
            )))
        })?;

        let camera_to_world = pose::flip_yz_axes(camera_pose);

        let det = camera_to_world.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return Err(Self::log_and_return_error(Error::DegenerateGeometry(format!(
                "pose of camera '{}' is not invertible (det={})",
                self.intrinsics.frame(),
                det
            ))));
        }

        let view = camera_to_world.inverse();
        if !view.is_finite() {
            return Err(Self::log_and_return_error(Error::DegenerateGeometry(format!(
                "inverse pose of camera '{}' is not finite",
                self.intrinsics.frame()
            ))));
        }

        Ok(view)
    }

    /// Camera-to-clip projection matrix built from the intrinsics.
    ///
    /// ```text
    /// | 2fx/w   0       1-2cx/w   0           |
    /// | 0       2fy/h   2cy/h-1   0           |
    /// | 0       0       -(f+n)/(f-n)  -2fn/(f-n) |
    /// | 0       0       -1        0           |
    /// ```
    ///
    /// Skew is ignored. Independent of the pose. Clip planes are validated on
    /// every write, so `f - n > 0` always holds here.
    pub fn projection_matrix(&self) -> DMat4 {
        let k = &self.intrinsics;
        let width = k.width() as f64;
        let height = k.height() as f64;
        let near = self.clip.z_near();
        let far = self.clip.z_far();
        let depth = self.clip.depth_range();

        DMat4::from_cols(
            DVec4::new(2.0 * k.fx() / width, 0.0, 0.0, 0.0),
            DVec4::new(0.0, 2.0 * k.fy() / height, 0.0, 0.0),
            DVec4::new(
                1.0 - 2.0 * k.cx() / width,
                2.0 * k.cy() / height - 1.0,
                -(far + near) / depth,
                -1.0,
            ),
            DVec4::new(0.0, 0.0, -2.0 * far * near / depth, 0.0),
        )
    }

    /// Combined `projection * view`.
    pub fn view_projection_matrix(&self) -> Result<DMat4> {
        Ok(self.projection_matrix() * self.view_matrix()?)
    }

    /// World-space frustum of the current pose.
    pub fn frustum(&self) -> Result<Frustum> {
        Ok(Frustum::from_view_projection(&self.view_projection_matrix()?))
    }

    /// Camera center in world coordinates (translation of the pose).
    pub fn position(&self) -> Result<DVec3> {
        self.pose
            .as_ref()
            .map(|p| p.w_axis.truncate())
            .ok_or_else(|| {
                Self::log_and_return_error(Error::InvalidState(format!(
                    "camera '{}' has no pose",
                    self.intrinsics.frame()
                )))
            })
    }

    /// f32 uniform block for the current state.
    pub fn uniform(&self) -> Result<CameraUniform> {
        let view = self.view_matrix()?;
        Ok(CameraUniform::new(
            &view,
            &self.projection_matrix(),
            self.position()?,
            self.clip.z_near(),
            self.clip.z_far(),
            self.intrinsics.width(),
            self.intrinsics.height(),
        ))
    }

    // ===== RESIZE =====

    /// Rescale the intrinsics to a new sensor size, preserving field of view.
    ///
    /// Pose and clip planes are untouched. Focal lengths follow the camera's
    /// `ResizeMode`.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if either dimension is zero; the camera is left
    /// unchanged.
    pub fn resize(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let resized = self
            .intrinsics
            .resized(new_width, new_height, self.resize_mode)
            .map_err(Self::log_and_return_error)?;

        vcam_debug!(
            LOG_SOURCE,
            "Resized camera '{}' {}x{} -> {}x{}",
            self.intrinsics.frame(),
            self.intrinsics.width(),
            self.intrinsics.height(),
            new_width,
            new_height
        );

        self.intrinsics = resized;
        Ok(())
    }
}

#[cfg(test)]
#[path = "virtual_camera_tests.rs"]
mod tests;
