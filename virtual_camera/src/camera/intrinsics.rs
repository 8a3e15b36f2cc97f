/// Camera intrinsics — pinhole optical parameters in pixels.
///
/// An immutable value: resizing produces a new `CameraIntrinsics` rather than
/// mutating the existing one. Any calibration source can produce one through
/// `CameraIntrinsics::new`, so the camera core never depends on a specific
/// calibration library.

use glam::{DMat3, DVec3};
use crate::error::{Error, Result};
use super::config::ResizeMode;

/// Focal lengths, principal point, skew and sensor size of a pinhole camera.
///
/// Pixel coordinates follow the OpenCV convention: x to the right, y down,
/// origin at the top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraIntrinsics {
    frame: String,
    fx: f64,
    fy: f64,
    cx: f64,
    cy: f64,
    skew: f64,
    width: u32,
    height: u32,
}

impl CameraIntrinsics {
    /// Create intrinsics with zero skew.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `width` or `height` is zero, a focal length
    /// is not strictly positive, or any value is non-finite.
    pub fn new(
        frame: impl Into<String>,
        fx: f64,
        fy: f64,
        cx: f64,
        cy: f64,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let intrinsics = Self {
            frame: frame.into(),
            fx,
            fy,
            cx,
            cy,
            skew: 0.0,
            width,
            height,
        };
        intrinsics.validate()?;
        Ok(intrinsics)
    }

    /// Same intrinsics with the given skew coefficient.
    pub fn with_skew(mut self, skew: f64) -> Result<Self> {
        if !skew.is_finite() {
            return Err(Error::InvalidArgument(format!("skew must be finite, got {}", skew)));
        }
        self.skew = skew;
        Ok(self)
    }

    /// Check the invariants every intrinsics value must hold.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidArgument(format!(
                "intrinsics '{}' has empty sensor {}x{}",
                self.frame, self.width, self.height
            )));
        }
        let values = [
            ("fx", self.fx),
            ("fy", self.fy),
            ("cx", self.cx),
            ("cy", self.cy),
            ("skew", self.skew),
        ];
        if let Some((name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidArgument(format!(
                "intrinsics '{}' has non-finite {} ({})",
                self.frame, name, value
            )));
        }
        if self.fx <= 0.0 || self.fy <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "intrinsics '{}' focal lengths must be positive (fx={}, fy={})",
                self.frame, self.fx, self.fy
            )));
        }
        Ok(())
    }

    // ===== GETTERS =====

    /// Coordinate frame label of the sensor
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn fx(&self) -> f64 {
        self.fx
    }

    pub fn fy(&self) -> f64 {
        self.fy
    }

    pub fn cx(&self) -> f64 {
        self.cx
    }

    pub fn cy(&self) -> f64 {
        self.cy
    }

    pub fn skew(&self) -> f64 {
        self.skew
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Geometric center of the pixel grid, `((width-1)/2, (height-1)/2)`.
    pub fn geometric_center(&self) -> (f64, f64) {
        (
            (self.width as f64 - 1.0) / 2.0,
            (self.height as f64 - 1.0) / 2.0,
        )
    }

    /// The 3x3 calibration matrix `K`.
    ///
    /// ```text
    /// | fx  skew  cx |
    /// | 0   fy    cy |
    /// | 0   0     1  |
    /// ```
    pub fn camera_matrix(&self) -> DMat3 {
        DMat3::from_cols(
            DVec3::new(self.fx, 0.0, 0.0),
            DVec3::new(self.skew, self.fy, 0.0),
            DVec3::new(self.cx, self.cy, 1.0),
        )
    }

    /// Intrinsics for a sensor of `new_width` x `new_height` pixels.
    ///
    /// The principal point keeps its offset from the geometric center,
    /// scaled per axis, so off-center principal points stay off-center by the
    /// same fraction of the image. Frame label and skew are kept.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if either new dimension is zero.
    pub fn resized(&self, new_width: u32, new_height: u32, mode: ResizeMode) -> Result<Self> {
        if new_width == 0 || new_height == 0 {
            return Err(Error::InvalidArgument(format!(
                "cannot resize '{}' to {}x{}",
                self.frame, new_width, new_height
            )));
        }

        let x_scale = new_width as f64 / self.width as f64;
        let y_scale = new_height as f64 / self.height as f64;

        let (center_x, center_y) = self.geometric_center();
        let scaled_center_x = (new_width as f64 - 1.0) / 2.0;
        let scaled_center_y = (new_height as f64 - 1.0) / 2.0;

        let cx = scaled_center_x + x_scale * (self.cx - center_x);
        let cy = scaled_center_y + y_scale * (self.cy - center_y);

        let fx = self.fx * x_scale;
        let fy = match mode {
            ResizeMode::Corrected => self.fy * y_scale,
            ResizeMode::Legacy => self.fy * x_scale,
        };

        Ok(Self {
            frame: self.frame.clone(),
            fx,
            fy,
            cx,
            cy,
            skew: self.skew,
            width: new_width,
            height: new_height,
        })
    }
}

#[cfg(test)]
#[path = "intrinsics_tests.rs"]
mod tests;
