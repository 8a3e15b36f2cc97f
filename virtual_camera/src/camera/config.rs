/// Camera configuration — clip distances and resize behavior.
///
/// Replaces module-level near/far constants with explicit values passed at
/// construction. Every struct here is `#[serde(default)]` so a partial TOML
/// table (e.g. only `[clip] z_far = 50.0`) fills the rest from defaults.

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

/// Default near-plane clipping distance
pub const Z_NEAR: f64 = 0.05;

/// Default far-plane clipping distance
pub const Z_FAR: f64 = 100.0;

/// Near/far clipping distances. Always `0 < z_near < z_far` once validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipPlanes {
    z_near: f64,
    z_far: f64,
}

impl ClipPlanes {
    /// Create clip planes, rejecting non-finite, non-positive or inverted distances.
    pub fn new(z_near: f64, z_far: f64) -> Result<Self> {
        let planes = Self { z_near, z_far };
        planes.validate()?;
        Ok(planes)
    }

    /// Check `0 < z_near < z_far` with both values finite.
    pub fn validate(&self) -> Result<()> {
        if !self.z_near.is_finite() || !self.z_far.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "clip distances must be finite (z_near={}, z_far={})",
                self.z_near, self.z_far
            )));
        }
        if self.z_near <= 0.0 {
            return Err(Error::InvalidArgument(format!(
                "z_near must be positive, got {}",
                self.z_near
            )));
        }
        if self.z_near >= self.z_far {
            return Err(Error::InvalidArgument(format!(
                "z_near ({}) must be less than z_far ({})",
                self.z_near, self.z_far
            )));
        }
        Ok(())
    }

    pub fn z_near(&self) -> f64 {
        self.z_near
    }

    pub fn z_far(&self) -> f64 {
        self.z_far
    }

    /// `z_far - z_near`, strictly positive for validated planes
    pub fn depth_range(&self) -> f64 {
        self.z_far - self.z_near
    }
}

impl Default for ClipPlanes {
    fn default() -> Self {
        Self { z_near: Z_NEAR, z_far: Z_FAR }
    }
}

/// How focal lengths follow a sensor resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// `fx` scales with the horizontal factor, `fy` with the vertical factor.
    #[default]
    Corrected,

    /// Both `fx` and `fy` scale with the horizontal factor.
    ///
    /// Kept for bit-for-bit parity with older renderers. Identical to
    /// `Corrected` for uniform resizes.
    Legacy,
}

/// Construction-time camera settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Clipping distances
    pub clip: ClipPlanes,

    /// Focal-length policy for `VirtualCamera::resize`
    pub resize_mode: ResizeMode,
}

impl CameraConfig {
    /// Parse a config from TOML. Missing fields use defaults.
    ///
    /// ```
    /// use virtual_camera::vcam::camera::{CameraConfig, ResizeMode};
    ///
    /// let config = CameraConfig::from_toml_str("resize_mode = \"legacy\"\n[clip]\nz_far = 20.0\n").unwrap();
    /// assert_eq!(config.resize_mode, ResizeMode::Legacy);
    /// assert_eq!(config.clip.z_far(), 20.0);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CameraConfig = toml::from_str(content)?;
        config.clip.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
