use super::*;
use crate::error::Error;

// ============================================================================
// ClipPlanes
// ============================================================================

#[test]
fn test_clip_planes_default() {
    let clip = ClipPlanes::default();
    assert_eq!(clip.z_near(), Z_NEAR);
    assert_eq!(clip.z_far(), Z_FAR);
    assert!(clip.validate().is_ok());
}

#[test]
fn test_clip_planes_new_valid() {
    let clip = ClipPlanes::new(0.1, 10.0).unwrap();
    assert_eq!(clip.z_near(), 0.1);
    assert_eq!(clip.z_far(), 10.0);
    assert!((clip.depth_range() - 9.9).abs() < 1e-12);
}

#[test]
fn test_clip_planes_rejects_equal_distances() {
    let result = ClipPlanes::new(1.0, 1.0);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_clip_planes_rejects_inverted_distances() {
    assert!(matches!(ClipPlanes::new(10.0, 0.1), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_clip_planes_rejects_non_positive_near() {
    assert!(ClipPlanes::new(0.0, 10.0).is_err());
    assert!(ClipPlanes::new(-1.0, 10.0).is_err());
}

#[test]
fn test_clip_planes_rejects_non_finite() {
    assert!(ClipPlanes::new(f64::NAN, 10.0).is_err());
    assert!(ClipPlanes::new(0.1, f64::INFINITY).is_err());
}

// ============================================================================
// ResizeMode
// ============================================================================

#[test]
fn test_resize_mode_default_is_corrected() {
    assert_eq!(ResizeMode::default(), ResizeMode::Corrected);
}

// ============================================================================
// CameraConfig (TOML)
// ============================================================================

#[test]
fn test_config_default_round_trips_through_toml() {
    let config = CameraConfig::default();
    let text = config.to_toml_string().unwrap();
    let parsed = CameraConfig::from_toml_str(&text).unwrap();
    assert_eq!(config, parsed);
}

#[test]
fn test_config_empty_toml_is_default() {
    let config = CameraConfig::from_toml_str("").unwrap();
    assert_eq!(config, CameraConfig::default());
}

#[test]
fn test_config_partial_toml_fills_defaults() {
    let config = CameraConfig::from_toml_str("[clip]\nz_far = 25.0\n").unwrap();
    assert_eq!(config.clip.z_near(), Z_NEAR);
    assert_eq!(config.clip.z_far(), 25.0);
    assert_eq!(config.resize_mode, ResizeMode::Corrected);
}

#[test]
fn test_config_legacy_mode_parses() {
    let config = CameraConfig::from_toml_str("resize_mode = \"legacy\"\n").unwrap();
    assert_eq!(config.resize_mode, ResizeMode::Legacy);
}

#[test]
fn test_config_rejects_invalid_clip_planes() {
    let result = CameraConfig::from_toml_str("[clip]\nz_near = 5.0\nz_far = 1.0\n");
    assert!(matches!(result, Err(Error::InvalidArgument(_))));
}

#[test]
fn test_config_rejects_unknown_resize_mode() {
    let result = CameraConfig::from_toml_str("resize_mode = \"sideways\"\n");
    assert!(matches!(result, Err(Error::Config(_))));
}
