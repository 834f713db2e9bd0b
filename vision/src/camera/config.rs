//! Camera configuration types.

use crate::constants::timing::TARGET_FPS;
use crate::error::{Result, VisionError};

/// Camera capture configuration
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Camera device index (0 for default camera)
    pub device_id: i32,
    /// Requested frames per second
    pub fps: f64,
}

impl CameraConfig {
    /// Minimum valid FPS value
    const MIN_FPS: f64 = 1.0;
    /// Maximum valid FPS value
    const MAX_FPS: f64 = 240.0;

    /// Creates a new camera configuration with validation
    ///
    /// # Arguments
    /// * `device_id` - Camera device index, must not be negative
    /// * `fps` - Requested frames per second (clamped to 1.0-240.0)
    ///
    /// # Returns
    /// * `Ok(CameraConfig)` - Successfully created configuration
    /// * `Err(VisionError::Config)` - Negative index or non-finite fps
    pub fn new(device_id: i32, fps: f64) -> Result<Self> {
        if device_id < 0 {
            return Err(VisionError::Config(format!(
                "Camera index must not be negative, got {}",
                device_id
            )));
        }

        if !fps.is_finite() {
            return Err(VisionError::Config(
                "FPS must be a finite number (not NaN or infinite)".to_string(),
            ));
        }

        Ok(Self {
            device_id,
            fps: fps.clamp(Self::MIN_FPS, Self::MAX_FPS),
        })
    }
}

/// Default camera configuration (device 0 at the live feed rate)
impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device_id: 0,
            fps: TARGET_FPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CameraConfig::default();
        assert_eq!(config.device_id, 0);
        assert_eq!(config.fps, 30.0);
    }

    #[test]
    fn test_fps_clamping() {
        assert_eq!(CameraConfig::new(0, 0.5).unwrap().fps, 1.0);
        assert_eq!(CameraConfig::new(0, 300.0).unwrap().fps, 240.0);
        assert_eq!(CameraConfig::new(1, 60.0).unwrap().fps, 60.0);
    }

    #[test]
    fn test_fps_not_finite() {
        assert!(matches!(
            CameraConfig::new(0, f64::NAN),
            Err(VisionError::Config(_))
        ));
        assert!(CameraConfig::new(0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_device() {
        assert!(matches!(
            CameraConfig::new(-1, 30.0),
            Err(VisionError::Config(_))
        ));
    }
}
