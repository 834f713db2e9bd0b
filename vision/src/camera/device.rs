//! Camera device management.
//!
//! OpenCV `VideoCapture` wrapper. The device is released when the `Camera`
//! is dropped, so every exit path out of the live view closes it.

use crate::constants::logging::CAMERA_LOG_INTERVAL;
use crate::error::{Result, VisionError};
use crate::frame::Frame;
use crate::traits::{FrameSource, SourceOpener};
use logging::Logger;
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{CAP_ANY, CAP_PROP_FPS, CAP_PROP_FRAME_HEIGHT, CAP_PROP_FRAME_WIDTH, VideoCapture};

use super::config::CameraConfig;

/// Open video capture device
pub struct Camera {
    capture: VideoCapture,
    logger: Logger,
    device_id: i32,
    frame_count: u64,
    width: i32,
    height: i32,
}

impl Camera {
    /// Opens the camera described by `config`
    ///
    /// Requests the configured frame rate and records the frame size the
    /// device reports; frames are later resized to that size.
    ///
    /// # Returns
    /// * `Ok(Camera)` - Open device
    /// * `Err(VisionError::Camera)` - Device cannot be opened or reports no size
    pub fn open(config: &CameraConfig, logger: Logger) -> Result<Self> {
        logger.info(&format!(
            "[CAMERA] Opening device {} @ {} fps",
            config.device_id, config.fps
        ));

        let mut capture = VideoCapture::new(config.device_id, CAP_ANY).map_err(|e| {
            VisionError::Camera(format!("Failed to open camera {}: {}", config.device_id, e))
        })?;

        let opened = capture
            .is_opened()
            .map_err(|e| VisionError::Camera(format!("Error verifying camera status: {}", e)))?;
        if !opened {
            return Err(VisionError::Camera(format!(
                "Camera {} is not available",
                config.device_id
            )));
        }

        let _ = capture.set(CAP_PROP_FPS, config.fps);

        let width = Self::get_property(&capture, CAP_PROP_FRAME_WIDTH)? as i32;
        let height = Self::get_property(&capture, CAP_PROP_FRAME_HEIGHT)? as i32;
        if width <= 0 || height <= 0 {
            let _ = capture.release();
            return Err(VisionError::Camera(format!(
                "Camera {} reported invalid frame size {}x{}",
                config.device_id, width, height
            )));
        }

        logger.info(&format!(
            "[CAMERA] Device {} open at {}x{}",
            config.device_id, width, height
        ));

        Ok(Camera {
            capture,
            logger,
            device_id: config.device_id,
            frame_count: 0,
            width,
            height,
        })
    }

    fn get_property(capture: &VideoCapture, prop: i32) -> Result<f64> {
        capture
            .get(prop)
            .map_err(|e| VisionError::Camera(format!("Error getting property: {}", e)))
    }
}

impl FrameSource for Camera {
    fn read_frame(&mut self) -> Result<Option<Frame>> {
        let mut mat = Mat::default();

        let success = self
            .capture
            .read(&mut mat)
            .map_err(|e| VisionError::Camera(format!("Failed to read frame: {}", e)))?;

        if !success || mat.empty() || mat.cols() == 0 || mat.rows() == 0 {
            return Ok(None);
        }

        self.frame_count += 1;
        if self.frame_count.is_multiple_of(CAMERA_LOG_INTERVAL) {
            self.logger
                .debug(&format!("[CAMERA] Frames captured: {}", self.frame_count));
        }

        Ok(Some(Frame::new(mat)))
    }

    fn frame_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }
}

impl Drop for Camera {
    fn drop(&mut self) {
        self.logger.info(&format!(
            "[CAMERA] Releasing device {}. Total frames captured: {}",
            self.device_id, self.frame_count
        ));

        if let Err(e) = self.capture.release() {
            self.logger
                .error(&format!("[CAMERA] Error releasing camera: {}", e));
        }
    }
}

/// Opens a [`Camera`] from a fixed configuration each time the feed starts
pub struct CameraOpener {
    config: CameraConfig,
    logger: Logger,
}

impl CameraOpener {
    pub fn new(config: CameraConfig, logger: Logger) -> Self {
        Self { config, logger }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }
}

impl SourceOpener for CameraOpener {
    type Source = Camera;

    fn open(&mut self) -> Result<Camera> {
        Camera::open(&self.config, self.logger.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_camera_invalid_id() {
        let dir = tempdir().unwrap();
        let logger = Logger::new(dir.path().join("camera.log"), LogLevel::Debug).unwrap();
        let config = CameraConfig::new(999, 30.0).unwrap();

        let mut opener = CameraOpener::new(config, logger);
        assert_eq!(opener.config().device_id, 999);
        assert!(opener.open().is_err());
    }
}
