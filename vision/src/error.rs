//! Error types for the live detection pipeline.
//!
//! Covers the three external collaborators (camera, inference engine,
//! drawing/resizing) plus configuration and label lookups.

use std::fmt;

pub type Result<T> = std::result::Result<T, VisionError>;

/// Error type for vision operations
#[derive(Debug)]
pub enum VisionError {
    /// Configuration error
    Config(String),
    /// Camera could not be opened or read
    Camera(String),
    /// Model files missing or unreadable
    Model(String),
    /// Forward pass failed or produced an unexpected tensor
    Inference(String),
    /// Resize, drawing or conversion failure
    Processing(String),
    /// Class index outside the label table
    UnknownClass(usize),
    /// Raw OpenCV error
    OpenCv(opencv::Error),
}

impl fmt::Display for VisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisionError::Config(msg) => write!(f, "Config error: {}", msg),
            VisionError::Camera(msg) => write!(f, "Camera error: {}", msg),
            VisionError::Model(msg) => write!(f, "Model error: {}", msg),
            VisionError::Inference(msg) => write!(f, "Inference error: {}", msg),
            VisionError::Processing(msg) => write!(f, "Processing error: {}", msg),
            VisionError::UnknownClass(id) => write!(f, "Unknown class index: {}", id),
            VisionError::OpenCv(err) => write!(f, "OpenCV error: {}", err),
        }
    }
}

impl std::error::Error for VisionError {}

impl From<opencv::Error> for VisionError {
    fn from(err: opencv::Error) -> Self {
        VisionError::OpenCv(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_camera() {
        let err = VisionError::Camera("Device 3 not available".to_string());
        assert_eq!(err.to_string(), "Camera error: Device 3 not available");
    }

    #[test]
    fn test_error_display_model() {
        let err = VisionError::Model("deploy.prototxt not found".to_string());
        assert_eq!(err.to_string(), "Model error: deploy.prototxt not found");
    }

    #[test]
    fn test_error_display_unknown_class() {
        let err = VisionError::UnknownClass(42);
        assert_eq!(err.to_string(), "Unknown class index: 42");
    }

    #[test]
    fn test_error_is_error_trait() {
        let err = VisionError::Inference("empty output".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
