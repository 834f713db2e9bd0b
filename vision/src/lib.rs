//! Live Object Detection
//!
//! Camera capture, MobileNet-SSD inference and overlay drawing for the
//! live view, driven by a fixed-rate tick loop.

pub mod camera;
pub mod constants;
pub mod detection;
pub mod detector;
pub mod error;
pub mod frame;
pub mod labels;
pub mod overlay;
pub mod pipeline;
pub mod ticker;
pub mod traits;

// Re-export commonly used types
pub use camera::{Camera, CameraConfig, CameraOpener};
pub use detection::{Detection, PixelBox};
pub use detector::{ModelPaths, SsdDetector, SsdLoader};
pub use error::{Result, VisionError};
pub use frame::Frame;
pub use labels::{CLASS_LABELS, class_label};
pub use overlay::Overlay;
pub use pipeline::{FeedState, FrameReport, LiveFeed, TickOutcome};
pub use ticker::FrameTicker;
pub use traits::{Detector, DetectorLoader, FrameSink, FrameSource, SourceOpener};
