//! Boundaries to the external collaborators of the live feed
//!
//! The pipeline only talks to capture devices, inference engines and
//! display surfaces through these traits. The OpenCV-backed implementations
//! live in `camera` and `detector`; the frontend provides the display.

use crate::detection::Detection;
use crate::error::Result;
use crate::frame::Frame;

/// An open capture device
///
/// # Responsibilities
/// - Produce at most one frame per call
/// - Report the frame size negotiated at open time
/// - Release the underlying device when dropped
pub trait FrameSource {
    /// Reads the next frame
    ///
    /// # Returns
    /// * `Ok(Some(Frame))` - A fresh frame
    /// * `Ok(None)` - The device had nothing to deliver this time
    /// * `Err` - The device failed
    fn read_frame(&mut self) -> Result<Option<Frame>>;

    /// Returns `(width, height)` reported by the device when it was opened
    fn frame_size(&self) -> (i32, i32);
}

/// Acquires capture devices on demand
///
/// Called each time the live view is entered, so a released device can be
/// opened again.
pub trait SourceOpener {
    type Source: FrameSource;

    /// Opens the device
    ///
    /// # Returns
    /// * `Ok(Source)` - An open device, released when dropped
    /// * `Err` - The device is unavailable
    fn open(&mut self) -> Result<Self::Source>;
}

/// Object detector run against each frame
pub trait Detector {
    /// Runs one forward pass
    ///
    /// Detections are returned in the order produced by the engine.
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>>;
}

/// Loads a detector from its model files
pub trait DetectorLoader {
    type Detector: Detector;

    /// Loads the model
    ///
    /// # Returns
    /// * `Ok(Detector)` - Ready to run
    /// * `Err` - Model files missing or unreadable
    fn load(&mut self) -> Result<Self::Detector>;
}

/// Surface that shows the most recent annotated frame
pub trait FrameSink {
    /// Replaces the displayed content with `frame`
    fn present(&mut self, frame: &Frame) -> Result<()>;
}
