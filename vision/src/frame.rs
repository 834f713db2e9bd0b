//! Captured frame representation.
//!
//! Wraps an OpenCV `Mat` (BGR, 8 bits per channel) for one pass through the
//! capture-detect-render loop: resized and drawn on in place, then handed to
//! the display and dropped.

use crate::error::{Result, VisionError};
use opencv::core::{Mat, Size};
use opencv::imgproc::{INTER_LINEAR, resize};
use opencv::prelude::*;

/// Single BGR frame from the capture device
#[derive(Clone)]
pub struct Frame {
    data: Mat,
}

impl Frame {
    /// Wraps a BGR matrix
    pub fn new(mat: Mat) -> Self {
        Frame { data: mat }
    }

    /// Returns frame width in pixels
    pub fn width(&self) -> i32 {
        self.data.cols()
    }

    /// Returns frame height in pixels
    pub fn height(&self) -> i32 {
        self.data.rows()
    }

    /// Returns reference to the internal OpenCV matrix
    pub fn mat(&self) -> &Mat {
        &self.data
    }

    /// Returns mutable reference to the internal matrix for in-place drawing
    pub fn mat_mut(&mut self) -> &mut Mat {
        &mut self.data
    }

    /// Resizes the frame in place to the given dimensions.
    ///
    /// A frame already at the target size is left untouched.
    pub fn resize_to(&mut self, width: i32, height: i32) -> Result<()> {
        if width <= 0 || height <= 0 {
            return Err(VisionError::Processing(format!(
                "Invalid target size {}x{}",
                width, height
            )));
        }
        if self.width() == width && self.height() == height {
            return Ok(());
        }

        let mut resized = Mat::default();
        resize(
            &self.data,
            &mut resized,
            Size::new(width, height),
            0.0,
            0.0,
            INTER_LINEAR,
        )?;
        self.data = resized;
        Ok(())
    }

    /// Converts the BGR pixels to tightly packed RGB bytes.
    ///
    /// Returns `(width, height, rgb_pixels)`.
    pub fn to_rgb(&self) -> Result<(usize, usize, Vec<u8>)> {
        let width = self.width() as usize;
        let height = self.height() as usize;

        let bgr = self
            .data
            .data_bytes()
            .map_err(|e| VisionError::Processing(format!("Failed to get frame data: {}", e)))?;

        if bgr.len() != width * height * 3 {
            return Err(VisionError::Processing(format!(
                "Expected {} BGR bytes for {}x{}, got {}",
                width * height * 3,
                width,
                height,
                bgr.len()
            )));
        }

        Ok((width, height, bgr_to_rgb(bgr)))
    }
}

/// Swaps the first and third channel of every pixel
fn bgr_to_rgb(bgr: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(bgr.len());
    for px in bgr.chunks_exact(3) {
        rgb.extend_from_slice(&[px[2], px[1], px[0]]);
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencv::core::{CV_8UC3, Scalar};

    fn solid_frame(rows: i32, cols: i32, bgr: (f64, f64, f64)) -> Frame {
        let mat = Mat::new_rows_cols_with_default(
            rows,
            cols,
            CV_8UC3,
            Scalar::new(bgr.0, bgr.1, bgr.2, 0.0),
        )
        .unwrap();
        Frame::new(mat)
    }

    #[test]
    fn test_frame_dimensions() {
        let frame = solid_frame(480, 640, (0.0, 0.0, 0.0));
        assert_eq!(frame.width(), 640);
        assert_eq!(frame.height(), 480);
    }

    #[test]
    fn test_resize_changes_dimensions() {
        let mut frame = solid_frame(4, 4, (10.0, 20.0, 30.0));
        frame.resize_to(8, 6).unwrap();
        assert_eq!(frame.width(), 8);
        assert_eq!(frame.height(), 6);
    }

    #[test]
    fn test_resize_rejects_zero_size() {
        let mut frame = solid_frame(4, 4, (0.0, 0.0, 0.0));
        assert!(frame.resize_to(0, 4).is_err());
    }

    #[test]
    fn test_to_rgb_swaps_channels() {
        let frame = solid_frame(2, 2, (10.0, 20.0, 30.0));
        let (w, h, rgb) = frame.to_rgb().unwrap();
        assert_eq!((w, h), (2, 2));
        assert_eq!(rgb.len(), 12);
        assert_eq!(&rgb[..3], &[30, 20, 10]);
    }

    #[test]
    fn test_bgr_to_rgb_odd_pixel_count() {
        let rgb = bgr_to_rgb(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(rgb, vec![3, 2, 1, 6, 5, 4, 9, 8, 7]);
    }
}
