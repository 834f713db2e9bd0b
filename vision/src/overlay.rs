//! Box and label overlays drawn onto frames.

use crate::constants::overlay::{COLOR_BGR, FONT_SCALE, THICKNESS};
use crate::detection::{Detection, PixelBox};
use crate::error::Result;
use crate::frame::Frame;
use opencv::core::{Point, Scalar};
use opencv::imgproc::{FONT_HERSHEY_SIMPLEX, LINE_8, put_text, rectangle_points};

/// A rectangle plus its caption, in frame pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub pixel_box: PixelBox,
    pub label: String,
    pub label_origin: (i32, i32),
}

impl Overlay {
    /// Builds the overlay for `detection` on a `width` x `height` frame
    pub fn from_detection(detection: &Detection, width: i32, height: i32) -> Result<Self> {
        let pixel_box = detection.pixel_box(width, height);
        Ok(Self {
            label: detection.label()?,
            label_origin: pixel_box.label_origin(),
            pixel_box,
        })
    }

    /// Draws the rectangle and caption onto `frame`
    pub fn draw(&self, frame: &mut Frame) -> Result<()> {
        let color = Scalar::new(COLOR_BGR.0, COLOR_BGR.1, COLOR_BGR.2, 0.0);
        let b = self.pixel_box;

        rectangle_points(
            frame.mat_mut(),
            Point::new(b.x1, b.y1),
            Point::new(b.x2, b.y2),
            color,
            THICKNESS,
            LINE_8,
            0,
        )?;

        put_text(
            frame.mat_mut(),
            &self.label,
            Point::new(self.label_origin.0, self.label_origin.1),
            FONT_HERSHEY_SIMPLEX,
            FONT_SCALE,
            color,
            THICKNESS,
            LINE_8,
            false,
        )?;

        Ok(())
    }
}

/// Overlays for every confident detection, in the order given.
///
/// Nothing is sorted or suppressed; overlapping boxes are all kept.
pub fn build_overlays(detections: &[Detection], width: i32, height: i32) -> Result<Vec<Overlay>> {
    detections
        .iter()
        .filter(|d| d.is_confident())
        .map(|d| Overlay::from_detection(d, width, height))
        .collect()
}

/// Draws overlays onto the frame in sequence
pub fn draw_overlays(frame: &mut Frame, overlays: &[Overlay]) -> Result<()> {
    for overlay in overlays {
        overlay.draw(frame)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VisionError;
    use opencv::core::{CV_8UC3, Mat, Vec3b};
    use opencv::prelude::*;

    #[test]
    fn test_build_overlays_filters_and_keeps_order() {
        let detections = vec![
            Detection::new(15, 0.5, [0.5, 0.5, 1.0, 1.0]),
            Detection::new(7, 0.2, [0.0, 0.0, 1.0, 1.0]),
            Detection::new(2, 0.95, [0.0, 0.0, 0.5, 0.5]),
        ];

        let overlays = build_overlays(&detections, 100, 100).unwrap();
        assert_eq!(overlays.len(), 2);
        assert_eq!(overlays[0].label, "person: 0.50%");
        assert_eq!(overlays[1].label, "bicycle: 0.95%");
    }

    #[test]
    fn test_overlapping_boxes_are_not_suppressed() {
        let detections = vec![
            Detection::new(15, 0.9, [0.1, 0.1, 0.6, 0.6]),
            Detection::new(15, 0.8, [0.1, 0.1, 0.6, 0.6]),
        ];
        let overlays = build_overlays(&detections, 50, 50).unwrap();
        assert_eq!(overlays.len(), 2);
        assert_eq!(overlays[0].pixel_box, overlays[1].pixel_box);
    }

    #[test]
    fn test_unknown_class_fails_only_when_confident() {
        let weak = vec![Detection::new(40, 0.1, [0.0; 4])];
        assert!(build_overlays(&weak, 10, 10).unwrap().is_empty());

        let strong = vec![Detection::new(40, 0.9, [0.0; 4])];
        assert!(matches!(
            build_overlays(&strong, 10, 10),
            Err(VisionError::UnknownClass(40))
        ));
    }

    #[test]
    fn test_draw_marks_box_corner_green() {
        let mat = Mat::new_rows_cols_with_default(40, 40, CV_8UC3, Scalar::all(0.0)).unwrap();
        let mut frame = Frame::new(mat);

        let overlay =
            Overlay::from_detection(&Detection::new(2, 0.9, [0.25, 0.25, 0.75, 0.75]), 40, 40)
                .unwrap();
        draw_overlays(&mut frame, &[overlay]).unwrap();

        let corner = frame.mat().at_2d::<Vec3b>(10, 10).unwrap();
        assert_eq!(corner.0, [0, 255, 0]);
    }
}
