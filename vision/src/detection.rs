//! Per-frame detection records.

use crate::constants::detection::{CONFIDENCE_THRESHOLD, DETECTION_ROW_LEN};
use crate::constants::overlay::LABEL_OFFSET;
use crate::error::{Result, VisionError};
use crate::labels::class_label;

/// One candidate object reported by the network
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Index into the class label table
    pub class_id: usize,
    /// Score in `[0, 1]`
    pub confidence: f32,
    /// Normalized `[x1, y1, x2, y2]`
    pub bbox: [f32; 4],
}

/// Box corners in frame pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl PixelBox {
    /// Where the label text starts: above the box when there is room,
    /// otherwise just inside its top edge.
    pub fn label_origin(&self) -> (i32, i32) {
        let above = self.y1 - LABEL_OFFSET;
        let y = if above > LABEL_OFFSET {
            above
        } else {
            self.y1 + LABEL_OFFSET
        };
        (self.x1, y)
    }
}

impl Detection {
    pub fn new(class_id: usize, confidence: f32, bbox: [f32; 4]) -> Self {
        Self {
            class_id,
            confidence,
            bbox,
        }
    }

    /// True when the score is strictly above the drawing threshold
    pub fn is_confident(&self) -> bool {
        self.confidence > CONFIDENCE_THRESHOLD
    }

    /// Scales the normalized box to a `width` x `height` frame,
    /// truncating toward zero.
    ///
    /// Products are taken in `f64`; `0.5796875_f32 * 640` truncates to 370.
    pub fn pixel_box(&self, width: i32, height: i32) -> PixelBox {
        let scale = |v: f32, size: i32| (f64::from(v) * f64::from(size)) as i32;
        PixelBox {
            x1: scale(self.bbox[0], width),
            y1: scale(self.bbox[1], height),
            x2: scale(self.bbox[2], width),
            y2: scale(self.bbox[3], height),
        }
    }

    /// Overlay text, e.g. `"person: 0.87%"`.
    ///
    /// The score is printed as the raw fraction followed by `%`; it is not
    /// scaled to a percentage.
    pub fn label(&self) -> Result<String> {
        let name = class_label(self.class_id)?;
        Ok(format!("{}: {:.2}%", name, self.confidence))
    }
}

/// Decodes the flat SSD output tensor (`[1, 1, N, 7]`) into detections.
///
/// Rows keep the engine's order. A negative class value cannot index the
/// label table and is rejected.
pub fn parse_detections(raw: &[f32]) -> Result<Vec<Detection>> {
    if raw.len() % DETECTION_ROW_LEN != 0 {
        return Err(VisionError::Inference(format!(
            "Output length {} is not a multiple of {}",
            raw.len(),
            DETECTION_ROW_LEN
        )));
    }

    raw.chunks_exact(DETECTION_ROW_LEN)
        .map(|row| {
            let class = row[1];
            if class < 0.0 || !class.is_finite() {
                return Err(VisionError::Inference(format!(
                    "Invalid class value {} in output",
                    class
                )));
            }
            Ok(Detection::new(
                class as usize,
                row[2],
                [row[3], row[4], row[5], row[6]],
            ))
        })
        .collect()
}
