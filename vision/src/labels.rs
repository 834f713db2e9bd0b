//! Class label table for the MobileNet-SSD model.

use crate::error::{Result, VisionError};

/// Human-readable names indexed by the network's class identifier
pub const CLASS_LABELS: [&str; 22] = [
    "background",
    "aeroplane",
    "bicycle",
    "bird",
    "boat",
    "bottle",
    "bus",
    "car",
    "cat",
    "chair",
    "cow",
    "diningtable",
    "dog",
    "horse",
    "motorbike",
    "person",
    "pottedplant",
    "sheep",
    "sofa",
    "train",
    "tvmonitor",
    "mobile phone",
];

/// Looks up the name for a class index.
///
/// An index past the end of the table is an error rather than a fallback
/// label, so a model/table mismatch never shows up as a wrong name.
pub fn class_label(class_id: usize) -> Result<&'static str> {
    CLASS_LABELS
        .get(class_id)
        .copied()
        .ok_or(VisionError::UnknownClass(class_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_common_labels() {
        assert_eq!(class_label(0).unwrap(), "background");
        assert_eq!(class_label(2).unwrap(), "bicycle");
        assert_eq!(class_label(15).unwrap(), "person");
    }

    #[test]
    fn test_mobile_phone_is_last_entry() {
        assert_eq!(class_label(21).unwrap(), "mobile phone");
        assert_eq!(CLASS_LABELS.len(), 22);
    }

    #[test]
    fn test_out_of_range_fails() {
        let err = class_label(22).unwrap_err();
        assert!(matches!(err, VisionError::UnknownClass(22)));
    }
}
