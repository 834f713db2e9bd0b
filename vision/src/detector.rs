//! MobileNet-SSD detector backed by OpenCV's `dnn` module.

use crate::constants::blob::{INPUT_SIZE, MEAN, SCALE_FACTOR};
use crate::constants::model::{DEFAULT_CONFIG, DEFAULT_WEIGHTS};
use crate::detection::{Detection, parse_detections};
use crate::error::{Result, VisionError};
use crate::frame::Frame;
use crate::traits::{Detector, DetectorLoader};
use logging::Logger;
use opencv::core::{CV_32F, Scalar, Size};
use opencv::dnn::{Net, blob_from_image, read_net_from_caffe};
use opencv::prelude::*;
use std::path::{Path, PathBuf};

/// Paths of the Caffe model pair
#[derive(Debug, Clone, PartialEq)]
pub struct ModelPaths {
    /// Topology description (`.prototxt`)
    pub config: PathBuf,
    /// Learned weights (`.caffemodel`)
    pub weights: PathBuf,
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG),
            weights: PathBuf::from(DEFAULT_WEIGHTS),
        }
    }
}

/// Loaded SSD network
pub struct SsdDetector {
    net: Net,
}

impl SsdDetector {
    /// Reads the network from the model pair
    ///
    /// # Returns
    /// * `Ok(SsdDetector)` - Network ready for inference
    /// * `Err(VisionError::Model)` - A file is missing or cannot be parsed
    pub fn load(paths: &ModelPaths) -> Result<Self> {
        let config = path_str(&paths.config)?;
        let weights = path_str(&paths.weights)?;

        for path in [&paths.config, &paths.weights] {
            if !path.is_file() {
                return Err(VisionError::Model(format!(
                    "Model file not found: {}",
                    path.display()
                )));
            }
        }

        let net = read_net_from_caffe(config, weights)
            .map_err(|e| VisionError::Model(format!("Failed to read Caffe model: {}", e)))?;

        if net.empty()? {
            return Err(VisionError::Model("Loaded network is empty".to_string()));
        }

        Ok(Self { net })
    }
}

impl Detector for SsdDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>> {
        let blob = blob_from_image(
            frame.mat(),
            SCALE_FACTOR,
            Size::new(INPUT_SIZE, INPUT_SIZE),
            Scalar::all(MEAN),
            false,
            false,
            CV_32F,
        )?;

        self.net.set_input_def(&blob)?;
        let output = self
            .net
            .forward_single_def()
            .map_err(|e| VisionError::Inference(format!("Forward pass failed: {}", e)))?;

        if output.empty() {
            return Ok(Vec::new());
        }

        let raw = output
            .data_typed::<f32>()
            .map_err(|e| VisionError::Inference(format!("Unexpected output tensor: {}", e)))?;
        parse_detections(raw)
    }
}

/// Loads an [`SsdDetector`] each time the feed starts
pub struct SsdLoader {
    paths: ModelPaths,
    logger: Logger,
}

impl SsdLoader {
    pub fn new(paths: ModelPaths, logger: Logger) -> Self {
        Self { paths, logger }
    }
}

impl DetectorLoader for SsdLoader {
    type Detector = SsdDetector;

    fn load(&mut self) -> Result<SsdDetector> {
        self.logger.info(&format!(
            "[MODEL] Loading {} + {}",
            self.paths.config.display(),
            self.paths.weights.display()
        ));

        match SsdDetector::load(&self.paths) {
            Ok(detector) => {
                self.logger.info("[MODEL] Network ready");
                Ok(detector)
            }
            Err(e) => {
                self.logger.error(&format!("[MODEL] {}", e));
                Err(e)
            }
        }
    }
}

fn path_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        VisionError::Model(format!("Model path is not valid UTF-8: {}", path.display()))
    })
}
