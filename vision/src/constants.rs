//! Fixed parameters of the capture-detect-render loop.

/// Frame pacing
pub mod timing {
    /// Target tick rate of the live feed
    pub const TARGET_FPS: f64 = 30.0;
}

/// Detection filtering
pub mod detection {
    /// Detections must score strictly above this value to be drawn
    pub const CONFIDENCE_THRESHOLD: f32 = 0.2;
    /// Values per detection row in the SSD output tensor
    /// (image_id, class_id, confidence, x1, y1, x2, y2)
    pub const DETECTION_ROW_LEN: usize = 7;
}

/// MobileNet-SSD input blob parameters
pub mod blob {
    /// Square input edge expected by the network
    pub const INPUT_SIZE: i32 = 300;
    /// Pixel scale factor (1 / 127.5)
    pub const SCALE_FACTOR: f64 = 0.007843;
    /// Mean subtracted from every channel
    pub const MEAN: f64 = 127.5;
}

/// Model file locations
pub mod model {
    /// Network topology description
    pub const DEFAULT_CONFIG: &str = "mns/deploy.prototxt";
    /// Learned weights
    pub const DEFAULT_WEIGHTS: &str = "mns/mobilenet_iter_73000.caffemodel";
}

/// Overlay styling
pub mod overlay {
    /// Box and label color in BGR order
    pub const COLOR_BGR: (f64, f64, f64) = (0.0, 255.0, 0.0);
    /// Stroke thickness for boxes and text
    pub const THICKNESS: i32 = 2;
    /// Hershey font scale for labels
    pub const FONT_SCALE: f64 = 0.5;
    /// Vertical distance between a box edge and its label
    pub const LABEL_OFFSET: i32 = 15;
}

/// Logging intervals
pub mod logging {
    /// Log capture progress every N frames
    pub const CAMERA_LOG_INTERVAL: u64 = 300;
}
