//! Application Configuration
//!
//! Log settings, camera index and rate, and model file locations. Every key is
//! optional; missing keys keep their defaults.

use logging::LogLevel;
use std::fs;
use std::path::PathBuf;
use vision::constants::timing::TARGET_FPS;
use vision::{CameraConfig, ModelPaths};

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the log file
    pub log_path: PathBuf,
    /// Logging level
    pub log_level: LogLevel,
    /// Camera device index
    pub camera_device: i32,
    /// Requested capture rate, clamped by `CameraConfig`
    pub camera_fps: f64,
    /// Caffe model pair
    pub model: ModelPaths,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("detector.log"),
            log_level: LogLevel::Info,
            camera_device: 0,
            camera_fps: TARGET_FPS,
            model: ModelPaths::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a .conf file
    ///
    /// Format:
    /// ```text
    /// log_path=detector.log
    /// log_level=Info
    /// camera_device=0
    /// camera_fps=30
    /// model_config=mns/deploy.prototxt
    /// model_weights=mns/mobilenet_iter_73000.caffemodel
    /// ```
    ///
    /// Runs before the logger exists, so problems are reported on stderr.
    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;
        Ok(Self::parse(&content))
    }

    /// Parses `key=value` lines on top of the defaults
    pub fn parse(content: &str) -> Self {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                eprintln!("Warning: Malformed configuration line '{}' ignored", line);
                continue;
            };
            let (key, value) = (key.trim(), value.trim());

            match key {
                "log_path" => config.log_path = PathBuf::from(value),
                "log_level" => match value.parse() {
                    Ok(level) => config.log_level = level,
                    Err(e) => eprintln!("Warning: {}, using {}", e, config.log_level),
                },
                "camera_device" => match value.parse::<i32>() {
                    Ok(id) if id >= 0 => config.camera_device = id,
                    _ => eprintln!(
                        "Warning: Invalid camera_device '{}', using {}",
                        value, config.camera_device
                    ),
                },
                "camera_fps" => match value.parse::<f64>() {
                    Ok(fps) if fps.is_finite() => config.camera_fps = fps,
                    _ => eprintln!(
                        "Warning: Invalid camera_fps '{}', using {}",
                        value, config.camera_fps
                    ),
                },
                "model_config" => config.model.config = PathBuf::from(value),
                "model_weights" => config.model.weights = PathBuf::from(value),
                _ => eprintln!("Warning: Unknown configuration key '{}' ignored", key),
            }
        }

        config
    }

    /// Tries `app.conf`, `frontend/app.conf`, `../app.conf`, then defaults
    pub fn load() -> Self {
        let config_paths = ["app.conf", "frontend/app.conf", "../app.conf"];

        for path in config_paths {
            if let Ok(config) = Self::load_from_file(path) {
                println!("Loaded configuration from: {}", path);
                return config;
            }
        }

        println!("No configuration file found, using defaults");
        Self::default()
    }

    /// Validated camera settings for the live feed
    pub fn camera_config(&self) -> vision::Result<CameraConfig> {
        CameraConfig::new(self.camera_device, self.camera_fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_path, PathBuf::from("detector.log"));
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.camera_device, 0);
        assert_eq!(config.camera_fps, 30.0);
        assert_eq!(config.model, ModelPaths::default());
    }

    #[test]
    fn test_parse_all_keys() {
        let config = AppConfig::parse(
            "# detector settings\n\
             log_path=/tmp/detector.log\n\
             log_level=Debug\n\
             camera_device=2\n\
             camera_fps=15\n\
             model_config=models/ssd.prototxt\n\
             model_weights = models/ssd.caffemodel\n",
        );

        assert_eq!(config.log_path, PathBuf::from("/tmp/detector.log"));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.camera_device, 2);
        assert_eq!(config.camera_fps, 15.0);
        assert_eq!(config.model.config, PathBuf::from("models/ssd.prototxt"));
        assert_eq!(config.model.weights, PathBuf::from("models/ssd.caffemodel"));
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = AppConfig::parse(
            "log_level=verbose\ncamera_device=-3\ncamera_fps=NaN\nfoo=bar\nnonsense\n",
        );
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.camera_device, 0);
        assert_eq!(config.camera_fps, 30.0);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.conf");
        std::fs::write(&path, "camera_device=1\n").unwrap();

        let config = AppConfig::load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config.camera_device, 1);
        let camera = config.camera_config().unwrap();
        assert_eq!(camera.device_id, 1);
        assert_eq!(camera.fps, 30.0);
    }

    #[test]
    fn test_camera_config_clamps_fps() {
        let config = AppConfig::parse("camera_fps=1000\n");
        assert_eq!(config.camera_config().unwrap().fps, 240.0);

        let config = AppConfig::parse("camera_fps=0.25\n");
        assert_eq!(config.camera_config().unwrap().fps, 1.0);
    }

    #[test]
    fn test_camera_config_rejects_negative_device() {
        let config = AppConfig {
            camera_device: -1,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.camera_config(),
            Err(vision::VisionError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file() {
        assert!(AppConfig::load_from_file("/nonexistent/app.conf").is_err());
    }
}
