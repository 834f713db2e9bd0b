//! Configuration Module
//!
//! Loads `app.conf` settings for logging, the camera and the model files.

mod app_config;

pub use app_config::AppConfig;
