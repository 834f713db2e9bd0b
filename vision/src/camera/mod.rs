//! Camera capture module
//!
//! Opens capture devices and reads frames for the live feed.

pub mod config;
pub mod device;

pub use config::CameraConfig;
pub use device::{Camera, CameraOpener};
