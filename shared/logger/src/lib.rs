//! Non-blocking file logger shared by the frontend and the vision crate.
//!
//! Messages are filtered by level on the caller's thread and written by a
//! single background writer.

pub mod error;
mod log_level;
mod log_message;
mod log_writer;
mod logger;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;
