//! Logger handle.
//!
//! Every clone, and every logger derived with [`Logger::for_component`],
//! feeds the same writer thread, so one file holds the whole application's
//! log in order of arrival.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::spawn_writer_thread;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Sender, channel};

/// Thread-safe, non-blocking logger.
///
/// # Examples
///
/// ```no_run
/// use logging::{Logger, LogLevel};
///
/// let logger = Logger::new("detector.log".into(), LogLevel::Info).unwrap();
/// logger.info("[APP] Starting");
///
/// let vision = logger.for_component("Vision");
/// vision.warn("[CAMERA] No frame");
/// ```
#[derive(Clone)]
pub struct Logger {
    sender: Sender<LogMessage>,
    level: LogLevel,
    component: Option<String>,
    log_path: PathBuf,
    console_output: bool,
}

impl Logger {
    /// Creates a logger writing to `log_path`.
    ///
    /// # Errors
    ///
    /// Returns error if the log file cannot be opened or the writer thread
    /// cannot be started.
    pub fn new(log_path: PathBuf, level: LogLevel) -> Result<Self> {
        Self::spawn(log_path, level, None, false)
    }

    /// Creates a logger tagged with `component`, optionally echoing every
    /// recorded line to stderr.
    pub fn with_component(
        log_path: PathBuf,
        level: LogLevel,
        component: &str,
        console_output: bool,
    ) -> Result<Self> {
        Self::spawn(log_path, level, Some(component.to_string()), console_output)
    }

    fn spawn(
        log_path: PathBuf,
        level: LogLevel,
        component: Option<String>,
        console_output: bool,
    ) -> Result<Self> {
        let (sender, receiver) = channel();
        spawn_writer_thread(&log_path, receiver)?;
        Ok(Logger {
            sender,
            level,
            component,
            log_path,
            console_output,
        })
    }

    /// Returns a logger with another component tag sharing this writer.
    pub fn for_component(&self, component: &str) -> Self {
        Logger {
            component: Some(component.to_string()),
            ..self.clone()
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }

        let msg = LogMessage::new(level, self.component.clone(), message.to_string());
        if self.console_output {
            eprint!("{}", msg.format());
        }

        // Writer gone means the process is shutting down
        let _ = self.sender.send(msg);
    }
}
