//! A single formatted log record.

use crate::log_level::LogLevel;
use chrono::Local;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone)]
pub(crate) struct LogMessage {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl LogMessage {
    /// Stamps a message with the local time.
    pub fn new(level: LogLevel, component: Option<String>, message: String) -> Self {
        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            level,
            component,
            message,
        }
    }

    /// Renders the line as `[timestamp] LEVEL [component]: message\n`.
    pub fn format(&self) -> String {
        match &self.component {
            Some(component) => format!(
                "[{}] {} [{}]: {}\n",
                self.timestamp, self.level, component, self.message
            ),
            None => format!("[{}] {}: {}\n", self.timestamp, self.level, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_component() {
        let msg = LogMessage::new(
            LogLevel::Info,
            Some("Vision".to_string()),
            "[CAMERA] Device 0 open at 640x480".to_string(),
        );
        let line = msg.format();

        assert!(line.contains("INFO [Vision]: [CAMERA] Device 0 open at 640x480"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_format_without_component() {
        let msg = LogMessage::new(LogLevel::Error, None, "Model missing".to_string());
        assert!(msg.format().contains("ERROR: Model missing"));
    }

    #[test]
    fn test_timestamp_shape() {
        let msg = LogMessage::new(LogLevel::Debug, None, String::new());
        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(msg.timestamp.len(), 23);
        assert_eq!(&msg.timestamp[4..5], "-");
        assert_eq!(&msg.timestamp[19..20], ".");
    }
}
