//! Background log file writer.

use crate::error::{LoggingError, Result};
use crate::log_message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::Receiver;
use std::thread;

/// Owns the log file; lives on the writer thread.
pub(crate) struct LogWriter {
    file: File,
}

impl LogWriter {
    /// Opens the file in append mode, creating it if needed.
    pub fn open(log_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|source| LoggingError::Open {
                path: log_path.to_path_buf(),
                source,
            })?;
        Ok(Self { file })
    }

    fn write_message(&mut self, message: &LogMessage) {
        let written = self
            .file
            .write_all(message.format().as_bytes())
            .and_then(|_| self.file.flush());
        if let Err(e) = written {
            eprintln!("Error writing log: {}", e);
        }
    }

    /// Writes messages until every sender is dropped.
    pub fn run(mut self, receiver: Receiver<LogMessage>) {
        for message in receiver {
            self.write_message(&message);
        }
    }
}

/// Opens the log file and starts the writer thread.
pub(crate) fn spawn_writer_thread(log_path: &Path, receiver: Receiver<LogMessage>) -> Result<()> {
    let writer = LogWriter::open(log_path)?;
    thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || writer.run(receiver))
        .map_err(LoggingError::Spawn)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_level::LogLevel;
    use std::fs;
    use std::sync::mpsc::channel;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("detector.log");

        assert!(LogWriter::open(&log_path).is_ok());
        assert!(log_path.exists());
    }

    #[test]
    fn test_open_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("no_such_dir").join("detector.log");

        assert!(matches!(
            LogWriter::open(&log_path),
            Err(LoggingError::Open { .. })
        ));
    }

    #[test]
    fn test_writer_thread_drains_channel() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("detector.log");
        let (sender, receiver) = channel();

        spawn_writer_thread(&log_path, receiver).unwrap();
        sender
            .send(LogMessage::new(
                LogLevel::Info,
                None,
                "[LIVE] Feed started".to_string(),
            ))
            .unwrap();
        drop(sender);

        thread::sleep(Duration::from_millis(100));

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("[LIVE] Feed started"));
    }
}
