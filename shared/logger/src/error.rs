//! Error types for logging operations.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for logging operations.
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors that can occur while setting up a logger.
#[derive(Debug)]
pub enum LoggingError {
    /// The log file could not be opened.
    Open { path: PathBuf, source: io::Error },
    /// The writer thread could not be started.
    Spawn(io::Error),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::Open { path, source } => {
                write!(f, "Cannot open log file '{}': {}", path.display(), source)
            }
            LoggingError::Spawn(err) => write!(f, "Cannot start log writer: {}", err),
        }
    }
}

impl std::error::Error for LoggingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoggingError::Open { source, .. } => Some(source),
            LoggingError::Spawn(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::ErrorKind;

    #[test]
    fn test_open_error_display() {
        let err = LoggingError::Open {
            path: PathBuf::from("/readonly/detector.log"),
            source: io::Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot open log file '/readonly/detector.log': denied"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_spawn_error_display() {
        let err = LoggingError::Spawn(io::Error::other("no threads"));
        assert!(err.to_string().starts_with("Cannot start log writer"));
    }
}
