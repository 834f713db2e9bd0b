//! Live feed error throttling.
//!
//! A failing tick usually fails again on the next frame, 30 times per second.
//! Each distinct error is reported once per live session; repeats are only
//! counted and summarized every `REPEAT_LOG_INTERVAL` occurrences.

use std::collections::HashMap;

/// Repeats between summary log lines (about 10 s at 30 fps)
const REPEAT_LOG_INTERVAL: u64 = 300;

/// What the caller should do with an error it just saw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ErrorReport {
    /// First occurrence this session: log and notify
    First,
    /// Periodic summary with the total occurrence count: log only
    Repeated(u64),
    /// Stay quiet
    Suppressed,
}

#[derive(Debug, Default)]
pub(super) struct TickErrors {
    seen: HashMap<String, u64>,
}

impl TickErrors {
    pub(super) fn record(&mut self, message: &str) -> ErrorReport {
        let count = self.seen.entry(message.to_string()).or_insert(0);
        *count += 1;

        match *count {
            1 => ErrorReport::First,
            n if n.is_multiple_of(REPEAT_LOG_INTERVAL) => ErrorReport::Repeated(n),
            _ => ErrorReport::Suppressed,
        }
    }

    /// Forgets every error; called when a new live session starts
    pub(super) fn reset(&mut self) {
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_reported_once() {
        let mut errors = TickErrors::default();
        assert_eq!(errors.record("Unknown class id 22"), ErrorReport::First);
        for _ in 0..30 {
            assert_eq!(errors.record("Unknown class id 22"), ErrorReport::Suppressed);
        }
    }

    #[test]
    fn test_distinct_errors_reported_separately() {
        let mut errors = TickErrors::default();
        assert_eq!(errors.record("Unknown class id 22"), ErrorReport::First);
        assert_eq!(errors.record("Unknown class id 40"), ErrorReport::First);
        assert_eq!(errors.record("Unknown class id 22"), ErrorReport::Suppressed);
    }

    #[test]
    fn test_repeats_summarized_periodically() {
        let mut errors = TickErrors::default();
        let reports: Vec<_> = (0..REPEAT_LOG_INTERVAL * 2)
            .map(|_| errors.record("Inference failed"))
            .filter(|r| *r != ErrorReport::Suppressed)
            .collect();

        assert_eq!(
            reports,
            vec![
                ErrorReport::First,
                ErrorReport::Repeated(REPEAT_LOG_INTERVAL),
                ErrorReport::Repeated(REPEAT_LOG_INTERVAL * 2),
            ]
        );
    }

    #[test]
    fn test_reset_starts_new_session() {
        let mut errors = TickErrors::default();
        errors.record("Unknown class id 22");
        errors.reset();
        assert_eq!(errors.record("Unknown class id 22"), ErrorReport::First);
    }
}
