//! ReadingLog - Newest-First Raw Reading Panel State

use crate::domain::sample::TemperatureSample;
use crate::utils::format::format_time_ms;
use chrono::Local;
use std::collections::VecDeque;

/// A single raw reading as shown in the side panel
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingEntry {
    /// The decoded payload, passthrough fields included
    pub sample: TemperatureSample,
    /// Zero-padded `HH:MM:SS.mmm` label, local time
    pub pretty_time: String,
}

/// Reverse-chronological log of every reading received this session.
///
/// Deliberately unbounded: entries accumulate for the session's lifetime and
/// are only released by an explicit `clear`. The newest entry is always at
/// index 0; the display layer relies on that ordering.
#[derive(Debug, Clone, Default)]
pub struct ReadingLog {
    entries: VecDeque<ReadingEntry>,
}

impl ReadingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry at the head; all prior entries shift down one
    pub fn prepend(&mut self, sample: &TemperatureSample) {
        let local = sample.timestamp.with_timezone(&Local);
        self.entries.push_front(ReadingEntry {
            sample: sample.clone(),
            pretty_time: format_time_ms(&local),
        });
    }

    /// Empty the log unconditionally
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries newest-first
    pub fn entries(&self) -> &VecDeque<ReadingEntry> {
        &self.entries
    }

    /// Entry by position (0 = newest)
    pub fn get(&self, index: usize) -> Option<&ReadingEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(temperature: f64) -> TemperatureSample {
        TemperatureSample::decode(&format!(
            r#"{{"temperature":{temperature},"unit":"Celcius","timestamp":"2026-08-04T10:15:42Z"}}"#
        ))
        .expect("decode")
    }

    #[test]
    fn test_newest_entry_is_first() {
        let mut log = ReadingLog::new();
        log.prepend(&sample(20.0));
        log.prepend(&sample(21.0));
        log.prepend(&sample(22.0));

        assert_eq!(log.len(), 3);
        assert_eq!(log.get(0).map(|e| e.sample.temperature), Some(22.0));
        assert_eq!(log.get(2).map(|e| e.sample.temperature), Some(20.0));
    }

    #[test]
    fn test_entries_keep_passthrough_fields() {
        let mut log = ReadingLog::new();
        log.prepend(&sample(20.0));

        let entry = log.get(0).expect("entry");
        assert_eq!(entry.sample.unit(), Some("Celcius"));
        assert!(!entry.pretty_time.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut log = ReadingLog::new();
        log.prepend(&sample(20.0));
        log.clear();
        assert!(log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }
}
