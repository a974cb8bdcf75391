// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bounded in-memory history of recent log records.

use super::entry::LogRecord;
use std::collections::VecDeque;

/// Default number of records kept by a registry.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// A ring buffer of the most recent records. When full, pushing a record
/// drops the oldest one. A capacity of zero retains nothing.
#[derive(Debug, Clone)]
pub struct LogHistory {
    records: VecDeque<LogRecord>,
    capacity: usize,
    dropped: u64,
}

impl LogHistory {
    /// Creates an empty history holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            // Grows on demand; large capacities should not allocate up front.
            records: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
            dropped: 0,
        }
    }

    /// Appends a record, evicting the oldest one if the buffer is full.
    pub fn push(&mut self, record: LogRecord) {
        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
            self.dropped += 1;
        }
        self.records.push_back(record);
    }

    /// Returns the records from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of records evicted (or never retained) since creation.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Removes every record. The eviction counter is kept.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for LogHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{LogEntry, Severity};
    use chrono::Utc;

    fn record(message: &str) -> LogRecord {
        LogEntry::new(message, Severity::Info, Utc::now()).to_record()
    }

    fn messages(history: &LogHistory) -> Vec<&str> {
        history.iter().map(|r| r.message.as_str()).collect()
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let mut history = LogHistory::with_capacity(2);
        history.push(record("a"));
        history.push(record("b"));
        history.push(record("c"));
        assert_eq!(messages(&history), vec!["b", "c"]);
        assert_eq!(history.dropped(), 1);
    }

    #[test]
    fn test_zero_capacity_retains_nothing() {
        let mut history = LogHistory::with_capacity(0);
        history.push(record("a"));
        assert!(history.is_empty());
        assert_eq!(history.dropped(), 1);
    }

    #[test]
    fn test_clear() {
        let mut history = LogHistory::default();
        history.push(record("a"));
        history.clear();
        assert_eq!(history.len(), 0);
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }
}
