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

//! Log entries as delivered to channels and as retained in history.

use super::severity::Severity;
use chrono::{DateTime, Utc};
use std::fmt;

/// Timestamp layout used by the human-readable entry format.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// A single log entry, borrowing the caller's message for the duration of
/// a dispatch.
///
/// Formats as `[<timestamp>] [<SEVERITY>] <message>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry<'a> {
    /// Classification of the entry.
    pub severity: Severity,
    /// The caller-supplied text.
    pub message: &'a str,
    /// Wall-clock time at which the registry accepted the entry.
    pub timestamp: DateTime<Utc>,
}

impl<'a> LogEntry<'a> {
    /// Creates an entry stamped with the given time.
    pub fn new(message: &'a str, severity: Severity, timestamp: DateTime<Utc>) -> Self {
        Self {
            severity,
            message,
            timestamp,
        }
    }

    /// Copies the entry into an owned [`LogRecord`].
    pub fn to_record(&self) -> LogRecord {
        LogRecord {
            severity: self.severity,
            message: self.message.to_owned(),
            timestamp: self.timestamp,
        }
    }
}

impl fmt::Display for LogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entry(f, &self.timestamp, self.severity, self.message)
    }
}

/// An owned copy of a [`LogEntry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Classification of the entry.
    pub severity: Severity,
    /// The message text.
    pub message: String,
    /// Wall-clock time at which the registry accepted the entry.
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Borrows the record as a [`LogEntry`].
    pub fn as_entry(&self) -> LogEntry<'_> {
        LogEntry::new(&self.message, self.severity, self.timestamp)
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entry(f, &self.timestamp, self.severity, &self.message)
    }
}

fn write_entry(
    f: &mut fmt::Formatter<'_>,
    timestamp: &DateTime<Utc>,
    severity: Severity,
    message: &str,
) -> fmt::Result {
    write!(
        f,
        "[{}] [{}] {}",
        timestamp.format(TIMESTAMP_FORMAT),
        severity,
        message
    )
}

/// Hands out wall-clock timestamps that never step backwards.
#[derive(Debug, Default)]
pub(crate) struct MonotonicClock {
    last: Option<DateTime<Utc>>,
}

impl MonotonicClock {
    /// Returns the current time, clamped to the last value returned.
    pub(crate) fn now(&mut self) -> DateTime<Utc> {
        self.observe(Utc::now())
    }

    pub(crate) fn observe(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        let stamped = match self.last {
            Some(last) if now < last => last,
            _ => now,
        };
        self.last = Some(stamped);
        stamped
    }
}
