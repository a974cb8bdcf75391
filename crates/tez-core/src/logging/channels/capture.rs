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

//! An in-memory channel for tests and in-engine consoles.

use crate::logging::{LogChannel, LogEntry, LogRecord, Severity};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type SharedRecords = Arc<Mutex<Vec<LogRecord>>>;

fn lock(records: &SharedRecords) -> MutexGuard<'_, Vec<LogRecord>> {
    records.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Stores a copy of every received entry.
///
/// The registry takes ownership of the channel, so inspection goes through a
/// [`CaptureHandle`] obtained before registration.
#[derive(Debug, Default)]
pub struct CaptureChannel {
    records: SharedRecords,
}

impl CaptureChannel {
    /// Creates an empty capture channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle reading the records this channel receives.
    pub fn handle(&self) -> CaptureHandle {
        CaptureHandle {
            records: Arc::clone(&self.records),
        }
    }
}

impl LogChannel for CaptureChannel {
    fn on_log_received(&mut self, entry: &LogEntry<'_>) {
        lock(&self.records).push(entry.to_record());
    }
}

/// Shared read access to the records of a [`CaptureChannel`].
#[derive(Debug, Clone, Default)]
pub struct CaptureHandle {
    records: SharedRecords,
}

impl CaptureHandle {
    /// Copies every captured record, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        lock(&self.records).clone()
    }

    /// Copies the captured messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        lock(&self.records)
            .iter()
            .map(|record| record.message.clone())
            .collect()
    }

    /// Counts the captured records with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        lock(&self.records)
            .iter()
            .filter(|record| record.severity == severity)
            .count()
    }

    /// Number of captured records.
    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        lock(&self.records).is_empty()
    }

    /// Forgets every captured record.
    pub fn clear(&self) {
        lock(&self.records).clear();
    }
}
