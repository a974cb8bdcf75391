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

use std::sync::{Arc, Mutex};
use tez_core::logging::channels::{CaptureChannel, CaptureHandle};
use tez_core::logging::{
    ChannelKind, LogChannel, LogEntry, LogSystem, Severity, DUPLICATE_CHANNEL_MESSAGE,
};
use tez_core::{tez_soft_assert, DynamicArray};

/// Appends `(channel name, message)` to a shared journal on every entry.
struct JournalChannel {
    name: &'static str,
    journal: Arc<Mutex<Vec<(&'static str, String)>>>,
}

impl LogChannel for JournalChannel {
    fn on_log_received(&mut self, entry: &LogEntry<'_>) {
        self.journal
            .lock()
            .unwrap()
            .push((self.name, entry.message.to_owned()));
    }
}

fn with_capture(system: &LogSystem, kind: ChannelKind) -> CaptureHandle {
    let capture = CaptureChannel::new();
    let handle = capture.handle();
    system.add_channel(kind, capture);
    handle
}

#[test]
fn test_registering_same_kind_twice_keeps_one_channel_and_warns_once() {
    // --- 1. ARRANGE ---
    let system = LogSystem::new();
    let first = with_capture(&system, ChannelKind::Console);

    // --- 2. ACT ---
    let second = with_capture(&system, ChannelKind::Console);
    system.log("test", Severity::Warning);

    // --- 3. ASSERT ---
    assert_eq!(system.channel_count(), 1, "Duplicate kind must not be added");
    assert!(second.is_empty(), "The rejected channel never receives entries");

    let records = first.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].severity, Severity::Warning);
    assert_eq!(records[0].message, DUPLICATE_CHANNEL_MESSAGE);
    assert_eq!(records[1].severity, Severity::Warning);
    assert_eq!(records[1].message, "test");
    assert_eq!(first.messages().iter().filter(|m| *m == "test").count(), 1);
}

#[test]
fn test_entries_reach_channels_in_registration_order() {
    let system = LogSystem::new();
    let journal = Arc::new(Mutex::new(Vec::new()));
    for (kind, name) in [
        (ChannelKind::File, "file"),
        (ChannelKind::Custom("overlay"), "overlay"),
        (ChannelKind::Console, "console"),
    ] {
        system.add_channel(
            kind,
            JournalChannel {
                name,
                journal: Arc::clone(&journal),
            },
        );
    }

    system.info("one");
    system.error("two");

    let journal = journal.lock().unwrap();
    let order: Vec<(&str, &str)> = journal
        .iter()
        .map(|(name, message)| (*name, message.as_str()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("file", "one"),
            ("overlay", "one"),
            ("console", "one"),
            ("file", "two"),
            ("overlay", "two"),
            ("console", "two"),
        ]
    );
}

#[test]
fn test_every_channel_receives_message_and_severity_unchanged() {
    let system = LogSystem::new();
    let captures: Vec<CaptureHandle> = [ChannelKind::Capture, ChannelKind::Custom("mirror")]
        .into_iter()
        .map(|kind| with_capture(&system, kind))
        .collect();

    let inputs = [
        ("", Severity::Unknown),
        ("plain info", Severity::Info),
        ("  padded warning  ", Severity::Warning),
        ("unicode ✓ error", Severity::Error),
        ("multi\nline assert", Severity::Assert),
    ];
    for (message, severity) in inputs {
        system.log(message, severity);
    }

    for capture in &captures {
        let received: Vec<(String, Severity)> = capture
            .records()
            .into_iter()
            .map(|record| (record.message, record.severity))
            .collect();
        let expected: Vec<(String, Severity)> = inputs
            .iter()
            .map(|(message, severity)| (message.to_string(), *severity))
            .collect();
        assert_eq!(received, expected);
    }
}

#[test]
fn test_distinct_kinds_coexist() {
    let system = LogSystem::new();
    let console = with_capture(&system, ChannelKind::Console);
    let file = with_capture(&system, ChannelKind::File);

    assert_eq!(system.channel_count(), 2);
    assert_eq!(
        system.channel_kinds(),
        vec![ChannelKind::Console, ChannelKind::File]
    );

    system.info("shared");
    assert_eq!(console.messages(), vec!["shared".to_string()]);
    assert_eq!(file.messages(), vec!["shared".to_string()]);
}

#[test]
fn test_channels_added_later_only_see_later_entries() {
    let system = LogSystem::new();
    let early = with_capture(&system, ChannelKind::Console);
    system.info("before");
    let late = with_capture(&system, ChannelKind::File);
    system.info("after");

    assert_eq!(early.messages(), vec!["before".to_string(), "after".to_string()]);
    assert_eq!(late.messages(), vec!["after".to_string()]);
}

#[test]
fn test_timestamps_never_go_backwards() {
    let system = LogSystem::new();
    let capture = with_capture(&system, ChannelKind::Capture);
    for i in 0..200 {
        system.info(&format!("tick {i}"));
    }

    let records = capture.records();
    assert!(records
        .windows(2)
        .all(|pair| pair[0].timestamp <= pair[1].timestamp));
}

fn average(values: &[f32]) -> f32 {
    tez_soft_assert!(!values.is_empty(), "average of an empty slice", f32::NAN);
    values.iter().sum::<f32>() / values.len() as f32
}

#[test]
fn test_soft_assert_returns_fallback_and_stops() {
    assert!(average(&[]).is_nan());
    assert_eq!(average(&[1.0, 3.0]), 2.0);
}

#[test]
fn test_dynamic_array_insert_out_of_bounds_leaves_array_untouched() {
    let mut array = DynamicArray::from(vec![1, 2, 3]);
    assert_eq!(array.insert(10, 4), Err(4));
    assert_eq!(array.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_shutdown_releases_channels_and_allows_reuse() {
    let system = LogSystem::new();
    let _console = with_capture(&system, ChannelKind::Console);
    let _file = with_capture(&system, ChannelKind::File);
    system.info("before shutdown");

    assert_eq!(system.shutdown(), 2);
    assert_eq!(system.channel_count(), 0);
    assert!(system.recent_entries().is_empty());

    let again = with_capture(&system, ChannelKind::Console);
    system.info("after shutdown");
    assert_eq!(again.messages(), vec!["after shutdown".to_string()]);
}
