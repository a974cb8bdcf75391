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

//! A failed hard assertion aborts the process, so the check runs in a child
//! copy of this test binary.

use std::env;
use std::process::{Command, Output};
use tez_core::assert::hard_assert;
use tez_core::logging::channels::{ConsoleChannel, ConsoleTarget};
use tez_core::{tez_hard_assert, ChannelKind, LogEntry, LogSystem};

const CHILD_ENV: &str = "TEZ_HARD_ASSERT_CHILD";
const FATAL_MESSAGE: &str = "renderer lost its device";
const HOOK_FATAL_MESSAGE: &str = "validator rejected the frame";

fn is_child(name: &str) -> bool {
    env::var(CHILD_ENV).as_deref() == Ok(name)
}

fn install_stderr_console() {
    LogSystem::global().add_channel(
        ChannelKind::Console,
        ConsoleChannel::with_target(ConsoleTarget::Stderr),
    );
}

fn run_child(name: &str) -> Output {
    let exe = env::current_exe().expect("Test binary path should be known");
    Command::new(exe)
        .args(["--exact", name, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, name)
        .output()
        .expect("Child test process should start")
}

#[test]
fn hard_assert_child() {
    if !is_child("hard_assert_child") {
        return;
    }
    install_stderr_console();
    tez_hard_assert!(1 + 1 == 3, FATAL_MESSAGE);
    println!("unreachable: execution continued past a failed hard assertion");
}

#[test]
fn hard_assert_in_channel_child() {
    if !is_child("hard_assert_in_channel_child") {
        return;
    }
    install_stderr_console();
    LogSystem::global().add_channel(
        ChannelKind::Custom("Validator"),
        |entry: &LogEntry<'_>| {
            hard_assert(LogSystem::global(), entry.message != "trigger", HOOK_FATAL_MESSAGE);
        },
    );
    LogSystem::global().info("trigger");
    println!("unreachable: execution continued past a failed hard assertion");
}

#[test]
fn test_failed_hard_assert_terminates_the_process() {
    // --- 1. ARRANGE / 2. ACT ---
    let output = run_child("hard_assert_child");

    // --- 3. ASSERT ---
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "Child must not exit cleanly");
    assert!(
        stderr.contains(&format!("[ASSERT] {FATAL_MESSAGE}")),
        "Assertion message should be logged before aborting, stderr was: {stderr}"
    );
    assert!(!stdout.contains("unreachable"));
}

#[test]
fn test_failed_hard_assert_inside_channel_hook_is_still_logged() {
    // --- 1. ARRANGE / 2. ACT ---
    let output = run_child("hard_assert_in_channel_child");

    // --- 3. ASSERT ---
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "Child must not exit cleanly");
    assert!(stderr.contains("[INFO] trigger"));
    assert!(
        stderr.contains(&format!("[ASSERT] {HOOK_FATAL_MESSAGE}")),
        "Assertion raised inside a channel should reach stderr, stderr was: {stderr}"
    );
    assert!(!stdout.contains("unreachable"));
}

#[test]
fn test_passing_hard_assert_continues() {
    let system = LogSystem::new();
    hard_assert(&system, true, "never fires");
    assert!(system.recent_entries().is_empty());
}
