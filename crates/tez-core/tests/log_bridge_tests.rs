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

//! The `log` facade accepts a single logger per process, so the bridge is
//! exercised from one test in its own binary.

use log::LevelFilter;
use tez_core::logging::channels::CaptureChannel;
use tez_core::logging::{install_log_bridge, ChannelKind, LogError, LogSystem, Severity};

#[test]
fn test_log_facade_records_are_forwarded() {
    // --- 1. ARRANGE ---
    let system: &'static LogSystem = Box::leak(Box::new(LogSystem::new()));
    let capture = CaptureChannel::new();
    let handle = capture.handle();
    system.add_channel(ChannelKind::Capture, capture);
    install_log_bridge(system, LevelFilter::Debug).expect("First install should succeed");

    // --- 2. ACT ---
    log::error!("disk {} unavailable", 2);
    log::warn!("slow frame");
    log::info!("level loaded");
    log::debug!("cache warm");
    log::trace!("filtered out by the max level");
    log::info!(target: "tez_core::logging::system", "internal diagnostics");

    // --- 3. ASSERT ---
    let received: Vec<(Severity, String)> = handle
        .records()
        .into_iter()
        .map(|record| (record.severity, record.message))
        .collect();
    assert_eq!(
        received,
        vec![
            (Severity::Error, "disk 2 unavailable".to_string()),
            (Severity::Warning, "slow frame".to_string()),
            (Severity::Info, "level loaded".to_string()),
            (Severity::Unknown, "cache warm".to_string()),
        ]
    );

    let second = install_log_bridge(system, LevelFilter::Info);
    assert!(matches!(second, Err(LogError::BridgeInstall(_))));
}
