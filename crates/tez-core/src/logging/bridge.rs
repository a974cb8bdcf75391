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

//! Forwards records from the `log` facade into a [`LogSystem`].
//!
//! Third-party crates and engine code written against `log::info!` and
//! friends end up on the same channels as direct [`LogSystem::log`] calls.

use super::error::LogResult;
use super::severity::Severity;
use super::system::LogSystem;
use log::{LevelFilter, Metadata, Record};

/// Target prefix of the logging subsystem's own diagnostics. Those records
/// are not forwarded, since they are emitted while the registry is busy.
const INTERNAL_TARGET: &str = "tez_core::logging";

struct LogBridge {
    system: &'static LogSystem,
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        !metadata.target().starts_with(INTERNAL_TARGET)
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let severity = Severity::from(record.level());
        match record.args().as_str() {
            Some(message) => self.system.log(message, severity),
            None => self.system.log(&record.args().to_string(), severity),
        }
    }

    fn flush(&self) {
        self.system.flush();
    }
}

/// Installs `system` as the `log` facade's logger and sets the facade's
/// maximum level.
///
/// # Errors
/// Returns [`LogError::BridgeInstall`](super::LogError::BridgeInstall) if a
/// logger was already installed.
pub fn install_log_bridge(system: &'static LogSystem, max_level: LevelFilter) -> LogResult<()> {
    log::set_boxed_logger(Box::new(LogBridge { system }))?;
    log::set_max_level(max_level);
    Ok(())
}
