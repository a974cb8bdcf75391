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

//! The engine's logging subsystem.
//!
//! A [`LogSystem`] broadcasts every [`LogEntry`] to a set of pluggable
//! [`LogChannel`]s, keeping at most one channel per [`ChannelKind`]. Entries
//! are delivered synchronously, in registration order, before
//! [`LogSystem::log`] returns.
//!
//! The `tez_log_*` macros target [`LogSystem::global`] and accept format
//! arguments:
//!
//! ```rust
//! use tez_core::{tez_log_info, tez_log_warning};
//!
//! tez_log_info!("loaded {} textures", 12);
//! tez_log_warning!("frame took {:.1} ms", 21.4);
//! ```

mod bridge;
mod channel;
pub mod channels;
mod entry;
mod error;
mod history;
mod severity;
mod system;

pub use bridge::install_log_bridge;
pub use channel::{ChannelKind, LogChannel};
pub use entry::{LogEntry, LogRecord, TIMESTAMP_FORMAT};
pub use error::{LogError, LogResult};
pub use history::{LogHistory, DEFAULT_HISTORY_CAPACITY};
pub use severity::{ParseSeverityError, Severity};
pub use system::{LogSystem, DUPLICATE_CHANNEL_MESSAGE, MAX_DEFERRED_PER_DISPATCH};

/// Logs a formatted message with the given [`Severity`] on the global registry.
#[macro_export]
macro_rules! tez_log {
    ($severity:expr, $($arg:tt)+) => {
        $crate::logging::LogSystem::global().log(&::std::format!($($arg)+), $severity)
    };
}

/// Logs a formatted message at [`Severity::Info`] on the global registry.
#[macro_export]
macro_rules! tez_log_info {
    ($($arg:tt)+) => {
        $crate::tez_log!($crate::logging::Severity::Info, $($arg)+)
    };
}

/// Logs a formatted message at [`Severity::Warning`] on the global registry.
#[macro_export]
macro_rules! tez_log_warning {
    ($($arg:tt)+) => {
        $crate::tez_log!($crate::logging::Severity::Warning, $($arg)+)
    };
}

/// Logs a formatted message at [`Severity::Error`] on the global registry.
#[macro_export]
macro_rules! tez_log_error {
    ($($arg:tt)+) => {
        $crate::tez_log!($crate::logging::Severity::Error, $($arg)+)
    };
}
