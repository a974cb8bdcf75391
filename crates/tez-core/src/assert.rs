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

//! Assertions that report through the logging subsystem.
//!
//! Two tiers are provided:
//!
//! - **Soft**: the failure is logged at [`Severity::Assert`] and the caller
//!   returns early with a fallback value, continuing in a degraded state.
//! - **Hard**: the failure is logged, channels are flushed, and the process
//!   aborts.
//!
//! The functions take an explicit [`LogSystem`]; the macros use
//! [`LogSystem::global`] and perform the early return themselves.

use crate::logging::{LogSystem, Severity};

/// Logs `message` at [`Severity::Assert`] on `system` if `condition` is
/// false. Returns `condition`, so the caller can bail out:
///
/// ```rust
/// use tez_core::{assert::soft_assert, LogSystem};
///
/// fn ratio(system: &LogSystem, num: f32, den: f32) -> f32 {
///     if !soft_assert(system, den != 0.0, "Division by zero") {
///         return 0.0;
///     }
///     num / den
/// }
///
/// let system = LogSystem::new();
/// assert_eq!(ratio(&system, 1.0, 0.0), 0.0);
/// assert_eq!(system.recent_entries().len(), 1);
/// ```
#[inline]
pub fn soft_assert(system: &LogSystem, condition: bool, message: &str) -> bool {
    if !condition {
        system.log(message, Severity::Assert);
    }
    condition
}

/// Logs `message` at [`Severity::Assert`] on `system` and aborts the process
/// if `condition` is false.
///
/// Channels are flushed before aborting on a best-effort basis. When the
/// check fails inside a channel hook, the entry also goes to standard error,
/// since the registry cannot deliver it before the process ends. No
/// destructors run.
#[inline]
pub fn hard_assert(system: &LogSystem, condition: bool, message: &str) {
    if !condition {
        fail_hard(system, message);
    }
}

#[cold]
#[inline(never)]
fn fail_hard(system: &LogSystem, message: &str) -> ! {
    system.log_fatal(message);
    std::process::abort()
}

/// Checks a condition; on failure logs the message at `Assert` severity on
/// the global registry and returns from the enclosing function, with the
/// optional fallback value.
///
/// ```rust
/// use tez_core::tez_soft_assert;
///
/// fn first_char(text: &str) -> char {
///     tez_soft_assert!(!text.is_empty(), "empty input", '?');
///     text.chars().next().unwrap_or('?')
/// }
///
/// assert_eq!(first_char(""), '?');
/// assert_eq!(first_char("tez"), 't');
/// ```
#[macro_export]
macro_rules! tez_soft_assert {
    ($condition:expr, $message:expr $(,)?) => {
        if !$crate::assert::soft_assert(
            $crate::logging::LogSystem::global(),
            $condition,
            $message,
        ) {
            return;
        }
    };
    ($condition:expr, $message:expr, $fallback:expr $(,)?) => {
        if !$crate::assert::soft_assert(
            $crate::logging::LogSystem::global(),
            $condition,
            $message,
        ) {
            return $fallback;
        }
    };
}

/// Checks a condition; on failure logs the message at `Assert` severity on
/// the global registry and aborts the process.
#[macro_export]
macro_rules! tez_hard_assert {
    ($condition:expr, $message:expr $(,)?) => {
        $crate::assert::hard_assert(
            $crate::logging::LogSystem::global(),
            $condition,
            $message,
        )
    };
}

/// Checks a constant condition at compile time.
///
/// ```rust
/// tez_core::tez_static_assert!(std::mem::size_of::<u32>() == 4, "u32 must be 4 bytes");
/// ```
#[macro_export]
macro_rules! tez_static_assert {
    ($condition:expr, $message:expr $(,)?) => {
        const _: () = ::std::assert!($condition, $message);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::channels::CaptureChannel;
    use crate::logging::ChannelKind;

    tez_static_assert!(crate::types::fnv1a_64(b"") != 0, "FNV offset basis is non-zero");

    fn checked_index(system: &LogSystem, values: &[i32], index: usize) -> i32 {
        if !soft_assert(system, index < values.len(), "Index Out of Bounds!") {
            return -1;
        }
        values[index]
    }

    #[test]
    fn test_soft_assert_passes_silently() {
        let system = LogSystem::new();
        assert!(soft_assert(&system, true, "never logged"));
        assert!(system.recent_entries().is_empty());
    }

    #[test]
    fn test_soft_assert_logs_and_falls_back() {
        let system = LogSystem::new();
        let capture = CaptureChannel::new();
        let handle = capture.handle();
        system.add_channel(ChannelKind::Capture, capture);

        assert_eq!(checked_index(&system, &[10, 20], 1), 20);
        assert_eq!(checked_index(&system, &[10, 20], 2), -1);

        let records = handle.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Assert);
        assert_eq!(records[0].message, "Index Out of Bounds!");
    }

    #[test]
    fn test_hard_assert_passes_when_true() {
        let system = LogSystem::new();
        hard_assert(&system, true, "not fatal");
        assert!(system.recent_entries().is_empty());
    }

    fn guarded(condition: bool, reached: &mut bool) {
        tez_soft_assert!(condition, "macro check");
        *reached = true;
    }

    #[test]
    fn test_soft_assert_macro_returns_unit() {
        let mut reached = false;
        guarded(false, &mut reached);
        assert!(!reached);
        guarded(true, &mut reached);
        assert!(reached);
    }
}
