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

//! The classification attached to every log entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How important a log entry is.
///
/// Severities are compared by identity only. The registry never filters on
/// them; channels may react differently per severity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Severity {
    /// The producer did not classify the entry.
    Unknown = 0,
    /// Informational message.
    #[default]
    Info = 1,
    /// Something unexpected that the engine recovered from.
    Warning = 2,
    /// An operation failed.
    Error = 3,
    /// An assertion failed.
    Assert = 4,
}

impl Severity {
    /// All severities, in discriminant order.
    pub const ALL: [Severity; 5] = [
        Severity::Unknown,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Assert,
    ];

    /// Returns the upper-case name used in formatted output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Unknown => "UNKNOWN",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Assert => "ASSERT",
        }
    }

    /// Returns `true` for severities that report a failure.
    pub const fn is_failure(self) -> bool {
        matches!(self, Severity::Error | Severity::Assert)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string does not name a [`Severity`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown severity '{0}'")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseSeverityError(s.to_string()))
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Info,
            // No engine-side equivalent for verbose levels.
            log::Level::Debug | log::Level::Trace => Severity::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Severity::Unknown.to_string(), "UNKNOWN");
        assert_eq!(Severity::Info.to_string(), "INFO");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Error.to_string(), "ERROR");
        assert_eq!(Severity::Assert.to_string(), "ASSERT");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("ASSERT".parse::<Severity>(), Ok(Severity::Assert));
        assert!("fatal".parse::<Severity>().is_err());
    }

    #[test]
    fn test_discriminants_are_stable() {
        let values: Vec<u8> = Severity::ALL.iter().map(|s| *s as u8).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_from_log_level() {
        assert_eq!(Severity::from(log::Level::Warn), Severity::Warning);
        assert_eq!(Severity::from(log::Level::Trace), Severity::Unknown);
    }
}
