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

//! Engine version and logging configuration.
//!
//! Configuration documents are written in RON:
//!
//! ```ron
//! (
//!     history_capacity: 512,
//!     console: Some((target: Split)),
//!     file: Some((path: "logs/engine.log", append: false)),
//!     bridge_log_crate: true,
//!     log_crate_level: Info,
//! )
//! ```
//!
//! Every field is optional; missing fields take their default value.

use crate::logging::channels::ConsoleTarget;
use crate::logging::{LogError, LogResult, DEFAULT_HISTORY_CAPACITY};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

// --- Version ---

/// A semantic version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Incremented on breaking changes.
    pub major: u32,
    /// Incremented on backwards-compatible additions.
    pub minor: u32,
    /// Incremented on fixes.
    pub patch: u32,
}

impl Version {
    /// Creates a version from its components.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// The version of the engine core.
pub const ENGINE_VERSION: Version = Version::new(0, 1, 4);

// --- Logging ---

/// Settings for the console channel.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Which standard stream(s) to write to.
    pub target: ConsoleTarget,
}

/// Settings for the file channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Location of the log file. Missing parent directories are created.
    pub path: PathBuf,
    /// Keep the existing contents instead of truncating the file.
    #[serde(default)]
    pub append: bool,
}

/// Configuration of the logging subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Number of recent records the registry retains. Zero disables history.
    pub history_capacity: usize,
    /// Console channel settings; `None` disables the channel.
    pub console: Option<ConsoleConfig>,
    /// File channel settings; `None` disables the channel.
    pub file: Option<FileConfig>,
    /// Route records of the `log` facade into the registry.
    pub bridge_log_crate: bool,
    /// Maximum level of `log` facade records to emit.
    pub log_crate_level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            console: Some(ConsoleConfig::default()),
            file: None,
            bridge_log_crate: true,
            log_crate_level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    /// Parses a configuration from RON text.
    ///
    /// # Errors
    /// Returns [`LogError::Config`] if the text is not a valid configuration.
    pub fn from_ron_str(text: &str) -> LogResult<Self> {
        Ok(ron::from_str(text)?)
    }

    /// Reads and parses a RON configuration file.
    ///
    /// # Errors
    /// Returns [`LogError::Io`] if the file cannot be read, or
    /// [`LogError::Config`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }
}
