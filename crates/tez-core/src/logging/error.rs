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

//! Errors raised while setting up the logging subsystem.
//!
//! Logging itself never fails: these errors only come from composition-time
//! operations such as opening a log file or loading configuration.

use std::path::PathBuf;

/// An error raised while configuring or starting the logging subsystem.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// A file could not be opened or read.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
    /// A configuration document could not be parsed.
    #[error("invalid log configuration: {0}")]
    Config(#[from] ron::error::SpannedError),
    /// The global registry was already created.
    #[error("the global log system is already initialized")]
    AlreadyInitialized,
    /// Another `log` facade implementation is already installed.
    #[error("a logger is already installed for the `log` facade")]
    BridgeInstall(#[from] log::SetLoggerError),
}

/// A specialized `Result` for logging setup operations.
pub type LogResult<T> = Result<T, LogError>;
