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

//! A channel printing entries to the process's standard streams.

use crate::config::ConsoleConfig;
use crate::logging::{LogChannel, LogEntry, Severity};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Where a [`ConsoleChannel`] writes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsoleTarget {
    /// Everything goes to standard output.
    Stdout,
    /// Everything goes to standard error.
    Stderr,
    /// `Unknown` and `Info` go to standard output, everything else to
    /// standard error.
    #[default]
    Split,
}

impl ConsoleTarget {
    fn uses_stderr(self, severity: Severity) -> bool {
        match self {
            ConsoleTarget::Stdout => false,
            ConsoleTarget::Stderr => true,
            ConsoleTarget::Split => !matches!(severity, Severity::Unknown | Severity::Info),
        }
    }
}

/// Prints each entry as one formatted line.
#[derive(Debug, Default, Clone)]
pub struct ConsoleChannel {
    target: ConsoleTarget,
}

impl ConsoleChannel {
    /// Creates a console channel using [`ConsoleTarget::Split`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console channel writing to `target`.
    pub fn with_target(target: ConsoleTarget) -> Self {
        Self { target }
    }

    /// Creates a console channel from its configuration section.
    pub fn from_config(config: &ConsoleConfig) -> Self {
        Self::with_target(config.target)
    }

    /// The stream selection policy.
    pub fn target(&self) -> ConsoleTarget {
        self.target
    }
}

impl LogChannel for ConsoleChannel {
    fn on_log_received(&mut self, entry: &LogEntry<'_>) {
        // A closed stream is not worth failing the caller for.
        let _ = if self.target.uses_stderr(entry.severity) {
            writeln!(io::stderr().lock(), "{entry}")
        } else {
            writeln!(io::stdout().lock(), "{entry}")
        };
    }

    fn flush(&mut self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}
