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

//! A channel appending formatted entries to a file.

use crate::config::FileConfig;
use crate::logging::{LogChannel, LogEntry, LogError, LogResult};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes each entry as one line to a buffered file.
///
/// Output is flushed after every `Error` or `Assert` entry so that a crash
/// right after a failure still leaves it on disk. Write failures are reported
/// once through the `log` facade and never reach the logging caller.
#[derive(Debug)]
pub struct FileChannel {
    path: PathBuf,
    writer: BufWriter<File>,
    failed: bool,
}

impl FileChannel {
    /// Creates (or truncates) the file at `path`.
    ///
    /// # Errors
    /// Returns [`LogError::Io`] if the file or its parent directory cannot be
    /// created.
    pub fn create(path: impl AsRef<Path>) -> LogResult<Self> {
        Self::open(path.as_ref(), false)
    }

    /// Opens the file at `path` for appending, creating it if needed.
    ///
    /// # Errors
    /// Returns [`LogError::Io`] if the file or its parent directory cannot be
    /// created.
    pub fn append(path: impl AsRef<Path>) -> LogResult<Self> {
        Self::open(path.as_ref(), true)
    }

    /// Opens the file described by a configuration section.
    ///
    /// # Errors
    /// See [`FileChannel::create`].
    pub fn from_config(config: &FileConfig) -> LogResult<Self> {
        Self::open(&config.path, config.append)
    }

    /// The file this channel writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(path: &Path, append: bool) -> LogResult<Self> {
        let io_error = |source| LogError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)
            .map_err(io_error)?;
        log::debug!("Opened log file '{}'", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            failed: false,
        })
    }

    fn report(&mut self, error: io::Error) {
        if !self.failed {
            log::error!("Failed to write log file '{}': {error}", self.path.display());
            self.failed = true;
        }
    }
}

impl LogChannel for FileChannel {
    fn on_log_received(&mut self, entry: &LogEntry<'_>) {
        if let Err(error) = writeln!(self.writer, "{entry}") {
            self.report(error);
            return;
        }
        if entry.severity.is_failure() {
            self.flush();
        }
    }

    fn flush(&mut self) {
        if let Err(error) = self.writer.flush() {
            self.report(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::Severity;
    use chrono::Utc;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).expect("log file should be readable")
    }

    #[test]
    fn test_failures_are_flushed_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.log");
        let mut channel = FileChannel::create(&path).unwrap();

        channel.on_log_received(&LogEntry::new("buffered", Severity::Info, Utc::now()));
        assert_eq!(read(&path), "");

        channel.on_log_received(&LogEntry::new("boom", Severity::Error, Utc::now()));
        let contents = read(&path);
        assert!(contents.contains("[INFO] buffered\n"));
        assert!(contents.ends_with("[ERROR] boom\n"));
    }

    #[test]
    fn test_create_truncates_and_append_keeps() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("engine.log");

        let mut first = FileChannel::create(&path).unwrap();
        first.on_log_received(&LogEntry::new("first run", Severity::Info, Utc::now()));
        drop(first);

        let mut second = FileChannel::append(&path).unwrap();
        second.on_log_received(&LogEntry::new("second run", Severity::Info, Utc::now()));
        second.flush();
        let contents = read(&path);
        assert_eq!(contents.lines().count(), 2);

        drop(second);
        let third = FileChannel::create(&path).unwrap();
        assert_eq!(third.path(), path.as_path());
        assert_eq!(read(&path), "");
    }

    #[test]
    fn test_unopenable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileChannel::create(dir.path());
        assert!(matches!(result, Err(LogError::Io { .. })));
    }
}
