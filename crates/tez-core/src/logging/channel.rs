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

//! The sink abstraction log entries are fanned out to.

use super::entry::LogEntry;
use crate::types::{fnv1a_64, name_of};
use std::fmt;

/// A pluggable sink that receives every entry logged after its registration.
///
/// Delivery is synchronous and happens while the registry is locked, so
/// implementations should return quickly. A hook must not report failure to
/// the caller; channels that can fail (I/O, sockets) handle it internally.
pub trait LogChannel: Send {
    /// Called once per logged entry, in registration order across channels.
    fn on_log_received(&mut self, entry: &LogEntry<'_>);

    /// Pushes any buffered output to its destination.
    fn flush(&mut self) {}
}

impl<F> LogChannel for F
where
    F: FnMut(&LogEntry<'_>) + Send,
{
    fn on_log_received(&mut self, entry: &LogEntry<'_>) {
        self(entry)
    }
}

/// Identifies the kind of a registered channel.
///
/// The registry keeps at most one channel per kind. Kinds are compared
/// through [`ChannelKind::key`], so a `Custom` kind whose name equals a
/// built-in kind's name is treated as that kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// Standard output / standard error.
    Console,
    /// A log file on disk.
    File,
    /// An in-memory capture buffer.
    Capture,
    /// Any channel supplied by embedding code.
    Custom(&'static str),
}

impl ChannelKind {
    /// Derives a kind from a Rust type's canonical name.
    pub fn of<T: ?Sized>() -> Self {
        ChannelKind::Custom(name_of::<T>())
    }

    /// Returns the canonical name of the kind.
    pub fn name(&self) -> &'static str {
        match *self {
            ChannelKind::Console => "Console",
            ChannelKind::File => "File",
            ChannelKind::Capture => "Capture",
            ChannelKind::Custom(name) => name,
        }
    }

    /// Returns the deduplication key (FNV-1a over [`name`](Self::name)).
    pub fn key(&self) -> u64 {
        fnv1a_64(self.name().as_bytes())
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A channel owned by the registry together with its kind.
pub(crate) struct ChannelRecord {
    pub(crate) kind: ChannelKind,
    pub(crate) key: u64,
    pub(crate) channel: Box<dyn LogChannel>,
}

impl ChannelRecord {
    pub(crate) fn new(kind: ChannelKind, channel: Box<dyn LogChannel>) -> Self {
        Self {
            kind,
            key: kind.key(),
            channel,
        }
    }
}

impl fmt::Debug for ChannelRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelRecord")
            .field("kind", &self.kind)
            .field("key", &format_args!("{:#018x}", self.key))
            .finish_non_exhaustive()
    }
}
