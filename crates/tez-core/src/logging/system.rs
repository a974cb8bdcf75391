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

//! The process-wide log registry and dispatcher.
//!
//! A [`LogSystem`] owns an insertion-ordered list of channels, at most one per
//! [`ChannelKind`], and a bounded history of recent records. Every call to
//! [`LogSystem::log`] stamps an entry and hands it to each channel in
//! registration order before returning.
//!
//! # Concurrency
//!
//! A single mutex guards the channels, the history and the clock, and it is
//! held for the whole of a dispatch or registration. Entries from different
//! threads are therefore delivered one at a time, in lock acquisition order.
//!
//! A channel hook may call back into the registry it is being driven by.
//! Such calls are queued and applied once the current fan-out has finished,
//! instead of deadlocking or recursing. At most
//! [`MAX_DEFERRED_PER_DISPATCH`] queued operations are applied per top-level
//! call; the rest are discarded.

use super::channel::{ChannelKind, ChannelRecord, LogChannel};
use super::channels::{ConsoleChannel, FileChannel};
use super::entry::{LogEntry, LogRecord, MonotonicClock};
use super::error::{LogError, LogResult};
use super::history::{LogHistory, DEFAULT_HISTORY_CAPACITY};
use super::severity::Severity;
use crate::config::LogConfig;
use chrono::Utc;
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::thread::{self, ThreadId};

/// Message of the warning emitted when a channel kind is registered twice.
pub const DUPLICATE_CHANNEL_MESSAGE: &str = "Channel Already Exists!";

/// Upper bound on operations queued from channel hooks that one top-level
/// call will apply.
pub const MAX_DEFERRED_PER_DISPATCH: usize = 64;

static GLOBAL: OnceLock<LogSystem> = OnceLock::new();

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panicking channel must not disable logging for the rest of the process.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// An operation requested from inside a channel hook.
enum Deferred {
    Log(LogRecord),
    Register(ChannelKind, Box<dyn LogChannel>),
}

/// State guarded by the registry lock.
#[derive(Debug)]
struct Registry {
    channels: Vec<ChannelRecord>,
    history: LogHistory,
    clock: MonotonicClock,
}

impl Registry {
    fn new(history_capacity: usize) -> Self {
        Self {
            channels: Vec::new(),
            history: LogHistory::with_capacity(history_capacity),
            clock: MonotonicClock::default(),
        }
    }

    fn contains(&self, key: u64) -> bool {
        self.channels.iter().any(|record| record.key == key)
    }

    fn emit(&mut self, message: &str, severity: Severity) {
        let timestamp = self.clock.now();
        self.deliver(&LogEntry::new(message, severity, timestamp));
    }

    fn deliver(&mut self, entry: &LogEntry<'_>) {
        self.history.push(entry.to_record());
        for record in &mut self.channels {
            let channel = &mut record.channel;
            let delivered =
                panic::catch_unwind(AssertUnwindSafe(|| channel.on_log_received(entry)));
            if delivered.is_err() {
                log::error!("log channel '{}' panicked while receiving an entry", record.kind);
            }
        }
    }

    /// Appends a channel unless its kind is already present. The channel is
    /// only constructed when it is going to be kept.
    fn register(
        &mut self,
        kind: ChannelKind,
        make: impl FnOnce() -> Box<dyn LogChannel>,
    ) -> bool {
        if self.contains(kind.key()) {
            self.emit(DUPLICATE_CHANNEL_MESSAGE, Severity::Warning);
            return false;
        }
        self.channels.push(ChannelRecord::new(kind, make()));
        log::debug!("Registered log channel: {kind}");
        true
    }

    fn flush(&mut self) {
        for record in &mut self.channels {
            let channel = &mut record.channel;
            if panic::catch_unwind(AssertUnwindSafe(|| channel.flush())).is_err() {
                log::error!("log channel '{}' panicked while flushing", record.kind);
            }
        }
    }
}

/// Marks the current thread as the one fanning out entries until dropped.
struct DispatchGuard<'a> {
    dispatcher: &'a Mutex<Option<ThreadId>>,
}

impl<'a> DispatchGuard<'a> {
    fn enter(dispatcher: &'a Mutex<Option<ThreadId>>) -> Self {
        *lock(dispatcher) = Some(thread::current().id());
        Self { dispatcher }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        *lock(self.dispatcher) = None;
    }
}

/// Registry of log channels and single point of log emission.
///
/// Tests and tools usually construct their own instance; engine code that
/// needs a shared registry uses [`LogSystem::global`].
///
/// # Example
///
/// ```rust
/// use tez_core::logging::{channels::CaptureChannel, ChannelKind, LogSystem, Severity};
///
/// let system = LogSystem::new();
/// let capture = CaptureChannel::new();
/// let handle = capture.handle();
/// system.add_channel(ChannelKind::Capture, capture);
///
/// system.log("engine started", Severity::Info);
/// assert_eq!(handle.messages(), vec!["engine started".to_string()]);
/// ```
pub struct LogSystem {
    registry: Mutex<Registry>,
    dispatcher: Mutex<Option<ThreadId>>,
    deferred: Mutex<VecDeque<Deferred>>,
}

impl LogSystem {
    /// Creates an empty registry with the default history capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates an empty registry retaining at most `capacity` records.
    #[must_use]
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            registry: Mutex::new(Registry::new(capacity)),
            dispatcher: Mutex::new(None),
            deferred: Mutex::new(VecDeque::new()),
        }
    }

    /// Creates a registry and installs the channels enabled by `config`.
    ///
    /// # Errors
    /// Returns [`LogError::Io`] if the configured log file cannot be opened.
    pub fn from_config(config: &LogConfig) -> LogResult<Self> {
        let system = Self::with_history_capacity(config.history_capacity);
        if let Some(console) = &config.console {
            system.add_channel(ChannelKind::Console, ConsoleChannel::from_config(console));
        }
        if let Some(file) = &config.file {
            let channel = FileChannel::from_config(file)?;
            system.add_channel(ChannelKind::File, channel);
        }
        Ok(system)
    }

    /// Returns the process-wide registry, creating an empty one on first use.
    pub fn global() -> &'static LogSystem {
        GLOBAL.get_or_init(LogSystem::new)
    }

    /// Creates the process-wide registry from `config`.
    ///
    /// This is the explicit start-up hook for a composition root. It must run
    /// before anything calls [`LogSystem::global`].
    ///
    /// # Errors
    /// Returns [`LogError::AlreadyInitialized`] if the global registry already
    /// exists, or any error from [`LogSystem::from_config`].
    pub fn initialize(config: &LogConfig) -> LogResult<&'static LogSystem> {
        let mut candidate = Some(Self::from_config(config)?);
        let system = GLOBAL.get_or_init(|| candidate.take().unwrap_or_default());
        if candidate.is_some() {
            return Err(LogError::AlreadyInitialized);
        }
        Ok(system)
    }

    /// Registers `channel` under `kind`.
    ///
    /// If a channel of the same kind is already registered, a
    /// [`Severity::Warning`] entry ([`DUPLICATE_CHANNEL_MESSAGE`]) is sent to
    /// the current channels and `channel` is dropped.
    pub fn add_channel<C>(&self, kind: ChannelKind, channel: C)
    where
        C: LogChannel + 'static,
    {
        self.add_channel_with(kind, move || channel);
    }

    /// Registers the channel built by `make` under `kind`, calling `make`
    /// only if no channel of that kind exists yet.
    pub fn add_channel_with<C, F>(&self, kind: ChannelKind, make: F)
    where
        C: LogChannel + 'static,
        F: FnOnce() -> C,
    {
        if self.is_dispatching_here() {
            self.defer(Deferred::Register(kind, Box::new(make())));
            return;
        }
        let mut registry = lock(&self.registry);
        let _dispatch = DispatchGuard::enter(&self.dispatcher);
        registry.register(kind, || Box::new(make()));
        self.drain_deferred(&mut registry);
    }

    /// Delivers `message` with `severity` to every registered channel, in
    /// registration order.
    pub fn log(&self, message: &str, severity: Severity) {
        if self.is_dispatching_here() {
            let entry = LogEntry::new(message, severity, Utc::now());
            self.defer(Deferred::Log(entry.to_record()));
            return;
        }
        let mut registry = lock(&self.registry);
        let _dispatch = DispatchGuard::enter(&self.dispatcher);
        registry.emit(message, severity);
        self.drain_deferred(&mut registry);
    }

    /// Logs `message` at [`Severity::Info`].
    pub fn info(&self, message: &str) {
        self.log(message, Severity::Info);
    }

    /// Logs `message` at [`Severity::Warning`].
    pub fn warning(&self, message: &str) {
        self.log(message, Severity::Warning);
    }

    /// Logs `message` at [`Severity::Error`].
    pub fn error(&self, message: &str) {
        self.log(message, Severity::Error);
    }

    /// Asks every channel to flush buffered output.
    pub fn flush(&self) {
        if self.is_dispatching_here() {
            return;
        }
        let mut registry = lock(&self.registry);
        let _dispatch = DispatchGuard::enter(&self.dispatcher);
        registry.flush();
        self.drain_deferred(&mut registry);
    }

    /// Logs `message` at [`Severity::Assert`] and flushes, ahead of process
    /// termination.
    ///
    /// From inside a channel hook the registry is held further up the stack
    /// and the queued entry would never be drained, so the formatted entry is
    /// also written straight to standard error.
    pub(crate) fn log_fatal(&self, message: &str) {
        if self.is_dispatching_here() {
            let entry = LogEntry::new(message, Severity::Assert, Utc::now());
            let mut stderr = io::stderr().lock();
            let _ = writeln!(stderr, "{entry}");
            let _ = stderr.flush();
            self.defer(Deferred::Log(entry.to_record()));
            return;
        }
        self.log(message, Severity::Assert);
        self.flush();
    }

    /// Flushes and releases every channel, then clears the history.
    ///
    /// Returns the number of channels released. The registry stays usable:
    /// channels may be registered again afterwards.
    pub fn shutdown(&self) -> usize {
        if self.is_dispatching_here() {
            log::warn!("Log system shutdown requested from inside a channel; ignored");
            return 0;
        }
        let mut registry = lock(&self.registry);
        let _dispatch = DispatchGuard::enter(&self.dispatcher);
        registry.flush();
        let released = registry.channels.len();
        registry.channels.clear();
        self.drain_deferred(&mut registry);
        registry.history.clear();
        log::debug!("Log system shut down, released {released} channel(s)");
        released
    }

    /// Number of registered channels.
    pub fn channel_count(&self) -> usize {
        self.inspect(0, |registry| registry.channels.len())
    }

    /// Returns `true` if a channel of `kind` is registered.
    pub fn contains_channel(&self, kind: ChannelKind) -> bool {
        self.inspect(false, |registry| registry.contains(kind.key()))
    }

    /// Kinds of the registered channels, in registration order.
    pub fn channel_kinds(&self) -> Vec<ChannelKind> {
        self.inspect(Vec::new(), |registry| {
            registry.channels.iter().map(|record| record.kind).collect()
        })
    }

    /// Copies the retained history, oldest first.
    pub fn recent_entries(&self) -> Vec<LogRecord> {
        self.inspect(Vec::new(), |registry| {
            registry.history.iter().cloned().collect()
        })
    }

    /// Runs `read` against the registry. Calls made from inside a channel
    /// hook cannot take the lock and get `fallback` instead.
    fn inspect<R>(&self, fallback: R, read: impl FnOnce(&Registry) -> R) -> R {
        if self.is_dispatching_here() {
            return fallback;
        }
        read(&lock(&self.registry))
    }

    fn is_dispatching_here(&self) -> bool {
        *lock(&self.dispatcher) == Some(thread::current().id())
    }

    fn defer(&self, operation: Deferred) {
        lock(&self.deferred).push_back(operation);
    }

    fn drain_deferred(&self, registry: &mut Registry) {
        let mut applied = 0;
        loop {
            let next = lock(&self.deferred).pop_front();
            let Some(operation) = next else {
                break;
            };
            if applied == MAX_DEFERRED_PER_DISPATCH {
                let discarded = {
                    let mut queue = lock(&self.deferred);
                    let discarded = queue.len() + 1;
                    queue.clear();
                    discarded
                };
                log::warn!("Discarded {discarded} log operation(s) queued from channel hooks");
                break;
            }
            applied += 1;
            match operation {
                Deferred::Log(record) => {
                    let timestamp = registry.clock.observe(record.timestamp);
                    registry.deliver(&LogEntry::new(&record.message, record.severity, timestamp));
                }
                Deferred::Register(kind, channel) => {
                    registry.register(kind, move || channel);
                }
            }
        }
    }
}

impl Default for LogSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("LogSystem");
        match self.registry.try_lock() {
            Ok(registry) => debug
                .field("channels", &registry.channels)
                .field("history_len", &registry.history.len()),
            Err(_) => debug.field("channels", &format_args!("<locked>")),
        };
        debug.finish_non_exhaustive()
    }
}
