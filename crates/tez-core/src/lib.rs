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

//! # Tez Core
//!
//! Foundational crate of the Tez engine: primitive types, vector math,
//! array containers, and the logging subsystem every other crate reports
//! through.

#![warn(missing_docs)]

pub mod assert;
pub mod collections;
pub mod config;
pub mod logging;
pub mod math;
pub mod types;

pub use collections::{Array, DynamicArray};
pub use config::{LogConfig, Version, ENGINE_VERSION};
pub use logging::{ChannelKind, LogChannel, LogEntry, LogError, LogRecord, LogSystem, Severity};
pub use math::{Vector2, Vector3, Vector4};
