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

//! Ready-made [`LogChannel`](super::LogChannel) implementations.
//!
//! The registry does not depend on any of these; they are the sinks a
//! composition root typically installs.

pub mod capture;
pub mod console;
pub mod file;

pub use capture::{CaptureChannel, CaptureHandle};
pub use console::{ConsoleChannel, ConsoleTarget};
pub use file::FileChannel;
