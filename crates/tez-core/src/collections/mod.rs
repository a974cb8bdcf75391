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

//! Fixed-size and growable array containers.
//!
//! Both containers expose checked accessors that report out-of-bounds
//! reads through the logging subsystem instead of panicking.

mod array;
mod dynamic_array;

pub use self::array::Array;
pub use self::dynamic_array::DynamicArray;
