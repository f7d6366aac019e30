// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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


//! src/core/mod.rs
//!
//! Core keybind validation logic
//!
//! This module contains the key-binding language and everything needed to
//! validate it:
//! - Key, modifier and prefix vocabulary
//! - The action catalog with per-action argument shapes
//! - Trigger and directive parsing
//! - Canonical and display forms of triggers
//! - Duplicate detection and batch diagnostics
//!
//! The core is pure: no I/O, no shared mutable state, and every call returns
//! a freshly built value.

pub mod actions;
pub mod canonical;
pub mod conflict;
pub mod error;
pub mod keys;
pub mod parser;
pub mod types;

pub use canonical::{canonical_trigger, format_trigger};
pub use conflict::{get_diagnostics, Duplicate, DuplicateDetector};
pub use error::{ActionError, KeybindError};
pub use keys::{Key, KeyName, Modifier, ModifierToken, Prefix};
pub use parser::{parse_keybind, parse_trigger};
pub use types::*;

#[cfg(test)]
mod tests;
