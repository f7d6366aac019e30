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


//! Ghostty Keybind Lint
//!
//! Client-side validation for Ghostty `keybind` directives, with live
//! diagnostics for syntax errors, unknown actions, malformed arguments and
//! duplicate bindings.
//!
//! # Features
//!
//! - **Trigger Parsing:** prefixes, key sequences, modifier aliases, W3C key codes
//! - **Action Validation:** every action checked against its argument shape
//! - **Duplicate Detection:** triggers compared by canonical form
//! - **Round-trip Formatting:** parsed triggers re-serialise to parseable text
//!
//! # Architecture
//!
//! - **`core`:** The pure key-binding language (vocabulary, catalog, parser,
//!   canonical forms, diagnostics)
//! - **`config`:** Extracting directives from Ghostty config files
//!
//! # Examples
//!
//! ## Parsing a directive
//!
//! ```
//! use ghostty_keybind_lint::core::parse_keybind;
//!
//! let parsed = parse_keybind("super+shift+ArrowUp=jump_to_prompt:-1");
//! assert!(parsed.is_valid());
//! assert_eq!(parsed.trigger.unwrap().to_string(), "shift+super+arrow_up");
//! ```
//!
//! ## Validating a list of directives
//!
//! ```
//! use ghostty_keybind_lint::core::{get_diagnostics, Status};
//!
//! let entries = get_diagnostics(&["ctrl+a=ignore", "ctrl+a=quit", "ctrl+b=nope"]);
//! assert!(entries[0].duplicate);
//! assert_eq!(entries[2].status, Status::Invalid);
//! assert_eq!(entries[2].errors, ["unknown action 'nope'"]);
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use crate::core::{
    canonical_trigger, format_trigger, get_diagnostics, parse_keybind, parse_trigger,
    DiagnosticEntry, ParsedKeybind, ParsedTrigger, Status, TriggerStep,
};
