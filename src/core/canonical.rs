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


//! src/core/canonical.rs
//!
//! Canonical and display forms of a parsed trigger
//!
//! - `canonical_trigger`: sorted modifiers, no prefixes. Two triggers that
//!   press the same physical keys compare equal.
//! - `format_trigger`: sorted modifiers, de-duplicated prefixes. This is the
//!   textual form written back to a config file.
//!
//! Both forms parse back to a trigger with the same canonical form.

use crate::core::types::{ParsedTrigger, TriggerStep};

/// Renders one step as `mod+mod+key` with modifiers sorted
fn render_step(step: &TriggerStep) -> String {
    let modifiers = step.sorted_modifiers();
    if modifiers.is_empty() {
        step.key.to_string()
    } else {
        format!("{}+{}", modifiers.join("+"), step.key)
    }
}

fn render_steps(trigger: &ParsedTrigger) -> String {
    trigger.steps.iter().map(render_step).collect::<Vec<_>>().join(">")
}

/// Order-normalised form for equality comparison.
///
/// Prefixes are ignored: `global:ctrl+a` and `ctrl+a` are the same key
/// combination.
///
/// # Example
/// ```
/// use ghostty_keybind_lint::core::{canonical::canonical_trigger, parser::parse_trigger};
///
/// let a = parse_trigger("super+ctrl+a").unwrap();
/// let b = parse_trigger("global:ctrl+super+a").unwrap();
/// assert_eq!(canonical_trigger(&a), canonical_trigger(&b));
/// assert_eq!(canonical_trigger(&a), "ctrl+super+a");
/// ```
pub fn canonical_trigger(trigger: &ParsedTrigger) -> String {
    render_steps(trigger)
}

/// Human-facing re-serialisation, prefixes included.
///
/// Repeated prefixes are written once, in order of first occurrence.
pub fn format_trigger(trigger: &ParsedTrigger) -> String {
    let mut seen = Vec::with_capacity(trigger.prefixes.len());
    for prefix in &trigger.prefixes {
        if !seen.contains(prefix) {
            seen.push(*prefix);
        }
    }

    let prefix_part: String = seen.iter().map(|p| format!("{}:", p)).collect();
    format!("{}{}", prefix_part, render_steps(trigger))
}
