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


//! src/core/actions.rs
//!
//! Action catalog and argument validation
//!
//! Every action Ghostty recognises is described by an `ActionDefinition`
//! giving the shape of its argument. The catalog is a read-only map built on
//! first use; validation looks the action up and checks the argument against
//! its declared `ArgKind`.
//!
//! # Whitelisting
//! Like the key vocabulary, the catalog is an allow-list: any action name
//! not listed is reported as unknown and its argument is not inspected.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use crate::core::error::ActionError;

/// Directions accepted by `resize_split` and `new_split`
pub const DIRECTIONS: &[&str] = &["right", "down", "left", "up", "auto"];

const INSPECT_OPTIONS: &[&str] = &["toggle", "show", "hide"];
const WRITE_OPTIONS: &[&str] = &[
    "copy",
    "paste",
    "open",
    "copy,plain",
    "copy,vt",
    "copy,html",
    "paste,plain",
    "paste,vt",
    "paste,html",
    "open,plain",
    "open,vt",
    "open,html",
];
const GOTO_SPLIT_OPTIONS: &[&str] = &["right", "down", "left", "up", "auto", "previous", "next"];
const ADJUST_SELECTION_OPTIONS: &[&str] = &[
    "left",
    "right",
    "up",
    "down",
    "page_up",
    "page_down",
    "home",
    "end",
    "beginning_of_line",
    "end_of_line",
];
const PREVIOUS_NEXT: &[&str] = &["previous", "next"];

/// Shape of an action's argument
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgKind {
    /// Takes no argument
    None,
    /// Numeric, fractions allowed
    Number,
    /// Numeric with no fractional part
    Integer,
    /// Any string
    Free,
    /// One of the definition's `options`
    Enum,
    Tuple,
    Direction,
    /// `direction,offset`
    Resize,
    /// Required literal payload (Zig string literal syntax)
    Text,
    Crash,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgKind::None => "none",
            ArgKind::Number => "number",
            ArgKind::Integer => "integer",
            ArgKind::Free => "free",
            ArgKind::Enum => "enum",
            ArgKind::Tuple => "tuple",
            ArgKind::Direction => "direction",
            ArgKind::Resize => "resize",
            ArgKind::Text => "text",
            ArgKind::Crash => "crash",
        };
        f.write_str(name)
    }
}

/// Describes one action and the argument it accepts
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ActionDefinition {
    pub name: &'static str,
    pub kind: ArgKind,
    /// Allowed values for `ArgKind::Enum`, empty otherwise
    pub options: &'static [&'static str],
    /// Whether the argument may be omitted entirely
    pub allow_empty: bool,
}

impl ActionDefinition {
    const fn new(name: &'static str, kind: ArgKind) -> Self {
        Self { name, kind, options: &[], allow_empty: false }
    }

    const fn choice(name: &'static str, options: &'static [&'static str]) -> Self {
        Self { name, kind: ArgKind::Enum, options, allow_empty: false }
    }

    const fn optional(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Checks `args` against this definition.
    ///
    /// `args` is `None` when the directive had no `:` after the action name.
    /// Returns every violation found, which for the shapes defined here is
    /// at most one.
    pub fn validate(&self, args: Option<&str>) -> Vec<ActionError> {
        let action = self.name.to_string();
        let error = match (self.kind, args) {
            (ArgKind::None, Some(args)) if !args.is_empty() => Some(ActionError::NoArguments { action }),

            (ArgKind::Free, None) if !self.allow_empty => Some(ActionError::MissingArguments { action }),

            (ArgKind::Text, None) => Some(ActionError::MissingText { action }),

            (ArgKind::Number, None) => Some(ActionError::MissingNumber { action }),
            (ArgKind::Number, Some(args)) if parse_number(args).is_none() => Some(ActionError::NotANumber {
                action,
                value: args.to_string(),
            }),

            (ArgKind::Integer, None) => Some(ActionError::MissingInteger { action }),
            (ArgKind::Integer, Some(args)) if !is_integer(args) => Some(ActionError::NotAnInteger {
                action,
                value: args.to_string(),
            }),

            (ArgKind::Enum, None) if !self.allow_empty => Some(ActionError::MissingChoice {
                action,
                options: self.options.join(", "),
            }),
            (ArgKind::Enum, Some(args)) if !self.options.contains(&args) => Some(ActionError::InvalidChoice {
                action,
                value: args.to_string(),
            }),

            (ArgKind::Resize, None) => Some(ActionError::MissingResize { action }),
            (ArgKind::Resize, Some(args)) => validate_resize(action, args),

            _ => None,
        };

        error.into_iter().collect()
    }
}

/// `resize_split` arguments: `direction,offset`
fn validate_resize(action: String, args: &str) -> Option<ActionError> {
    let mut parts = args.split(',').map(str::trim);
    let direction = parts.next().unwrap_or_default();
    let offset = parts.next();

    if !DIRECTIONS.contains(&direction) {
        return Some(ActionError::InvalidDirection {
            action,
            directions: DIRECTIONS.join(", "),
        });
    }

    match offset.and_then(parse_number) {
        Some(_) => None,
        None => Some(ActionError::MissingOffset { action }),
    }
}

/// Parses a numeric argument, rejecting empty input and NaN
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn is_integer(raw: &str) -> bool {
    parse_number(raw).is_some_and(|n| n.fract() == 0.0)
}

const DEFINITIONS: &[ActionDefinition] = &[
    ActionDefinition::new("ignore", ArgKind::None),
    ActionDefinition::new("unbind", ArgKind::None),
    ActionDefinition::new("csi", ArgKind::Free),
    ActionDefinition::new("esc", ArgKind::Free),
    ActionDefinition::new("text", ArgKind::Text),
    ActionDefinition::new("cursor_key", ArgKind::None),
    ActionDefinition::new("reset", ArgKind::None),
    ActionDefinition::choice("copy_to_clipboard", &["plain", "vt", "html", "mixed"]).optional(),
    ActionDefinition::new("paste_from_clipboard", ArgKind::None),
    ActionDefinition::new("paste_from_selection", ArgKind::None),
    ActionDefinition::new("copy_url_to_clipboard", ArgKind::None),
    ActionDefinition::new("copy_title_to_clipboard", ArgKind::None),
    ActionDefinition::new("increase_font_size", ArgKind::Number),
    ActionDefinition::new("decrease_font_size", ArgKind::Number),
    ActionDefinition::new("reset_font_size", ArgKind::None),
    ActionDefinition::new("set_font_size", ArgKind::Number),
    ActionDefinition::new("search", ArgKind::Free).optional(),
    ActionDefinition::new("search_selection", ArgKind::None),
    ActionDefinition::choice("navigate_search", PREVIOUS_NEXT),
    ActionDefinition::new("start_search", ArgKind::None),
    ActionDefinition::new("end_search", ArgKind::None),
    ActionDefinition::new("clear_screen", ArgKind::None),
    ActionDefinition::new("select_all", ArgKind::None),
    ActionDefinition::new("scroll_to_top", ArgKind::None),
    ActionDefinition::new("scroll_to_bottom", ArgKind::None),
    ActionDefinition::new("scroll_to_selection", ArgKind::None),
    ActionDefinition::new("scroll_to_row", ArgKind::Integer),
    ActionDefinition::new("scroll_page_up", ArgKind::None),
    ActionDefinition::new("scroll_page_down", ArgKind::None),
    ActionDefinition::new("scroll_page_fractional", ArgKind::Number),
    ActionDefinition::new("scroll_page_lines", ArgKind::Integer),
    ActionDefinition::choice("adjust_selection", ADJUST_SELECTION_OPTIONS),
    ActionDefinition::new("jump_to_prompt", ArgKind::Integer),
    ActionDefinition::choice("write_scrollback_file", WRITE_OPTIONS),
    ActionDefinition::choice("write_screen_file", WRITE_OPTIONS),
    ActionDefinition::choice("write_selection_file", WRITE_OPTIONS),
    ActionDefinition::new("new_window", ArgKind::None),
    ActionDefinition::new("new_tab", ArgKind::None),
    ActionDefinition::new("previous_tab", ArgKind::None),
    ActionDefinition::new("next_tab", ArgKind::None),
    ActionDefinition::new("last_tab", ArgKind::None),
    ActionDefinition::new("goto_tab", ArgKind::Integer),
    ActionDefinition::new("move_tab", ArgKind::Integer),
    ActionDefinition::new("toggle_tab_overview", ArgKind::None),
    ActionDefinition::new("prompt_surface_title", ArgKind::None),
    ActionDefinition::new("prompt_tab_title", ArgKind::None),
    ActionDefinition::choice("new_split", DIRECTIONS).optional(),
    ActionDefinition::choice("goto_split", GOTO_SPLIT_OPTIONS),
    ActionDefinition::choice("goto_window", PREVIOUS_NEXT),
    ActionDefinition::new("toggle_split_zoom", ArgKind::None),
    ActionDefinition::new("toggle_readonly", ArgKind::None),
    ActionDefinition::new("resize_split", ArgKind::Resize),
    ActionDefinition::new("equalize_splits", ArgKind::None),
    ActionDefinition::new("reset_window_size", ArgKind::None),
    ActionDefinition::choice("inspector", INSPECT_OPTIONS),
    ActionDefinition::new("show_gtk_inspector", ArgKind::None),
    ActionDefinition::new("show_on_screen_keyboard", ArgKind::None),
    ActionDefinition::new("open_config", ArgKind::None),
    ActionDefinition::new("reload_config", ArgKind::None),
    ActionDefinition::new("close_surface", ArgKind::None),
    ActionDefinition::choice("close_tab", &["this", "other", "right"]).optional(),
    ActionDefinition::new("close_window", ArgKind::None),
    ActionDefinition::new("close_all_windows", ArgKind::None),
    ActionDefinition::new("toggle_maximize", ArgKind::None),
    ActionDefinition::new("toggle_fullscreen", ArgKind::None),
    ActionDefinition::new("toggle_window_decorations", ArgKind::None),
    ActionDefinition::new("toggle_window_float_on_top", ArgKind::None),
    ActionDefinition::new("toggle_secure_input", ArgKind::None),
    ActionDefinition::new("toggle_mouse_reporting", ArgKind::None),
    ActionDefinition::new("toggle_command_palette", ArgKind::None),
    ActionDefinition::new("toggle_quick_terminal", ArgKind::None),
    ActionDefinition::new("toggle_visibility", ArgKind::None),
    ActionDefinition::new("toggle_background_opacity", ArgKind::None),
    ActionDefinition::new("check_for_updates", ArgKind::None),
    ActionDefinition::new("undo", ArgKind::None),
    ActionDefinition::new("redo", ArgKind::None),
    ActionDefinition::new("end_key_sequence", ArgKind::None),
    ActionDefinition::new("activate_key_table", ArgKind::Free),
    ActionDefinition::new("activate_key_table_once", ArgKind::Free),
    ActionDefinition::new("deactivate_key_table", ArgKind::None),
    ActionDefinition::new("deactivate_all_key_tables", ArgKind::None),
    ActionDefinition::new("quit", ArgKind::None),
    ActionDefinition::choice("crash", &["main", "io", "render"]),
];

static CATALOG: LazyLock<HashMap<&'static str, ActionDefinition>> =
    LazyLock::new(|| DEFINITIONS.iter().map(|def| (def.name, *def)).collect());

/// Looks up an action by exact name.
pub fn lookup(name: &str) -> Option<&'static ActionDefinition> {
    CATALOG.get(name)
}

/// All action definitions in catalog order.
pub fn definitions() -> &'static [ActionDefinition] {
    DEFINITIONS
}

/// Validates an action name and its optional argument.
///
/// Unknown actions produce a single `ActionError::Unknown` and skip
/// argument checks.
///
/// # Example
/// ```
/// use ghostty_keybind_lint::core::actions::validate_action;
///
/// assert!(validate_action("goto_tab", Some("3")).is_empty());
/// assert_eq!(
///     validate_action("goto_tab", Some("x"))[0].to_string(),
///     "'goto_tab' expects an integer, got 'x'"
/// );
/// ```
pub fn validate_action(action: &str, args: Option<&str>) -> Vec<ActionError> {
    match lookup(action) {
        Some(definition) => definition.validate(args),
        None => vec![ActionError::Unknown(action.to_string())],
    }
}
