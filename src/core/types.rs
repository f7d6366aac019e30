//! src/core/types.rs
//!
//! Core type definitions for keybind validation
//!
//! - `TriggerStep`: one modifier set plus a key
//! - `ParsedTrigger`: prefixes plus one or more chained steps
//! - `ParsedKeybind`: whatever parsing a directive produced, plus its errors
//! - `Keybind`: a fully valid directive
//! - `DiagnosticEntry`: the per-directive verdict of a diagnostics batch
//!
//! All of these are plain values created fresh for each parse call.

use serde::Serialize;
use std::fmt;

use crate::core::canonical::{canonical_trigger, format_trigger};
use crate::core::error::KeybindError;
use crate::core::keys::{Key, ModifierToken, Prefix};

/// A single key press within a trigger, e.g. `ctrl+shift+a`
///
/// Modifiers keep the order they were typed in. Equality of steps is
/// order-sensitive; use [`ParsedTrigger::canonical`] for order-insensitive
/// comparison.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct TriggerStep {
    pub key: Key,
    pub modifiers: Vec<ModifierToken>,
}

impl TriggerStep {
    pub fn new(key: Key, modifiers: Vec<ModifierToken>) -> Self {
        Self { key, modifiers }
    }

    /// Modifier names sorted lexicographically
    pub fn sorted_modifiers(&self) -> Vec<&str> {
        let mut mods: Vec<&str> = self.modifiers.iter().map(ModifierToken::as_str).collect();
        mods.sort_unstable();
        mods
    }
}

/// A parsed trigger: `[<prefix>:]*<step>[><step>]*`
///
/// `steps` is never empty. More than one step denotes a key sequence.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ParsedTrigger {
    pub prefixes: Vec<Prefix>,
    pub steps: Vec<TriggerStep>,
}

impl ParsedTrigger {
    pub fn is_sequence(&self) -> bool {
        self.steps.len() > 1
    }

    pub fn has_prefix(&self, prefix: Prefix) -> bool {
        self.prefixes.contains(&prefix)
    }

    /// Order-normalised form used for duplicate detection
    pub fn canonical(&self) -> String {
        canonical_trigger(self)
    }
}

impl fmt::Display for ParsedTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_trigger(self))
    }
}

/// Result of parsing one `trigger=action[:args]` directive
///
/// `trigger` and `action` are filled in whenever their stage got far enough
/// to produce a value, even if later stages failed. A non-empty `errors`
/// means the directive is invalid no matter which fields are present.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedKeybind {
    pub trigger: Option<ParsedTrigger>,
    pub action: Option<String>,
    /// `None` when the action had no `:`, `Some("")` for a trailing `:`
    pub args: Option<String>,
    pub errors: Vec<KeybindError>,
}

impl ParsedKeybind {
    /// Result carrying only errors, for directives that could not be split
    pub(crate) fn failed(error: KeybindError) -> Self {
        Self {
            errors: vec![error],
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages as shown to the user
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Splits the result into a complete keybind or the partial one.
    ///
    /// Returns `Ok` only when there are no errors and both the trigger and
    /// the action were parsed.
    pub fn into_result(self) -> Result<Keybind, ParsedKeybind> {
        if !self.errors.is_empty() {
            return Err(self);
        }
        match self {
            ParsedKeybind {
                trigger: Some(trigger),
                action: Some(action),
                args,
                ..
            } => Ok(Keybind { trigger, action, args }),
            partial => Err(partial),
        }
    }
}

/// A directive that passed every check
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Keybind {
    pub trigger: ParsedTrigger,
    pub action: String,
    pub args: Option<String>,
}

impl fmt::Display for Keybind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.trigger, self.action)?;

        if let Some(args) = &self.args {
            write!(f, ":{}", args)?;
        }

        Ok(())
    }
}

/// Validity of a directive
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Invalid,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Invalid => write!(f, "invalid"),
        }
    }
}

/// Verdict for one directive of a diagnostics batch
///
/// `canonical` is empty when the trigger did not parse; such entries are
/// never duplicates.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DiagnosticEntry {
    pub status: Status,
    pub duplicate: bool,
    pub errors: Vec<String>,
    pub canonical: String,
}

impl DiagnosticEntry {
    /// True when the entry is invalid or collides with another entry
    pub fn has_problems(&self) -> bool {
        self.status == Status::Invalid || self.duplicate
    }
}
