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


//! src/core/parser.rs
//!
//! Ghostty keybind directive parser
//!
//! Directives have the form `<trigger>=<action>[:<args>]` where
//!
//! ```text
//! trigger = (prefix ":")* step (">" step)*
//! prefix  = "all" | "global" | "unconsumed" | "performable"
//! step    = (modifier "+")* key
//! ```
//!
//! # Architecture
//! Parsing happens in two layers:
//! 1. `parse_trigger` checks only the *shape* of a trigger and classifies
//!    each token (W3C key codes and modifier aliases are normalised here).
//! 2. `parse_keybind` splits the directive, runs `parse_trigger`, validates
//!    the action against the catalog and then checks key and modifier
//!    *vocabulary* membership.
//!
//! Neither layer fails: every problem becomes a `KeybindError` collected in
//! the returned `ParsedKeybind`, and whatever parsed is kept.

use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    combinator::value,
    multi::many0,
    IResult, Parser,
};
use tracing::debug;

use crate::core::actions::validate_action;
use crate::core::error::KeybindError;
use crate::core::keys::{Key, ModifierToken, Prefix, MAX_MODIFIERS};
use crate::core::types::{ParsedKeybind, ParsedTrigger, TriggerStep};

/// Parse a single `<prefix>:` token, case-insensitively
fn parse_prefix(input: &str) -> IResult<&str, Prefix> {
    alt((
        value(Prefix::All, tag_no_case("all:")),
        value(Prefix::Global, tag_no_case("global:")),
        value(Prefix::Unconsumed, tag_no_case("unconsumed:")),
        value(Prefix::Performable, tag_no_case("performable:")),
    ))
    .parse(input)
}

/// Parse leading prefixes, in the order they appear
///
/// Unknown `word:` sequences are not prefixes; they are left in the
/// remainder and end up as part of a key token.
pub fn parse_prefixes(input: &str) -> IResult<&str, Vec<Prefix>> {
    many0(parse_prefix).parse(input)
}

/// Parse one step into modifiers and key
///
/// The key is the token after the last `+`, except that a trailing `++`
/// (or a bare `+`) names the `+` key itself. Returns `None` for an empty
/// step, an empty key or an empty modifier token.
fn parse_step(raw: &str) -> Option<TriggerStep> {
    let (modifier_part, key_token) = match raw {
        "" => return None,
        "+" => (None, "+"),
        _ => match raw.strip_suffix("++") {
            Some(mods) => (Some(mods), "+"),
            None => match raw.rsplit_once('+') {
                Some((mods, key)) => (Some(mods), key),
                None => (None, raw),
            },
        },
    };

    if key_token.is_empty() {
        return None;
    }

    let modifiers = match modifier_part {
        None => Vec::new(),
        Some(part) => part
            .split('+')
            .map(|token| (!token.is_empty()).then(|| ModifierToken::parse(token)))
            .collect::<Option<Vec<_>>>()?,
    };

    Some(TriggerStep::new(Key::parse(key_token), modifiers))
}

/// Parse a trigger expression
///
/// Whitespace anywhere in the trigger is ignored. Returns `None` when the
/// trigger is empty or any step is empty (`ctrl+a>`, `a>>b`, `ctrl+`).
/// Vocabulary is not checked here: `meh+a` parses with an unrecognised
/// modifier.
///
/// # Example
/// ```
/// use ghostty_keybind_lint::core::parser::parse_trigger;
///
/// let trigger = parse_trigger("global:ctrl+KeyA").unwrap();
/// assert_eq!(trigger.to_string(), "global:ctrl+key_a");
/// assert!(parse_trigger("ctrl+a>").is_none());
/// ```
pub fn parse_trigger(input: &str) -> Option<ParsedTrigger> {
    if input.is_empty() {
        return None;
    }

    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let (remainder, prefixes) = parse_prefixes(&compact).ok()?;

    let steps = remainder
        .split('>')
        .map(parse_step)
        .collect::<Option<Vec<_>>>()?;

    Some(ParsedTrigger { prefixes, steps })
}

/// Check a parsed trigger against the vocabulary and prefix rules
///
/// Only the first invalid key is reported, and checking stops there. Within
/// a step only the first unrecognised modifier is reported.
fn check_trigger(trigger: &ParsedTrigger) -> Vec<KeybindError> {
    let mut errors = Vec::new();

    let bound_outside_surface = Prefix::ALL
        .into_iter()
        .filter(|p| p.forbids_sequences())
        .any(|p| trigger.has_prefix(p));
    if trigger.is_sequence() && bound_outside_surface {
        errors.push(KeybindError::GlobalSequence);
    }

    for step in &trigger.steps {
        if !step.key.is_valid() {
            errors.push(KeybindError::InvalidKey(step.key.to_string()));
            break;
        }

        let unrecognised = step.modifiers.iter().find_map(|m| match m {
            ModifierToken::Unrecognized(raw) => Some(raw),
            ModifierToken::Known(_) => None,
        });
        if let Some(raw) = unrecognised {
            errors.push(KeybindError::InvalidModifier(raw.clone()));
        }

        if step.modifiers.len() > MAX_MODIFIERS {
            errors.push(KeybindError::TooManyModifiers);
            break;
        }
    }

    errors
}

/// Parse and validate a complete directive
///
/// Errors are accumulated in order: directive structure, trigger shape,
/// action and argument, then trigger vocabulary. A malformed trigger does
/// not stop the action from being checked.
///
/// # Example
/// ```
/// use ghostty_keybind_lint::core::parser::parse_keybind;
///
/// let parsed = parse_keybind("ctrl+a=paste_from_clipboard:oops");
/// assert!(parsed.trigger.is_some());
/// assert_eq!(parsed.messages(), ["'paste_from_clipboard' does not take arguments"]);
/// ```
pub fn parse_keybind(directive: &str) -> ParsedKeybind {
    let Some((trigger_text, action_text)) = directive.split_once('=') else {
        return ParsedKeybind::failed(KeybindError::MissingEquals);
    };

    let trigger_text = trigger_text.trim();
    let action_text = action_text.trim();
    if trigger_text.is_empty() || action_text.is_empty() {
        return ParsedKeybind::failed(KeybindError::MissingPart);
    }

    let mut errors = Vec::new();

    let trigger = parse_trigger(trigger_text);
    if trigger.is_none() {
        errors.push(KeybindError::InvalidTrigger);
    }

    let (action, args) = match action_text.split_once(':') {
        Some((action, args)) => (action, Some(args)),
        None => (action_text, None),
    };

    if action.is_empty() {
        errors.push(KeybindError::MissingAction);
    } else {
        errors.extend(validate_action(action, args).into_iter().map(KeybindError::from));
    }

    if let Some(trigger) = &trigger {
        errors.extend(check_trigger(trigger));
    }

    debug!(directive, errors = errors.len(), "parsed keybind");

    ParsedKeybind {
        trigger,
        action: (!action.is_empty()).then(|| action.to_string()),
        args: args.map(str::to_string),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixes_stops_at_unknown_word() {
        let (rest, prefixes) = parse_prefixes("global:foo:ctrl+a").unwrap();
        assert_eq!(prefixes, vec![Prefix::Global]);
        assert_eq!(rest, "foo:ctrl+a");
    }

    #[test]
    fn test_parse_prefixes_ignores_case() {
        let (rest, prefixes) = parse_prefixes("ALL:Global:a").unwrap();
        assert_eq!(prefixes, vec![Prefix::All, Prefix::Global]);
        assert_eq!(rest, "a");
    }

    #[test]
    fn test_parse_step_plus_key() {
        let step = parse_step("+").unwrap();
        assert_eq!(step.key, Key::Char('+'));
        assert!(step.modifiers.is_empty());

        let step = parse_step("ctrl++").unwrap();
        assert_eq!(step.key, Key::Char('+'));
        assert_eq!(step.modifiers.len(), 1);
    }

    #[test]
    fn test_parse_step_rejects_empty_tokens() {
        assert!(parse_step("").is_none());
        assert!(parse_step("ctrl+").is_none());
        assert!(parse_step("+a").is_none());
        assert!(parse_step("ctrl++a").is_none());
    }
}
