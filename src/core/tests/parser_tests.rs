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


//! Parser module tests
//!
//! Tests for parsing keybind directives:
//! - The `+` key, bare and with modifiers
//! - Physical keys and W3C key codes
//! - Modifier aliases
//! - Prefixes and key sequences
//! - Structural, vocabulary and sequence errors

use crate::core::{
    error::KeybindError,
    keys::{Key, KeyName, Modifier, ModifierToken, Prefix},
    parser::*,
    types::TriggerStep,
};

fn step(modifiers: &[Modifier], key: Key) -> TriggerStep {
    TriggerStep::new(key, modifiers.iter().copied().map(ModifierToken::Known).collect())
}

#[test]
fn test_plus_key_with_modifiers() {
    let parsed = parse_keybind("ctrl++=ignore");

    assert!(parsed.errors.is_empty());
    assert_eq!(
        parsed.trigger.unwrap().steps,
        vec![step(&[Modifier::Ctrl], Key::Char('+'))]
    );
    assert_eq!(parsed.action.as_deref(), Some("ignore"));
}

#[test]
fn test_plus_key_without_modifiers() {
    let parsed = parse_keybind("+=ignore");

    assert!(parsed.errors.is_empty());
    assert_eq!(parsed.trigger.unwrap().steps, vec![step(&[], Key::Char('+'))]);
}

#[test]
fn test_incomplete_trigger_is_invalid() {
    let parsed = parse_keybind("ctrl+=ignore");

    assert!(parsed.trigger.is_none());
    assert!(parsed.messages().contains(&"invalid trigger format".to_string()));
    // The action side is still interpreted
    assert_eq!(parsed.action.as_deref(), Some("ignore"));
}

#[test]
fn test_invalid_trigger_still_checks_action() {
    let parsed = parse_keybind("ctrl+a>=does_not_exist");

    assert_eq!(
        parsed.messages(),
        vec!["invalid trigger format", "unknown action 'does_not_exist'"]
    );
}

#[test]
fn test_physical_keys() {
    let parsed = parse_keybind("super+physical:five=goto_tab:5");

    assert!(parsed.errors.is_empty());
    assert_eq!(
        parsed.trigger.unwrap().steps,
        vec![step(&[Modifier::Super], Key::Physical("five".to_string()))]
    );
    assert_eq!(parsed.action.as_deref(), Some("goto_tab"));
    assert_eq!(parsed.args.as_deref(), Some("5"));
}

#[test]
fn test_modifier_aliases_normalised() {
    let parsed = parse_keybind("command+option+control+a=ignore");

    assert!(parsed.errors.is_empty());
    assert_eq!(
        parsed.trigger.unwrap().steps,
        vec![step(&[Modifier::Super, Modifier::Alt, Modifier::Ctrl], Key::Char('a'))]
    );
}

#[test]
fn test_unknown_action() {
    let parsed = parse_keybind("ctrl+a=does_not_exist");

    assert_eq!(parsed.messages(), vec!["unknown action 'does_not_exist'"]);
    assert!(parsed.trigger.is_some());
}

#[test]
fn test_arguments_on_no_argument_action() {
    let parsed = parse_keybind("ctrl+a=paste_from_clipboard:oops");

    assert!(parsed
        .messages()
        .contains(&"'paste_from_clipboard' does not take arguments".to_string()));
}

#[test]
fn test_global_sequence_rejected() {
    let parsed = parse_keybind("global:ctrl+a>ctrl+b=ignore");

    assert_eq!(parsed.errors, vec![KeybindError::GlobalSequence]);

    let parsed = parse_keybind("all:ctrl+a>ctrl+b=ignore");
    assert_eq!(parsed.errors, vec![KeybindError::GlobalSequence]);

    let parsed = parse_keybind("unconsumed:ctrl+a>ctrl+b=ignore");
    assert!(parsed.errors.is_empty());
}

#[test]
fn test_invalid_modifier() {
    let parsed = parse_keybind("meh+a=ignore");

    assert_eq!(parsed.messages(), vec!["invalid modifier 'meh'"]);
}

#[test]
fn test_first_invalid_modifier_per_step() {
    let parsed = parse_keybind("meh+bad+a=ignore");

    assert_eq!(parsed.messages(), vec!["invalid modifier 'meh'"]);
}

#[test]
fn test_invalid_modifiers_checked_in_every_step() {
    let parsed = parse_keybind("meh+a>bad+b=ignore");

    assert_eq!(
        parsed.messages(),
        vec!["invalid modifier 'meh'", "invalid modifier 'bad'"]
    );
}

#[test]
fn test_mixed_case_global_sequence_rejected() {
    let parsed = parse_keybind("GLOBAL:ctrl+a>ctrl+b=ignore");

    assert_eq!(parsed.errors, vec![KeybindError::GlobalSequence]);
}

#[test]
fn test_too_many_modifiers() {
    let parsed = parse_keybind("ctrl+alt+super+shift+meh+a=ignore");

    assert_eq!(
        parsed.messages(),
        vec!["invalid modifier 'meh'", "too many modifiers"]
    );
}

#[test]
fn test_invalid_key_reported_once() {
    let parsed = parse_keybind("ctrl+nope>ctrl+alsonope=ignore");

    assert_eq!(parsed.messages(), vec!["invalid key 'nope'"]);
}

#[test]
fn test_unknown_prefix_falls_through_to_key() {
    let parsed = parse_keybind("foo:ctrl+a=ignore");

    // "foo:ctrl" is read as a modifier, not a prefix
    assert_eq!(parsed.messages(), vec!["invalid modifier 'foo:ctrl'"]);

    let parsed = parse_keybind("foo:a=ignore");
    assert_eq!(parsed.messages(), vec!["invalid key 'foo:a'"]);
}

#[test]
fn test_missing_equals() {
    let parsed = parse_keybind("ctrl+a");

    assert_eq!(parsed.messages(), vec!["missing '=' between trigger and action"]);
    assert!(parsed.trigger.is_none());
    assert!(parsed.action.is_none());
}

#[test]
fn test_missing_trigger_or_action() {
    assert_eq!(parse_keybind("=ignore").errors, vec![KeybindError::MissingPart]);
    assert_eq!(parse_keybind("ctrl+a=  ").errors, vec![KeybindError::MissingPart]);
}

#[test]
fn test_missing_action_name() {
    let parsed = parse_keybind("ctrl+a=:x");

    assert_eq!(parsed.errors, vec![KeybindError::MissingAction]);
    assert!(parsed.action.is_none());
    assert_eq!(parsed.args.as_deref(), Some("x"));
}

#[test]
fn test_args_absent_versus_empty() {
    assert_eq!(parse_keybind("ctrl+a=ignore").args, None);

    let parsed = parse_keybind("ctrl+a=ignore:");
    assert_eq!(parsed.args.as_deref(), Some(""));
    assert!(parsed.errors.is_empty());
}

#[test]
fn test_args_split_on_first_colon() {
    let parsed = parse_keybind("ctrl+a=text:a:b");

    assert_eq!(parsed.action.as_deref(), Some("text"));
    assert_eq!(parsed.args.as_deref(), Some("a:b"));
}

#[test]
fn test_w3c_key_codes() {
    let parsed = parse_keybind("ctrl+KeyA=ignore");

    assert!(parsed.errors.is_empty());
    assert_eq!(
        parsed.trigger.unwrap().steps,
        vec![step(&[Modifier::Ctrl], Key::Named(KeyName::KeyA))]
    );
}

#[test]
fn test_additional_w3c_key_codes() {
    let parsed = parse_keybind("super+ArrowUp=jump_to_prompt:-1");

    assert!(parsed.errors.is_empty());
    assert_eq!(
        parsed.trigger.unwrap().steps,
        vec![step(&[Modifier::Super], Key::Named(KeyName::ArrowUp))]
    );
    assert_eq!(parsed.args.as_deref(), Some("-1"));
}

#[test]
fn test_parse_trigger_prefixes_and_sequences() {
    let parsed = parse_trigger("global:unconsumed:ctrl+a>shift+b").unwrap();

    assert_eq!(parsed.prefixes, vec![Prefix::Global, Prefix::Unconsumed]);
    assert_eq!(
        parsed.steps,
        vec![
            step(&[Modifier::Ctrl], Key::Char('a')),
            step(&[Modifier::Shift], Key::Char('b')),
        ]
    );
}

#[test]
fn test_parse_trigger_ignores_whitespace() {
    let parsed = parse_trigger("  ctrl + a  >  shift + b  ").unwrap();

    assert_eq!(
        parsed.steps,
        vec![
            step(&[Modifier::Ctrl], Key::Char('a')),
            step(&[Modifier::Shift], Key::Char('b')),
        ]
    );
}

#[test]
fn test_parse_trigger_rejects_malformed_chains() {
    assert!(parse_trigger("ctrl+a>").is_none());
    assert!(parse_trigger("ctrl+a>>shift+b").is_none());
    assert!(parse_trigger(">ctrl+a").is_none());
    assert!(parse_trigger("").is_none());
    assert!(parse_trigger("   ").is_none());
    assert!(parse_trigger("global:").is_none());
}

#[test]
fn test_parse_trigger_keeps_unrecognised_tokens() {
    let parsed = parse_trigger("Meh+Nope").unwrap();

    assert_eq!(parsed.steps[0].key, Key::Unrecognized("nope".to_string()));
    assert_eq!(
        parsed.steps[0].modifiers,
        vec![ModifierToken::Unrecognized("meh".to_string())]
    );
}

#[test]
fn test_into_result() {
    let keybind = parse_keybind("ctrl+a=goto_tab:2").into_result().unwrap();
    assert_eq!(keybind.action, "goto_tab");
    assert_eq!(keybind.to_string(), "ctrl+a=goto_tab:2");

    let partial = parse_keybind("ctrl+a=goto_tab:x").into_result().unwrap_err();
    assert!(partial.trigger.is_some());
    assert_eq!(partial.errors.len(), 1);
}
