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


//! src/core/keys.rs
//!
//! Key and modifier vocabulary
//!
//! Static tables of everything a trigger step may name:
//! - `KeyName`: the closed set of logical key names Ghostty recognises
//! - `Modifier`: the four canonical modifiers and their aliases
//! - `Prefix`: trigger prefixes (`all:`, `global:`, `unconsumed:`, `performable:`)
//! - `Key` / `ModifierToken`: the classified form of a raw step token
//!
//! W3C `KeyboardEvent.code` spellings (`KeyA`, `ArrowUp`) are folded into
//! the lower snake case names (`key_a`, `arrow_up`) while a token is being
//! classified, so nothing downstream ever sees the W3C form.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Literal prefix marking a physical key reference (e.g. `physical:five`)
pub const PHYSICAL_PREFIX: &str = "physical:";

/// Maximum number of modifiers a single step may carry
pub const MAX_MODIFIERS: usize = 4;

/// Declares `KeyName` together with its string table so that a misspelt
/// variant or a missing name is a compile error rather than a runtime miss.
macro_rules! key_names {
    ($($variant:ident => $name:literal,)*) => {
        /// Logical key names recognised in a trigger step
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum KeyName {
            $($variant,)*
        }

        impl KeyName {
            /// Every key name, in declaration order
            pub const ALL: &'static [KeyName] = &[$(KeyName::$variant,)*];

            /// Canonical lower snake case spelling
            pub fn as_str(self) -> &'static str {
                match self {
                    $(KeyName::$variant => $name,)*
                }
            }
        }

        impl FromStr for KeyName {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(KeyName::$variant),)*
                    _ => Err(()),
                }
            }
        }
    };
}

key_names! {
    Unidentified => "unidentified",
    Backquote => "backquote",
    Backslash => "backslash",
    BracketLeft => "bracket_left",
    BracketRight => "bracket_right",
    Comma => "comma",
    Digit0 => "digit_0",
    Digit1 => "digit_1",
    Digit2 => "digit_2",
    Digit3 => "digit_3",
    Digit4 => "digit_4",
    Digit5 => "digit_5",
    Digit6 => "digit_6",
    Digit7 => "digit_7",
    Digit8 => "digit_8",
    Digit9 => "digit_9",
    Equal => "equal",
    IntlBackslash => "intl_backslash",
    IntlRo => "intl_ro",
    IntlYen => "intl_yen",
    KeyA => "key_a",
    KeyB => "key_b",
    KeyC => "key_c",
    KeyD => "key_d",
    KeyE => "key_e",
    KeyF => "key_f",
    KeyG => "key_g",
    KeyH => "key_h",
    KeyI => "key_i",
    KeyJ => "key_j",
    KeyK => "key_k",
    KeyL => "key_l",
    KeyM => "key_m",
    KeyN => "key_n",
    KeyO => "key_o",
    KeyP => "key_p",
    KeyQ => "key_q",
    KeyR => "key_r",
    KeyS => "key_s",
    KeyT => "key_t",
    KeyU => "key_u",
    KeyV => "key_v",
    KeyW => "key_w",
    KeyX => "key_x",
    KeyY => "key_y",
    KeyZ => "key_z",
    Minus => "minus",
    Period => "period",
    Quote => "quote",
    Semicolon => "semicolon",
    Slash => "slash",
    AltLeft => "alt_left",
    AltRight => "alt_right",
    Backspace => "backspace",
    CapsLock => "caps_lock",
    ContextMenu => "context_menu",
    ControlLeft => "control_left",
    ControlRight => "control_right",
    Enter => "enter",
    MetaLeft => "meta_left",
    MetaRight => "meta_right",
    ShiftLeft => "shift_left",
    ShiftRight => "shift_right",
    Space => "space",
    Tab => "tab",
    Convert => "convert",
    KanaMode => "kana_mode",
    NonConvert => "non_convert",
    Delete => "delete",
    End => "end",
    Help => "help",
    Home => "home",
    Insert => "insert",
    PageDown => "page_down",
    PageUp => "page_up",
    ArrowDown => "arrow_down",
    ArrowLeft => "arrow_left",
    ArrowRight => "arrow_right",
    ArrowUp => "arrow_up",
    NumLock => "num_lock",
    Numpad0 => "numpad_0",
    Numpad1 => "numpad_1",
    Numpad2 => "numpad_2",
    Numpad3 => "numpad_3",
    Numpad4 => "numpad_4",
    Numpad5 => "numpad_5",
    Numpad6 => "numpad_6",
    Numpad7 => "numpad_7",
    Numpad8 => "numpad_8",
    Numpad9 => "numpad_9",
    NumpadAdd => "numpad_add",
    NumpadBackspace => "numpad_backspace",
    NumpadClear => "numpad_clear",
    NumpadClearEntry => "numpad_clear_entry",
    NumpadComma => "numpad_comma",
    NumpadDecimal => "numpad_decimal",
    NumpadDivide => "numpad_divide",
    NumpadEnter => "numpad_enter",
    NumpadEqual => "numpad_equal",
    NumpadMemoryAdd => "numpad_memory_add",
    NumpadMemoryClear => "numpad_memory_clear",
    NumpadMemoryRecall => "numpad_memory_recall",
    NumpadMemoryStore => "numpad_memory_store",
    NumpadMemorySubtract => "numpad_memory_subtract",
    NumpadMultiply => "numpad_multiply",
    NumpadParenLeft => "numpad_paren_left",
    NumpadParenRight => "numpad_paren_right",
    NumpadSubtract => "numpad_subtract",
    NumpadSeparator => "numpad_separator",
    NumpadUp => "numpad_up",
    NumpadDown => "numpad_down",
    NumpadRight => "numpad_right",
    NumpadLeft => "numpad_left",
    NumpadBegin => "numpad_begin",
    NumpadHome => "numpad_home",
    NumpadEnd => "numpad_end",
    NumpadInsert => "numpad_insert",
    NumpadDelete => "numpad_delete",
    NumpadPageUp => "numpad_page_up",
    NumpadPageDown => "numpad_page_down",
    Escape => "escape",
    F1 => "f1",
    F2 => "f2",
    F3 => "f3",
    F4 => "f4",
    F5 => "f5",
    F6 => "f6",
    F7 => "f7",
    F8 => "f8",
    F9 => "f9",
    F10 => "f10",
    F11 => "f11",
    F12 => "f12",
    F13 => "f13",
    F14 => "f14",
    F15 => "f15",
    F16 => "f16",
    F17 => "f17",
    F18 => "f18",
    F19 => "f19",
    F20 => "f20",
    F21 => "f21",
    F22 => "f22",
    F23 => "f23",
    F24 => "f24",
    F25 => "f25",
    Fn => "fn",
    FnLock => "fn_lock",
    PrintScreen => "print_screen",
    ScrollLock => "scroll_lock",
    Pause => "pause",
    BrowserBack => "browser_back",
    BrowserFavorites => "browser_favorites",
    BrowserForward => "browser_forward",
    BrowserHome => "browser_home",
    BrowserRefresh => "browser_refresh",
    BrowserSearch => "browser_search",
    BrowserStop => "browser_stop",
    Eject => "eject",
    LaunchApp1 => "launch_app_1",
    LaunchApp2 => "launch_app_2",
    LaunchMail => "launch_mail",
    MediaPlayPause => "media_play_pause",
    MediaSelect => "media_select",
    MediaStop => "media_stop",
    MediaTrackNext => "media_track_next",
    MediaTrackPrevious => "media_track_previous",
    Power => "power",
    Sleep => "sleep",
    AudioVolumeDown => "audio_volume_down",
    AudioVolumeMute => "audio_volume_mute",
    AudioVolumeUp => "audio_volume_up",
    WakeUp => "wake_up",
    Copy => "copy",
    Cut => "cut",
    Paste => "paste",
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyboard modifier keys
///
/// Ordering follows the lexicographic order of the canonical names, which is
/// the order modifiers appear in canonical and formatted triggers.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Modifier {
    Alt,
    Ctrl,
    Shift,
    /// Super/Command/Windows key
    Super,
}

impl Modifier {
    pub const ALL: [Modifier; 4] = [Modifier::Shift, Modifier::Ctrl, Modifier::Alt, Modifier::Super];

    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Alt => "alt",
            Modifier::Ctrl => "ctrl",
            Modifier::Shift => "shift",
            Modifier::Super => "super",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Modifier {
    type Err = ();

    /// Accepts canonical names and the aliases `control`, `cmd`, `command`,
    /// `opt` and `option`. Input must already be lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shift" => Ok(Modifier::Shift),
            "ctrl" | "control" => Ok(Modifier::Ctrl),
            "alt" | "opt" | "option" => Ok(Modifier::Alt),
            "super" | "cmd" | "command" => Ok(Modifier::Super),
            _ => Err(()),
        }
    }
}

/// Trigger prefixes that change where a binding applies
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Prefix {
    All,
    Global,
    Unconsumed,
    Performable,
}

impl Prefix {
    pub const ALL: [Prefix; 4] = [Prefix::All, Prefix::Global, Prefix::Unconsumed, Prefix::Performable];

    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::All => "all",
            Prefix::Global => "global",
            Prefix::Unconsumed => "unconsumed",
            Prefix::Performable => "performable",
        }
    }

    /// Prefixes that bind outside the focused surface and so cannot
    /// start a key sequence
    pub fn forbids_sequences(self) -> bool {
        matches!(self, Prefix::All | Prefix::Global)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Prefix {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::ALL.into_iter().find(|p| p.as_str() == s).ok_or(())
    }
}

/// The key of a trigger step, classified against the vocabulary
///
/// `Unrecognized` keeps the lowercased token so the keybind parser can
/// report it; the trigger parser itself only checks shape.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Key {
    /// A name from the key vocabulary (`arrow_up`, `key_a`, `f5`)
    Named(KeyName),
    /// `physical:<name>`, stored without the prefix
    Physical(String),
    /// Any other single code point (`a`, `+`, `é`)
    Char(char),
    Unrecognized(String),
}

impl Key {
    /// Classifies a raw key token.
    ///
    /// The token is lowercased, except that a W3C code spelling which maps
    /// onto a known key name is converted to that name instead.
    pub fn parse(token: &str) -> Self {
        if let Some(named) = w3c_key_name(token) {
            tracing::trace!(token, key = named.as_str(), "normalised W3C key code");
            return Key::Named(named);
        }

        let lower = token.to_lowercase();

        if let Some(name) = lower.strip_prefix(PHYSICAL_PREFIX) {
            return Key::Physical(name.to_string());
        }

        if let Ok(named) = lower.parse::<KeyName>() {
            return Key::Named(named);
        }

        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c),
            _ => Key::Unrecognized(lower),
        }
    }

    /// True for every variant except `Unrecognized`
    pub fn is_valid(&self) -> bool {
        !matches!(self, Key::Unrecognized(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Named(name) => f.write_str(name.as_str()),
            Key::Physical(name) => write!(f, "{}{}", PHYSICAL_PREFIX, name),
            Key::Char(c) => write!(f, "{}", c),
            Key::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A modifier token of a trigger step
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ModifierToken {
    Known(Modifier),
    /// Lowercased token that is neither a modifier nor an alias
    Unrecognized(String),
}

impl ModifierToken {
    /// Lowercases the token and resolves aliases
    pub fn parse(token: &str) -> Self {
        let lower = token.to_lowercase();
        match lower.parse::<Modifier>() {
            Ok(modifier) => ModifierToken::Known(modifier),
            Err(()) => ModifierToken::Unrecognized(lower),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ModifierToken::Known(modifier) => modifier.as_str(),
            ModifierToken::Unrecognized(raw) => raw,
        }
    }
}

impl From<Modifier> for ModifierToken {
    fn from(modifier: Modifier) -> Self {
        ModifierToken::Known(modifier)
    }
}

impl fmt::Display for ModifierToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ModifierToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Maps a W3C `KeyboardEvent.code` spelling onto a key name.
///
/// `KeyA` → `key_a`, `ArrowUp` → `arrow_up`, `Digit1` → `digit_1`,
/// `Numpad0` → `numpad_0`. Codes whose snake case form is not a key name
/// (`F1` → `f_1`) return `None` and are handled by plain lowercasing.
fn w3c_key_name(token: &str) -> Option<KeyName> {
    // Only mixed-case tokens of two or more characters can be W3C codes
    if token.chars().nth(1).is_none() || !token.chars().any(|c| c.is_ascii_uppercase()) {
        return None;
    }
    if !token.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    let mut snake = String::with_capacity(token.len() + 4);
    let mut prev: Option<char> = None;
    for c in token.chars() {
        if let Some(p) = prev {
            let word_start = c.is_ascii_uppercase() && !p.is_ascii_uppercase();
            let digits_start = c.is_ascii_digit() && !p.is_ascii_digit();
            if word_start || digits_start {
                snake.push('_');
            }
        }
        snake.push(c.to_ascii_lowercase());
        prev = Some(c);
    }

    snake.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_name_table_round_trips() {
        for name in KeyName::ALL {
            assert_eq!(name.as_str().parse::<KeyName>(), Ok(*name));
        }
        assert_eq!(KeyName::ALL.len(), 176);
    }

    #[test]
    fn test_modifier_aliases() {
        assert_eq!("control".parse::<Modifier>(), Ok(Modifier::Ctrl));
        assert_eq!("cmd".parse::<Modifier>(), Ok(Modifier::Super));
        assert_eq!("command".parse::<Modifier>(), Ok(Modifier::Super));
        assert_eq!("opt".parse::<Modifier>(), Ok(Modifier::Alt));
        assert_eq!("option".parse::<Modifier>(), Ok(Modifier::Alt));
        assert!("meh".parse::<Modifier>().is_err());
    }

    #[test]
    fn test_modifier_order_is_lexicographic() {
        let mut mods = Modifier::ALL.to_vec();
        mods.sort();
        let names: Vec<_> = mods.iter().map(|m| m.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_w3c_codes_normalise() {
        assert_eq!(Key::parse("KeyA"), Key::Named(KeyName::KeyA));
        assert_eq!(Key::parse("ArrowUp"), Key::Named(KeyName::ArrowUp));
        assert_eq!(Key::parse("Digit7"), Key::Named(KeyName::Digit7));
        assert_eq!(Key::parse("NumpadMemoryAdd"), Key::Named(KeyName::NumpadMemoryAdd));
        assert_eq!(Key::parse("LaunchApp2"), Key::Named(KeyName::LaunchApp2));
        assert_eq!(Key::parse("F12"), Key::Named(KeyName::F12));
    }

    #[test]
    fn test_key_classification() {
        assert_eq!(Key::parse("+"), Key::Char('+'));
        assert_eq!(Key::parse("A"), Key::Char('a'));
        assert_eq!(Key::parse("physical:five"), Key::Physical("five".to_string()));
        assert_eq!(Key::parse("Page_Up"), Key::Named(KeyName::PageUp));
        assert_eq!(Key::parse("nope"), Key::Unrecognized("nope".to_string()));
        assert!(!Key::parse("nope").is_valid());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::parse("KeyA").to_string(), "key_a");
        assert_eq!(Key::parse("physical:Five").to_string(), "physical:five");
    }

    #[test]
    fn test_prefix_lookup() {
        assert_eq!("global".parse::<Prefix>(), Ok(Prefix::Global));
        assert!("foo".parse::<Prefix>().is_err());
        assert!(Prefix::All.forbids_sequences());
        assert!(!Prefix::Unconsumed.forbids_sequences());
    }
}
