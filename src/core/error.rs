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


//! src/core/error.rs
//!
//! Validation error taxonomy
//!
//! Every problem found in a directive is a value of one of these enums.
//! Nothing here is ever raised: parsers collect them into the result they
//! return, and the `Display` output is the message shown to the user.

use thiserror::Error;

/// Problems with a directive as a whole, its trigger, or its keys
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KeybindError {
    #[error("missing '=' between trigger and action")]
    MissingEquals,

    #[error("trigger or action missing")]
    MissingPart,

    #[error("invalid trigger format")]
    InvalidTrigger,

    /// Directive had an argument separator but no action name (`a=:x`)
    #[error("action missing")]
    MissingAction,

    #[error("global/all keybinds cannot be sequences")]
    GlobalSequence,

    #[error("invalid key '{0}'")]
    InvalidKey(String),

    #[error("invalid modifier '{0}'")]
    InvalidModifier(String),

    #[error("too many modifiers")]
    TooManyModifiers,

    #[error(transparent)]
    Action(#[from] ActionError),
}

/// Problems with an action name or its argument
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ActionError {
    #[error("unknown action '{0}'")]
    Unknown(String),

    #[error("'{action}' does not take arguments")]
    NoArguments { action: String },

    #[error("'{action}' requires arguments")]
    MissingArguments { action: String },

    #[error("'{action}' requires text argument (Zig string literal)")]
    MissingText { action: String },

    #[error("'{action}' requires a numeric argument")]
    MissingNumber { action: String },

    #[error("'{action}' expects a number, got '{value}'")]
    NotANumber { action: String, value: String },

    #[error("'{action}' requires an integer argument")]
    MissingInteger { action: String },

    #[error("'{action}' expects an integer, got '{value}'")]
    NotAnInteger { action: String, value: String },

    #[error("'{action}' requires one of [{options}].")]
    MissingChoice { action: String, options: String },

    #[error("Invalid value for '{action}': '{value}'")]
    InvalidChoice { action: String, value: String },

    #[error("'{action}' expects 'direction,offset'")]
    MissingResize { action: String },

    #[error("'{action}' direction must be {directions}")]
    InvalidDirection { action: String, directions: String },

    #[error("'{action}' requires a numeric offset")]
    MissingOffset { action: String },
}
