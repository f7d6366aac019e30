//! Reading keybind directives out of Ghostty configuration files.
//!
//! Ghostty configs are `key = value` lines. Every `keybind` line adds one
//! directive, and the special value `keybind = clear` drops all keybinds
//! collected so far. This module extracts the directives, with their line
//! numbers, so they can be fed to the diagnostics engine.
//!
//! The core never touches the filesystem; all file access lives here.
//!
//! # Example
//!
//! ```
//! use ghostty_keybind_lint::config::extract_keybinds;
//!
//! let content = "font-size = 12\nkeybind = ctrl+a=ignore\n";
//! let keybinds = extract_keybinds(content);
//!
//! assert_eq!(keybinds.len(), 1);
//! assert_eq!(keybinds[0].line, 2);
//! assert_eq!(keybinds[0].directive, "ctrl+a=ignore");
//! ```

mod error;

pub use error::ConfigError;

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    IResult, Parser,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the Ghostty config, before tilde expansion
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/ghostty/config";

/// Config key holding keybind directives
const KEYBIND_KEY: &str = "keybind";

/// Value that resets every keybind collected so far
const CLEAR_VALUE: &str = "clear";

/// A keybind directive together with where it came from
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeybindLine {
    /// 1-based line number in the config file
    pub line: usize,
    /// The directive text, e.g. `ctrl+a=ignore`
    pub directive: String,
}

/// Parse a `key = value` config line
///
/// Keys are lowercase words joined by `-` (`font-size`, `keybind`). The
/// value is the rest of the line with surrounding whitespace and a single
/// pair of enclosing double quotes removed.
pub fn parse_config_line(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, key) = take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-')(input)?;
    let (value, _) = (space0, char('='), space0).parse(input)?;

    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);

    Ok(("", (key, value)))
}

/// Extract all keybind directives from config file content
///
/// Blank lines, `#` comments and lines that are not `key = value` are
/// skipped. `keybind = clear` discards every directive seen before it.
pub fn extract_keybinds(content: &str) -> Vec<KeybindLine> {
    let mut keybinds = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;

        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }

        let Ok((_, (key, value))) = parse_config_line(line_trimmed) else {
            debug!(line = line_num, "skipping unparseable config line");
            continue;
        };

        if key != KEYBIND_KEY || value.is_empty() {
            continue;
        }

        if value == CLEAR_VALUE {
            debug!(line = line_num, dropped = keybinds.len(), "keybind = clear");
            keybinds.clear();
            continue;
        }

        keybinds.push(KeybindLine {
            line: line_num,
            directive: value.to_string(),
        });
    }

    keybinds
}

/// Expand a leading `~` in a config path
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?;

    Ok(PathBuf::from(shellexpand::tilde(raw).as_ref()))
}

/// Read a config file and extract its keybind directives
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file doesn't exist,
/// `ConfigError::InvalidPath` if the path isn't valid UTF-8, and
/// `ConfigError::Io` if it cannot be read.
pub fn load_keybinds(path: &Path) -> Result<Vec<KeybindLine>, ConfigError> {
    let path = expand_path(path)?;

    if !path.exists() {
        return Err(ConfigError::NotFound(path));
    }

    let content = fs::read_to_string(&path)?;
    let keybinds = extract_keybinds(&content);

    info!(path = %path.display(), keybinds = keybinds.len(), "loaded keybinds from config");

    Ok(keybinds)
}

#[cfg(test)]
mod tests;
