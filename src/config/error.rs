use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading keybinds from a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),
    /// Path could not be expanded because it is not valid UTF-8.
    #[error("Invalid path encoding: {0}")]
    InvalidPath(PathBuf),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
