use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper: Creates a temporary config file for testing.
fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_parse_config_line() {
    assert_eq!(
        parse_config_line("keybind = ctrl+a=ignore"),
        Ok(("", ("keybind", "ctrl+a=ignore")))
    );
    assert_eq!(
        parse_config_line("font-size=12"),
        Ok(("", ("font-size", "12")))
    );
    assert_eq!(
        parse_config_line("keybind = \"super+t=new_tab\""),
        Ok(("", ("keybind", "super+t=new_tab")))
    );
    assert!(parse_config_line("= nothing").is_err());
    assert!(parse_config_line("keybind").is_err());
}

#[test]
fn test_extract_skips_comments_and_other_keys() {
    let content = r#"
# Comment line
font-family = JetBrains Mono
keybind = ctrl+a=ignore

keybind = super+shift+t=new_tab
theme = dark
"#;
    let keybinds = extract_keybinds(content);

    assert_eq!(
        keybinds,
        vec![
            KeybindLine { line: 4, directive: "ctrl+a=ignore".to_string() },
            KeybindLine { line: 6, directive: "super+shift+t=new_tab".to_string() },
        ]
    );
}

#[test]
fn test_extract_clear_resets() {
    let content = "keybind = ctrl+a=ignore\nkeybind = clear\nkeybind = ctrl+b=quit\n";
    let keybinds = extract_keybinds(content);

    assert_eq!(keybinds.len(), 1);
    assert_eq!(keybinds[0].directive, "ctrl+b=quit");
    assert_eq!(keybinds[0].line, 3);
}

#[test]
fn test_extract_ignores_empty_values() {
    let keybinds = extract_keybinds("keybind =\nkeybind = a=ignore\n");

    assert_eq!(keybinds.len(), 1);
}

#[test]
fn test_load_keybinds() {
    let (_temp_dir, config_path) = create_test_config("keybind = ctrl+a=ignore\n");

    let keybinds = load_keybinds(&config_path).unwrap();
    assert_eq!(keybinds.len(), 1);
}

#[test]
fn test_load_missing_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nonexistent");

    match load_keybinds(&config_path).unwrap_err() {
        ConfigError::NotFound(path) => assert_eq!(path, config_path),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
}

#[test]
fn test_expand_path_leaves_absolute_paths() {
    let path = PathBuf::from("/etc/ghostty/config");
    assert_eq!(expand_path(&path).unwrap(), path);
}
