use tabshell::types::errors::{ConfigError, ShortcutError, TabError};

#[test]
fn test_tab_error_display() {
    assert_eq!(
        TabError::NotFound("abc".to_string()).to_string(),
        "Tab not found: abc"
    );
    assert_eq!(
        TabError::LastTab.to_string(),
        "Cannot close the last remaining tab"
    );
}

#[test]
fn test_shortcut_error_display() {
    assert_eq!(
        ShortcutError::NotFound("new_tab".to_string()).to_string(),
        "Shortcut not found for action: new_tab"
    );
    assert!(ShortcutError::Conflict("x".to_string())
        .to_string()
        .contains("conflict"));
    assert!(ShortcutError::InvalidKeys("??".to_string())
        .to_string()
        .contains("??"));
}

#[test]
fn test_config_error_display() {
    assert!(ConfigError::IoError("denied".to_string())
        .to_string()
        .contains("denied"));
    assert!(ConfigError::ParseError("eof".to_string())
        .to_string()
        .contains("eof"));
    assert!(ConfigError::HomepagePath("bad".to_string())
        .to_string()
        .contains("bad"));
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error>(_e: &E) {}
    assert_error(&TabError::LastTab);
    assert_error(&ShortcutError::NotFound(String::new()));
    assert_error(&ConfigError::IoError(String::new()));
}
