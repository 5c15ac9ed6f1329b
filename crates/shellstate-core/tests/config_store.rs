//! Loads config files from disk and builds a store from them.

use std::cell::RefCell;
use std::fs;
use std::rc::Rc;

use shellstate_core::config::loading::{load_config_file, load_from_paths};
use shellstate_core::{
    Background, ConfigError, DialogKind, ShellError, UiState, UiStore, View,
};

fn write_config(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn project_config_overrides_user_config() {
    let dir = tempfile::tempdir().unwrap();
    let user = write_config(
        &dir,
        "user.toml",
        r#"
        [ui]
        background = "idle"
        show_experimental = true

        [logging]
        quiet = true
        "#,
    );
    let project = write_config(
        &dir,
        "project.toml",
        r#"
        [ui]
        background = "mining"
        view = "mining"
        "#,
    );

    let config = load_from_paths(Some(user.as_path()), Some(project.as_path())).unwrap();
    assert!(config.logging.is_quiet());

    let store = UiStore::from_config(&config).unwrap();
    assert_eq!(
        store.snapshot(),
        UiState {
            background: Background::Mining,
            view: View::Mining,
            show_experimental: true,
            ..UiState::default()
        }
    );
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let config = load_from_paths(Some(missing.as_path()), None).unwrap();
    let store = UiStore::from_config(&config).unwrap();
    assert_eq!(store.snapshot(), UiState::default());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "bad.toml", "[ui\nshow_splash = ");

    let err = load_config_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    assert_eq!(err.error_code(), "CONFIG_PARSE_ERROR");
    assert!(err.is_user_error());
}

#[test]
fn unknown_identifier_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "config.toml", "[ui]\nbackground = \"sunset\"\n");

    let err = load_from_paths(Some(path.as_path()), None).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    assert!(err.to_string().contains("Unknown background 'sunset'"));
}

#[test]
fn store_built_from_config_notifies_subscribers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "config.toml", "[ui]\nshow_splash = false\n");
    let config = load_from_paths(None, Some(path.as_path())).unwrap();

    let mut store = UiStore::from_config(&config).unwrap();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |current, previous| {
        sink.borrow_mut()
            .push((current.dialog_to_show, previous.dialog_to_show));
    });

    store.set_dialog_to_show(Some(DialogKind::Restart));
    store.set_dialog_to_show(None);

    assert_eq!(
        *seen.borrow(),
        vec![(Some(DialogKind::Restart), None), (None, Some(DialogKind::Restart))]
    );
    assert!(!store.snapshot().show_splash);
}
