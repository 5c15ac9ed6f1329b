//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [ui]
//! show_splash = false
//! background = "idle"
//! view = "mining"
//! visual_mode = false
//! sidebar_open = true
//! show_experimental = true
//!
//! [logging]
//! quiet = true
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::StateError;
use crate::state::{Background, UiState, View};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.shellstate/config.toml`
/// 2. Project config: `./.shellstate/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShellConfig {
    /// Overrides for the store's initial snapshot
    #[serde(default)]
    pub ui: UiDefaults,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial values for the UI store.
///
/// Unset fields keep the built-in defaults. Dialog fields are not
/// configurable; the shell always starts with no dialog open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UiDefaults {
    #[serde(default)]
    pub show_splash: Option<bool>,
    /// Background identifier, e.g. `"onboarding"`
    #[serde(default)]
    pub background: Option<String>,
    /// View identifier, e.g. `"setup"`
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub visual_mode: Option<bool>,
    #[serde(default)]
    pub sidebar_open: Option<bool>,
    #[serde(default)]
    pub show_experimental: Option<bool>,
}

impl UiDefaults {
    /// Build the store's starting snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if `background` or `view` is not a known identifier.
    pub fn initial_state(&self) -> Result<UiState, StateError> {
        let defaults = UiState::default();

        let background = match &self.background {
            Some(name) => name.parse::<Background>()?,
            None => defaults.background,
        };
        let view = match &self.view {
            Some(name) => name.parse::<View>()?,
            None => defaults.view,
        };

        Ok(UiState {
            show_splash: self.show_splash.unwrap_or(defaults.show_splash),
            background,
            view,
            visual_mode: self.visual_mode.unwrap_or(defaults.visual_mode),
            sidebar_open: self.sidebar_open.unwrap_or(defaults.sidebar_open),
            show_experimental: self.show_experimental.unwrap_or(defaults.show_experimental),
            ..defaults
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Only emit error-level events
    #[serde(default)]
    pub quiet: Option<bool>,
}

impl LoggingConfig {
    pub fn is_quiet(&self) -> bool {
        self.quiet.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::DialogKind;

    #[test]
    fn test_empty_config_yields_default_state() {
        let config: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.ui.initial_state().unwrap(), UiState::default());
        assert!(!config.logging.is_quiet());
    }

    #[test]
    fn test_ui_overrides_apply_to_initial_state() {
        let config: ShellConfig = toml::from_str(
            r#"
            [ui]
            show_splash = false
            background = "idle"
            view = "mining"
            sidebar_open = true
            "#,
        )
        .unwrap();

        let state = config.ui.initial_state().unwrap();
        assert_eq!(
            state,
            UiState {
                show_splash: false,
                background: Background::Idle,
                view: View::Mining,
                sidebar_open: true,
                ..UiState::default()
            }
        );
    }

    #[test]
    fn test_dialog_always_starts_closed() {
        let ui = UiDefaults {
            show_experimental: Some(true),
            ..Default::default()
        };
        let state = ui.initial_state().unwrap();
        assert_eq!(state.dialog_to_show, None::<DialogKind>);
        assert!(!state.show_external_dependencies_dialog);
    }

    #[test]
    fn test_unknown_background_is_rejected() {
        let ui = UiDefaults {
            background: Some("sunset".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            ui.initial_state(),
            Err(StateError::UnknownBackground { value, .. }) if value == "sunset"
        ));
    }

    #[test]
    fn test_unknown_view_is_rejected() {
        let ui = UiDefaults {
            view: Some("Setup".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            ui.initial_state(),
            Err(StateError::UnknownView { .. })
        ));
    }

    #[test]
    fn test_logging_quiet_parses() {
        let config: ShellConfig = toml::from_str("[logging]\nquiet = true\n").unwrap();
        assert!(config.logging.is_quiet());
    }
}
