//! Configuration loading and merging logic.
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.shellstate/config.toml`
//! 3. **Project config** - `./.shellstate/config.toml`

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::types::{LoggingConfig, ShellConfig, UiDefaults};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".shellstate";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<ShellConfig, ConfigError> {
    let user_path = user_config_path();
    let project_path = std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    load_from_paths(user_path.as_deref(), Some(project_path.as_path()))
}

/// Load and merge the given config files, in order of increasing precedence.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: Option<&Path>,
) -> Result<ShellConfig, ConfigError> {
    let mut config = ShellConfig::default();

    for path in [user_path, project_path].into_iter().flatten() {
        match load_optional_config_file(path)? {
            Some(file_config) => config = merge_configs(config, file_config),
            None => debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            ),
        }
    }

    validate_config(&config)?;

    info!(
        event = "core.config.load_completed",
        quiet = config.logging.is_quiet()
    );
    Ok(config)
}

/// Load a config file, returning `None` if it does not exist.
fn load_optional_config_file(path: &Path) -> Result<Option<ShellConfig>, ConfigError> {
    match load_config_file(path) {
        Ok(config) => Ok(Some(config)),
        Err(ConfigError::IoError { source }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Load a configuration file from the given path.
pub fn load_config_file(path: &Path) -> Result<ShellConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Path of the user config file, if a home directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Each optional field takes the override value only if it is set.
pub fn merge_configs(base: ShellConfig, override_config: ShellConfig) -> ShellConfig {
    let (base_ui, over_ui) = (base.ui, override_config.ui);
    ShellConfig {
        ui: UiDefaults {
            show_splash: over_ui.show_splash.or(base_ui.show_splash),
            background: over_ui.background.or(base_ui.background),
            view: over_ui.view.or(base_ui.view),
            visual_mode: over_ui.visual_mode.or(base_ui.visual_mode),
            sidebar_open: over_ui.sidebar_open.or(base_ui.sidebar_open),
            show_experimental: over_ui.show_experimental.or(base_ui.show_experimental),
        },
        logging: LoggingConfig {
            quiet: override_config.logging.quiet.or(base.logging.quiet),
        },
    }
}
