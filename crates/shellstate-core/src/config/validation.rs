//! Configuration validation.

use crate::config::types::ShellConfig;
use crate::errors::ConfigError;

/// Validate the configuration.
///
/// Checks that every enum identifier in `[ui]` names a known value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` describing the first bad value.
pub fn validate_config(config: &ShellConfig) -> Result<(), ConfigError> {
    config.ui.initial_state()?;
    Ok(())
}
