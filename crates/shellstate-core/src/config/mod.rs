//! # Configuration System
//!
//! Hierarchical TOML configuration for the shell's UI store.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.shellstate/config.toml`
//! 3. **Project config** - `./.shellstate/config.toml`
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use shellstate_core::{ShellConfig, UiStore};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ShellConfig::load_hierarchy()?;
//!     let _store = UiStore::from_config(&config)?;
//!     Ok(())
//! }
//! ```

pub mod loading;
pub mod types;
pub mod validation;

pub use types::{LoggingConfig, ShellConfig, UiDefaults};
pub use validation::validate_config;

impl ShellConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
