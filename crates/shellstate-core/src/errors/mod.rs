use std::error::Error;

/// Base trait for all application errors
pub trait ShellError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type ShellResult<T> = Result<T, Box<dyn ShellError>>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ShellError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. } | ConfigError::InvalidConfiguration { .. }
        )
    }
}

/// Raised when a string identifier does not name a known state value.
///
/// Only reachable from text input (config files, JSON). Rust callers hold
/// the typed enums and cannot construct an invalid value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("Unknown background '{value}'. Valid backgrounds: {valid}")]
    UnknownBackground { value: String, valid: String },

    #[error("Unknown view '{value}'. Valid views: {valid}")]
    UnknownView { value: String, valid: String },

    #[error("Unknown dialog '{value}'. Valid dialogs: {valid}")]
    UnknownDialog { value: String, valid: String },
}

impl ShellError for StateError {
    fn error_code(&self) -> &'static str {
        match self {
            StateError::UnknownBackground { .. } => "UNKNOWN_BACKGROUND",
            StateError::UnknownView { .. } => "UNKNOWN_VIEW",
            StateError::UnknownDialog { .. } => "UNKNOWN_DIALOG",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

impl From<StateError> for ConfigError {
    fn from(err: StateError) -> Self {
        ConfigError::InvalidConfiguration {
            message: err.to_string(),
        }
    }
}
