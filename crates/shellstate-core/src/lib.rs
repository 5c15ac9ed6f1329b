//! shellstate-core: UI state store for the desktop application shell
//!
//! Holds the flags the shell renders from (splash, background, view, visual
//! mode, sidebar, dialogs, experimental toggle) and notifies subscribers after
//! every change.
//!
//! # Main Entry Points
//!
//! - [`state`] - The `UiStore`, its actions and the reducer
//! - [`config`] - Configuration of the initial snapshot
//! - [`logging`] - Structured logging setup

pub mod config;
pub mod errors;
pub mod logging;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use config::ShellConfig;
pub use errors::{ConfigError, ShellError, ShellResult, StateError};
pub use state::{
    Action, Background, DialogKind, Store, SubscriptionId, UiState, UiStore, View, reduce,
};

// Re-export logging initialization
pub use logging::init_logging;
