//! UI state store.
//!
//! `UiStore` owns a `UiState` snapshot and is the only way to change it. Each
//! change is an `Action` applied by the pure `reduce` function, after which
//! every subscriber is called with the new and previous snapshots.

pub mod actions;
pub mod reducer;
pub mod store;
pub mod types;

pub use actions::Action;
pub use reducer::reduce;
pub use store::{Store, SubscriptionId, UiStore};
pub use types::{Background, DialogKind, UiState, View};
