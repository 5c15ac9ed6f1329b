use std::fmt;

use tracing::debug;

use super::actions::Action;
use super::reducer::reduce;
use super::types::{Background, DialogKind, UiState, View};
use crate::config::ShellConfig;
use crate::errors::ConfigError;

/// Trait for dispatching UI actions.
///
/// # Semantics
///
/// - **Ordering**: Actions apply in the order received. No batching.
/// - **Totality**: Every action is valid for every state; dispatch cannot fail.
/// - **Notification**: Implementations notify observers after every dispatch,
///   including ones that leave the snapshot unchanged.
pub trait Store {
    /// Apply `action` and return the resulting snapshot.
    fn dispatch(&mut self, action: Action) -> UiState;

    /// Current snapshot.
    fn snapshot(&self) -> UiState;
}

/// Handle returned by [`UiStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Observer callback, invoked as `(current, previous)`.
type Subscriber = Box<dyn FnMut(&UiState, &UiState)>;

/// Owned holder of the shell's UI state.
///
/// Construct one at the composition root and pass it (or `&mut` to it) to the
/// code that needs it. Dropping the store drops all subscribers.
///
/// Subscribers run synchronously, in registration order, after the new
/// snapshot is stored. They receive `&UiState` values and cannot reach the
/// store, so a notification can never observe a partial write.
pub struct UiStore {
    state: UiState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl UiStore {
    /// Create a store holding the default snapshot.
    pub fn new() -> Self {
        Self::with_initial(UiState::default())
    }

    /// Create a store starting from `initial`.
    pub fn with_initial(initial: UiState) -> Self {
        debug!(
            event = "core.store.created",
            background = %initial.background,
            view = %initial.view
        );
        Self {
            state: initial,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a store whose initial snapshot comes from the `[ui]` config section.
    pub fn from_config(config: &ShellConfig) -> Result<Self, ConfigError> {
        let initial = config.ui.initial_state()?;
        Ok(Self::with_initial(initial))
    }

    /// Register `callback` to run after every dispatch.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&UiState, &UiState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));

        debug!(
            event = "core.store.subscribed",
            subscription_id = id.0,
            subscriber_count = self.subscribers.len()
        );
        id
    }

    /// Remove a subscriber. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        let removed = self.subscribers.len() != before;

        debug!(
            event = "core.store.unsubscribed",
            subscription_id = id.0,
            removed,
            subscriber_count = self.subscribers.len()
        );
        removed
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> UiState {
        self.state
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn set_show_splash(&mut self, show: bool) -> UiState {
        self.dispatch(Action::SetShowSplash(show))
    }

    pub fn set_background(&mut self, background: Background) -> UiState {
        self.dispatch(Action::SetBackground(background))
    }

    pub fn set_view(&mut self, view: View) -> UiState {
        self.dispatch(Action::SetView(view))
    }

    pub fn toggle_visual_mode(&mut self) -> UiState {
        self.dispatch(Action::ToggleVisualMode)
    }

    pub fn set_sidebar_open(&mut self, open: bool) -> UiState {
        self.dispatch(Action::SetSidebarOpen(open))
    }

    pub fn set_show_experimental(&mut self, show: bool) -> UiState {
        self.dispatch(Action::SetShowExperimental(show))
    }

    pub fn set_show_external_dependencies_dialog(&mut self, show: bool) -> UiState {
        self.dispatch(Action::SetShowExternalDependenciesDialog(show))
    }

    pub fn set_dialog_to_show(&mut self, dialog: Option<DialogKind>) -> UiState {
        self.dispatch(Action::SetDialogToShow(dialog))
    }
}

impl Default for UiStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Store for UiStore {
    fn dispatch(&mut self, action: Action) -> UiState {
        debug!(
            event = "core.store.dispatch_started",
            action = action.name(),
            payload = ?action
        );

        let previous = self.state;
        self.state = reduce(&previous, &action);

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.state, &previous);
        }

        debug!(
            event = "core.store.dispatch_completed",
            action = action.name(),
            changed = self.state != previous,
            notified = self.subscribers.len()
        );
        self.state
    }

    fn snapshot(&self) -> UiState {
        self.state
    }
}

impl Drop for UiStore {
    fn drop(&mut self) {
        debug!(
            event = "core.store.dropped",
            subscriber_count = self.subscribers.len()
        );
    }
}

impl fmt::Debug for UiStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
