use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StateError;

/// Themed background painted behind the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[default]
    Onboarding,
    Idle,
    Loading,
    Mining,
    Winner,
    Lose,
}

impl Background {
    pub const ALL: [Background; 6] = [
        Background::Onboarding,
        Background::Idle,
        Background::Loading,
        Background::Mining,
        Background::Winner,
        Background::Lose,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Background::Onboarding => "onboarding",
            Background::Idle => "idle",
            Background::Loading => "loading",
            Background::Mining => "mining",
            Background::Winner => "winner",
            Background::Lose => "lose",
        }
    }
}

/// Top-level view selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Setup,
    Mining,
    Tribes,
}

impl View {
    pub const ALL: [View; 3] = [View::Setup, View::Mining, View::Tribes];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Setup => "setup",
            View::Mining => "mining",
            View::Tribes => "tribes",
        }
    }
}

/// Modal dialogs the shell can raise.
///
/// "No dialog" is `None` on [`UiState::dialog_to_show`], not a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogKind {
    Logs,
    Restart,
}

impl DialogKind {
    pub const ALL: [DialogKind; 2] = [DialogKind::Logs, DialogKind::Restart];

    pub fn as_str(&self) -> &'static str {
        match self {
            DialogKind::Logs => "logs",
            DialogKind::Restart => "restart",
        }
    }
}

fn valid_list<T: Copy>(all: &[T], name: fn(&T) -> &'static str) -> String {
    all.iter().map(name).collect::<Vec<_>>().join(", ")
}

impl FromStr for Background {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Background::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| StateError::UnknownBackground {
                value: s.to_string(),
                valid: valid_list(&Background::ALL, Background::as_str),
            })
    }
}

impl FromStr for View {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| StateError::UnknownView {
                value: s.to_string(),
                valid: valid_list(&View::ALL, View::as_str),
            })
    }
}

impl FromStr for DialogKind {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DialogKind::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| StateError::UnknownDialog {
                value: s.to_string(),
                valid: valid_list(&DialogKind::ALL, DialogKind::as_str),
            })
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of every flag the shell renders from.
///
/// All fields are independent; no field constrains another. The snapshot is
/// `Copy`, so readers always get a complete, self-consistent value.
/// Serialized field names are camelCase (`showSplash`, `dialogToShow`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// Splash/loading screen visible.
    pub show_splash: bool,
    pub background: Background,
    pub view: View,
    pub visual_mode: bool,
    pub sidebar_open: bool,
    /// Gate for experimental features.
    pub show_experimental: bool,
    pub show_external_dependencies_dialog: bool,
    /// Active modal dialog. A missing or `null` value both mean none.
    #[serde(default)]
    pub dialog_to_show: Option<DialogKind>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_splash: true,
            background: Background::Onboarding,
            view: View::Setup,
            visual_mode: true,
            sidebar_open: false,
            show_experimental: false,
            show_external_dependencies_dialog: false,
            dialog_to_show: None,
        }
    }
}
