use serde::{Deserialize, Serialize};

use super::types::{Background, DialogKind, View};

/// Every mutation the UI store accepts.
///
/// Each variant names exactly the field it replaces; applying one leaves all
/// other fields untouched. Variants carry owned `Copy` payloads so actions can
/// be logged, queued, or serialized as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SetShowSplash(bool),
    SetBackground(Background),
    SetView(View),
    /// Negate `visual_mode` as it stands when the action is applied.
    ToggleVisualMode,
    SetSidebarOpen(bool),
    SetShowExperimental(bool),
    SetShowExternalDependenciesDialog(bool),
    /// `None` closes whichever dialog is open.
    SetDialogToShow(Option<DialogKind>),
}

impl Action {
    /// Stable name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetShowSplash(_) => "set_show_splash",
            Action::SetBackground(_) => "set_background",
            Action::SetView(_) => "set_view",
            Action::ToggleVisualMode => "toggle_visual_mode",
            Action::SetSidebarOpen(_) => "set_sidebar_open",
            Action::SetShowExperimental(_) => "set_show_experimental",
            Action::SetShowExternalDependenciesDialog(_) => {
                "set_show_external_dependencies_dialog"
            }
            Action::SetDialogToShow(_) => "set_dialog_to_show",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_are_unique() {
        let actions = [
            Action::SetShowSplash(true),
            Action::SetBackground(Background::Idle),
            Action::SetView(View::Mining),
            Action::ToggleVisualMode,
            Action::SetSidebarOpen(true),
            Action::SetShowExperimental(true),
            Action::SetShowExternalDependenciesDialog(true),
            Action::SetDialogToShow(None),
        ];
        let mut names: Vec<_> = actions.iter().map(Action::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), actions.len());
    }

    #[test]
    fn test_action_serializes_with_payload() {
        let json = serde_json::to_string(&Action::SetDialogToShow(Some(DialogKind::Logs))).unwrap();
        assert_eq!(json, r#"{"SetDialogToShow":"logs"}"#);

        let json = serde_json::to_string(&Action::ToggleVisualMode).unwrap();
        assert_eq!(json, r#""ToggleVisualMode""#);
    }
}
