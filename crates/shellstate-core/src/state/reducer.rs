use super::actions::Action;
use super::types::UiState;

/// Apply one action to a snapshot, returning the next snapshot.
///
/// Pure and total: every action is valid for every state, and only the field
/// the action names differs between input and output.
pub fn reduce(state: &UiState, action: &Action) -> UiState {
    let mut next = *state;
    match *action {
        Action::SetShowSplash(show) => next.show_splash = show,
        Action::SetBackground(background) => next.background = background,
        Action::SetView(view) => next.view = view,
        Action::ToggleVisualMode => next.visual_mode = !state.visual_mode,
        Action::SetSidebarOpen(open) => next.sidebar_open = open,
        Action::SetShowExperimental(show) => next.show_experimental = show,
        Action::SetShowExternalDependenciesDialog(show) => {
            next.show_external_dependencies_dialog = show
        }
        Action::SetDialogToShow(dialog) => next.dialog_to_show = dialog,
    }
    next
}
