//! Cross-cutting session state: theme and the global request status.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Outcome of the most recent async operation, whichever slice ran it.
///
/// Not scoped per request: two operations in flight overwrite each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub theme_mode: ThemeMode,
    pub status: RequestStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    SetThemeMode(ThemeMode),
    ToggleThemeMode,
    SetStatus(RequestStatus),
}

pub fn reduce(state: &mut AppState, action: AppAction) {
    match action {
        AppAction::SetThemeMode(mode) => state.theme_mode = mode,
        AppAction::ToggleThemeMode => state.theme_mode = state.theme_mode.toggled(),
        AppAction::SetStatus(status) => state.status = status,
    }
}
