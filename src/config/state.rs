// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into render::all()
    pub current_section_index: usize,

    /// Roster tab -> show/hide the Record column
    pub roster_show_record: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_section_index: 0,
            roster_show_record: true,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: AppOptions::default(),
            gui: GuiState::default(),
        }
    }
}
