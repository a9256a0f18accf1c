//! Core type definitions for the application

use std::time::Instant;

/// Which section of the UI has keyboard focus
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    Search,
    Results,
}

impl ActiveSection {
    pub fn toggled(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Results,
            ActiveSection::Results => ActiveSection::Search,
        }
    }
}

/// UI state for the application
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_section: ActiveSection,
    /// Highlighted row in the suggestion dropdown; `None` means the raw input
    pub suggestion_selected: Option<usize>,
    /// List generation the highlight was made against
    pub suggestion_list: u64,
    pub result_selected: usize,
    pub show_favorites: bool,
    pub favorites_selected: usize,
    pub show_help_popup: bool,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
}
