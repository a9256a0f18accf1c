//! View module - UI rendering
//!
//! - `palette`: Light and dark color roles
//! - `utils`: Shared helpers (scrollable lists, popup geometry)
//! - `layout`: Top bar and suggestion dropdown
//! - `content`: Result lists, skeletons, empty states and the pager
//! - `overlays`: Detail view, error notification, help popup

mod palette;
mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};

use crate::model::ViewState;
use palette::Palette;

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, state: &ViewState) {
        let palette = Palette::for_mode(state.theme);
        frame.render_widget(Block::default().style(palette.base()), frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + theme
                Constraint::Min(0),    // Main content
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], state, &palette);
        content::render_main_content(frame, chunks[1], state, &palette);

        // Dropdown draws over the content it hangs into
        layout::render_suggestions(frame, chunks[0], state, &palette);

        if state.detail.is_open() {
            let is_favorite = state
                .detail
                .summary()
                .is_some_and(|movie| state.is_favorite(&movie.id));
            overlays::render_detail(frame, &state.detail, is_favorite, &palette);
        }

        if state.ui.show_help_popup {
            overlays::render_help_popup(frame, &palette);
        }

        // Error notification overlay (if there's an error)
        if state.ui.error_message.is_some() {
            overlays::render_error_notification(frame, &state.ui, &palette);
        }
    }
}
