//! Layout rendering (top bar, suggestion dropdown)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, ThemeMode, ViewState};
use super::palette::Palette;
use super::utils::{render_scrollable_list, truncate_string};

const MAX_DROPDOWN_ROWS: u16 = 8;

pub fn render_top_bar(frame: &mut Frame, area: Rect, state: &ViewState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(14), // Theme mode
        ])
        .split(area);

    let focused = state.ui.active_section == ActiveSection::Search;
    let input = &state.suggestions.input;

    let (search_text, search_style) = if input.is_empty() {
        ("Search for a movie...".to_string(), Style::default().fg(palette.text_dim))
    } else if focused {
        (format!("{}▏", input), Style::default().fg(palette.text))
    } else {
        (input.clone(), Style::default().fg(palette.text))
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(palette.border_style(focused)),
    );
    frame.render_widget(search, chunks[0]);

    let icon = match state.theme {
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "☾",
    };
    let theme = Paragraph::new(format!("{} {}", icon, state.theme.as_str()))
        .style(Style::default().fg(palette.accent))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Theme ")
                .border_style(palette.border_style(false)),
        );
    frame.render_widget(theme, chunks[1]);
}

/// Dropdown under the search box while the input has focus
pub fn render_suggestions(frame: &mut Frame, search_area: Rect, state: &ViewState, palette: &Palette) {
    let suggestions = &state.suggestions;
    if state.ui.active_section != ActiveSection::Search
        || (suggestions.items.is_empty() && !suggestions.loading)
    {
        return;
    }

    let frame_area = frame.area();
    let rows = if suggestions.loading {
        1
    } else {
        (suggestions.items.len() as u16).min(MAX_DROPDOWN_ROWS)
    };
    let width = search_area.width.saturating_sub(14).max(20).min(frame_area.width);
    let height = (rows + 2).min(frame_area.height.saturating_sub(search_area.bottom()));
    if height < 3 {
        return;
    }
    let area = Rect {
        x: search_area.x,
        y: search_area.bottom(),
        width,
        height,
    };

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style(true))
        .style(palette.base());

    if suggestions.loading {
        let spinner = Paragraph::new("⠋ Searching...")
            .style(Style::default().fg(palette.text_dim).add_modifier(Modifier::ITALIC))
            .block(block);
        frame.render_widget(spinner, area);
        return;
    }

    let inner_width = width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = suggestions
        .items
        .iter()
        .enumerate()
        .map(|(i, movie)| {
            let style = if state.ui.suggestion_selected == Some(i) {
                palette.selected()
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(format!(" {}", truncate_string(&movie.label(), inner_width))).style(style)
        })
        .collect();

    render_scrollable_list(
        frame,
        area,
        items,
        state.ui.suggestion_selected.unwrap_or(0),
        block,
    );
}
