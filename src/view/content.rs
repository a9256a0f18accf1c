//! Main content area rendering (result lists, skeletons, empty states, pager)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, EmptyReason, MovieSummary, Pagination, SearchState, ViewState};
use super::palette::Palette;
use super::utils::{render_scrollable_list, truncate_string};

const SKELETON_ROWS: usize = 6;

pub fn render_main_content(frame: &mut Frame, area: Rect, state: &ViewState, palette: &Palette) {
    let focused = state.ui.active_section == ActiveSection::Results;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(heading(state))
        .title_style(palette.title())
        .padding(Padding::horizontal(1))
        .border_style(palette.border_style(focused));

    if state.ui.show_favorites {
        if state.favorites.is_empty() {
            render_message(
                frame,
                area,
                block,
                palette,
                "No favorites yet",
                "Press F on a movie to save it here.",
            );
        } else {
            render_movie_list(frame, area, block, state, palette, focused);
        }
        return;
    }

    let (list_area, footer_area) = match state.pagination {
        Some(_) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        }
        None => (area, None),
    };

    match &state.search {
        SearchState::Loading { .. } => render_skeleton(frame, list_area, block, palette),
        SearchState::Idle if state.popular.loading && state.popular.movies.is_empty() => {
            render_skeleton(frame, list_area, block, palette)
        }
        SearchState::Idle if state.popular.movies.is_empty() => render_message(
            frame,
            list_area,
            block,
            palette,
            "Type a title to start searching",
            "Press H for keyboard shortcuts.",
        ),
        SearchState::Empty { query, reason: EmptyReason::NoMatch } => render_message(
            frame,
            list_area,
            block,
            palette,
            &format!("No results found for \"{}\"", query),
            "Try a different title or check the spelling.",
        ),
        SearchState::Empty { reason: EmptyReason::Failed, .. } => render_message(
            frame,
            list_area,
            block,
            palette,
            "Could not reach the movie database",
            "Check your connection and search again.",
        ),
        SearchState::Idle | SearchState::Ready(_) => {
            render_movie_list(frame, list_area, block, state, palette, focused)
        }
    }

    if let (Some(pagination), Some(footer)) = (state.pagination, footer_area) {
        render_pagination(frame, footer, pagination, palette);
    }
}

fn heading(state: &ViewState) -> String {
    if state.ui.show_favorites {
        format!(" Favorites ({}) ", state.favorites.len())
    } else {
        match &state.search {
            SearchState::Idle => " Popular Movie Suggestions ".to_string(),
            SearchState::Ready(page) => format!(" Search Results ({} found) ", page.total_results),
            SearchState::Loading { query, page } => {
                format!(" Search Results: \"{}\" page {} ", query, page)
            }
            SearchState::Empty { .. } => " Search Results ".to_string(),
        }
    }
}

fn render_movie_list(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    state: &ViewState,
    palette: &Palette,
    focused: bool,
) {
    let movies = state.visible_movies();
    let selected = state.selected_index().min(movies.len().saturating_sub(1));
    // borders (2) + padding (2) + marker (4) + year column (7)
    let title_width = (area.width as usize).saturating_sub(15);

    let items: Vec<ListItem> = movies
        .iter()
        .enumerate()
        .map(|(i, movie)| movie_row(movie, state.is_favorite(&movie.id), title_width, palette, focused && i == selected))
        .collect();

    render_scrollable_list(frame, area, items, selected, block);
}

fn movie_row<'a>(
    movie: &MovieSummary,
    favorite: bool,
    title_width: usize,
    palette: &Palette,
    highlighted: bool,
) -> ListItem<'a> {
    let marker = if favorite { " ♥  " } else { "    " };
    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.favorite)),
        Span::raw(truncate_string(&movie.title, title_width)),
        Span::styled(format!(" {:>6}", movie.year), Style::default().fg(palette.text_dim)),
    ]);

    let style = if highlighted {
        palette.selected()
    } else {
        Style::default().fg(palette.text)
    };
    ListItem::new(line).style(style)
}

fn render_skeleton(frame: &mut Frame, area: Rect, block: Block, palette: &Palette) {
    let bar_width = (area.width as usize).saturating_sub(12).max(8);
    let lines: Vec<Line> = (0..SKELETON_ROWS)
        .map(|i| {
            // vary the bar lengths a little so rows read as placeholders
            let width = bar_width.saturating_sub((i % 3) * 6).max(4);
            Line::from(vec![
                Span::raw("    "),
                Span::styled("░".repeat(width), Style::default().fg(palette.skeleton)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_message(
    frame: &mut Frame,
    area: Rect,
    block: Block,
    palette: &Palette,
    headline: &str,
    hint: &str,
) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(hint.to_string(), Style::default().fg(palette.text_dim))),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_pagination(frame: &mut Frame, area: Rect, pagination: Pagination, palette: &Palette) {
    let control = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(label, Style::default().fg(palette.text_dim).add_modifier(Modifier::DIM))
        }
    };

    let line = Line::from(vec![
        control("◀ Prev", pagination.has_prev()),
        Span::raw(format!("   Page {} of {}   ", pagination.page, pagination.total_pages)),
        control("Next ▶", pagination.has_next()),
    ])
    .centered();

    let footer = Paragraph::new(line).style(Style::default().fg(palette.text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style(false)),
    );
    frame.render_widget(footer, area);
}
