//! Overlay rendering (detail view, error notification, help popup)

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::{DetailView, MovieDetail, TrailerState, UiState};
use super::palette::Palette;
use super::utils::centered_rect;

pub fn render_detail(frame: &mut Frame, detail: &DetailView, is_favorite: bool, palette: &Palette) {
    let area = frame.area();
    let popup_area = centered_rect(area, 72, 22);

    let lines = match detail {
        DetailView::Closed => return,
        DetailView::Loading { id } => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("Loading details for {}...", id),
                Style::default().fg(palette.text_dim),
            )),
        ],
        DetailView::Failed { id } => vec![
            Line::from(""),
            Line::from(Span::styled("No details found.", Style::default().fg(palette.text))),
            Line::from(Span::styled(id.as_str(), Style::default().fg(palette.text_dim))),
        ],
        DetailView::Loaded { detail, trailer } => detail_lines(detail, trailer, is_favorite, palette),
    };

    frame.render_widget(Clear, popup_area);

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Movie Details (F favorite, Esc close) ")
                .title_style(palette.title())
                .style(palette.base()),
        );
    frame.render_widget(widget, popup_area);
}

fn detail_lines<'a>(
    detail: &'a MovieDetail,
    trailer: &'a TrailerState,
    is_favorite: bool,
    palette: &Palette,
) -> Vec<Line<'a>> {
    let label = Style::default().fg(palette.accent).add_modifier(Modifier::BOLD);
    let value = Style::default().fg(palette.text);

    let mut title = vec![Span::styled(
        detail.summary.label(),
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    )];
    if is_favorite {
        title.push(Span::styled("  ♥", Style::default().fg(palette.favorite)));
    }

    let mut lines = vec![Line::from(title), Line::from("")];

    // upstream placeholders were already mapped to None
    let fields = [
        ("Genre", &detail.genre),
        ("Director", &detail.director),
        ("Cast", &detail.cast),
        ("Rating", &detail.rating),
    ];
    for (name, field) in fields {
        if let Some(text) = field {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", name), label),
                Span::styled(text.as_str(), value),
            ]));
        }
    }

    if let Some(plot) = &detail.plot {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(plot.as_str(), value)));
    }

    match trailer {
        TrailerState::Searching => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Looking for a trailer...",
                Style::default().fg(palette.text_dim),
            )));
        }
        TrailerState::Found(trailer) => {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", "Trailer"), label),
                Span::styled(
                    trailer.embed_url.as_str(),
                    Style::default().fg(palette.focus).add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
        TrailerState::Unavailable => {}
    }

    if let Some(poster) = &detail.summary.poster_url {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", "Poster"), label),
            Span::styled(poster.as_str(), Style::default().fg(palette.text_dim)),
        ]));
    }

    lines
}

pub fn render_error_notification(frame: &mut Frame, ui_state: &UiState, palette: &Palette) {
    if let Some(ref error_msg) = ui_state.error_message {
        let area = frame.area();

        let popup_width = 52.min(area.width.saturating_sub(4));
        let inner_width = popup_width.saturating_sub(4).max(1) as usize;

        // Calculate how many lines the error message will take when wrapped
        let error_line_count = error_msg.chars().count().div_ceil(inner_width) as u16;

        // Height: top border (1) + error lines + bottom border (1)
        let popup_area = centered_rect(area, popup_width, 2 + error_line_count.max(1));

        // Clear the area behind the popup first
        frame.render_widget(Clear, popup_area);

        let error_widget = Paragraph::new(error_msg.to_string())
            .style(Style::default().fg(palette.error))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.error))
                    .title(" Error (Esc to dismiss) ")
                    .title_style(Style::default().fg(palette.error).add_modifier(Modifier::BOLD))
                    .style(palette.base()),
            );

        frame.render_widget(error_widget, popup_area);
    }
}

pub fn render_help_popup(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();

    let keybindings = [
        ("", "── Search ──"),
        ("Type", "Edit query (suggestions after 2 chars)"),
        ("↑ / ↓", "Pick a suggestion"),
        ("Enter", "Search"),
        ("Esc", "Clear input"),
        ("Tab", "Go to results"),
        ("", ""),
        ("", "── Results ──"),
        ("↑ / ↓", "Move selection"),
        ("Enter", "Open details"),
        ("← / P", "Previous page"),
        ("→ / N", "Next page"),
        ("F", "Favorite / Unfavorite"),
        ("V", "Toggle favorites list"),
        ("/ or Tab", "Focus search"),
        ("", ""),
        ("", "── General ──"),
        ("T", "Toggle light / dark theme"),
        ("H", "Toggle this help"),
        ("Q / Ctrl+Q", "Quit"),
    ];

    let popup_area = centered_rect(area, 62, keybindings.len() as u16 + 2);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>14}", key),
                        Style::default().fg(palette.focus).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(palette.text)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(" Help (H or Esc to close) ")
            .title_style(palette.title())
            .style(palette.base()),
    );

    frame.render_widget(help_text, popup_area);
}
