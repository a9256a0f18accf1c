//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, Suggestion};
use super::navigation::PageDirection;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let model = &self.model;

        // Handle error message first (blocks all other interactions)
        if model.has_error().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                model.clear_error().await;
            }
            return Ok(());
        }

        if model.is_help_popup_open().await {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup().await;
            }
            return Ok(());
        }

        // Detail overlay
        let detail = model.detail.view().await;
        if detail.is_open() {
            match key.code {
                KeyCode::Esc | KeyCode::Backspace => self.close_detail().await,
                KeyCode::Char('f') | KeyCode::Char('F') => {
                    if let Some(movie) = detail.summary() {
                        self.toggle_favorite(movie).await;
                    }
                }
                _ => {}
            }
            return Ok(());
        }

        let ui_state = model.get_ui_state().await;

        if ui_state.active_section == ActiveSection::Search {
            self.handle_search_key(key).await;
            return Ok(());
        }

        // Results section
        let view = model.snapshot().await;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Up => model.move_selection_up().await,
            KeyCode::Down => model.move_selection_down(view.visible_movies().len()).await,
            KeyCode::Enter => {
                if let Some(movie) = view.selected_movie() {
                    self.open_detail(movie.id.clone());
                }
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                if let Some(movie) = view.selected_movie() {
                    self.toggle_favorite(movie).await;
                }
            }
            KeyCode::Left | KeyCode::Char('p') | KeyCode::Char('P') => {
                if !view.ui.show_favorites {
                    self.change_page(PageDirection::Prev);
                }
            }
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char('N') => {
                if !view.ui.show_favorites {
                    self.change_page(PageDirection::Next);
                }
            }
            KeyCode::Char('v') | KeyCode::Char('V') => model.toggle_favorites_view().await,
            KeyCode::Char('t') | KeyCode::Char('T') => self.toggle_theme().await,
            KeyCode::Char('/') | KeyCode::Tab | KeyCode::BackTab => {
                model.set_active_section(ActiveSection::Search).await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => model.show_help_popup().await,
            _ => {}
        }
        Ok(())
    }

    async fn handle_search_key(&self, key: KeyEvent) {
        let model = &self.model;

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => model.toggle_active_section().await,
            KeyCode::Enter => {
                let suggestions = model.suggestions.snapshot().await;
                let pick = model
                    .sync_suggestion_list(suggestions.list_generation)
                    .await
                    .and_then(|i| suggestions.items.get(i).cloned())
                    .map(Suggestion::Movie)
                    .unwrap_or(Suggestion::Text(suggestions.input));
                self.commit_search(pick).await;
            }
            KeyCode::Esc => {
                model.suggestions.clear().await;
                model.reset_suggestion_selection().await;
            }
            KeyCode::Down => {
                let suggestions = model.suggestions.snapshot().await;
                model.sync_suggestion_list(suggestions.list_generation).await;
                model.suggestion_move_down(suggestions.items.len()).await;
            }
            KeyCode::Up => {
                let suggestions = model.suggestions.snapshot().await;
                model.sync_suggestion_list(suggestions.list_generation).await;
                model.suggestion_move_up().await;
            }
            KeyCode::Backspace => {
                let mut input = model.suggestions.input().await;
                input.pop();
                self.update_input(input).await;
            }
            KeyCode::Char(c) => {
                // Q still quits even in search mode when Ctrl is pressed
                if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    model.set_should_quit(true).await;
                    return;
                }
                let mut input = model.suggestions.input().await;
                input.push(c);
                self.update_input(input).await;
            }
            _ => {}
        }
    }

    async fn update_input(&self, input: String) {
        self.model.reset_suggestion_selection().await;
        self.model.suggestions.input_changed(input).await;
    }
}
