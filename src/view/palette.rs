//! Light and dark color roles for every surface

use ratatui::style::{Color, Modifier, Style};

use crate::model::ThemeMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub focus: Color,
    pub accent: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,
    pub favorite: Color,
    pub error: Color,
    pub skeleton: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    fn light() -> Self {
        Self {
            bg: Color::White,
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::Gray,
            focus: Color::Blue,
            accent: Color::Magenta,
            selection_fg: Color::White,
            selection_bg: Color::Blue,
            favorite: Color::Red,
            error: Color::Red,
            skeleton: Color::Gray,
        }
    }

    fn dark() -> Self {
        Self {
            bg: Color::Black,
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            focus: Color::Green,
            accent: Color::Cyan,
            selection_fg: Color::Black,
            selection_bg: Color::Green,
            favorite: Color::LightRed,
            error: Color::Red,
            skeleton: Color::DarkGray,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.focus)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_have_distinct_backgrounds() {
        let light = Palette::for_mode(ThemeMode::Light);
        let dark = Palette::for_mode(ThemeMode::Dark);
        assert_ne!(light.bg, dark.bg);
        assert_ne!(light.text, dark.text);
    }
}
