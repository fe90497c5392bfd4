use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        focused_border()
    } else {
        unfocused_border()
    }
}

/// Presentation style every rendered entry carries.
pub fn entry() -> Style {
    Style::default().fg(ENTRY_TEXT)
}

pub fn selected_entry() -> Style {
    entry().bg(SELECTED_BG).add_modifier(Modifier::BOLD)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn placeholder_text() -> Style {
    label_text().add_modifier(Modifier::DIM)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}
