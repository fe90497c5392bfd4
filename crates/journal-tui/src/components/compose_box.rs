use super::text_layout::{display_text, scroll_to_cursor};
use crate::theme::{border_style, entry, placeholder_text};
use journal_core::TextField;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PROMPT: &str = "> ";

pub struct ComposeBoxConfig<'a> {
    pub title: &'a str,
    pub placeholder: &'a str,
    pub is_focused: bool,
}

impl<'a> ComposeBoxConfig<'a> {
    pub fn new(title: &'a str, placeholder: &'a str) -> Self {
        Self {
            title,
            placeholder,
            is_focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }
}

/// Draws the entry input. The terminal cursor is only placed while focused.
pub fn render_compose_box(
    frame: &mut Frame,
    area: Rect,
    field: &TextField,
    config: &ComposeBoxConfig<'_>,
) {
    let block = Block::default()
        .title(config.title)
        .borders(Borders::ALL)
        .border_style(border_style(config.is_focused));

    let inner = block.inner(area);
    let prompt_width = PROMPT.len() as u16;
    let text_width = inner.width.saturating_sub(prompt_width) as usize;

    let (line, cursor_column) = if field.is_empty() {
        let line = Line::from(vec![
            Span::styled(PROMPT, entry()),
            Span::styled(config.placeholder, placeholder_text()),
        ]);
        (line, 0)
    } else {
        let shown = display_text(field.value());
        let cursor = display_text(field.before_cursor()).len();
        let (visible, column) = scroll_to_cursor(&shown, cursor, text_width);
        let line = Line::from(vec![
            Span::styled(PROMPT, entry()),
            Span::styled(visible, entry()),
        ]);
        (line, column)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if config.is_focused && inner.width > 0 && inner.height > 0 {
        let offset = prompt_width.saturating_add(u16::try_from(cursor_column).unwrap_or(u16::MAX));
        let cursor_x = inner.x + offset.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}
