use super::text_layout::{display_text, wrap_to_width};
use crate::theme::{border_style, entry, label_text, selected_entry};
use journal_domain::EntryList;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub struct EntryListConfig<'a> {
    pub title: &'a str,
    pub is_focused: bool,
    pub selected: Option<usize>,
}

impl<'a> EntryListConfig<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            is_focused: false,
            selected: None,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }
}

/// One item per entry, wrapped to `width` columns.
pub fn entry_list_items(entries: &EntryList, width: usize) -> Vec<ListItem<'static>> {
    entries
        .iter()
        .map(|e| {
            let lines: Vec<Line<'static>> = wrap_to_width(&display_text(e.text()), width)
                .into_iter()
                .map(|line| Line::from(Span::styled(line, entry())))
                .collect();
            ListItem::new(lines)
        })
        .collect()
}

/// Draws entries newest first. Selection highlight only shows while focused.
pub fn render_entry_list(
    frame: &mut Frame,
    area: Rect,
    entries: &EntryList,
    config: &EntryListConfig<'_>,
) {
    let title = format!("{} ({})", config.title, entries.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(config.is_focused));

    if entries.is_empty() {
        let empty = Paragraph::new(Span::styled("No entries yet", label_text()))
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(empty, area);
        return;
    }

    let width = block.inner(area).width as usize;
    let list = List::new(entry_list_items(entries, width))
        .block(block)
        .highlight_style(selected_entry());

    let mut state = ListState::default();
    if config.is_focused {
        state.select(config.selected.filter(|idx| *idx < entries.len()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}
