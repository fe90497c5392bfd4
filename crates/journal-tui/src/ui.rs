use crate::app::{App, AppMode};
use crate::components::*;
use crate::theme::{highlight_text, label_text};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_compose(app, frame, chunks[0]);
    render_entries(app, frame, chunks[1]);
    render_footer(app, frame, chunks[2]);
}

fn render_compose(app: &App, frame: &mut Frame, area: Rect) {
    let config = ComposeBoxConfig::new("New entry", app.config().effective_placeholder())
        .focused(app.mode == AppMode::Compose);
    render_compose_box(frame, area, app.form.input(), &config);
}

fn render_entries(app: &App, frame: &mut Frame, area: Rect) {
    let config = EntryListConfig::new(app.config().effective_title())
        .focused(app.mode == AppMode::Browse)
        .selected(app.selection.get());
    render_entry_list(frame, area, app.form.entries(), &config);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints: &[(&str, &str)] = match app.mode {
        AppMode::Compose => &[("Enter", "add entry"), ("Esc", "browse"), ("Ctrl-C", "quit")],
        AppMode::Browse => &[
            ("j/k", "move"),
            ("g/G", "first/last"),
            ("i", "write"),
            ("q", "quit"),
        ],
    };

    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, action) in hints {
        spans.push(Span::styled(*key, highlight_text()));
        spans.push(Span::styled(format!(": {}", action), label_text()));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
