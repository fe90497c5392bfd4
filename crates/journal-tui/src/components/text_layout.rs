use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Replaces control characters with spaces so every char of `text` lands in
/// exactly one cell run. Tabs written raw would move the terminal cursor.
pub fn display_text(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_control) {
        Cow::Owned(
            text.chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Greedy word wrap to `width` columns. Words wider than a line are split.
pub fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_inclusive(' ') {
        let word_width = UnicodeWidthStr::width(word.trim_end_matches(' '));
        if line_width > 0 && line_width + word_width > width {
            lines.push(line.trim_end().to_string());
            line.clear();
            line_width = 0;
        }

        for c in word.chars() {
            let w = char_width(c);
            if c == ' ' {
                if line.is_empty() && !lines.is_empty() {
                    continue;
                }
            } else if line_width + w > width && line_width > 0 {
                lines.push(line.trim_end().to_string());
                line.clear();
                line_width = 0;
            }
            line.push(c);
            line_width += w;
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// Slice of a single-line `text` that fits in `width` columns with the
/// cursor visible, and the cursor's column inside that slice.
///
/// `cursor` is a byte offset on a char boundary.
pub fn scroll_to_cursor(text: &str, cursor: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }

    let cursor_width = UnicodeWidthStr::width(&text[..cursor]);
    // One column stays free for the cursor when it sits at the end.
    let skip = (cursor_width + 1).saturating_sub(width);

    let mut skipped = 0;
    let mut visible = String::new();
    let mut visible_width = 0;
    for c in text.chars() {
        let w = char_width(c);
        if skipped < skip {
            skipped += w;
            continue;
        }
        if visible_width + w > width {
            break;
        }
        visible.push(c);
        visible_width += w;
    }

    (visible, cursor_width.saturating_sub(skipped))
}
