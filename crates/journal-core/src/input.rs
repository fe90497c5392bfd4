/// Whitespace stripped from the ends of a submission.
///
/// Unicode `White_Space` plus the byte-order mark U+FEFF, minus NEL U+0085.
/// This is the set browsers strip for `String.prototype.trim`, so a draft
/// that is only a BOM counts as blank and a leading NEL is kept.
fn is_entry_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

pub fn trim_entry_text(text: &str) -> &str {
    text.trim_matches(is_entry_whitespace)
}

/// Single-line editable text with a cursor.
///
/// The cursor is a byte offset into the buffer and always sits on a char
/// boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the whole value and parks the cursor at the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn trimmed(&self) -> &str {
        trim_entry_text(&self.value)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The part of the value left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.cursor]
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.char_before_cursor() {
            self.cursor -= prev.len_utf8();
            self.value.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.char_before_cursor() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.value[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    fn char_before_cursor(&self) -> Option<char> {
        self.value[..self.cursor].chars().next_back()
    }
}
