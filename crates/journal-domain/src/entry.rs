use journal_core::{trim_entry_text, JournalError, JournalResult};
use serde::Serialize;

/// A single journal entry.
///
/// The text is always non-empty and already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    text: String,
}

impl Entry {
    pub fn new(text: impl Into<String>) -> JournalResult<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(JournalError::Validation(
                "entry text must not be empty".to_string(),
            ));
        }
        if trim_entry_text(&text).len() != text.len() {
            return Err(JournalError::Validation(
                "entry text must not have leading or trailing whitespace".to_string(),
            ));
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
