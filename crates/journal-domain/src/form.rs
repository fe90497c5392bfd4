use journal_core::{JournalResult, TextField};

use crate::{Entry, EntryList};

/// A cancelable form submission.
///
/// Whoever dispatches the event runs the submission's default action only
/// when [`SubmitEvent::default_prevented`] is false after handling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Ignored,
}

/// Binds the entry input to the entry list.
///
/// Owns both, so a controller can only exist with every element it needs.
/// Front ends render [`EntryFormController::input`] and
/// [`EntryFormController::entries`] and feed edits and submissions back in.
#[derive(Debug, Clone, Default)]
pub struct EntryFormController {
    input: TextField,
    entries: EntryList,
}

impl EntryFormController {
    pub fn new(input: TextField, entries: EntryList) -> Self {
        Self { input, entries }
    }

    pub fn input(&self) -> &TextField {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TextField {
        &mut self.input
    }

    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    /// Handles one submission of the form.
    ///
    /// A blank input leaves both the list and the input untouched; the
    /// untrimmed draft stays in the field.
    pub fn handle_submit(&mut self, event: &mut SubmitEvent) -> JournalResult<SubmitOutcome> {
        event.prevent_default();

        let text = self.input.trimmed();
        if text.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        let text = text.to_string();
        self.add_entry(text)?;
        self.input.clear();
        Ok(SubmitOutcome::Added)
    }

    /// Puts `text` at the top of the list. `text` must be non-empty and
    /// trimmed.
    pub fn add_entry(&mut self, text: impl Into<String>) -> JournalResult<()> {
        let entry = Entry::new(text)?;
        self.entries.prepend(entry);
        Ok(())
    }

    /// Replaces the input with `text` and submits it.
    pub fn submit_text(&mut self, text: &str) -> JournalResult<SubmitOutcome> {
        self.input.set_value(text);
        self.handle_submit(&mut SubmitEvent::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_core::JournalError;

    fn texts(controller: &EntryFormController) -> Vec<&str> {
        controller.entries().iter().map(Entry::text).collect()
    }

    #[test]
    fn test_submit_adds_trimmed_entry_and_clears_input() {
        let mut controller = EntryFormController::default();
        controller.input_mut().set_value("  Today I learned DOM events.\n");

        let mut event = SubmitEvent::new();
        let outcome = controller.handle_submit(&mut event).unwrap();

        assert_eq!(outcome, SubmitOutcome::Added);
        assert_eq!(texts(&controller), vec!["Today I learned DOM events."]);
        assert_eq!(controller.input().value(), "");
        assert_eq!(controller.input().cursor(), 0);
    }

    #[test]
    fn test_blank_submit_leaves_input_and_list_unchanged() {
        for draft in ["", "   ", "\n\t", " \u{3000} ", "\u{feff}", "\u{feff}\u{2028}"] {
            let mut controller = EntryFormController::default();
            controller.add_entry("existing").unwrap();
            controller.input_mut().set_value(draft);

            let outcome = controller.submit_text(draft).unwrap();

            assert_eq!(outcome, SubmitOutcome::Ignored, "draft {draft:?}");
            assert_eq!(controller.input().value(), draft);
            assert_eq!(texts(&controller), vec!["existing"]);
        }
    }

    #[test]
    fn test_every_submission_prevents_default() {
        for draft in ["", "  ", "entry", " padded "] {
            let mut controller = EntryFormController::default();
            controller.input_mut().set_value(draft);
            let mut event = SubmitEvent::new();
            assert!(!event.default_prevented());

            controller.handle_submit(&mut event).unwrap();

            assert!(event.default_prevented(), "draft {draft:?}");
        }
    }

    #[test]
    fn test_submissions_display_newest_first() {
        let mut controller = EntryFormController::default();
        for text in ["t1", "t2", "t3", "t4"] {
            controller.submit_text(text).unwrap();
        }
        assert_eq!(texts(&controller), vec!["t4", "t3", "t2", "t1"]);
    }

    #[test]
    fn test_mixed_session() {
        let mut controller = EntryFormController::default();

        assert_eq!(
            controller.submit_text("Today I learned DOM events.").unwrap(),
            SubmitOutcome::Added
        );
        assert_eq!(controller.input().value(), "");

        assert_eq!(controller.submit_text("  ").unwrap(), SubmitOutcome::Ignored);
        assert_eq!(controller.entries().len(), 1);
        assert_eq!(controller.input().value(), "  ");

        assert_eq!(
            controller.submit_text("Second entry").unwrap(),
            SubmitOutcome::Added
        );
        assert_eq!(
            texts(&controller),
            vec!["Second entry", "Today I learned DOM events."]
        );
    }

    #[test]
    fn test_byte_order_mark_is_stripped_from_entries() {
        let mut controller = EntryFormController::default();
        assert_eq!(
            controller.submit_text("\u{feff}hello").unwrap(),
            SubmitOutcome::Added
        );
        assert_eq!(texts(&controller), vec!["hello"]);
    }

    #[test]
    fn test_add_entry_rejects_untrimmed_text() {
        let mut controller = EntryFormController::default();
        let err = controller.add_entry(" x ").unwrap_err();
        assert!(matches!(err, JournalError::Validation(_)));
        assert!(controller.entries().is_empty());
    }

    #[test]
    fn test_new_binds_existing_elements() {
        let mut entries = EntryList::new();
        entries.prepend(Entry::new("kept").unwrap());
        let controller = EntryFormController::new(TextField::with_value("draft"), entries);
        assert_eq!(controller.input().value(), "draft");
        assert_eq!(texts(&controller), vec!["kept"]);
    }
}
