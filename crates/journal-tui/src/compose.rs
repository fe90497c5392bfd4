use crossterm::event::KeyCode;
use journal_core::TextField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeAction {
    None,
    Leave,
    Submit,
}

/// Applies one key press to the compose field.
///
/// Enter always submits, even when the field is blank; deciding what a
/// blank submission does belongs to the form controller.
pub fn handle_compose_input(field: &mut TextField, key_code: KeyCode) -> ComposeAction {
    match key_code {
        KeyCode::Esc => ComposeAction::Leave,
        KeyCode::Enter => ComposeAction::Submit,
        KeyCode::Char(c) => {
            field.insert_char(c);
            ComposeAction::None
        }
        KeyCode::Tab => {
            field.insert_char('\t');
            ComposeAction::None
        }
        KeyCode::Backspace => {
            field.backspace();
            ComposeAction::None
        }
        KeyCode::Delete => {
            field.delete();
            ComposeAction::None
        }
        KeyCode::Left => {
            field.move_left();
            ComposeAction::None
        }
        KeyCode::Right => {
            field.move_right();
            ComposeAction::None
        }
        KeyCode::Home => {
            field.move_home();
            ComposeAction::None
        }
        KeyCode::End => {
            field.move_end();
            ComposeAction::None
        }
        _ => ComposeAction::None,
    }
}
