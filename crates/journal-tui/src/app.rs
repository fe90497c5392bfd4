use crate::{
    compose::{handle_compose_input, ComposeAction},
    events::{is_interrupt, Event, EventHandler},
    selection::SelectionState,
    ui,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use journal_core::{AppConfig, JournalError, JournalResult};
use journal_domain::{EntryFormController, SubmitEvent, SubmitOutcome};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub form: EntryFormController,
    pub selection: SelectionState,
    config: AppConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// The entry input has focus.
    Compose,
    /// The entries panel has focus.
    Browse,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Compose,
            form: EntryFormController::default(),
            selection: SelectionState::new(),
            config,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if is_interrupt(&key) {
            self.quit();
            return;
        }

        match self.mode {
            AppMode::Compose => self.handle_compose_key(key),
            AppMode::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_compose_key(&mut self, key: KeyEvent) {
        match handle_compose_input(self.form.input_mut(), key.code) {
            ComposeAction::Submit => self.submit_entry(),
            ComposeAction::Leave => self.set_mode(AppMode::Browse),
            ComposeAction::None => {}
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let len = self.form.entries().len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.quit(),
            KeyCode::Char('i') | KeyCode::Enter => self.set_mode(AppMode::Compose),
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(len),
            KeyCode::Char('g') | KeyCode::Home => self.selection.jump_to_first(len),
            KeyCode::Char('G') | KeyCode::End => self.selection.jump_to_last(len),
            _ => {}
        }
    }

    fn set_mode(&mut self, mode: AppMode) {
        if mode == AppMode::Browse {
            self.selection
                .auto_select_first_if_empty(self.form.entries().len());
        }
        tracing::debug!("Switching mode: {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    fn submit_entry(&mut self) {
        let mut event = SubmitEvent::new();

        match self.form.handle_submit(&mut event) {
            Ok(SubmitOutcome::Added) => {
                tracing::info!(
                    "Added journal entry ({} total)",
                    self.form.entries().len()
                );
                if self.selection.get().is_some() {
                    self.selection.set(Some(0));
                }
            }
            Ok(SubmitOutcome::Ignored) => {
                tracing::debug!("Ignored blank submission");
            }
            Err(e) => {
                tracing::error!("Failed to add entry: {}", e);
            }
        }

        // Submitting never leaves the form, so entries can be written back to back.
        debug_assert!(event.default_prevented());
    }

    pub async fn run(&mut self) -> JournalResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> JournalResult<()> {
        let tick_rate = Duration::from_millis(self.config.effective_tick_rate_ms());
        let mut events = EventHandler::new(tick_rate);

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Resize) | Some(Event::Tick) => {}
                None => {
                    return Err(JournalError::Internal(
                        "terminal event stream closed".to_string(),
                    ));
                }
            }
        }

        events.stop();
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
