//! TUI application state and logic

use crate::game::{Engine, GUESS_ALLOWANCES, Statistics, WORD_LENGTHS};
use crate::wordlists::DictionarySource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long an advisory stays on screen
pub const MESSAGE_DURATION: Duration = Duration::from_secs(2);

/// Redraw interval while waiting for input, so messages can expire
const TICK: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuField {
    WordLength,
    GuessAllowance,
}

/// Values picked on the menu, applied when a round starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    pub field: MenuField,
    pub word_length: usize,
    pub guess_allowance: usize,
}

impl MenuState {
    fn select_next_field(&mut self) {
        self.field = match self.field {
            MenuField::WordLength => MenuField::GuessAllowance,
            MenuField::GuessAllowance => MenuField::WordLength,
        };
    }

    fn adjust(&mut self, increase: bool) {
        let (value, range) = match self.field {
            MenuField::WordLength => (&mut self.word_length, WORD_LENGTHS),
            MenuField::GuessAllowance => (&mut self.guess_allowance, GUESS_ALLOWANCES),
        };
        *value = if increase {
            (*value + 1).min(*range.end())
        } else {
            value.saturating_sub(1).max(*range.start())
        };
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub shown_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Advisory,
    Error,
}

/// Application state
pub struct App<S: DictionarySource> {
    pub engine: Engine<S>,
    pub screen: Screen,
    pub menu: MenuState,
    pub message: Option<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<S: DictionarySource> App<S> {
    #[must_use]
    pub fn new(engine: Engine<S>) -> Self {
        let menu = MenuState {
            field: MenuField::WordLength,
            word_length: engine.config().word_length(),
            guess_allowance: engine.config().guess_allowance(),
        };

        Self {
            engine,
            screen: Screen::Menu,
            menu,
            message: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn set_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.message = Some(Message {
            text: text.into(),
            style,
            shown_at: Instant::now(),
        });
    }

    /// The current message, if it was shown less than [`MESSAGE_DURATION`] before `now`
    #[must_use]
    pub fn visible_message(&self, now: Instant) -> Option<&Message> {
        self.message
            .as_ref()
            .filter(|msg| now.saturating_duration_since(msg.shown_at) < MESSAGE_DURATION)
    }

    /// Apply the menu values and start a round
    pub fn start_game(&mut self) {
        let started = self
            .engine
            .configure(self.menu.word_length, self.menu.guess_allowance)
            .and_then(|()| self.engine.start_round().map(|_| ()));

        match started {
            Ok(()) => {
                self.set_message(
                    format!(
                        "Guess the {}-letter word in {} tries",
                        self.menu.word_length, self.menu.guess_allowance
                    ),
                    MessageStyle::Info,
                );
                self.screen = Screen::Playing;
            }
            Err(e) => {
                log::error!("could not start round: {e}");
                self.set_message(e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn submit_guess(&mut self) {
        match self.engine.submit_guess() {
            Ok(submission) => {
                if let Some(advisory) = submission.advisory {
                    self.set_message(advisory.to_string(), MessageStyle::Advisory);
                } else if submission.outcome.is_finished() {
                    if let Some(round) = self.engine.round() {
                        self.stats.record(round);
                    }
                    self.message = None;
                    self.screen = Screen::GameOver;
                }
            }
            Err(e) => self.set_message(e.to_string(), MessageStyle::Error),
        }
    }

    pub fn return_to_menu(&mut self) {
        self.engine.return_to_menu();
        self.message = None;
        self.screen = Screen::Menu;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Menu => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Up | KeyCode::Down | KeyCode::Tab => self.menu.select_next_field(),
                KeyCode::Left => self.menu.adjust(false),
                KeyCode::Right => self.menu.adjust(true),
                KeyCode::Enter => self.start_game(),
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) => {
                    if let Err(advisory) = self.engine.append_letter(c) {
                        self.set_message(advisory.to_string(), MessageStyle::Advisory);
                    }
                }
                KeyCode::Backspace => self.engine.remove_last_letter(),
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            Screen::GameOver => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Enter => self.return_to_menu(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: DictionarySource>(app: App<S>) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, S: DictionarySource>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<Statistics> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(TICK)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(app.stats)
}
