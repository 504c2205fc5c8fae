// TUI application state
//
// Owns the dashboard and the purely cosmetic state around it: theme, the
// date editor, spinner frame. Key handling is synchronous; anything that
// needs the network comes back to the event loop as an `AppAction`.

use super::input::InputHandler;
use super::theme::{Theme, ThemeKind};
use crate::controller::LoadTicket;
use crate::dashboard::Dashboard;
use crate::logging::LogBuffer;
use crate::stats::{FetchError, StatsResponse};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Longest possible `YYYY-MM-DD`
const DATE_INPUT_MAX: usize = 10;

/// What the event loop must do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    /// Start a fetch for this ticket
    Fetch(LoadTicket),
}

/// Whether keys drive the dashboard or the date field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EditingDate { buffer: String, invalid: bool },
}

pub struct App {
    pub dashboard: Dashboard,
    pub mode: InputMode,
    pub theme_kind: ThemeKind,
    pub theme: Theme,
    pub log_buffer: LogBuffer,
    /// Backend base URL, shown in the title bar
    pub api_url: String,
    pub should_quit: bool,
    pub start_time: Instant,
    /// Spinner frame counter (advanced on tick)
    animation_frame: usize,
    input_handler: InputHandler,
}

impl App {
    pub fn new(dashboard: Dashboard, theme_kind: ThemeKind, log_buffer: LogBuffer, api_url: String) -> Self {
        Self {
            dashboard,
            mode: InputMode::Normal,
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            api_url,
            should_quit: false,
            start_time: Instant::now(),
            animation_frame: 0,
            input_handler: InputHandler::default(),
        }
    }

    /// Advance animation frame (called on tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.animation_frame % SPINNER_FRAMES.len()]
    }

    pub fn uptime(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();
        format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
    }

    pub fn cycle_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
        tracing::debug!("Theme switched to {}", self.theme_kind.name());
    }

    /// Start a load and hand the ticket to the caller
    pub fn begin_load(&mut self) -> AppAction {
        AppAction::Fetch(self.dashboard.load())
    }

    /// Feed a finished fetch back into the dashboard
    pub fn apply_result(&mut self, ticket: LoadTicket, result: Result<StatsResponse, FetchError>) {
        self.dashboard.resolve(ticket, result);
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, InputMode::EditingDate { .. })
    }

    /// Text shown in the date field
    pub fn date_field(&self) -> String {
        match &self.mode {
            InputMode::EditingDate { buffer, .. } => buffer.clone(),
            InputMode::Normal => self.dashboard.date_range_start().format("%Y-%m-%d").to_string(),
        }
    }

    /// Layered dispatch: release tracking, date editor, global keys
    pub fn handle_key(&mut self, key_event: KeyEvent) -> AppAction {
        match key_event.kind {
            KeyEventKind::Release => {
                self.input_handler.handle_key_release(key_event.code);
                return AppAction::None;
            }
            KeyEventKind::Press => {}
            _ => return AppAction::None,
        }

        // Ctrl+C quits from anywhere
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            self.should_quit = true;
            return AppAction::None;
        }

        if self.is_editing() {
            return self.handle_edit_key(key_event.code);
        }

        if !self.input_handler.handle_key_press(key_event.code) {
            return AppAction::None;
        }

        match key_event.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                AppAction::None
            }
            KeyCode::Char('r') | KeyCode::Enter => self.begin_load(),
            KeyCode::Char('a') => {
                self.dashboard.toggle_all_time();
                AppAction::None
            }
            KeyCode::Char('d') if self.dashboard.all_time() => {
                tracing::debug!("Start date is locked while all-time is on");
                AppAction::None
            }
            KeyCode::Char('d') => {
                self.mode = InputMode::EditingDate {
                    buffer: self.date_field(),
                    invalid: false,
                };
                AppAction::None
            }
            KeyCode::Char('t') => {
                self.cycle_theme();
                AppAction::None
            }
            KeyCode::Tab | KeyCode::Right => {
                self.dashboard.next_tab();
                AppAction::None
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.dashboard.prev_tab();
                AppAction::None
            }
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(tab) = crate::tabs::Tab::from_index(c as usize - '1' as usize) {
                    self.dashboard.select_tab(tab);
                }
                AppAction::None
            }
            _ => AppAction::None,
        }
    }

    /// Date editor: digits and '-', Backspace, Enter commits, Esc cancels.
    /// Committing only changes the start date; loading stays explicit.
    fn handle_edit_key(&mut self, code: KeyCode) -> AppAction {
        let InputMode::EditingDate { buffer, invalid } = &mut self.mode else {
            return AppAction::None;
        };

        match code {
            KeyCode::Char(c) if (c.is_ascii_digit() || c == '-') && buffer.len() < DATE_INPUT_MAX => {
                buffer.push(c);
                *invalid = false;
            }
            KeyCode::Backspace => {
                buffer.pop();
                *invalid = false;
            }
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Enter => match NaiveDate::parse_from_str(buffer, "%Y-%m-%d") {
                Ok(date) => {
                    self.dashboard.set_date_range_start(date);
                    self.mode = InputMode::Normal;
                }
                Err(_) => {
                    tracing::warn!("Ignoring invalid start date {:?}", buffer);
                    *invalid = true;
                }
            },
            _ => {}
        }
        AppAction::None
    }
}
