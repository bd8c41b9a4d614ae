//! Main TUI application state and logic

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::info;

use crate::calculator::{Calculator, Feedback};
use crate::config::settings::ThemePreference;
use crate::engine::Operation;
use crate::history::HistoryEvent;
use crate::memory::MemoryEvent;
use crate::ui::effects::{
    Effect, EffectKind, FLASH_ERROR_DURATION, FLASH_SUCCESS_DURATION, REJECT_FLASH_DURATION,
    SHAKE_DURATION,
};
use crate::ui::panes::{self, DisplayRenderData, StatusRenderData};
use crate::ui::theme::{self, ThemeKind};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Keypad,
    History,
    Memory,
}

impl FocusedPane {
    /// Move focus to the next pane (keypad -> history -> memory)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Keypad => FocusedPane::History,
            FocusedPane::History => FocusedPane::Memory,
            FocusedPane::Memory => FocusedPane::Keypad,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Keypad => FocusedPane::Memory,
            FocusedPane::History => FocusedPane::Keypad,
            FocusedPane::Memory => FocusedPane::History,
        }
    }
}

/// The main application state
pub struct App {
    pub calculator: Calculator,

    /// Preference to persist on exit
    pub theme_preference: ThemePreference,

    /// Palette in use
    pub theme: ThemeKind,

    pub focused_pane: FocusedPane,

    /// Whether the history pane is shown
    pub show_history: bool,

    /// Selected rows and scroll offsets of the list panes
    pub history_selected: usize,
    pub history_scroll: usize,
    pub memory_selected: usize,
    pub memory_scroll: usize,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    flash: Option<Effect>,
    shake: Option<Effect>,

    /// Messages queued by history and memory listeners
    notices: Rc<RefCell<Vec<String>>>,
}

impl App {
    pub fn new(mut calculator: Calculator, theme_preference: ThemePreference) -> Self {
        let notices = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&notices);
        calculator.memory_mut().subscribe(move |event| {
            let notice = match event {
                MemoryEvent::ValueChanged { has_value: true } => "Memory updated".to_string(),
                MemoryEvent::ValueChanged { has_value: false } => "Memory empty".to_string(),
                MemoryEvent::ListChanged { len } => format!("Memory list: {} item(s)", len),
            };
            sink.borrow_mut().push(notice);
        });

        let sink = Rc::clone(&notices);
        calculator.history_mut().subscribe(move |event| {
            let HistoryEvent::Changed { len } = event;
            let noun = if *len == 1 { "entry" } else { "entries" };
            sink.borrow_mut().push(format!("History: {} {}", len, noun));
        });

        App {
            calculator,
            theme_preference,
            theme: theme::resolve(theme_preference),
            focused_pane: FocusedPane::Keypad,
            show_history: true,
            history_selected: 0,
            history_scroll: 0,
            memory_selected: 0,
            memory_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            flash: None,
            shake: None,
            notices,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so effects keep animating without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let now = Instant::now();
        let palette = self.theme.palette();
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Calculator column on the left, history and memory on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(columns[0]);

        let flash = self.flash.filter(|e| e.is_active(now)).map(|e| e.kind);
        let offset = self.shake.filter(|e| e.is_active(now)).map_or(0, |e| e.offset(now));
        let expression = self.calculator.pending_expression();

        panes::render_display_pane(
            frame,
            left_rows[0],
            &DisplayRenderData {
                value: self.calculator.display(),
                expression: &expression,
                memory_has_value: self.calculator.memory().has_value(),
                flash,
                offset,
            },
            palette,
        );

        panes::render_keypad_pane(
            frame,
            left_rows[1],
            self.focused_pane == FocusedPane::Keypad,
            palette,
        );

        let memory_area = if self.show_history {
            let right_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(columns[1]);

            panes::render_history_pane(
                frame,
                right_rows[0],
                self.calculator.history(),
                self.history_selected,
                self.focused_pane == FocusedPane::History,
                &mut self.history_scroll,
                palette,
            );
            right_rows[1]
        } else {
            columns[1]
        };

        panes::render_memory_pane(
            frame,
            memory_area,
            self.calculator.memory(),
            self.calculator.max_digits(),
            self.memory_selected,
            self.focused_pane == FocusedPane::Memory,
            &mut self.memory_scroll,
            palette,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &self.status_message,
                theme_name: self.theme.preference().name(),
                is_error: flash == Some(EffectKind::FlashError),
            },
            palette,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let feedback = self.dispatch_key(key);
        self.apply_feedback(feedback, Instant::now());
        self.clamp_selection();

        if let Some(notice) = self.notices.borrow_mut().drain(..).last() {
            self.status_message = notice;
        }
    }

    fn dispatch_key(&mut self, key: KeyEvent) -> Feedback {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') = key.code {
                self.should_quit = true;
            }
            return Feedback::None;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return Feedback::None;
            }
            KeyCode::Tab => {
                self.cycle_focus(FocusedPane::next);
                return Feedback::None;
            }
            KeyCode::BackTab => {
                self.cycle_focus(FocusedPane::prev);
                return Feedback::None;
            }
            KeyCode::Char('t') => {
                self.toggle_theme();
                return Feedback::None;
            }
            KeyCode::Char('h') => {
                self.show_history = !self.show_history;
                if !self.show_history && self.focused_pane == FocusedPane::History {
                    self.focused_pane = FocusedPane::Keypad;
                }
                return Feedback::None;
            }
            KeyCode::Char('m') => return self.calculator.memory_add(),
            KeyCode::Char('M') => return self.calculator.memory_subtract(),
            KeyCode::Char('S') => return self.calculator.memory_store(),
            KeyCode::Char('R') => return self.calculator.memory_recall(),
            KeyCode::Char('L') => return self.calculator.memory_clear(),
            _ => {}
        }

        let handled = match self.focused_pane {
            FocusedPane::History => self.handle_history_key(key.code),
            FocusedPane::Memory => self.handle_memory_key(key.code),
            FocusedPane::Keypad => None,
        };

        handled.unwrap_or_else(|| self.handle_keypad_key(key.code))
    }

    fn handle_keypad_key(&mut self, code: KeyCode) -> Feedback {
        let calc = &mut self.calculator;
        match code {
            KeyCode::Char(c @ '0'..='9') => calc.input_digit(c),
            KeyCode::Char('.') | KeyCode::Char(',') => calc.input_decimal(),
            KeyCode::Char(c @ ('+' | '-' | '*' | '/' | 'x' | 'X')) => calc.input_operator(c),
            KeyCode::Char('%') => calc.apply_unary(Operation::Percent),
            KeyCode::Char('n') => calc.apply_unary(Operation::Negate),
            KeyCode::Char('s') => calc.apply_unary(Operation::Square),
            KeyCode::Char('r') => calc.apply_unary(Operation::SquareRoot),
            KeyCode::Char('i') => calc.apply_unary(Operation::Reciprocal),
            KeyCode::Enter | KeyCode::Char('=') => calc.equals(),
            KeyCode::Backspace => calc.backspace(),
            KeyCode::Esc | KeyCode::Delete => calc.clear(),
            KeyCode::Char('e') => calc.clear_entry(),
            _ => Feedback::None,
        }
    }

    /// Keys specific to the history pane; `None` falls through to the keypad
    fn handle_history_key(&mut self, code: KeyCode) -> Option<Feedback> {
        match code {
            KeyCode::Up => {
                self.history_selected = self.history_selected.saturating_sub(1);
                Some(Feedback::None)
            }
            KeyCode::Down => {
                self.history_selected = self.history_selected.saturating_add(1);
                Some(Feedback::None)
            }
            KeyCode::Enter => Some(self.calculator.use_history_result(self.history_selected)),
            KeyCode::Char('c') => Some(self.calculator.clear_history()),
            _ => None,
        }
    }

    /// Keys specific to the memory pane; `None` falls through to the keypad
    fn handle_memory_key(&mut self, code: KeyCode) -> Option<Feedback> {
        match code {
            KeyCode::Up => {
                self.memory_selected = self.memory_selected.saturating_sub(1);
                Some(Feedback::None)
            }
            KeyCode::Down => {
                self.memory_selected = self.memory_selected.saturating_add(1);
                Some(Feedback::None)
            }
            KeyCode::Enter => Some(self.calculator.recall_list_value(self.memory_selected)),
            KeyCode::Char('l') => Some(self.calculator.load_list_value(self.memory_selected)),
            KeyCode::Delete => Some(self.calculator.remove_list_value(self.memory_selected)),
            KeyCode::Char('c') => Some(self.calculator.clear_memory_list()),
            _ => None,
        }
    }

    fn cycle_focus(&mut self, step: fn(FocusedPane) -> FocusedPane) {
        self.focused_pane = step(self.focused_pane);
        if !self.show_history && self.focused_pane == FocusedPane::History {
            self.focused_pane = step(self.focused_pane);
        }
    }

    /// Switch between light and dark, remembering the choice
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.theme_preference = self.theme.preference();
        info!(theme = self.theme_preference.name(), "theme toggled");
        self.status_message = format!("Theme: {}", self.theme_preference.name());
    }

    fn apply_feedback(&mut self, feedback: Feedback, now: Instant) {
        match feedback {
            Feedback::None => {}
            Feedback::Success => {
                self.flash = Some(Effect::new(
                    EffectKind::FlashSuccess,
                    now,
                    FLASH_SUCCESS_DURATION,
                ));
            }
            Feedback::Error => {
                self.flash = Some(Effect::new(EffectKind::FlashError, now, FLASH_ERROR_DURATION));
                self.status_message = self.calculator.display().to_string();
            }
            Feedback::Rejected => {
                self.flash = Some(Effect::new(EffectKind::FlashError, now, REJECT_FLASH_DURATION));
                self.shake = Some(Effect::new(EffectKind::Shake, now, SHAKE_DURATION));
            }
        }
    }

    fn clamp_selection(&mut self) {
        let history_len = self.calculator.history().count();
        self.history_selected = self.history_selected.min(history_len.saturating_sub(1));
        let memory_len = self.calculator.memory().list_size();
        self.memory_selected = self.memory_selected.min(memory_len.saturating_sub(1));
    }

    /// Active effects, for callers that render without a terminal
    pub fn active_effects(&self, now: Instant) -> Vec<EffectKind> {
        [self.flash, self.shake]
            .into_iter()
            .flatten()
            .filter(|e| e.is_active(now))
            .map(|e| e.kind)
            .collect()
    }
}
