use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use curator_core::{update, AppState, Msg};
use curator_engine::FetchSettings;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::effects::EffectRunner;
use crate::ui;
use crate::ui::paging;

/// UI-only input state: either the table has focus or the select-N overlay
/// is capturing digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Table,
    CustomCount { buffer: String },
}

/// What a key press should do, given the current input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    CursorUp,
    CursorDown,
    ToggleRow,
    ToggleSelectAll,
    NextPage,
    PrevPage,
    CycleRows,
    OpenOverlay,
    OverlayDigit(char),
    OverlayBackspace,
    OverlaySubmit,
    OverlayCancel,
    None,
}

pub fn run_app() -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let runner = EffectRunner::new(FetchSettings::default());
    let mut shell = AppShell::new();
    shell.dispatch(&runner, Msg::Started);

    let result = event_loop(&mut terminal, &mut shell, &runner);

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shell: &mut AppShell,
    runner: &EffectRunner,
) -> Result<()> {
    loop {
        // Drain engine completions first so a page landing and a key press
        // in the same tick render once.
        while let Some(msg) = runner.poll() {
            shell.dispatch(runner, msg);
        }

        let mut redraw = shell.state.consume_dirty();

        let has_event = event::poll(Duration::from_millis(50)).context("poll event")?;
        if has_event {
            match event::read().context("read event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = key_to_action(&shell.mode, key);
                    if action == Action::Quit {
                        return Ok(());
                    }
                    if action != Action::None {
                        if let Some(msg) = shell.apply_action(action) {
                            shell.dispatch(runner, msg);
                        }
                        redraw = true;
                    }
                }
                Event::Resize(_, _) => redraw = true,
                _ => {}
            }
        }

        redraw |= shell.state.consume_dirty();

        if redraw {
            let view = shell.state.view();
            let cursor = shell.cursor;
            let mode = shell.mode.clone();
            terminal
                .draw(|frame| ui::render::render(frame, &view, cursor, &mode))
                .context("draw frame")?;
        }
    }
}

pub struct AppShell {
    state: AppState,
    cursor: usize,
    mode: InputMode,
}

impl AppShell {
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            cursor: 0,
            mode: InputMode::Table,
        }
    }

    fn dispatch(&mut self, runner: &EffectRunner, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        runner.run(effects);
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        let len = self.state.artworks().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }

    /// Translates an action into the message to dispatch, updating
    /// shell-local state (cursor, overlay) along the way.
    fn apply_action(&mut self, action: Action) -> Option<Msg> {
        match action {
            Action::Quit | Action::None => None,
            Action::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            Action::CursorDown => {
                let len = self.state.artworks().len();
                if len > 0 {
                    self.cursor = (self.cursor + 1).min(len - 1);
                }
                None
            }
            Action::ToggleRow => self.toggle_cursor_row(),
            Action::ToggleSelectAll => Some(Msg::SelectAllToggled {
                checked: !self.state.view().select_all,
            }),
            Action::NextPage => {
                let view = self.state.view();
                let first = paging::next_first(view.first, view.rows_per_page, view.total_records);
                (first != view.first).then_some(Msg::PageChanged {
                    first,
                    rows: view.rows_per_page,
                })
            }
            Action::PrevPage => {
                let view = self.state.view();
                let first = paging::prev_first(view.first, view.rows_per_page);
                (first != view.first).then_some(Msg::PageChanged {
                    first,
                    rows: view.rows_per_page,
                })
            }
            Action::CycleRows => {
                let view = self.state.view();
                let rows = paging::next_rows_option(view.rows_per_page);
                Some(Msg::PageChanged {
                    first: paging::snap_first(view.first, rows),
                    rows,
                })
            }
            Action::OpenOverlay => {
                self.mode = InputMode::CustomCount {
                    buffer: self.state.view().custom_rows.to_string(),
                };
                None
            }
            Action::OverlayDigit(ch) => {
                if let InputMode::CustomCount { buffer } = &mut self.mode {
                    if buffer.len() < 3 {
                        buffer.push(ch);
                    }
                    Some(Msg::CustomCountChanged(parse_count(buffer)))
                } else {
                    None
                }
            }
            Action::OverlayBackspace => {
                if let InputMode::CustomCount { buffer } = &mut self.mode {
                    buffer.pop();
                    Some(Msg::CustomCountChanged(parse_count(buffer)))
                } else {
                    None
                }
            }
            Action::OverlaySubmit => {
                self.mode = InputMode::Table;
                Some(Msg::CustomCountSubmitted)
            }
            Action::OverlayCancel => {
                self.mode = InputMode::Table;
                None
            }
        }
    }

    /// Builds the replacement selection with the cursor row added or
    /// removed. The whole set travels in the message, never a delta.
    fn toggle_cursor_row(&self) -> Option<Msg> {
        let row = self.state.artworks().get(self.cursor)?.clone();
        let mut selected = self.state.selected_artworks();
        if selected.iter().any(|artwork| artwork.id == row.id) {
            selected.retain(|artwork| artwork.id != row.id);
        } else {
            selected.push(row);
        }
        Some(Msg::SelectionChanged { selected })
    }
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new()
    }
}

pub fn key_to_action(mode: &InputMode, key: KeyEvent) -> Action {
    if let InputMode::CustomCount { .. } = mode {
        return match key.code {
            KeyCode::Char(ch) if ch.is_ascii_digit() => Action::OverlayDigit(ch),
            KeyCode::Backspace => Action::OverlayBackspace,
            KeyCode::Enter => Action::OverlaySubmit,
            KeyCode::Esc => Action::OverlayCancel,
            _ => Action::None,
        };
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Up | KeyCode::Char('k'), _) => Action::CursorUp,
        (KeyCode::Down | KeyCode::Char('j'), _) => Action::CursorDown,
        (KeyCode::Char(' '), _) => Action::ToggleRow,
        (KeyCode::Char('a'), _) => Action::ToggleSelectAll,
        (KeyCode::Right | KeyCode::Char('l'), _) => Action::NextPage,
        (KeyCode::Left | KeyCode::Char('h'), _) => Action::PrevPage,
        (KeyCode::Char('r'), _) => Action::CycleRows,
        (KeyCode::Char('s'), _) => Action::OpenOverlay,
        _ => Action::None,
    }
}

fn parse_count(buffer: &str) -> usize {
    buffer.parse().unwrap_or(0)
}
