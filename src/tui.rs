//! TUI (Terminal User Interface) module for the Wordle game
//!
//! This module provides the interactive terminal front-end using Ratatui.
//!
//! # Architecture
//! - `BoardView`: presenter-side mirror of the board, built purely from
//!   engine events
//! - `TuiApp`: terminal lifecycle, rendering, and the input loop
//!
//! # State Machine
//! The UI has two states:
//! - `Playing`: letter keys fill the board, BACKSPACE deletes
//! - `GameOver`: N starts a new game, ESC quits

use crate::engine::{CellStyle, GuessEngine, MAX_GUESSES, Presenter, WORD_LENGTH, WordSource};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const WIN_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const LOSS_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const STATUS_STYLE: Style = Style::new().fg(Color::Cyan);

fn style_colors(style: CellStyle) -> (Color, Color) {
    match style {
        CellStyle::Initial => (Color::DarkGray, Color::White),
        CellStyle::Correct => (Color::Green, Color::Black),
        CellStyle::Present => (Color::Yellow, Color::Black),
        CellStyle::Absent => (Color::Gray, Color::White),
    }
}

#[derive(Debug)]
enum TuiState {
    Playing,
    GameOver,
}

/// Presenter-side mirror of the board.
///
/// The engine is the authoritative model; this view is updated only through
/// [`Presenter`] events and never reaches into engine state.
pub struct BoardView {
    letters: [[char; WORD_LENGTH]; MAX_GUESSES],
    styles: [[CellStyle; WORD_LENGTH]; MAX_GUESSES],
    /// Cell to pulse on the next frame only.
    pulse: Option<(usize, usize)>,
    /// Set once the game ends: (won, goal word).
    finished: Option<(bool, String)>,
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            letters: [[' '; WORD_LENGTH]; MAX_GUESSES],
            styles: [[CellStyle::Initial; WORD_LENGTH]; MAX_GUESSES],
            pulse: None,
            finished: None,
        }
    }

    fn take_pulse(&mut self) -> Option<(usize, usize)> {
        self.pulse.take()
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for BoardView {
    fn letter_entered(&mut self, row: usize, col: usize, letter: char) {
        self.letters[row][col] = letter;
        self.styles[row][col] = CellStyle::Initial;
        self.pulse = Some((row, col));
    }

    fn letter_cleared(&mut self, row: usize, col: usize) {
        self.letters[row][col] = ' ';
        self.styles[row][col] = CellStyle::Initial;
    }

    fn cell_scored(&mut self, row: usize, col: usize, style: CellStyle) {
        self.styles[row][col] = style;
    }

    fn game_over(&mut self, won: bool, goal_word: &str) {
        self.finished = Some((won, goal_word.to_string()));
    }

    fn reset(&mut self) {
        *self = BoardView::new();
    }
}

/// Context for rendering the UI - groups related parameters to avoid too
/// many function arguments.
struct RenderContext<'a> {
    view: &'a BoardView,
    state: &'a TuiState,
    status: &'a str,
    pulse: Option<(usize, usize)>,
}

/// Main TUI application.
///
/// Owns the terminal, the game engine, and the event-driven board view.
pub struct TuiApp<W: WordSource> {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    engine: GuessEngine<W>,
    view: BoardView,
    state: TuiState,
    status: String,
}

impl<W: WordSource> TuiApp<W> {
    pub fn new(engine: GuessEngine<W>) -> Result<Self, io::Error> {
        info_log!("TuiApp::new() - initializing terminal");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            engine,
            view: BoardView::new(),
            state: TuiState::Playing,
            status: "Type your first guess".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Run the game until the player quits.
    pub fn run(&mut self) -> Result<(), io::Error> {
        loop {
            self.draw()?;
            if self.handle_input()? {
                info_log!("run() - player quit");
                return Ok(());
            }
        }
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            pulse: self.view.take_pulse(),
            view: &self.view,
            state: &self.state,
            status: &self.status,
        };
        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    /// Handle one input event, if any. Returns `true` when the player quits.
    fn handle_input(&mut self) -> Result<bool, io::Error> {
        if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(false);
        }

        // Mouse, focus, paste and resize events are not ours
        let Event::Key(key) = event::read()? else {
            return Ok(false);
        };
        // Only process Press events, ignore Release and Repeat to avoid
        // double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(false);
        }
        if Self::has_modifier_keys(&key) {
            debug_log!("handle_input() - ignoring key with modifier: {:?}", key.modifiers);
            return Ok(false);
        }

        debug_log!("handle_input() - key event: {:?}", key.code);
        match self.state {
            TuiState::Playing => Ok(self.handle_playing_key(key)),
            TuiState::GameOver => Ok(self.handle_game_over_key(key)),
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.engine.enter(c, &mut self.view);
                if self.view.finished.is_some() {
                    self.transition_to_game_over();
                } else {
                    self.status = format!(
                        "Guess {} of {}",
                        self.engine.current_row() + 1,
                        MAX_GUESSES
                    );
                }
            }
            KeyCode::Backspace => {
                self.engine.delete_last_character(&mut self.view);
            }
            KeyCode::Esc => return true,
            _ => {
                debug_log!("handle_playing_key() - ignoring key: {:?}", key.code);
            }
        }
        false
    }

    fn handle_game_over_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('n' | 'N') => {
                match self.engine.reset(&mut self.view) {
                    Ok(()) => {
                        self.state = TuiState::Playing;
                        self.status = "New game - type your first guess".to_string();
                    }
                    Err(e) => {
                        // No usable word left; nothing to restart into
                        log::error!("reset failed: {e}");
                        self.status = format!("Cannot start a new game: {e}");
                    }
                }
                false
            }
            KeyCode::Esc => true,
            _ => false,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    fn transition_to_game_over(&mut self) {
        self.state = TuiState::GameOver;
        self.status = match &self.view.finished {
            Some((true, _)) => "You won!".to_string(),
            Some((false, goal)) => format!("Out of guesses - the word was '{goal}'"),
            None => String::new(),
        };
    }

    /// Render the complete UI layout using the provided context.
    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Length(MAX_GUESSES as u16 * ROW_SPACING + 2), // Board
                Constraint::Min(6),     // Message panel
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx.view, ctx.pulse);
        Self::render_message(f, chunks[2], ctx.view);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_board(f: &mut Frame, area: Rect, view: &BoardView, pulse: Option<(usize, usize)>) {
        let block = Block::default().title("Board").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        for row in 0..MAX_GUESSES {
            let y = inner.y + (row as u16 * ROW_SPACING);
            if y >= inner.y + inner.height {
                return;
            }

            let mut spans = vec![Span::raw("  ")];
            for col in 0..WORD_LENGTH {
                let (bg_color, fg_color) = style_colors(view.styles[row][col]);
                let mut cell_style = Style::default().fg(fg_color).bg(bg_color);
                // One-frame pulse on the most recently entered letter
                if pulse == Some((row, col)) {
                    cell_style = cell_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                }
                let letter = view.letters[row][col];
                spans.push(Span::styled(format!(" {letter} "), cell_style));
                spans.push(Span::raw(" "));
            }
            Self::render_line(f, inner, y, spans);
        }
    }

    fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        f.render_widget(
            paragraph,
            Rect {
                x: area.x,
                y,
                width: area.width,
                height: 1,
            },
        );
    }

    fn render_message(f: &mut Frame, area: Rect, view: &BoardView) {
        let lines = match &view.finished {
            Some((true, _)) => vec![
                Line::from(Span::styled("Congratulations!", WIN_STYLE)),
                Line::from("You won! Would you like to play again?"),
            ],
            Some((false, goal)) => vec![
                Line::from(Span::styled("Game Over", LOSS_STYLE)),
                Line::from(format!(
                    "The word was '{goal}'. Would you like to try again?"
                )),
            ],
            None => Vec::new(),
        };

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Messages").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(STATUS_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::Playing => "Type letters to guess | BACKSPACE: Delete | ESC: Quit",
            TuiState::GameOver => "N: New Game | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

impl<W: WordSource> Drop for TuiApp<W> {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
