use crate::config::AppConfig;
use crate::error::GameError;
use crate::game::{GameState, Phase};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    game_state: GameState,
    width: usize,
    height: usize,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    poll_interval: Duration,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, GameError> {
        let width = config.board.width;
        let height = config.board.height;
        Ok(App {
            game_state: GameState::new(width, height)?,
            width,
            height,
            selected_column: width / 2, // Start in middle
            should_quit: false,
            message: None,
            poll_interval: Duration::from_millis(config.ui.poll_interval_ms),
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Digits are 1-based column labels; the engine rejects
                // anything past the right edge.
                let column = c as usize - '1' as usize;
                if column < self.width {
                    self.selected_column = column;
                }
                self.drop_in(column);
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        match GameState::new(self.width, self.height) {
            Ok(state) => {
                self.game_state = state;
                self.selected_column = self.width / 2;
                self.message = Some("New game started!".to_string());
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        self.drop_in(self.selected_column);
    }

    fn drop_in(&mut self, column: usize) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(column) {
            Ok(report) => {
                // Check if game just ended
                self.message = match report.phase {
                    Phase::Won(player) => Some(format!("{player} won!")),
                    Phase::Tied => Some("It's a tie!".to_string()),
                    Phase::InProgress => None,
                };
            }
            Err(GameError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(GameError::InvalidColumn { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.message);
    }
}
