use crate::game::{GameConfig, GameState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on, clamped to the board.
    pub start_column: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig { start_column: 3 }
    }
}

pub struct App {
    game_state: GameState,
    start_column: usize,
    selected_column: usize,
    should_quit: bool,
    notice: Option<String>,
}

impl App {
    pub fn new(game: GameConfig, ui: &UiConfig) -> Self {
        let start_column = ui.start_column.min(game.columns.saturating_sub(1));
        App {
            game_state: GameState::with_config(game),
            start_column,
            selected_column: start_column,
            should_quit: false,
            notice: None,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
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
        // Clear notice on any key press
        self.notice = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.move_selection(-1),
            KeyCode::Right => self.move_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                self.drop_piece(column);
            }
            KeyCode::Char('r') => {
                if self.game_state.is_terminal() {
                    self.game_state.reset();
                    self.selected_column = self.start_column;
                } else {
                    self.notice = Some("Finish this game before playing again".to_string());
                }
            }
            _ => {}
        }
    }

    /// Step the selector left or right, skipping full columns
    fn move_selection(&mut self, direction: isize) {
        let columns = self.game_state.board().columns();
        let mut column = self.selected_column;
        while let Some(next) = column
            .checked_add_signed(direction)
            .filter(|&next| next < columns)
        {
            column = next;
            if !self.game_state.is_column_full(column) {
                self.selected_column = column;
                return;
            }
        }
    }

    /// Drop a piece for the current player. Rejected moves only leave a notice.
    fn drop_piece(&mut self, column: usize) {
        match self.game_state.apply_move(column) {
            Ok(_) => {
                self.selected_column = column;
                if self.game_state.is_column_full(column) {
                    if let Some(&next) = self.game_state.legal_columns().first() {
                        self.selected_column = next;
                    }
                }
            }
            Err(err) => {
                debug!(column, error = %err, "move rejected");
                self.notice = Some(capitalize(&err.to_string()));
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_column, &self.notice);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameConfig::default(), &UiConfig::default())
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
