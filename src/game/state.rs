use tracing::{debug, info};

use crate::error::ConfigError;

use super::board::{COLS, ROWS};
use super::win::{detect_win, WIN_LENGTH};
use super::{Board, Player};

/// Board dimensions and the run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            columns: COLS,
            rows: ROWS,
            win_length: WIN_LENGTH,
        }
    }
}

impl GameConfig {
    /// Check the board can be built and the run length is winnable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::Validation(
                "game.columns must be >= 1".into(),
            ));
        }
        if self.rows == 0 {
            return Err(ConfigError::Validation(
                "game.rows must be >= 1".into(),
            ));
        }
        if self.win_length < 2 {
            return Err(ConfigError::Validation(
                "game.win_length must be >= 2".into(),
            ));
        }
        if self.win_length > self.columns.max(self.rows) {
            return Err(ConfigError::Validation(
                "game.win_length must fit on the board".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Tie,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {columns} columns)")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("the game is over")]
    GameOver,
}

/// Where a successful move landed and what it led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub column: usize,
    pub row: usize,
    pub player: Player,
    pub outcome: GameOutcome,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
}

impl GameState {
    /// Create a standard 7x6, four-in-a-row game
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create a game from a config that has already passed
    /// [`GameConfig::validate`]. Use [`GameState::try_with_config`] otherwise.
    pub fn with_config(config: GameConfig) -> Self {
        GameState {
            config,
            board: Board::with_size(config.columns, config.rows),
            current_player: Player::FIRST,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Create a game with the given dimensions and run length, rejecting
    /// configs with an empty board or an unwinnable or trivial run length
    pub fn try_with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Replace the whole game with a fresh one of the same configuration
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
        info!("new game started");
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player to move next, `None` once the game is over
    pub fn turn(&self) -> Option<Player> {
        if self.is_terminal() {
            None
        } else {
            Some(self.current_player)
        }
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        self.board.is_column_full(column)
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.columns())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Number of pieces on the board
    pub fn move_count(&self) -> usize {
        self.board.filled_cells()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Every check runs before the board is touched, so a rejected move leaves
    /// the game exactly as it was. A move that completes a run on the last
    /// empty cell is a win, not a tie.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveOutcome, MoveError> {
        if column >= self.board.columns() {
            return Err(MoveError::InvalidColumn {
                column,
                columns: self.board.columns(),
            });
        }
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if self.board.is_column_full(column) {
            return Err(MoveError::ColumnFull { column });
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player.into())?;
        debug!(column, row, %player, "piece dropped");

        if let Some(winner) = detect_win(&self.board, column, row, self.config.win_length) {
            self.outcome = GameOutcome::Winner(winner);
            info!(%winner, moves = self.move_count(), "game won");
        } else if self.board.is_full() {
            self.outcome = GameOutcome::Tie;
            info!(moves = self.move_count(), "game tied");
        } else {
            self.current_player = player.other();
        }

        Ok(MoveOutcome {
            column,
            row,
            player,
            outcome: self.outcome,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
