//! Core Connect Four game logic: board, players, win detection and the game
//! state that ties them together.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameConfig, GameOutcome, GameState, MoveError, MoveOutcome};
pub use win::{detect_win, WIN_LENGTH};
