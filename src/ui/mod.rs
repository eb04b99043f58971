//! Terminal UI: the board, a whose-turn / result line, per-column drop
//! markers and the play-again control.

mod app;
pub mod game_view;

pub use app::{App, UiConfig};
