//! # Connect Four
//!
//! A two-player Connect Four game played in the terminal. The game engine is
//! independent of the UI: callers own a [`game::GameState`], feed it column
//! choices and read back the board, turn and outcome.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win detection, game state
//! - [`ui`]: Terminal UI built with Ratatui
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
