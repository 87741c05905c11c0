//! A heuristic opponent for playing the board game 'Connect 4'
//!
//! This agent uses a depth-limited minimax search with alpha-beta
//! pruning and a windowed threat heuristic to pick strong (not perfect)
//! moves quickly.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::Board, engine::Engine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves("44")?;
//! let engine = Engine::default();
//! let column = engine.select_move(&board)?;
//!
//! assert!(board.is_legal(column));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod rules;

pub mod heuristic;

pub mod engine;

pub mod game;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The length of a winning run
pub const CONNECT: usize = 4;

// the window scans and the centre-column bonus assume a board at least
// one window wide and tall in every orientation
const_assert!(WIDTH >= CONNECT);
const_assert!(HEIGHT >= CONNECT);
