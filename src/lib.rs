//! A Connect 4 opponent driven by depth-limited minimax search
//!
//! The engine looks a fixed number of moves ahead, pruning the game tree
//! with alpha-beta bounds, and scores the positions at the search horizon
//! with a window-counting heuristic.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::Board, config::EngineConfig, search::Engine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the human has three in a row along the bottom
//! let board = Board::from_moves("15253")?;
//! let mut engine = Engine::new(EngineConfig::default())?;
//! let result = engine.best_move(&board);
//!
//! assert_eq!(result.column, Some(3));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod config;

pub mod error;

pub mod board;

pub mod window;

pub mod win;

pub mod evaluate;

pub mod search;


/// The default number of rows on the board
pub const ROWS: usize = 6;

/// The default number of columns on the board
pub const COLUMNS: usize = 7;

/// The default number of pieces in a row needed to win
pub const WINDOW_LENGTH: usize = 4;

/// The default search depth in plies
pub const MAX_DEPTH: u32 = 5;

pub use search::LARGE_WIN;

// a window must fit along every direction of the default board
const_assert!(WINDOW_LENGTH <= ROWS);
const_assert!(WINDOW_LENGTH <= COLUMNS);
const_assert!(WINDOW_LENGTH >= 3);
