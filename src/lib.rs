//! A depth-limited minimax agent for playing the board game 'Connect 4'
//!
//! The search engine is written against the generic [`Board`](board::Board)
//! trait and knows nothing about Connect 4 itself; [`ConnectFourBoard`] is
//! the concrete game it is usually paired with.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{connect_four::ConnectFourBoard, search::find_best_move};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // the first player has three stacked tiles in the leftmost column
//! let board = ConnectFourBoard::from_moves("171716")?;
//! let best_move = find_best_move(&board, 2)?;
//!
//! assert_eq!(best_move, 0);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod piece;

pub mod board;

pub mod connect_four;

pub mod search;


pub use board::{Board, BoardExt};
pub use connect_four::ConnectFourBoard;
pub use error::{GameError, Result};
pub use piece::Piece;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const SEGMENT_LENGTH: usize = 4;

// a winning segment has to fit on the board in every orientation
const_assert!(SEGMENT_LENGTH <= WIDTH && SEGMENT_LENGTH <= HEIGHT);
// the open-ended threat check needs two ends and at least one interior tile
const_assert!(SEGMENT_LENGTH >= 3);
