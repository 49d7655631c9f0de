//! A depth-limited minimax agent for playing the board game 'Connect 4'
//!
//! The agent scores every legal column by searching the game tree a fixed
//! number of plies ahead, falling back to a window-counting heuristic at the
//! depth cutoff.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{best_move, create_board, place, Mark};
//!
//! let mut board = create_board();
//! let column = best_move(&board, 4);
//!
//! // the centre column takes part in the most lines
//! assert_eq!(column, Some(3));
//! place(&mut board, 3, Mark::PlayerB).unwrap();
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod terminal;

pub mod evaluator;

pub mod search;

pub mod selector;


pub use board::{Board, Mark, MoveError};
pub use search::SearchResult;
pub use terminal::Outcome;

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of aligned tiles needed to win
pub const CONNECT: usize = 4;

/// The score of a win found at the root of a search, reduced by one per ply
pub const WIN_SCORE: i32 = 1000;

/// The search depth used when none is given
pub const DEFAULT_DEPTH: usize = 5;

// every orientation must fit at least one window
const_assert!(WIDTH >= CONNECT && HEIGHT >= CONNECT);

/// Creates an empty board
pub fn create_board() -> Board {
    Board::new()
}

/// Returns true if a tile can be dropped into `column`
pub fn is_column_playable(board: &Board, column: usize) -> bool {
    board.is_column_playable(column)
}

/// Drops `mark` into `column`, returning the row it landed on
pub fn place(board: &mut Board, column: usize, mark: Mark) -> Result<usize, MoveError> {
    board.place(column, mark)
}

/// Returns true if `mark` has four aligned tiles anywhere on the board
pub fn has_four_in_a_row(board: &Board, mark: Mark) -> bool {
    terminal::has_four_in_a_row(board, mark)
}

/// Returns true if no column is playable
pub fn is_draw(board: &Board) -> bool {
    terminal::is_draw(board)
}

/// Chooses the best column for the maximizer, or `None` if the board is full
pub fn best_move(board: &Board, max_depth: usize) -> Option<usize> {
    selector::best_move(board, max_depth)
}
