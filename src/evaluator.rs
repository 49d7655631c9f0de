//! Static evaluation of positions at the search depth limit
//!
//! Every window of four cells is scored by how close each player is to
//! completing it. Windows shared by both players can never be completed and
//! score nothing. Threats from the maximizer are weighted slightly above the
//! matching threats from the minimizer.

use crate::board::{windows, Board, Mark, Window};
use crate::CONNECT;

/// Maximizer has three tiles and one gap in a window
pub const MAX_THREE: i32 = 5;
/// Maximizer has two tiles and two gaps in a window
pub const MAX_TWO: i32 = 2;
/// Minimizer has three tiles and one gap in a window
pub const MIN_THREE: i32 = -4;
/// Minimizer has two tiles and two gaps in a window
pub const MIN_TWO: i32 = -1;

fn count(board: &Board, window: &Window, mark: Mark) -> usize {
    window
        .iter()
        .filter(|&&(row, column)| board.cell(row, column) == mark)
        .count()
}

/// Scores one window for `mark` given weights for three and two tiles
fn score_window(board: &Board, window: &Window, mark: Mark, three: i32, two: i32) -> i32 {
    let own = count(board, window, mark);
    let empty = count(board, window, Mark::Empty);
    match (own, empty) {
        (o, 1) if o == CONNECT - 1 => three,
        (o, 2) if o == CONNECT - 2 => two,
        _ => 0,
    }
}

/// Heuristic score of a position from `PlayerB`'s point of view
///
/// Positive values favour the maximizer. The result only depends on the
/// cells of the board.
pub fn evaluate(board: &Board) -> i32 {
    let maximizer: i32 = windows()
        .map(|w| score_window(board, &w, Mark::PlayerB, MAX_THREE, MAX_TWO))
        .sum();
    let minimizer: i32 = windows()
        .map(|w| score_window(board, &w, Mark::PlayerA, MIN_THREE, MIN_TWO))
        .sum();
    maximizer + minimizer
}
