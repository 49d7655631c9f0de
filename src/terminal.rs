//! Detection of won and drawn positions

use crate::board::{windows, Board, Mark};
use crate::WIDTH;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Playing,
    Win(Mark),
    Draw,
}

/// Returns true if any horizontal, vertical or diagonal window is filled by `mark`
///
/// Each mark is checked on its own, nothing is assumed about the other player.
pub fn has_four_in_a_row(board: &Board, mark: Mark) -> bool {
    windows().any(|window| {
        window
            .iter()
            .all(|&(row, column)| board.cell(row, column) == mark)
    })
}

/// Returns true if the top row is full, so no column can be played
///
/// This does not look for a winner, see [`outcome`].
pub fn is_draw(board: &Board) -> bool {
    (0..WIDTH).all(|column| !board.cell(0, column).is_empty())
}

/// Classifies a position, checking for a winner before checking for a full board
pub fn outcome(board: &Board) -> Outcome {
    if has_four_in_a_row(board, Mark::PlayerB) {
        Outcome::Win(Mark::PlayerB)
    } else if has_four_in_a_row(board, Mark::PlayerA) {
        Outcome::Win(Mark::PlayerA)
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::Playing
    }
}
