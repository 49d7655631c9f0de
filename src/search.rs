//! Depth-limited minimax search
//!
//! # Position Scoring
//! Scores are from `PlayerB`'s point of view. A position already won by
//! `PlayerB` scores [`WIN_SCORE`] minus the number of plies searched to reach
//! it, so faster wins score higher. A position won by `PlayerA` scores the
//! negation, so slower losses are preferred. Full boards score 0 and positions
//! at the depth limit are scored by [`evaluate`].
//!
//! Every node plays on its own copy of the board, sibling branches never see
//! each other's moves.

use crate::{board::*, evaluator::evaluate, terminal::*, WIDTH, WIN_SCORE};

/// The score of a searched move, with the column it was played in at the root
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    pub score: i32,
    pub column: usize,
    /// The number of positions visited to find the score (for diagnostics only)
    pub node_count: usize,
}

/// A minimax searcher with a node counter
///
/// The searcher holds no position of its own, every call to
/// [`search`](Searcher::search) is given the board to search from.
#[derive(Clone, Default, Debug)]
pub struct Searcher {
    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new() -> Self {
        Self { node_count: 0 }
    }

    /// Scores `board` by exhaustive minimax down to `max_depth`
    ///
    /// `depth` is the number of plies already played below the root and
    /// `maximizing` says whether `PlayerB` is the one to move.
    pub fn search(&mut self, board: &Board, depth: usize, max_depth: usize, maximizing: bool) -> i32 {
        self.node_count += 1;

        // terminal positions take precedence over the depth limit
        if has_four_in_a_row(board, Mark::PlayerB) {
            return WIN_SCORE - depth as i32;
        }
        if has_four_in_a_row(board, Mark::PlayerA) {
            return -WIN_SCORE + depth as i32;
        }
        if is_draw(board) {
            return 0;
        }

        if depth >= max_depth {
            return evaluate(board);
        }

        let mark = if maximizing { Mark::PlayerB } else { Mark::PlayerA };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        // a board with no playable column was caught as a draw above
        for column in 0..WIDTH {
            let mut next = *board;
            if next.place(column, mark).is_err() {
                continue;
            }
            let score = self.search(&next, depth + 1, max_depth, !maximizing);
            // strict comparison keeps the leftmost column on ties
            if (maximizing && score > best) || (!maximizing && score < best) {
                best = score;
            }
        }
        best
    }
}

/// Scores `board` with a fresh [`Searcher`]
pub fn search(board: &Board, depth: usize, max_depth: usize, maximizing: bool) -> i32 {
    Searcher::new().search(board, depth, max_depth, maximizing)
}
