//! Root move selection for the maximizing player

use log::{debug, trace};
use rayon::prelude::*;

use crate::{
    board::{Board, Mark},
    search::{SearchResult, Searcher},
};

/// Scores the move in `column` for `PlayerB`, or `None` if it cannot be played
fn score_root_move(board: &Board, column: usize, max_depth: usize) -> Option<SearchResult> {
    let mut next = *board;
    next.place(column, Mark::PlayerB).ok()?;

    let mut searcher = Searcher::new();
    // the ply after the candidate move belongs to the opponent
    let score = searcher.search(&next, 0, max_depth, false);
    trace!("column {} scored {} ({} nodes)", column, score, searcher.node_count);

    Some(SearchResult {
        score,
        column,
        node_count: searcher.node_count,
    })
}

/// Keeps the first result with the strictly greatest score, totalling node counts
fn pick_best<I: IntoIterator<Item = SearchResult>>(results: I) -> Option<SearchResult> {
    let mut best: Option<SearchResult> = None;
    let mut node_count = 0;
    for result in results {
        node_count += result.node_count;
        match best {
            Some(b) if result.score <= b.score => {}
            _ => best = Some(result),
        }
    }

    match best {
        Some(mut best) => {
            best.node_count = node_count;
            debug!("Best AI move column: {} with value {}", best.column, best.score);
            Some(best)
        }
        None => {
            debug!("AI found no legal moves");
            None
        }
    }
}

/// Searches every playable column left to right and returns the best one with its score
pub fn best_move_scored(board: &Board, max_depth: usize) -> Option<SearchResult> {
    pick_best(
        board
            .playable_columns()
            .filter_map(|column| score_root_move(board, column, max_depth)),
    )
}

/// Returns the best column for `PlayerB`, or `None` if no column is playable
pub fn best_move(board: &Board, max_depth: usize) -> Option<usize> {
    best_move_scored(board, max_depth).map(|result| result.column)
}

/// Like [`best_move_scored`], searching the root columns on the rayon thread pool
///
/// The results are gathered in column order before picking, so ties resolve
/// to the same column as the sequential search.
pub fn best_move_parallel_scored(board: &Board, max_depth: usize) -> Option<SearchResult> {
    let columns: Vec<usize> = board.playable_columns().collect();
    let results: Vec<SearchResult> = columns
        .par_iter()
        .filter_map(|&column| score_root_move(board, column, max_depth))
        .collect();
    pick_best(results)
}

/// Like [`best_move`], searching the root columns in parallel
pub fn best_move_parallel(board: &Board, max_depth: usize) -> Option<usize> {
    best_move_parallel_scored(board, max_depth).map(|result| result.column)
}
