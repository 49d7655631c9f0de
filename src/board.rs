use anyhow::{anyhow, Result};
use thiserror::Error;

use std::fmt;

use crate::{CONNECT, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Mark {
    Empty,
    /// The human player, minimizing the score
    PlayerA,
    /// The AI player, maximizing the score
    PlayerB,
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// The mark of the other player, `Empty` stays `Empty`
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::PlayerA => Mark::PlayerB,
            Mark::PlayerB => Mark::PlayerA,
            Mark::Empty => Mark::Empty,
        }
    }
}

impl Default for Mark {
    fn default() -> Self {
        Mark::Empty
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
pub enum MoveError {
    #[error("Invalid move, column {} out of range. Columns must be between 1 and {}", .column + 1, WIDTH)]
    OutOfRange { column: usize },

    #[error("Invalid move, column {} full", .column + 1)]
    ColumnFull { column: usize },
}

/// Cell coordinates of one run of `CONNECT` aligned cells, as (row, column)
pub type Window = [(usize, usize); CONNECT];

/// The set of cells along which a line of four can be made, for every orientation
pub fn windows() -> impl Iterator<Item = Window> {
    // (row step, column step, first row, last row exclusive)
    static DIRECTIONS: [(isize, isize, usize, usize); 4] = [
        // horizontal
        (0, 1, 0, HEIGHT),
        // vertical
        (1, 0, 0, HEIGHT - CONNECT + 1),
        // diagonal \
        (1, 1, 0, HEIGHT - CONNECT + 1),
        // diagonal /
        (-1, 1, CONNECT - 1, HEIGHT),
    ];

    DIRECTIONS
        .iter()
        .flat_map(|&(d_row, d_col, first_row, last_row)| {
            let last_col = if d_col == 0 { WIDTH } else { WIDTH - CONNECT + 1 };
            (first_row..last_row).flat_map(move |row| {
                (0..last_col).map(move |col| {
                    let mut window = [(0, 0); CONNECT];
                    for (i, cell) in window.iter_mut().enumerate() {
                        *cell = (
                            (row as isize + d_row * i as isize) as usize,
                            (col as isize + d_col * i as isize) as usize,
                        );
                    }
                    window
                })
            })
        })
}

/// A Connect 4 grid
///
/// Row 0 is the top of the board and row `HEIGHT - 1` the bottom, so tiles
/// stack towards row 0. The board is a plain value: copying it gives an
/// independent position that can be played on without affecting the original.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Board {
    cells: [[Mark; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Builds a position from a string of 1-indexed columns, alternating
    /// players starting with `PlayerA`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut mark = Mark::PlayerA;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is won at any point
                    if crate::terminal::has_four_in_a_row(&board, mark.opponent()) {
                        return Err(anyhow!("Invalid position, game is over"));
                    }
                    board.place(column - 1, mark)?;
                    mark = mark.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    pub fn cell(&self, row: usize, column: usize) -> Mark {
        self.cells[row][column]
    }

    pub fn is_column_playable(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].is_empty()
    }

    /// Columns that can still take a tile, left to right
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.is_column_playable(column))
    }

    /// The number of tiles in `column`
    pub fn column_height(&self, column: usize) -> usize {
        (0..HEIGHT)
            .rev()
            .take_while(|&row| !self.cells[row][column].is_empty())
            .count()
    }

    /// The same position with the two players' tiles exchanged
    ///
    /// Lets the maximizing search choose moves for `PlayerA`.
    pub fn with_players_swapped(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut().flat_map(|row| row.iter_mut()) {
            *cell = cell.opponent();
        }
        swapped
    }

    pub fn is_full(&self) -> bool {
        self.playable_columns().next().is_none()
    }

    /// Drops `mark` into the lowest empty cell of `column` and returns its row
    pub fn place(&mut self, column: usize, mark: Mark) -> Result<usize, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::OutOfRange { column });
        }
        for row in (0..HEIGHT).rev() {
            if self.cells[row][column].is_empty() {
                self.cells[row][column] = mark;
                return Ok(row);
            }
        }
        Err(MoveError::ColumnFull { column })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in 1..=WIDTH {
            write!(f, "{}", column)?;
        }
        writeln!(f)?;
        for row in self.cells.iter() {
            for cell in row.iter() {
                let c = match cell {
                    Mark::Empty => '.',
                    Mark::PlayerA => 'X',
                    Mark::PlayerB => 'O',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_stacks_from_the_bottom() {
        let mut board = Board::new();
        assert_eq!(board.place(2, Mark::PlayerA), Ok(HEIGHT - 1));
        assert_eq!(board.place(2, Mark::PlayerB), Ok(HEIGHT - 2));
        assert_eq!(board.cell(HEIGHT - 1, 2), Mark::PlayerA);
        assert_eq!(board.cell(HEIGHT - 2, 2), Mark::PlayerB);
        assert_eq!(board.column_height(2), 2);
        assert_eq!(board.column_height(3), 0);
    }

    #[test]
    fn place_rejects_full_and_out_of_range_columns() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            board.place(0, Mark::PlayerB).unwrap();
        }
        let before = board;
        assert!(!board.is_column_playable(0));
        assert_eq!(board.place(0, Mark::PlayerA), Err(MoveError::ColumnFull { column: 0 }));
        assert_eq!(
            board.place(WIDTH, Mark::PlayerA),
            Err(MoveError::OutOfRange { column: WIDTH })
        );
        // nothing was placed elsewhere
        assert_eq!(board, before);
        assert!(!board.is_column_playable(WIDTH));
    }

    #[test]
    fn move_error_messages_are_one_indexed() {
        assert_eq!(
            MoveError::ColumnFull { column: 3 }.to_string(),
            "Invalid move, column 4 full"
        );
        assert_eq!(
            MoveError::OutOfRange { column: 7 }.to_string(),
            "Invalid move, column 8 out of range. Columns must be between 1 and 7"
        );
    }

    #[test]
    fn window_count_covers_every_orientation() {
        let horizontal = HEIGHT * (WIDTH - CONNECT + 1);
        let vertical = (HEIGHT - CONNECT + 1) * WIDTH;
        let diagonal = (HEIGHT - CONNECT + 1) * (WIDTH - CONNECT + 1);
        assert_eq!(windows().count(), horizontal + vertical + 2 * diagonal);
        assert!(windows().all(|w| w.iter().all(|&(r, c)| r < HEIGHT && c < WIDTH)));
    }

    #[test]
    fn swapping_players_keeps_empty_cells() {
        let board = Board::from_moves("112").unwrap();
        let swapped = board.with_players_swapped();
        assert_eq!(swapped.cell(HEIGHT - 1, 0), Mark::PlayerB);
        assert_eq!(swapped.cell(HEIGHT - 2, 0), Mark::PlayerA);
        assert_eq!(swapped.cell(HEIGHT - 1, 1), Mark::PlayerB);
        assert_eq!(swapped.cell(HEIGHT - 1, 2), Mark::Empty);
        assert_eq!(swapped.with_players_swapped(), board);
    }

    #[test]
    fn display_marks_players() {
        let board = Board::from_moves("12").unwrap();
        let text = board.to_string();
        let last = text.lines().last().unwrap();
        assert_eq!(last, "XO.....");
        assert!(text.starts_with("1234567\n"));
    }
}
