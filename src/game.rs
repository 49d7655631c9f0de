use anyhow::{anyhow, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_minimax::{
    board::{Board, Mark},
    terminal::{outcome, Outcome},
    HEIGHT, WIDTH,
};

/// A game in progress, tracking whose turn it is
#[derive(Clone)]
pub struct Game {
    pub board: Board,
    pub to_move: Mark,
    pub game: String,
    pub state: Outcome,
}

impl Game {
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            game: String::new(),
            state: Outcome::Playing,
        }
    }

    /// Resumes a game from a move string, `PlayerA` having moved first
    pub fn from_moves(moves: &str) -> Result<Self> {
        let board = Board::from_moves(moves)?;
        let to_move = if moves.len() % 2 == 0 {
            Mark::PlayerA
        } else {
            Mark::PlayerB
        };
        Ok(Self {
            board,
            to_move,
            game: moves.to_string(),
            state: outcome(&board),
        })
    }

    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<Outcome> {
        if column_one_indexed < 1 {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        self.board.place(column_one_indexed - 1, self.to_move)?;
        self.game.push_str(&column_one_indexed.to_string());
        self.to_move = self.to_move.opponent();
        self.state = outcome(&self.board);

        Ok(self.state)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;

        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                stdout.queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match self.board.cell(row, column) {
                            Mark::PlayerA => Color::Yellow,
                            Mark::PlayerB => Color::Red,
                            Mark::Empty => Color::DarkBlue,
                        }),
                ))?;
            }
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;
        Ok(())
    }
}
