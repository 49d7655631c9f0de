use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use std::io::{stdin, stdout, Write};

use connect4_minimax::{
    board::{Board, Mark},
    selector::{best_move, best_move_parallel},
    terminal::Outcome,
    DEFAULT_DEPTH,
};

mod game;
use game::*;

/// Play Connect 4 against a minimax AI
#[derive(Parser)]
#[command(name = "connect4", author, version, about, long_about = None)]
struct Cli {
    /// Number of plies searched after each candidate AI move
    #[arg(short, long, default_value_t = DEFAULT_DEPTH, value_parser = parse_depth)]
    depth: usize,

    /// Let the AI play the first tile
    #[arg(long, conflicts_with = "moves")]
    ai_first: bool,

    /// Let the AI play both sides
    #[arg(long)]
    watch: bool,

    /// Search the AI's candidate moves on all cores
    #[arg(long)]
    parallel: bool,

    /// Start from a position given as 1-indexed columns, human first (e.g. "4453")
    #[arg(long, default_value = "")]
    moves: String,
}

fn parse_depth(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(depth) if depth >= 1 => Ok(depth),
        _ => Err(format!("'{}' is not a search depth of at least 1", s)),
    }
}

/// Picks a column for `mark`, searching from its point of view
fn ai_move(board: &Board, mark: Mark, depth: usize, parallel: bool) -> Option<usize> {
    let view = match mark {
        Mark::PlayerA => board.with_players_swapped(),
        _ => *board,
    };
    if parallel {
        best_move_parallel(&view, depth)
    } else {
        best_move(&view, depth)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut game = if cli.moves.is_empty() {
        Game::new(if cli.ai_first {
            Mark::PlayerB
        } else {
            Mark::PlayerA
        })
    } else {
        Game::from_moves(&cli.moves)?
    };

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        game.display()?;

        match game.state {
            Outcome::Playing => {
                let next_move =
                    // AI player
                    if game.to_move == Mark::PlayerB || cli.watch {
                        let spinner = ProgressBar::new_spinner();
                        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.red} {msg}"));
                        spinner.set_message("AI is thinking...");
                        spinner.enable_steady_tick(100);

                        // slow down play if both players are AI
                        if cli.watch {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let column = ai_move(&game.board, game.to_move, cli.depth, cli.parallel);
                        spinner.finish_and_clear();

                        match column {
                            Some(column) => {
                                println!("AI plays column {}", column + 1);
                                column + 1
                            }
                            None => {
                                println!("AI has no legal moves.");
                                break;
                            }
                        }

                    // human player
                    } else {
                        print!("Your move (1-{}) > ", connect4_minimax::WIDTH);
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            // end of input
                            break;
                        }

                        match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    };

                if let Err(err) = game.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            Outcome::Win(Mark::PlayerA) => {
                println!("{}", if cli.watch { "Yellow wins!" } else { "You win!" });
                break;
            }
            Outcome::Win(_) => {
                println!("{}", if cli.watch { "Red wins!" } else { "AI wins!" });
                break;
            }
            Outcome::Draw => {
                println!("It's a tie!");
                break;
            }
        }
    }

    if !game.game.is_empty() {
        println!("Moves played: {}", game.game);
    }
    Ok(())
}
