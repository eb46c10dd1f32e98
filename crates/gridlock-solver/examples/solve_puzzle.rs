//! Example demonstrating the solve pipeline end to end.
//!
//! Reads a puzzle (9 lines of 9 characters, digits or `.`) from a file, or
//! falls back to a built-in puzzle, then prints the board before and after
//! solving together with solve statistics.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Solve a puzzle from a file:
//!
//! ```sh
//! cargo run --example solve_puzzle -- path/to/puzzle.txt
//! ```
//!
//! Enable solver logging:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example solve_puzzle
//! ```

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use gridlock_core::Board;
use gridlock_solver::{SolveStats, Solver};

const PRESET: [&str; 9] = [
    ".57....68",
    "683......",
    "1..896...",
    "..846..9.",
    "74.9..35.",
    "3...17.46",
    "4...5..8.",
    "2.918.573",
    ".35.72...",
];

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a puzzle file; the built-in puzzle is used when omitted.
    #[arg(value_name = "FILE")]
    puzzle: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let board = match load_board(args.puzzle.as_deref()) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("failed to load puzzle: {err}");
            process::exit(2);
        }
    };

    println!("Puzzle:");
    println!("{board}");

    let mut stats = SolveStats::default();
    match Solver::new().solve_with_stats(&board, &mut stats) {
        Ok(solved) if solved.is_solved() => {
            println!("Solution:");
            println!("{solved}");
            print_stats(&stats);
        }
        Ok(_) => {
            eprintln!("search exhausted without finding a solution");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("solving failed: {err}");
            process::exit(1);
        }
    }
}

fn load_board(path: Option<&Path>) -> Result<Board, Box<dyn Error>> {
    let board = match path {
        Some(path) => fs::read_to_string(path)?.parse()?,
        None => Board::from_rows(&PRESET)?,
    };
    Ok(board)
}

fn print_stats(stats: &SolveStats) {
    println!("Passes:              {}", stats.passes());
    println!("Naked subsets:       {}", stats.naked_subsets());
    println!("Locked rows:         {}", stats.locked_rows());
    println!("Locked columns:      {}", stats.locked_columns());
    println!("Locked intersection: {}", stats.locked_intersection());
    println!("Backtracking calls:  {}", stats.brute_force_calls());
    println!("Guesses:             {}", stats.guesses());
}
