//! Command-line driver for the gridoku solver.
//!
//! Reads a puzzle from a file argument (or standard input when omitted),
//! solves it, and prints the completed grid. A puzzle is 81 cells read left
//! to right, top to bottom: digits `1`-`9` for givens and `.`, `_`, or `0`
//! for empty cells; whitespace is ignored.
//!
//! Exit codes:
//!
//! - `0` — a solution was found and printed
//! - `1` — the puzzle has no solution, or the node budget ran out
//! - `2` — the input could not be read or is not a valid puzzle
//!
//! # Usage
//!
//! ```sh
//! gridoku puzzle.txt
//! echo "..." | gridoku
//! gridoku --node-budget 1000000 puzzle.txt
//! ```

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use gridoku_core::{DigitGrid, Grid};
use gridoku_solver::{BacktrackSolver, SolveError};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Puzzle file; reads standard input when omitted.
    #[arg(value_name = "FILE")]
    puzzle: Option<PathBuf>,

    /// Abort the search after this many tentative placements.
    #[arg(long, value_name = "NODES")]
    node_budget: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let input = match read_input(args.puzzle.as_deref()) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("cannot read puzzle: {err}");
            process::exit(2);
        }
    };

    let snapshot = match input.parse::<DigitGrid>() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("cannot parse puzzle: {err}");
            process::exit(2);
        }
    };

    let mut grid = Grid::from(snapshot);
    log::debug!("parsed puzzle with {} givens", grid.filled_count());

    let solver = match args.node_budget {
        Some(budget) => BacktrackSolver::with_node_budget(budget),
        None => BacktrackSolver::new(),
    };

    match solver.solve(&mut grid) {
        Ok((true, stats)) => {
            log::info!(
                "solved in {} nodes ({} backtracks)",
                stats.nodes(),
                stats.backtracks()
            );
            println!("{grid}");
        }
        Ok((false, stats)) => {
            log::info!("search exhausted after {} nodes", stats.nodes());
            eprintln!("no solution");
            process::exit(1);
        }
        Err(err @ SolveError::Contradictory) => {
            eprintln!("{err}");
            process::exit(2);
        }
        Err(err @ SolveError::BudgetExceeded) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
