//! Backtracking search for gridoku puzzles.
//!
//! This crate provides [`BacktrackSolver`], a depth-first exhaustive search
//! over a [`Grid`](gridoku_core::Grid): it either completes the puzzle in
//! place or proves that no legal completion exists. Search order is fixed
//! (cells row-major, digits ascending), so results are fully deterministic.
//!
//! # Examples
//!
//! ```
//! use std::str::FromStr as _;
//!
//! use gridoku_core::{DigitGrid, Grid};
//! use gridoku_solver::BacktrackSolver;
//!
//! let snapshot = DigitGrid::from_str(
//!     "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//!     ",
//! )?;
//! let mut grid = Grid::from(snapshot);
//!
//! let (solved, stats) = BacktrackSolver::new().solve(&mut grid)?;
//! assert!(solved);
//! assert!(grid.is_complete());
//! println!("solved in {} nodes", stats.nodes());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{backtrack::*, error::*};

mod backtrack;
mod error;
