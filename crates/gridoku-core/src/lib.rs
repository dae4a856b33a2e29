//! Core data structures for the gridoku solver.
//!
//! This crate provides the puzzle state of a 9x9 number-place (Sudoku) grid
//! and the value types it is built from:
//!
//! - [`digit`]: type-safe representation of digits 1-9
//! - [`position`]: `(row, col)` cell coordinates and the 3x3 block mapping
//! - [`digit_set`]: a set of digits 1-9 backed by a 9-bit mask — the
//!   "used-set" type that makes legality checks O(1)
//! - [`digit_grid`]: a plain 9x9 matrix of optional digits — the snapshot
//!   type exchanged with the outside world, including its text format
//! - [`grid`]: [`Grid`], the constraint-tracked puzzle state with validated
//!   placement and erasure
//!
//! # Examples
//!
//! ```
//! use gridoku_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.place(Position::new(0, 0), Digit::from_value(5))?;
//!
//! // 5 is now used up in row 0, column 0, and the top-left block.
//! assert!(!grid.can_place(Position::new(0, 8), Digit::from_value(5)));
//! assert!(grid.can_place(Position::new(8, 8), Digit::from_value(5)));
//! # Ok::<(), gridoku_core::PlaceError>(())
//! ```

pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod grid;
pub mod position;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_grid::{DigitGrid, ParseGridError},
    digit_set::DigitSet,
    grid::{Grid, PlaceError},
    position::Position,
};
