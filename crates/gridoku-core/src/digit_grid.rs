//! Plain digit grid: the snapshot type.
//!
//! [`DigitGrid`] is a bare 9x9 matrix of optional digits with no constraint
//! bookkeeping attached. It is what crosses the boundary between the solver
//! core and its collaborators: a caller seeds a [`Grid`](crate::Grid) from a
//! `DigitGrid` and reads one back for display. The text format lives here
//! too.
//!
//! # Text format
//!
//! A grid is 81 cells, read left to right, top to bottom:
//!
//! - Digits `1`-`9` represent filled cells
//! - `.`, `_`, or `0` represent empty cells
//! - Whitespace is ignored
//!
//! ```
//! use std::str::FromStr as _;
//!
//! use gridoku_core::{DigitGrid, Position};
//!
//! let grid = DigitGrid::from_str(
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
//! assert_eq!(grid[Position::new(0, 0)].map(u8::from), Some(5));
//! assert_eq!(grid[Position::new(0, 2)], None);
//! # Ok::<(), gridoku_core::ParseGridError>(())
//! ```

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, Position};

/// A plain 9x9 grid of optional digits.
///
/// Cells are addressed by [`Position`] and hold `Option<Digit>`. Display
/// prints nine rows of nine space-separated tokens with `.` for empty cells;
/// parsing accepts the format described in the [module docs](self).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl DigitGrid {
    /// Creates a grid with all 81 cells empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at a position, or `None` when the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at a position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns an iterator over the filled cells in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (Position, Digit)> + '_ {
        Position::ALL
            .iter()
            .filter_map(|&pos| self.get(pos).map(|digit| (pos, digit)))
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index()]
    }
}

/// Error returned when parsing a grid string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// The input contains a character that is neither a digit, an
    /// empty-cell placeholder, nor whitespace.
    #[display("unexpected character {character:?} in grid")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The input does not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// The number of cells found.
        count: usize,
    },
}

impl FromStr for DigitGrid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch as u8 - b'0';
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseGridError::UnexpectedCharacter { character: ch }),
            };
            if let Some(slot) = cells.get_mut(count) {
                *slot = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                if col > 0 {
                    f.write_str(" ")?;
                }
                match self.get(Position::new(row, col)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str(".")?,
                }
            }
            if row < 8 {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}
