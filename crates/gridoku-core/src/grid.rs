//! Constraint-tracked puzzle state.

use std::fmt;

use derive_more::{Display, Error};

use crate::{Digit, DigitGrid, DigitSet, Position};

/// Error returned when a placement is refused.
///
/// A refused placement leaves the grid unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// The digit already appears in the row, column, or block of the target
    /// cell.
    #[display("digit {digit} is already used in the row, column, or block of {position}")]
    Conflict {
        /// The target cell.
        position: Position,
        /// The refused digit.
        digit: Digit,
    },
    /// The target cell is already filled. Erase it first to overwrite.
    #[display("cell {position} is already filled")]
    Occupied {
        /// The target cell.
        position: Position,
    },
}

/// A 9x9 puzzle state with incremental constraint bookkeeping.
///
/// `Grid` owns the ground-truth cells plus three families of used-sets, one
/// [`DigitSet`] per row, column, and 3x3 block. The used-sets are
/// denormalized caches of the cells: only [`place`](Self::place) and
/// [`erase`](Self::erase) (and construction from a snapshot) ever touch
/// them, so checking a candidate digit against all three uniqueness
/// constraints is O(1) and the caches can never drift from the cells.
///
/// Placing onto an already-filled cell is refused with
/// [`PlaceError::Occupied`]; there is no implicit overwrite. Callers that
/// want to replace a digit erase the cell first.
///
/// # Examples
///
/// ```
/// use gridoku_core::{Digit, Grid, Position};
///
/// let mut grid = Grid::new();
/// let five = Digit::from_value(5);
///
/// grid.place(Position::new(0, 0), five)?;
/// assert!(!grid.can_place(Position::new(0, 8), five)); // same row
/// assert!(!grid.can_place(Position::new(8, 0), five)); // same column
/// assert!(!grid.can_place(Position::new(2, 2), five)); // same block
///
/// grid.erase(Position::new(0, 0));
/// assert!(grid.can_place(Position::new(0, 8), five));
/// # Ok::<(), gridoku_core::PlaceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: DigitGrid,
    rows: [DigitSet; 9],
    cols: [DigitSet; 9],
    blocks: [DigitSet; 9],
}

impl Grid {
    /// Creates a grid with all 81 cells empty and all used-sets empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: DigitGrid::new(),
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            blocks: [DigitSet::EMPTY; 9],
        }
    }

    /// Returns `true` iff the digit appears in none of the three used-sets
    /// governing the cell.
    ///
    /// Pure query; the cell's own content is not considered (a filled cell
    /// is rejected by [`place`](Self::place), not here).
    #[must_use]
    pub fn can_place(&self, pos: Position, digit: Digit) -> bool {
        !self.rows[usize::from(pos.row())].contains(digit)
            && !self.cols[usize::from(pos.col())].contains(digit)
            && !self.blocks[usize::from(pos.block())].contains(digit)
    }

    /// Places a digit, updating the cell and the three used-sets.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::Occupied`] if the cell is already filled, or
    /// [`PlaceError::Conflict`] if the digit already appears in the cell's
    /// row, column, or block. The grid is unchanged on error.
    pub fn place(&mut self, pos: Position, digit: Digit) -> Result<(), PlaceError> {
        if self.cells.get(pos).is_some() {
            return Err(PlaceError::Occupied { position: pos });
        }
        if !self.can_place(pos, digit) {
            return Err(PlaceError::Conflict {
                position: pos,
                digit,
            });
        }
        self.cells.set(pos, Some(digit));
        self.insert_used(pos, digit);
        Ok(())
    }

    /// Erases the cell, returning the removed digit.
    ///
    /// Erasing an empty cell is a no-op and returns `None`.
    pub fn erase(&mut self, pos: Position) -> Option<Digit> {
        let digit = self.cells.get(pos)?;
        self.cells.set(pos, None);
        self.remove_used(pos, digit);
        Some(digit)
    }

    /// Returns the digit at a position, or `None` when the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells.get(pos)
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.filled_count()
    }

    /// Returns `true` when all 81 cells are filled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.filled_count() == 81
    }

    /// Checks the whole grid for duplicate digits.
    ///
    /// Rebuilds fresh row/column/block sets by scanning the cells in
    /// row-major order and reports `false` at the first duplicate. The
    /// incremental used-sets are not consulted, so this also serves as a
    /// consistency check independent of their bookkeeping. Solvers use it as
    /// a precondition gate: a grid that fails here must not be searched.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let mut rows = [DigitSet::EMPTY; 9];
        let mut cols = [DigitSet::EMPTY; 9];
        let mut blocks = [DigitSet::EMPTY; 9];
        for (pos, digit) in self.cells.filled_cells() {
            if !rows[usize::from(pos.row())].insert(digit)
                || !cols[usize::from(pos.col())].insert(digit)
                || !blocks[usize::from(pos.block())].insert(digit)
            {
                return false;
            }
        }
        true
    }

    /// Returns a read-only view of the cells.
    #[must_use]
    pub const fn digit_grid(&self) -> &DigitGrid {
        &self.cells
    }

    /// Returns an owned snapshot of the cells.
    #[must_use]
    pub fn to_digit_grid(&self) -> DigitGrid {
        self.cells.clone()
    }

    fn insert_used(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.row())].insert(digit);
        self.cols[usize::from(pos.col())].insert(digit);
        self.blocks[usize::from(pos.block())].insert(digit);
    }

    fn remove_used(&mut self, pos: Position, digit: Digit) {
        self.rows[usize::from(pos.row())].remove(digit);
        self.cols[usize::from(pos.col())].remove(digit);
        self.blocks[usize::from(pos.block())].remove(digit);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl From<DigitGrid> for Grid {
    /// Seeds a grid from a snapshot, rebuilding the used-sets from its
    /// filled cells.
    ///
    /// The snapshot is not checked for conflicts; call
    /// [`Grid::is_valid`] afterwards to validate untrusted input.
    fn from(cells: DigitGrid) -> Self {
        let mut grid = Self {
            cells,
            rows: [DigitSet::EMPTY; 9],
            cols: [DigitSet::EMPTY; 9],
            blocks: [DigitSet::EMPTY; 9],
        };
        for pos in Position::ALL {
            if let Some(digit) = grid.cells.get(pos) {
                grid.insert_used(pos, digit);
            }
        }
        grid
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.cells, f)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use proptest::prelude::*;

    use super::*;

    fn d(value: u8) -> Digit {
        Digit::from_value(value)
    }

    #[test]
    fn test_place_then_erase_restores_everything() {
        let mut grid = Grid::new();
        grid.place(Position::new(4, 4), d(3)).unwrap();
        let before = grid.clone();

        grid.place(Position::new(4, 5), d(7)).unwrap();
        assert_eq!(grid.erase(Position::new(4, 5)), Some(d(7)));

        // Cells and all three used-set families match the prior state.
        assert_eq!(grid, before);
    }

    #[test]
    fn test_place_updates_legality_of_peers() {
        let mut grid = Grid::new();
        let five = d(5);
        assert!(grid.can_place(Position::new(0, 0), five));

        grid.place(Position::new(0, 0), five).unwrap();
        assert!(!grid.can_place(Position::new(0, 0), five));
        assert!(!grid.can_place(Position::new(0, 7), five)); // row 0
        assert!(!grid.can_place(Position::new(6, 0), five)); // column 0
        assert!(!grid.can_place(Position::new(1, 1), five)); // block 0
        assert!(grid.can_place(Position::new(3, 3), five));
    }

    #[test]
    fn test_conflict_leaves_grid_unchanged() {
        let mut grid = Grid::new();
        grid.place(Position::new(0, 0), d(5)).unwrap();
        let before = grid.clone();

        let result = grid.place(Position::new(0, 1), d(5));
        assert_eq!(
            result,
            Err(PlaceError::Conflict {
                position: Position::new(0, 1),
                digit: d(5),
            })
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_occupied_cell_is_refused() {
        let mut grid = Grid::new();
        grid.place(Position::new(2, 2), d(4)).unwrap();
        let before = grid.clone();

        // Even a digit that would otherwise be legal is refused.
        let result = grid.place(Position::new(2, 2), d(9));
        assert_eq!(
            result,
            Err(PlaceError::Occupied {
                position: Position::new(2, 2),
            })
        );
        assert_eq!(grid, before);
        assert_eq!(grid.get(Position::new(2, 2)), Some(d(4)));
    }

    #[test]
    fn test_erase_empty_cell_is_noop() {
        let mut grid = Grid::new();
        assert_eq!(grid.erase(Position::new(5, 5)), None);
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn test_erase_frees_all_three_sets() {
        let mut grid = Grid::new();
        grid.place(Position::new(0, 0), d(5)).unwrap();
        grid.erase(Position::new(0, 0));

        assert_eq!(grid.get(Position::new(0, 0)), None);
        assert!(grid.can_place(Position::new(0, 8), d(5))); // row 0
        assert!(grid.can_place(Position::new(8, 0), d(5))); // column 0
        assert!(grid.can_place(Position::new(2, 2), d(5))); // block 0
    }

    #[test]
    fn test_is_valid_empty_grid() {
        assert!(Grid::new().is_valid());
    }

    #[test]
    fn test_is_valid_detects_duplicates() {
        // Duplicate in a row
        let snapshot = DigitGrid::from_str(
            "
            5...5....
            .........
            .........
            .........
            .........
            .........
            .........
            .........
            .........
            ",
        )
        .unwrap();
        assert!(!Grid::from(snapshot).is_valid());

        // Duplicate in a column
        let snapshot = DigitGrid::from_str(
            "
            3........
            .........
            .........
            .........
            3........
            .........
            .........
            .........
            .........
            ",
        )
        .unwrap();
        assert!(!Grid::from(snapshot).is_valid());

        // Duplicate in a block, different row and column
        let snapshot = DigitGrid::from_str(
            "
            7........
            .........
            ..7......
            .........
            .........
            .........
            .........
            .........
            .........
            ",
        )
        .unwrap();
        assert!(!Grid::from(snapshot).is_valid());
    }

    #[test]
    fn test_from_snapshot_rebuilds_used_sets() {
        let snapshot = DigitGrid::from_str(
            "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
            ",
        )
        .unwrap();
        let grid = Grid::from(snapshot.clone());

        assert!(grid.is_valid());
        assert_eq!(grid.digit_grid(), &snapshot);
        assert!(!grid.can_place(Position::new(0, 2), d(5))); // 5 given at (0, 0)
        assert!(!grid.can_place(Position::new(8, 0), d(6))); // 6 given at (1, 0)
        assert!(grid.can_place(Position::new(0, 2), d(4)));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut grid = Grid::new();
        grid.place(Position::new(1, 2), d(8)).unwrap();
        let snapshot = grid.to_digit_grid();
        assert_eq!(Grid::from(snapshot), grid);
    }

    proptest! {
        #[test]
        fn place_then_erase_is_identity(
            row in 0u8..9,
            col in 0u8..9,
            value in 1u8..=9,
        ) {
            let mut grid = Grid::new();
            grid.place(Position::new(4, 4), d(6)).unwrap();
            let before = grid.clone();

            let pos = Position::new(row, col);
            if grid.place(pos, d(value)).is_ok() {
                grid.erase(pos);
            }
            prop_assert_eq!(&grid, &before);
        }

        #[test]
        fn random_edits_keep_caches_consistent(
            ops in proptest::collection::vec(
                (0u8..9, 0u8..9, 1u8..=9, any::<bool>()),
                0..200,
            ),
        ) {
            let mut grid = Grid::new();
            for (row, col, value, is_place) in ops {
                let pos = Position::new(row, col);
                if is_place {
                    let _ = grid.place(pos, d(value));
                } else {
                    grid.erase(pos);
                }
                prop_assert!(grid.is_valid());
            }
            // Rebuilding from the snapshot yields identical used-sets.
            let rebuilt = Grid::from(grid.to_digit_grid());
            prop_assert_eq!(&rebuilt, &grid);
        }
    }
}
