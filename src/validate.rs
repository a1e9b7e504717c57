//! This module contains the full-board validation used after external edits.
//!
//! Validation re-derives the constraint bookkeeping from the grid and
//! records, for every cell, whether its current value conflicts with another
//! digit in the same row, column or 3x3 block. The host renders the per-cell
//! flags; the overall verdict is also the precondition for running the
//! solver. Note that a board with empty cells can be perfectly valid without
//! being solved, see [is_solved](fn.is_solved.html).

use crate::{index, SudokuGrid, CELL_COUNT, SIZE};
use crate::error::{SudokuError, SudokuResult};
use crate::tracker::ConstraintTracker;

/// The result of validating an entire board: one conflict flag per cell plus
/// the overall verdict derived from them.
///
/// Validation is a pure function of the grid. Validating the same grid twice
/// yields equal results, which is why this type implements `Eq`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoardValidation {
    conflicts: Vec<bool>
}

impl BoardValidation {

    /// Validates every one of the 81 cells of the given grid. A non-empty
    /// cell is in conflict if its digit occurs more than once in the cell's
    /// row, column or block. Both cells of a duplicate pair are flagged, so
    /// the host can highlight the existing entry as well as the new one.
    /// Empty cells are never in conflict.
    pub fn of(grid: &SudokuGrid) -> BoardValidation {
        let tracker = ConstraintTracker::of(grid);
        let mut conflicts = vec![false; CELL_COUNT];

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    conflicts[index(column, row)] =
                        !tracker.is_unique(column, row, number).unwrap();
                }
            }
        }

        BoardValidation {
            conflicts
        }
    }

    /// Indicates whether the validated board was free of conflicts. Empty
    /// cells do not count against validity.
    pub fn is_valid(&self) -> bool {
        !self.conflicts.iter().any(|&conflict| conflict)
    }

    /// Indicates whether the cell at the given coordinates was found to be
    /// in conflict.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the queried cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the queried cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_conflict(&self, column: usize, row: usize)
            -> SudokuResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.conflicts[index(column, row)])
        }
    }

    /// Gets a reference to the vector which holds the conflict flags. They
    /// are in left-to-right, top-to-bottom order, where rows are together.
    pub fn conflicts(&self) -> &Vec<bool> {
        &self.conflicts
    }
}

/// Indicates whether the given grid is solved, that is, every cell is filled
/// and no cell is in conflict. Validity alone is not sufficient, since a
/// partially filled board can be conflict-free.
pub fn is_solved(grid: &SudokuGrid) -> bool {
    grid.is_full() && BoardValidation::of(grid).is_valid()
}

#[cfg(test)]
mod tests {

    use super::*;

    const SOLVED: &str =
        "7,4,6,2,8,1,3,5,9,\
         9,1,2,5,3,7,8,4,6,\
         8,5,3,4,9,6,1,7,2,\
         3,7,4,1,2,5,6,9,8,\
         6,2,8,7,4,9,5,1,3,\
         5,9,1,3,6,8,7,2,4,\
         1,6,9,8,7,4,2,3,5,\
         2,8,5,9,1,3,4,6,7,\
         4,3,7,6,5,2,9,8,1";

    #[test]
    fn empty_board_is_valid_but_not_solved() {
        let grid = SudokuGrid::new();
        let validation = BoardValidation::of(&grid);

        assert!(validation.is_valid());
        assert!(!is_solved(&grid));
    }

    #[test]
    fn conflict_free_partial_board_is_valid() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 5).unwrap();
        grid.set_cell(4, 0, 6).unwrap();
        grid.set_cell(0, 4, 5).unwrap();

        let validation = BoardValidation::of(&grid);

        assert!(validation.is_valid());
        assert!(!validation.is_conflict(0, 0).unwrap());
        assert!(!is_solved(&grid));
    }

    #[test]
    fn row_duplicate_flags_both_cells() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(1, 3, 5).unwrap();
        grid.set_cell(7, 3, 5).unwrap();

        let validation = BoardValidation::of(&grid);

        assert!(!validation.is_valid());
        assert!(validation.is_conflict(1, 3).unwrap());
        assert!(validation.is_conflict(7, 3).unwrap());

        // the rest of the board stays unflagged
        let flagged = validation.conflicts().iter()
            .filter(|&&conflict| conflict)
            .count();
        assert_eq!(2, flagged);
    }

    #[test]
    fn block_duplicate_is_detected() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 9).unwrap();
        grid.set_cell(2, 2, 9).unwrap();

        let validation = BoardValidation::of(&grid);

        assert!(!validation.is_valid());
        assert!(validation.is_conflict(0, 0).unwrap());
        assert!(validation.is_conflict(2, 2).unwrap());
    }

    #[test]
    fn validation_is_idempotent() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(3, 3, 2).unwrap();
        grid.set_cell(3, 8, 2).unwrap();
        grid.set_cell(6, 6, 4).unwrap();

        let first = BoardValidation::of(&grid);
        let second = BoardValidation::of(&grid);

        assert_eq!(first, second);
    }

    #[test]
    fn solved_board_is_detected() {
        let grid = SudokuGrid::parse(SOLVED).unwrap();

        assert!(BoardValidation::of(&grid).is_valid());
        assert!(is_solved(&grid));
    }

    #[test]
    fn out_of_bounds_conflict_query_is_rejected() {
        let validation = BoardValidation::of(&SudokuGrid::new());

        assert_eq!(Err(SudokuError::OutOfBounds),
            validation.is_conflict(0, 9));
    }
}
