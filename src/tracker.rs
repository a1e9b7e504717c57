//! This module contains the incremental constraint bookkeeping for the
//! engine.
//!
//! The [ConstraintTracker](struct.ConstraintTracker.html) stores, for every
//! row, column and 3x3 block, how often each digit is currently placed in
//! that unit. Insertion, removal and legality queries are therefore
//! constant-time, and the question "is this digit still duplicated after one
//! occurrence is removed?" is answered by a remaining nonzero count instead
//! of a scan.

use crate::{SudokuGrid, BLOCK_SIZE, SIZE};
use crate::error::{SudokuError, SudokuResult};

/// Computes the index of the 3x3 block containing the cell at the given
/// coordinates. Blocks are numbered 0 to 8 in row-major order, i.e. block 0
/// is the top-left one and block 2 the top-right one.
pub(crate) fn block_of(column: usize, row: usize) -> usize {
    (row / BLOCK_SIZE) * BLOCK_SIZE + column / BLOCK_SIZE
}

fn check_coordinates(column: usize, row: usize) -> SudokuResult<()> {
    if column >= SIZE || row >= SIZE {
        Err(SudokuError::OutOfBounds)
    }
    else {
        Ok(())
    }
}

fn check_number(number: usize) -> SudokuResult<()> {
    if number == 0 || number > SIZE {
        Err(SudokuError::InvalidNumber)
    }
    else {
        Ok(())
    }
}

/// A counted multiset of the digits currently placed in each row, column and
/// 3x3 block of a [SudokuGrid](../struct.SudokuGrid.html).
///
/// The tracker deliberately tolerates duplicates: if the player enters a
/// digit that already occurs in one of the cell's units, the digit is still
/// counted. This way the *existing* conflicting cell can be flagged by
/// validation instead of the contradictory entry being silently refused, and
/// removing one of two duplicates leaves the other one correctly accounted
/// for.
///
/// Invariant: at any time, the count tables equal exactly the digits present
/// in the grid the tracker is maintained for, duplicates included. This is
/// guaranteed as long as all mutations go through
/// [ConstraintTracker::place](#method.place).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintTracker {
    rows: [[u8; SIZE]; SIZE],
    columns: [[u8; SIZE]; SIZE],
    blocks: [[u8; SIZE]; SIZE]
}

impl ConstraintTracker {

    /// Creates a new tracker with all counts at zero, matching an empty
    /// grid.
    pub fn new() -> ConstraintTracker {
        ConstraintTracker {
            rows: [[0; SIZE]; SIZE],
            columns: [[0; SIZE]; SIZE],
            blocks: [[0; SIZE]; SIZE]
        }
    }

    /// Creates a tracker whose counts reflect the digits currently present
    /// in the given grid.
    pub fn of(grid: &SudokuGrid) -> ConstraintTracker {
        let mut tracker = ConstraintTracker::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    tracker.insert(column, row, number);
                }
            }
        }

        tracker
    }

    /// Counts `number` into the three units of the cell at the given
    /// coordinates. Arguments must be valid, which all callers in this crate
    /// ensure.
    pub(crate) fn insert(&mut self, column: usize, row: usize,
            number: usize) {
        self.rows[row][number - 1] += 1;
        self.columns[column][number - 1] += 1;
        self.blocks[block_of(column, row)][number - 1] += 1;
    }

    /// Removes one occurrence of `number` from the three units of the cell
    /// at the given coordinates. Must only be called with the digit that is
    /// actually stored in that cell, which all callers in this crate ensure.
    pub(crate) fn remove(&mut self, column: usize, row: usize,
            number: usize) {
        self.rows[row][number - 1] -= 1;
        self.columns[column][number - 1] -= 1;
        self.blocks[block_of(column, row)][number - 1] -= 1;
    }

    /// Writes `entry` into the cell at the given coordinates of `grid` and
    /// updates this tracker in lock-step. The cell's previous value is
    /// removed from the three affected unit counts *before* the new value is
    /// written and counted, so a unit never contains a stale entry for the
    /// cell being overwritten and an unchanged value is not double-counted.
    ///
    /// Note that the new value is counted even if it conflicts with an
    /// existing digit. See the type-level documentation for the reasoning.
    ///
    /// # Arguments
    ///
    /// * `grid`: The grid this tracker is maintained for. Must be the same
    /// grid on every call, otherwise the tracker invariant is lost.
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `entry`: The new content of the cell, either a digit wrapped in
    /// `Some`, which must be in the range `[1, 9]`, or `None` to clear the
    /// cell.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range. Neither grid nor tracker are changed.
    /// * `SudokuError::InvalidNumber` If `entry` contains a number outside
    /// the specified range. Neither grid nor tracker are changed.
    pub fn place(&mut self, grid: &mut SudokuGrid, column: usize, row: usize,
            entry: Option<usize>) -> SudokuResult<()> {
        check_coordinates(column, row)?;

        if let Some(number) = entry {
            check_number(number)?;
        }

        if let Some(old_number) = grid.get_cell(column, row)? {
            self.remove(column, row, old_number);
        }

        match entry {
            Some(number) => {
                grid.set_cell(column, row, number)?;
                self.insert(column, row, number);
            },
            None => grid.clear_cell(column, row)?
        }

        Ok(())
    }

    /// Indicates whether `number` is absent from all three units of the cell
    /// at the given coordinates, i.e. whether placing it there would not
    /// collide with any currently counted digit. Used by the solver, which
    /// only queries empty cells, so the cell's own occupant never has to be
    /// excluded.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are greater
    /// than or equal to 9.
    /// * `SudokuError::InvalidNumber` If `number` is 0 or greater than 9.
    pub fn is_free(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        check_coordinates(column, row)?;
        check_number(number)?;

        Ok(self.rows[row][number - 1] == 0 &&
            self.columns[column][number - 1] == 0 &&
            self.blocks[block_of(column, row)][number - 1] == 0)
    }

    /// Indicates whether `number` occurs at most once in each of the three
    /// units of the cell at the given coordinates. This is the legality
    /// query for a value that is already placed in that cell: its own
    /// occurrence accounts for one count, so any higher count means another
    /// cell in the unit holds the same digit.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are greater
    /// than or equal to 9.
    /// * `SudokuError::InvalidNumber` If `number` is 0 or greater than 9.
    pub fn is_unique(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        check_coordinates(column, row)?;
        check_number(number)?;

        Ok(self.rows[row][number - 1] <= 1 &&
            self.columns[column][number - 1] <= 1 &&
            self.blocks[block_of(column, row)][number - 1] <= 1)
    }

    /// Collects the digits that could legally be placed in the cell at the
    /// given coordinates, in ascending order. These are the digits from 1 to
    /// 9 which are absent from the cell's row, column and block.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are greater
    /// than or equal to 9.
    pub fn free_numbers(&self, column: usize, row: usize)
            -> SudokuResult<Vec<usize>> {
        check_coordinates(column, row)?;

        Ok((1..=SIZE)
            .filter(|&number| self.is_free(column, row, number).unwrap())
            .collect())
    }
}

impl Default for ConstraintTracker {
    fn default() -> ConstraintTracker {
        ConstraintTracker::new()
    }
}
