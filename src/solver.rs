//! This module contains the logic for solving boards.
//!
//! Most importantly, this module contains the definition of the
//! [BacktrackingSolver](struct.BacktrackingSolver.html), a depth-first
//! search over the empty cells of a grid which prunes candidates through the
//! constraint bookkeeping in [tracker](../tracker/index.html). The candidate
//! order per cell is controlled by a [ValueOrder](enum.ValueOrder.html):
//! deterministic ascending order, or a shuffled order so that repeated runs
//! from the same starting conditions do not always yield the same filled
//! grid. The latter is what the puzzle generator builds on.

use crate::{coordinates, SudokuGrid, CELL_COUNT};
use crate::error::{SudokuError, SudokuResult};
use crate::tracker::ConstraintTracker;
use crate::validate::BoardValidation;

use rand::Rng;
use rand::rngs::ThreadRng;

/// The order in which the solver tries the legal candidates of a cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueOrder {

    /// Candidates are tried in ascending order. Solving the same board twice
    /// in this mode yields the same result.
    Sequential,

    /// Candidates are tried in a uniformly shuffled order drawn from the
    /// solver's random number generator. Used during puzzle generation,
    /// where the solver doubles as a random grid filler.
    Shuffled
}

/// Diagnostic counters accumulated during one solve run. These are
/// observational only and have no influence on the search itself.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SolverStats {

    /// The total number of recursive search calls.
    pub recursions: u64,

    /// The total number of placements that were undone because no completion
    /// existed below them.
    pub backtracks: u64
}

/// Shuffles the given slice in place using the Fisher-Yates method, drawing
/// from the given random number generator.
pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: &mut [T]) {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}

/// Finds the next empty cell of the given grid, scanning forward in
/// left-to-right, top-to-bottom order from the cell with the given index
/// (inclusive). Returns the index of that cell, or `None` if all cells from
/// `from` onward are filled. `None` for `from = 0` on a search that placed
/// digits in every visited cell means the board is completely filled, which
/// is the solver's terminal success state.
pub fn find_next_empty(grid: &SudokuGrid, from: usize) -> Option<usize> {
    (from..CELL_COUNT).find(|&i| {
        let (column, row) = coordinates(i);
        grid.get_cell(column, row).unwrap().is_none()
    })
}

/// A backtracking solver which fills all empty cells of a board by
/// depth-first search. For the next empty cell, each legal digit is tried in
/// the order given by the solver's [ValueOrder]: the digit is placed, the
/// search recurses on the following cells, and on failure the placement is
/// explicitly undone before the next candidate is tried. The first found
/// completion is returned; the solver does not search for alternate
/// solutions.
///
/// Its worst-case runtime is exponential, but with the constraint pruning
/// a classic 9x9 board is solved within milliseconds.
pub struct BacktrackingSolver<R: Rng> {
    rng: R,
    order: ValueOrder,
    stats: SolverStats
}

impl BacktrackingSolver<ThreadRng> {

    /// Creates a new solver in [Shuffled](enum.ValueOrder.html) mode that
    /// uses a [ThreadRng] to shuffle candidates.
    pub fn new_default() -> BacktrackingSolver<ThreadRng> {
        BacktrackingSolver::new(rand::thread_rng(), ValueOrder::Shuffled)
    }
}

impl<R: Rng> BacktrackingSolver<R> {

    /// Creates a new solver with the given random number generator and
    /// candidate order. The random number generator is only drawn from in
    /// [Shuffled](enum.ValueOrder.html) mode.
    pub fn new(rng: R, order: ValueOrder) -> BacktrackingSolver<R> {
        BacktrackingSolver {
            rng,
            order,
            stats: SolverStats::default()
        }
    }

    /// Gets the diagnostic counters of the most recent
    /// [BacktrackingSolver::solve](#method.solve) call.
    pub fn stats(&self) -> SolverStats {
        self.stats
    }

    fn solve_rec(&mut self, grid: &mut SudokuGrid,
            tracker: &mut ConstraintTracker, from: usize) -> bool {
        self.stats.recursions += 1;

        let index = match find_next_empty(grid, from) {
            Some(index) => index,
            None => return true
        };
        let (column, row) = coordinates(index);
        let mut numbers = tracker.free_numbers(column, row).unwrap();

        if self.order == ValueOrder::Shuffled {
            shuffle(&mut self.rng, &mut numbers);
        }

        for number in numbers {
            tracker.place(grid, column, row, Some(number)).unwrap();

            if self.solve_rec(grid, tracker, index + 1) {
                return true;
            }

            self.stats.backtracks += 1;
            tracker.place(grid, column, row, None).unwrap();
        }

        // every candidate failed, let the caller backtrack further
        false
    }

    /// Solves the given board in place, filling all empty cells such that
    /// every row, column and block contains each digit at most once. On
    /// success, `Ok(true)` is returned and the grid is completely filled.
    /// `Ok(false)` indicates that the search was exhausted without finding a
    /// completion, which is the expected outcome for a board whose entries,
    /// while conflict-free, admit no solution; the grid is left unchanged in
    /// that case, since every tentative placement was undone.
    ///
    /// The diagnostic counters are reset at the start of each call and can
    /// be read through [BacktrackingSolver::stats](#method.stats) afterward.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidBoard` If the board already contains
    /// conflicting entries. No search is attempted and the grid is left
    /// unchanged.
    pub fn solve(&mut self, grid: &mut SudokuGrid) -> SudokuResult<bool> {
        if !BoardValidation::of(grid).is_valid() {
            return Err(SudokuError::InvalidBoard);
        }

        self.stats = SolverStats::default();
        let mut tracker = ConstraintTracker::of(grid);
        Ok(self.solve_rec(grid, &mut tracker, 0))
    }
}
