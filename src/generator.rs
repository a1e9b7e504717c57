//! This module contains the logic for generating random puzzles.
//!
//! Generation is a two-phase construction: the fill phase runs the
//! [BacktrackingSolver](../solver/struct.BacktrackingSolver.html) in
//! shuffled mode on an empty grid, which always terminates with a full valid
//! grid that is retained as the answer key. The mask phase then clears
//! uniformly random cells until only the clue count of the requested
//! [Difficulty](enum.Difficulty.html) remains. The output is a
//! [Puzzle](struct.Puzzle.html): the clue grid, the mask of given cells and
//! the answer key.

use crate::{coordinates, index, SudokuGrid, CELL_COUNT, SIZE};
use crate::error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use crate::solver::{BacktrackingSolver, ValueOrder};
use crate::tracker::ConstraintTracker;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A named difficulty setting controlling how many clues a generated puzzle
/// keeps. Host configurations select a difficulty by its lowercase name,
/// see the `FromStr` implementation; any other name is a configuration
/// error and no puzzle is built.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {

    /// 41 of the 81 cells remain as givens.
    Easy,

    /// 37 of the 81 cells remain as givens.
    Medium,

    /// 29 of the 81 cells remain as givens.
    High
}

impl Difficulty {

    /// The number of cells (out of 81) that remain filled as givens when a
    /// puzzle of this difficulty is generated.
    pub fn clue_count(self) -> usize {
        match self {
            Difficulty::Easy => 41,
            Difficulty::Medium => 37,
            Difficulty::High => 29
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::High => write!(f, "high")
        }
    }
}

impl FromStr for Difficulty {
    type Err = SudokuError;

    fn from_str(s: &str) -> SudokuResult<Difficulty> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "high" => Ok(Difficulty::High),
            _ => Err(SudokuError::UnknownDifficulty(String::from(s)))
        }
    }
}

/// A mask marking which cells of a puzzle are givens, i.e. pre-filled clues
/// that are immutable during play. Created once by the
/// [Generator](struct.Generator.html) at puzzle-build time and read-only
/// thereafter.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<bool>")]
#[serde(try_from = "Vec<bool>")]
pub struct GivenMask {
    given: Vec<bool>
}

impl GivenMask {

    /// Creates a mask with every cell marked as given, the starting point of
    /// the mask phase.
    pub(crate) fn full() -> GivenMask {
        GivenMask {
            given: vec![true; CELL_COUNT]
        }
    }

    /// Unmarks the cell at the given coordinates. Coordinates must be valid,
    /// which the generator ensures.
    pub(crate) fn clear(&mut self, column: usize, row: usize) {
        self.given[index(column, row)] = false;
    }

    /// Indicates whether the cell at the given coordinates is a given.
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
    pub fn is_given(&self, column: usize, row: usize) -> SudokuResult<bool> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.given[index(column, row)])
        }
    }

    /// Counts the cells marked as givens.
    pub fn count(&self) -> usize {
        self.given.iter()
            .filter(|&&given| given)
            .count()
    }

    /// Gets a reference to the vector which holds the per-cell flags. They
    /// are in left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<bool> {
        &self.given
    }
}

impl From<GivenMask> for Vec<bool> {
    fn from(mask: GivenMask) -> Vec<bool> {
        mask.given
    }
}

impl TryFrom<Vec<bool>> for GivenMask {
    type Error = SudokuParseError;

    fn try_from(given: Vec<bool>) -> SudokuParseResult<GivenMask> {
        if given.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        Ok(GivenMask {
            given
        })
    }
}

/// A playable puzzle as produced by the [Generator](struct.Generator.html):
/// the clue grid, the mask of given cells and the retained answer key. To
/// the host this is an opaque triple - it may be persisted in whatever
/// representation the host chooses (serde support is derived) and resumed
/// with [Session::from_puzzle](../struct.Session.html#method.from_puzzle).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {
    grid: SudokuGrid,
    givens: GivenMask,
    solution: SudokuGrid
}

impl Puzzle {

    pub(crate) fn new(grid: SudokuGrid, givens: GivenMask,
            solution: SudokuGrid) -> Puzzle {
        Puzzle {
            grid,
            givens,
            solution
        }
    }

    /// Gets a reference to the clue grid, i.e. the grid holding exactly the
    /// givens of the puzzle.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a reference to the mask marking which cells are givens. The
    /// marked cells are exactly the non-empty cells of
    /// [Puzzle::grid](#method.grid).
    pub fn givens(&self) -> &GivenMask {
        &self.givens
    }

    /// Gets a reference to the answer key, the full valid grid from which
    /// the clue grid was masked.
    pub fn solution(&self) -> &SudokuGrid {
        &self.solution
    }
}

/// A generator randomly builds a [Puzzle] at a requested [Difficulty]. It
/// uses a random number generator both to fill a complete grid (through the
/// solver in shuffled mode) and to decide which cells are cleared in the
/// mask phase. For most cases, sensible defaults are provided by
/// [Generator::new_default](#method.new_default).
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate random
    /// puzzles.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random puzzles.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    /// Generates a new random [Puzzle] of the given difficulty.
    ///
    /// The answer key is guaranteed to be a complete valid grid, the clue
    /// grid holds exactly [Difficulty::clue_count] digits, all of which
    /// agree with the answer key, and the given mask marks exactly the
    /// non-empty cells of the clue grid.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If the fill phase fails. Since a
    /// conflict-free empty grid is always completable, this cannot happen in
    /// practice and is only reported for plumbing completeness.
    pub fn generate(&mut self, difficulty: Difficulty)
            -> SudokuResult<Puzzle> {
        let solution = self.fill()?;

        // mask phase: clear uniformly random given cells down to the target
        let mut grid = solution.clone();
        let mut tracker = ConstraintTracker::of(&grid);
        let mut givens = GivenMask::full();
        let mut cleared = 0;

        while cleared < CELL_COUNT - difficulty.clue_count() {
            let probe = self.rng.gen_range(0..CELL_COUNT);
            let (column, row) = coordinates(probe);

            if grid.get_cell(column, row)?.is_none() {
                // already cleared, probe again; termination is guaranteed
                // since the pool of remaining givens only shrinks
                continue;
            }

            tracker.place(&mut grid, column, row, None)?;
            givens.clear(column, row);
            cleared += 1;
        }

        Ok(Puzzle::new(grid, givens, solution))
    }

    fn fill(&mut self) -> SudokuResult<SudokuGrid> {
        let mut solution = SudokuGrid::new();
        let mut solver =
            BacktrackingSolver::new(&mut self.rng, ValueOrder::Shuffled);

        if solver.solve(&mut solution)? {
            Ok(solution)
        }
        else {
            Err(SudokuError::Unsolvable)
        }
    }
}
