// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate implements the puzzle engine for a 9x9 Sudoku mini-game. It
//! supports the following key features:
//!
//! * A 9x9 grid model with constant-time row/column/block conflict tracking
//! * Full-board validation with per-cell conflict flags for the host UI
//! * Solving boards with a backtracking algorithm, deterministically or with
//! randomized candidate order
//! * Generating puzzles at three difficulties by filling a random complete
//! grid and masking it down to the difficulty's clue count
//! * A play session facade which enforces givens, resets, reveals the answer
//! key and reports completion
//!
//! Rendering, timers, scoring and persistence are the host application's
//! business. The engine hands out plain data (grids, masks, conflict flags)
//! and the host decides how to present or store it; serde support is
//! provided for the latter.
//!
//! # The grid
//!
//! A [SudokuGrid] holds 81 cells, each either empty or a digit from 1 to 9.
//! Grids can be parsed from a comma-separated literal, which is mostly
//! useful in tests and diagnostics, and pretty-printed via `Display`.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("2, ,3, , ,1, , ,4,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ,\
//!      , , , , , , , , ").unwrap();
//! assert_eq!(Some(3), grid.get_cell(2, 0).unwrap());
//! assert_eq!(4, grid.count_clues());
//! ```
//!
//! # Validating the board
//!
//! After every edit the host may re-validate the whole board. Validation
//! flags every cell whose digit occurs more than once in one of its units,
//! including the pre-existing half of a duplicate pair, so the player sees
//! both offenders.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//! use sudoku_engine::validate::BoardValidation;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 2, 5).unwrap();
//! grid.set_cell(6, 2, 5).unwrap();
//!
//! let validation = BoardValidation::of(&grid);
//! assert!(!validation.is_valid());
//! assert!(validation.is_conflict(0, 2).unwrap());
//! assert!(validation.is_conflict(6, 2).unwrap());
//! ```
//!
//! # Solving
//!
//! The [BacktrackingSolver](solver::BacktrackingSolver) fills all empty
//! cells of a board by depth-first search, trying the legal digits of each
//! cell either in ascending order ([Sequential](solver::ValueOrder)) or in a
//! shuffled order ([Shuffled](solver::ValueOrder)), and undoing placements
//! that lead nowhere. A board that already contains conflicts is rejected
//! before any search; a conflict-free board that admits no completion
//! yields `Ok(false)`.
//!
//! ```
//! use sudoku_engine::SudokuGrid;
//! use sudoku_engine::solver::BacktrackingSolver;
//! use sudoku_engine::validate;
//!
//! let mut grid = SudokuGrid::new();
//! let mut solver = BacktrackingSolver::new_default();
//!
//! assert!(solver.solve(&mut grid).unwrap());
//! assert!(validate::is_solved(&grid));
//! ```
//!
//! # Play sessions
//!
//! A [Session] owns one puzzle: the current grid, its constraint tracking,
//! the mask of given cells and the retained answer key. The host creates one
//! session per game and discards it wholesale when a new game starts.
//!
//! ```
//! use sudoku_engine::Session;
//! use sudoku_engine::generator::Difficulty;
//!
//! let session = Session::new(Difficulty::Easy).unwrap();
//! assert_eq!(41, session.grid().count_clues());
//! assert!(session.is_valid());
//! assert!(!session.is_complete());
//! ```

pub mod error;
pub mod generator;
pub mod solver;
pub mod tracker;
pub mod validate;

use crate::error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use crate::generator::{Difficulty, Generator, GivenMask, Puzzle};
use crate::solver::BacktrackingSolver;
use crate::tracker::ConstraintTracker;
use crate::validate::BoardValidation;

use rand::Rng;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of cells along one axis of the grid, i.e. the number of cells
/// in each row, column and block.
pub const SIZE: usize = 9;

/// The number of cells along one axis of a block.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells in the grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

pub(crate) fn coordinates(index: usize) -> (usize, usize) {
    (index % SIZE, index / SIZE)
}

/// A 9x9 Sudoku grid. Each cell may or may not be occupied by a digit from 1
/// to 9. Cells are stored in left-to-right, top-to-bottom order and are
/// addressed by `(column, row)` coordinates, both starting at 0 in the top-
/// left corner.
///
/// The grid is the single source of truth for cell values; the per-unit
/// bookkeeping in [ConstraintTracker](tracker::ConstraintTracker) is derived
/// from it and kept in lock-step by routing writes through
/// [ConstraintTracker::place](tracker::ConstraintTracker::place).
///
/// `SudokuGrid` implements `Display` and prints as a box-drawn 9x9 table.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "Vec<Option<usize>>")]
#[serde(try_from = "Vec<Option<usize>>")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ', '║',
        true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

impl SudokuGrid {

    /// Creates a new, empty 9x9 grid.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses a grid literal. The literal is a comma-separated list of 81
    /// entries, which are either empty or a digit from 1 to 9. The entries
    /// are assigned left-to-right, top-to-bottom, where each row is
    /// completed before the next one is started. Whitespace in the entries
    /// is ignored to allow for more intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse](#method.parse). That is, a grid that is converted
    /// to a string and parsed again will not change.
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`. Anything else is rejected before any state is
    /// changed, so out-of-range input can never reach the constraint
    /// bookkeeping.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Assigns the content of another grid to this one, i.e., changes the
    /// cells in this grid to the state in `other`.
    pub fn assign(&mut self, other: &SudokuGrid) {
        self.cells.copy_from_slice(&other.cells);
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues](#method.count_clues)
    /// returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues](#method.count_clues)
    /// returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be
    /// filled in `other` with the same number. If this condition is met,
    /// `true` is returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            })
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for Vec<Option<usize>> {
    fn from(grid: SudokuGrid) -> Vec<Option<usize>> {
        grid.cells
    }
}

impl TryFrom<Vec<Option<usize>>> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(cells: Vec<Option<usize>>) -> SudokuParseResult<SudokuGrid> {
        if cells.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        if cells.iter().flatten().any(|&n| n == 0 || n > SIZE) {
            return Err(SudokuParseError::InvalidNumber);
        }

        Ok(SudokuGrid {
            cells
        })
    }
}

/// A play session owning one puzzle: the current grid state, its constraint
/// bookkeeping, the mask of given cells and the retained answer key. This is
/// the facade the host application talks to during a game.
///
/// The engine does not enforce that only one session exists; the host
/// constructs one session per game and drops it wholesale when a new game
/// starts, which also discards the grid, tracker and mask together.
#[derive(Clone)]
pub struct Session {
    grid: SudokuGrid,
    tracker: ConstraintTracker,
    puzzle: Puzzle
}

impl Session {

    /// Generates a fresh puzzle of the given difficulty, using a
    /// [ThreadRng](rand::rngs::ThreadRng), and opens a session on it.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If the fill phase of generation fails,
    /// which cannot happen when starting from an empty grid.
    pub fn new(difficulty: Difficulty) -> SudokuResult<Session> {
        Ok(Session::from_puzzle(
            Generator::new_default().generate(difficulty)?))
    }

    /// Generates a fresh puzzle of the given difficulty with the given
    /// random number generator and opens a session on it. This is mostly
    /// useful for reproducible sessions in tests.
    ///
    /// # Errors
    ///
    /// * `SudokuError::Unsolvable` If the fill phase of generation fails,
    /// which cannot happen when starting from an empty grid.
    pub fn with_rng(difficulty: Difficulty, rng: impl Rng)
            -> SudokuResult<Session> {
        Ok(Session::from_puzzle(Generator::new(rng).generate(difficulty)?))
    }

    /// Opens a session on an existing puzzle, e.g. one the host application
    /// deserialized from its own persistence. The current grid starts at the
    /// puzzle's givens.
    pub fn from_puzzle(puzzle: Puzzle) -> Session {
        let grid = puzzle.grid().clone();
        let tracker = ConstraintTracker::of(&grid);

        Session {
            grid,
            tracker,
            puzzle
        }
    }

    /// Gets a reference to the current grid state, i.e. the givens plus all
    /// player entries made so far.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a reference to the mask marking which cells are givens.
    pub fn givens(&self) -> &GivenMask {
        self.puzzle.givens()
    }

    /// Gets a reference to the puzzle this session plays, i.e. the opaque
    /// `(grid, givens, solution)` triple the host may persist.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Applies a player edit to the cell at the given coordinates: writes
    /// `entry` into the grid and the constraint bookkeeping in lock-step and
    /// reports whether the entry is legal afterwards. An illegal entry is
    /// *not* refused - it stays on the board so the host can flag the
    /// conflict - but edits to given cells are rejected without changing
    /// anything.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the edited cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the edited cell. Must be in the
    /// range `[0, 9[`.
    /// * `entry`: The new content of the cell, either a digit wrapped in
    /// `Some`, which must be in the range `[1, 9]`, or `None` to clear the
    /// cell.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::EditOfGiven` If the cell at the given coordinates is
    /// a given of the puzzle.
    /// * `SudokuError::InvalidNumber` If `entry` contains a number outside
    /// the specified range.
    pub fn edit_cell(&mut self, column: usize, row: usize,
            entry: Option<usize>) -> SudokuResult<bool> {
        if self.puzzle.givens().is_given(column, row)? {
            return Err(SudokuError::EditOfGiven);
        }

        self.tracker.place(&mut self.grid, column, row, entry)?;

        match entry {
            Some(number) => self.tracker.is_unique(column, row, number),
            None => Ok(true)
        }
    }

    /// Restores the grid to the puzzle's givens, clearing all player
    /// entries. The puzzle identity (givens and answer key) is preserved.
    pub fn reset_to_givens(&mut self) {
        self.grid.assign(self.puzzle.grid());
        self.tracker = ConstraintTracker::of(&self.grid);
    }

    /// Gets a reference to the answer key computed when the puzzle was
    /// generated, for a "give up and reveal" action. The session state is
    /// unchanged; use [Session::solve_current](#method.solve_current) to
    /// fill the board in place instead.
    pub fn reveal_solution(&self) -> &SudokuGrid {
        self.puzzle.solution()
    }

    /// Auto-solves the board in place from the current, possibly partially
    /// filled state, using randomized backtracking. Returns `Ok(true)` and
    /// leaves the board completely filled on success. `Ok(false)` means the
    /// current entries admit no completion, which is an expected outcome
    /// when the player has placed contradiction-free but unsolvable values;
    /// the board is left unchanged in that case.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidBoard` If the board currently contains
    /// conflicting entries. No search is attempted.
    pub fn solve_current(&mut self) -> SudokuResult<bool> {
        let mut solver = BacktrackingSolver::new_default();
        let solved = solver.solve(&mut self.grid)?;
        self.tracker = ConstraintTracker::of(&self.grid);
        Ok(solved)
    }

    /// Validates the entire board, yielding per-cell conflict flags for the
    /// host to render.
    pub fn validate(&self) -> BoardValidation {
        BoardValidation::of(&self.grid)
    }

    /// Indicates whether the board is currently free of conflicts. Empty
    /// cells do not count against validity.
    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Indicates whether the board is solved, i.e. completely filled and
    /// free of conflicts. The host typically disables input and triggers
    /// scoring when this becomes `true`.
    pub fn is_complete(&self) -> bool {
        self.grid.is_full() && self.is_valid()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use rand_chacha::ChaCha8Rng;

    use rand::SeedableRng;

    #[test]
    fn parse_ok() {
        let grid = SudokuGrid::parse(
            "1, ,2, , ,3, ,4, ,\
              ,2, , , , , , ,9,\
              , , , , , , , , ,\
              , , , , , , , , ,\
              , , , ,5, , , , ,\
              , , , , , , , , ,\
              , , , , , , , , ,\
             7, , , , , , , , ,\
              , , , , , , , ,8").unwrap();

        assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
        assert_eq!(None, grid.get_cell(1, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(2, 0).unwrap());
        assert_eq!(Some(4), grid.get_cell(7, 0).unwrap());
        assert_eq!(Some(2), grid.get_cell(1, 1).unwrap());
        assert_eq!(Some(9), grid.get_cell(8, 1).unwrap());
        assert_eq!(Some(5), grid.get_cell(4, 4).unwrap());
        assert_eq!(Some(7), grid.get_cell(0, 7).unwrap());
        assert_eq!(Some(8), grid.get_cell(8, 8).unwrap());
        assert_eq!(9, grid.count_clues());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse("1,2,3"));
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = String::from("#");
        code.push_str(&",".repeat(80));

        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse(&code));
    }

    #[test]
    fn parse_invalid_number() {
        let mut code = String::from("10");
        code.push_str(&",".repeat(80));

        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(&code));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(4, 2, 5).unwrap();
        grid.set_cell(8, 8, 9).unwrap();

        let code = grid.to_parseable_string();

        assert_eq!(grid, SudokuGrid::parse(&code).unwrap());
    }

    #[test]
    fn cell_accessors_check_arguments() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(10, 10));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 10));
        assert!(grid.is_empty());
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::new();
        let mut partial = SudokuGrid::new();
        partial.set_cell(3, 3, 4).unwrap();
        partial.set_cell(5, 3, 6).unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(2, partial.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!empty.is_full());
        assert!(!partial.is_full());
    }

    #[test]
    fn subset_relations() {
        let empty = SudokuGrid::new();
        let mut smaller = SudokuGrid::new();
        smaller.set_cell(0, 0, 1).unwrap();
        let mut larger = smaller.clone();
        larger.set_cell(1, 0, 2).unwrap();
        let mut unrelated = smaller.clone();
        unrelated.set_cell(0, 0, 2).unwrap();

        assert!(empty.is_subset(&smaller));
        assert!(smaller.is_subset(&larger));
        assert!(larger.is_superset(&smaller));
        assert!(!larger.is_subset(&smaller));
        assert!(!unrelated.is_subset(&larger));
        assert!(!larger.is_subset(&unrelated));
    }

    fn test_session() -> Session {
        let rng = ChaCha8Rng::seed_from_u64(90125);
        Session::with_rng(Difficulty::Medium, rng).unwrap()
    }

    fn first_blank(session: &Session) -> (usize, usize) {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if !session.givens().is_given(column, row).unwrap() {
                    return (column, row);
                }
            }
        }

        panic!("puzzle has no blank cells");
    }

    fn first_given(session: &Session) -> (usize, usize) {
        for row in 0..SIZE {
            for column in 0..SIZE {
                if session.givens().is_given(column, row).unwrap() {
                    return (column, row);
                }
            }
        }

        panic!("puzzle has no given cells");
    }

    // Finds a blank cell and the digit of a given in the same row. Entering
    // that digit into the blank cell is guaranteed to conflict. Such a mixed
    // row always exists, since neither 37 givens nor 44 blanks can cover
    // whole rows only.
    fn conflicting_entry(session: &Session) -> (usize, usize, usize) {
        for row in 0..SIZE {
            let given = (0..SIZE).find(|&column|
                session.givens().is_given(column, row).unwrap());
            let blank = (0..SIZE).find(|&column|
                !session.givens().is_given(column, row).unwrap());

            if let (Some(given), Some(blank)) = (given, blank) {
                let number =
                    session.grid().get_cell(given, row).unwrap().unwrap();
                return (blank, row, number);
            }
        }

        panic!("puzzle has no row with both a given and a blank");
    }

    #[test]
    fn session_starts_at_givens() {
        let session = test_session();

        assert_eq!(session.puzzle().grid(), session.grid());
        assert_eq!(37, session.grid().count_clues());
        assert!(session.is_valid());
        assert!(!session.is_complete());
    }

    #[test]
    fn edit_of_given_is_rejected_and_leaves_grid_unchanged() {
        let mut session = test_session();
        let (column, row) = first_given(&session);
        let before = session.grid().clone();

        assert_eq!(Err(SudokuError::EditOfGiven),
            session.edit_cell(column, row, Some(1)));
        assert_eq!(Err(SudokuError::EditOfGiven),
            session.edit_cell(column, row, None));
        assert_eq!(&before, session.grid());
    }

    #[test]
    fn edit_of_blank_updates_grid_and_validity() {
        let mut session = test_session();
        let (column, row) = first_blank(&session);
        let correct = session.reveal_solution().get_cell(column, row)
            .unwrap().unwrap();

        assert!(session.edit_cell(column, row, Some(correct)).unwrap());
        assert_eq!(Some(correct), session.grid().get_cell(column, row)
            .unwrap());
        assert!(session.is_valid());
    }

    #[test]
    fn conflicting_edit_is_kept_and_reported() {
        let mut session = test_session();
        let (column, row, wrong) = conflicting_entry(&session);

        assert!(!session.edit_cell(column, row, Some(wrong)).unwrap());
        assert_eq!(Some(wrong), session.grid().get_cell(column, row)
            .unwrap());
        assert!(!session.is_valid());

        // clearing the entry restores validity
        assert!(session.edit_cell(column, row, None).unwrap());
        assert!(session.is_valid());
    }

    #[test]
    fn reset_restores_givens_after_edits() {
        let mut session = test_session();
        let (column, row) = first_blank(&session);
        session.edit_cell(column, row, Some(3)).unwrap();
        session.edit_cell(column, row, Some(7)).unwrap();
        session.reset_to_givens();

        assert_eq!(session.puzzle().grid(), session.grid());
        assert_eq!(&ConstraintTracker::of(session.grid()),
            &ConstraintTracker::of(session.puzzle().grid()));
        assert!(session.is_valid());
    }

    #[test]
    fn revealed_solution_matches_givens() {
        let session = test_session();

        assert!(session.grid().is_subset(session.reveal_solution()));
        assert!(session.reveal_solution().is_full());
    }

    #[test]
    fn entering_full_solution_completes_session() {
        let mut session = test_session();
        let solution = session.reveal_solution().clone();

        for row in 0..SIZE {
            for column in 0..SIZE {
                if !session.givens().is_given(column, row).unwrap() {
                    let number =
                        solution.get_cell(column, row).unwrap().unwrap();
                    assert!(session.edit_cell(column, row, Some(number))
                        .unwrap());
                }
            }
        }

        assert!(session.is_valid());
        assert!(session.is_complete());
    }

    #[test]
    fn solve_current_fills_board_from_partial_state() {
        let mut session = test_session();
        let (column, row) = first_blank(&session);
        let correct = session.reveal_solution().get_cell(column, row)
            .unwrap().unwrap();
        session.edit_cell(column, row, Some(correct)).unwrap();

        assert!(session.solve_current().unwrap());
        assert!(session.is_complete());
    }

    #[test]
    fn solve_current_rejects_conflicting_board() {
        let mut session = test_session();
        let (column, row, wrong) = conflicting_entry(&session);
        session.edit_cell(column, row, Some(wrong)).unwrap();
        let before = session.grid().clone();

        assert_eq!(Err(SudokuError::InvalidBoard), session.solve_current());
        assert_eq!(&before, session.grid());
    }

    #[test]
    fn puzzle_serde_round_trip() {
        let session = test_session();
        let json = serde_json::to_string(session.puzzle()).unwrap();
        let puzzle: Puzzle = serde_json::from_str(&json).unwrap();

        assert_eq!(session.puzzle(), &puzzle);

        let resumed = Session::from_puzzle(puzzle);

        assert_eq!(session.grid(), resumed.grid());
    }

    #[test]
    fn grid_deserialization_rejects_invalid_data() {
        let too_short = serde_json::to_string(&vec![Option::<usize>::None; 80])
            .unwrap();
        let out_of_range = serde_json::to_string(
            &vec![Some(17usize); CELL_COUNT]).unwrap();

        assert!(serde_json::from_str::<SudokuGrid>(&too_short).is_err());
        assert!(serde_json::from_str::<SudokuGrid>(&out_of_range).is_err());
    }
}
