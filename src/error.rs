//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Errors that can occur when operating the puzzle engine. Errors raised
/// while parsing grid literals are separate, see
/// [SudokuParseError](enum.SudokuParseError.html) for those.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if either is greater than or equal to
    /// 9.
    OutOfBounds,

    /// Indicates that some number is not a valid Sudoku digit. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that a difficulty string provided by the host configuration
    /// is not one of the recognized names. The engine refuses to generate a
    /// puzzle in this case rather than defaulting to some clue count.
    UnknownDifficulty(String),

    /// Indicates that it was attempted to edit a cell which is a given (a
    /// clue of the puzzle). The grid is left unchanged.
    EditOfGiven,

    /// Indicates that a solve was requested on a board which already
    /// contains conflicting entries. Searching from a contradictory state is
    /// meaningless, so no search is attempted.
    InvalidBoard,

    /// Indicates that the backtracking search exhausted all candidates
    /// without finding a solution, i.e. the board is unsolvable from its
    /// current state. This is an expected, recoverable outcome, not a
    /// corrupted state.
    Unsolvable
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates out of bounds"),
            SudokuError::InvalidNumber =>
                write!(f, "number is not a digit from 1 to 9"),
            SudokuError::UnknownDifficulty(name) =>
                write!(f, "unknown difficulty: {}", name),
            SudokuError::EditOfGiven =>
                write!(f, "cell is a given and cannot be edited"),
            SudokuError::InvalidBoard =>
                write!(f, "board contains conflicting entries"),
            SudokuError::Unsolvable =>
                write!(f, "board is unsolvable from its current state")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a grid literal
/// with [SudokuGrid::parse](../struct.SudokuGrid.html#method.parse).
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cell entries (which are separated by
    /// commas) is not exactly 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than 9).
    InvalidNumber
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            SudokuParseError::NumberFormatError =>
                write!(f, "malformed cell entry"),
            SudokuParseError::InvalidNumber =>
                write!(f, "number is not a digit from 1 to 9")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}
