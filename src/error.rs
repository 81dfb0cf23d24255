//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// Miscellaneous errors that can occur on some methods of a
/// [Grid](crate::Grid). This does not include errors that occur when parsing
/// one, see [ParseError] for that.
#[derive(Debug, Eq, PartialEq)]
pub enum GridError {

    /// Indicates that a cell value is invalid, that is, greater than 9.
    InvalidValue
}

impl Display for GridError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidValue =>
                write!(f, "cell values must be between 0 and 9")
        }
    }
}

/// Syntactic sugar for `Result<V, GridError>`.
pub type GridResult<V> = Result<V, GridError>;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](crate::Grid).
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {

    /// Indicates that the input does not have exactly nine rows. Contains the
    /// number of rows that were found.
    WrongNumberOfRows(usize),

    /// Indicates that a row does not consist of exactly nine entries, which
    /// are separated by commas.
    WrongNumberOfEntries {

        /// The 1-based index of the offending row.
        row: usize,

        /// The number of entries the row actually holds.
        count: usize
    },

    /// Indicates that an entry could not be parsed as an integer.
    NumberFormatError {

        /// The 1-based index of the offending row.
        row: usize
    },

    /// Indicates that an entry holds an integer outside the range `[0, 9]`.
    InvalidValue {

        /// The 1-based index of the offending row.
        row: usize
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongNumberOfRows(count) =>
                write!(f, "the puzzle must have exactly 9 rows, but {} were \
                    found", count),
            ParseError::WrongNumberOfEntries { row, count } =>
                write!(f, "row {} must contain exactly 9 entries, but has {}",
                    row, count),
            ParseError::NumberFormatError { row } =>
                write!(f, "row {} contains an entry that is not an integer",
                    row),
            ParseError::InvalidValue { row } =>
                write!(f, "row {} contains a number that is not between 0 \
                    and 9", row)
        }
    }
}

/// Syntactic sugar for `Result<V, ParseError>`.
pub type ParseResult<V> = Result<V, ParseError>;
