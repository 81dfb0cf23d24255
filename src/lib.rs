// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand solver for classic 9x9 Sudoku
//! which determines the number of solutions of a puzzle. It supports the
//! following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Querying cells, candidate digits, and contradictions of a grid
//! * Counting all solutions of a puzzle using constraint propagation
//! interleaved with a perfect backtracking algorithm
//! * Reporting search statistics, namely the number of explored branches and
//! encountered contradictions, together with a witness solution
//!
//! # Parsing and printing Sudoku
//!
//! See [Grid::parse] for the exact format of a puzzle. In short, it consists
//! of nine lines, each holding nine comma-separated entries, where an empty
//! entry or a 0 marks an empty cell.
//!
//! ```
//! use sudoku_census::Grid;
//!
//! let grid = Grid::parse(
//!     "5,3, , ,7, , , , \n\
//!      6, , ,1,9,5, , , \n\
//!       ,9,8, , , , ,6, \n\
//!      8, , , ,6, , , ,3\n\
//!      4, , ,8, ,3, , ,1\n\
//!      7, , , ,2, , , ,6\n\
//!       ,6, , , , ,2,8, \n\
//!       , , ,4,1,9, , ,5\n\
//!       , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving Sudoku
//!
//! A [Solver](solver::Solver) takes a puzzle and exhaustively searches its
//! solution space. It first fills all cells whose value is forced, and only
//! guesses when it has to, trying every candidate digit of one of the cells
//! with the fewest candidates. The result is a
//! [SolveReport](solver::SolveReport) holding the exact number of solutions,
//! search statistics, and a witness solution if one exists.
//!
//! ```
//! use sudoku_census::Grid;
//! use sudoku_census::solver::Solver;
//!
//! let puzzle = Grid::parse(
//!     "5,3, , ,7, , , , \n\
//!      6, , ,1,9,5, , , \n\
//!       ,9,8, , , , ,6, \n\
//!      8, , , ,6, , , ,3\n\
//!      4, , ,8, ,3, , ,1\n\
//!      7, , , ,2, , , ,6\n\
//!       ,6, , , , ,2,8, \n\
//!       , , ,4,1,9, , ,5\n\
//!       , , , ,8, , ,7,9").unwrap();
//! let expected = Grid::parse(
//!     "5,3,4,6,7,8,9,1,2\n\
//!      6,7,2,1,9,5,3,4,8\n\
//!      1,9,8,3,4,2,5,6,7\n\
//!      8,5,9,7,6,1,4,2,3\n\
//!      4,2,6,8,5,3,7,9,1\n\
//!      7,1,3,9,2,4,8,5,6\n\
//!      9,6,1,5,3,7,2,8,4\n\
//!      2,8,7,4,1,9,6,3,5\n\
//!      3,4,5,2,8,6,1,7,9").unwrap();
//!
//! let mut solver = Solver::new_default();
//! let report = solver.solve(&puzzle);
//!
//! assert_eq!(1, report.solutions);
//! assert_eq!(Some(expected), report.witness);
//! ```
//!
//! # Counting solutions
//!
//! Unlike a solver that stops at the first solution, this one visits the
//! entire search tree. Puzzles with multiple solutions are therefore detected
//! reliably, as are unsolvable ones, which yield a report with zero
//! solutions and no witness.
//!
//! ```
//! use sudoku_census::Grid;
//! use sudoku_census::solver::Solver;
//!
//! // A solved grid with one rectangle of cells removed whose digits can be
//! // swapped, so two completions exist.
//! let puzzle = Grid::parse(
//!     "5,3,4,6,7,8,9,1,2\n\
//!      6,7,2,1,9,5,3,4,8\n\
//!      1,9,8,3,4,2,5,6,7\n\
//!      8,5,9,7,6, ,4,2, \n\
//!      4,2,6,8,5, ,7,9, \n\
//!      7,1,3,9,2,4,8,5,6\n\
//!      9,6,1,5,3,7,2,8,4\n\
//!      2,8,7,4,1,9,6,3,5\n\
//!      3,4,5,2,8,6,1,7,9").unwrap();
//!
//! let mut solver = Solver::new_default();
//! let report = solver.solve(&puzzle);
//!
//! assert_eq!(2, report.solutions);
//! assert_eq!(2, report.branches);
//! assert_eq!(0, report.contradictions);
//! ```
//!
//! # Note regarding performance
//!
//! Counting the solutions of a puzzle with very few clues requires exploring
//! a large search tree. It is strongly recommended to use at least
//! `opt-level = 2`, even in tests that solve such puzzles.

pub mod error;
pub mod solver;
pub mod util;

#[cfg(test)]
mod fix_tests;


use error::{GridError, GridResult, ParseError, ParseResult};
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// A classic Sudoku grid composed of 81 cells, organized into nine rows, nine
/// columns, and nine 3x3 boxes. Each cell either holds a digit from 1 to 9 or
/// is empty, which is represented by the value 0. A grid rendered with no
/// filled cells looks like this:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Rows and columns are indexed from 0 to 8, where row 0 is the topmost row
/// and column 0 is the leftmost column.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "[[u8; 9]; 9]")]
#[serde(try_from = "[[u8; 9]; 9]")]
pub struct Grid {
    cells: [[u8; 9]; 9]
}

fn to_char(cell: u8) -> char {
    if cell == 0 {
        ' '
    }
    else {
        (b'0' + cell) as char
    }
}

fn to_string(cell: u8) -> String {
    if cell == 0 {
        String::from("")
    }
    else {
        cell.to_string()
    }
}

const TOP_ROW: &str = "╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗\n";
const THIN_SEPARATOR_LINE: &str =
    "╟───┼───┼───╫───┼───┼───╫───┼───┼───╢\n";
const THICK_SEPARATOR_LINE: &str =
    "╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣\n";
const BOTTOM_ROW: &str = "╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝";

fn content_row(grid: &Grid, row: usize) -> String {
    let mut result = String::new();

    for col in 0..9 {
        if col % 3 == 0 {
            result.push('║');
        }
        else {
            result.push('│');
        }

        result.push(' ');
        result.push(to_char(grid.cells[row][col]));
        result.push(' ');
    }

    result.push_str("║\n");
    result
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            if row == 0 {
                f.write_str(TOP_ROW)?;
            }
            else if row % 3 == 0 {
                f.write_str(THICK_SEPARATOR_LINE)?;
            }
            else {
                f.write_str(THIN_SEPARATOR_LINE)?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(BOTTOM_ROW)
    }
}

impl Grid {

    /// Creates a new Sudoku grid in which all cells are empty.
    pub fn new() -> Grid {
        Grid {
            cells: [[0; 9]; 9]
        }
    }

    /// Creates a Sudoku grid holding the given cell values, where 0
    /// represents an empty cell.
    ///
    /// # Arguments
    ///
    /// * `cells`: The cell values of the created grid, indexed by row first
    /// and column second. Each value must be in the range `[0, 9]`.
    ///
    /// # Errors
    ///
    /// If any value is greater than 9. In that case, a
    /// [GridError::InvalidValue] is returned.
    pub fn from_array(cells: [[u8; 9]; 9]) -> GridResult<Grid> {
        for row in &cells {
            for &value in row {
                if value > 9 {
                    return Err(GridError::InvalidValue);
                }
            }
        }

        Ok(Grid {
            cells
        })
    }

    /// Parses the textual form of a Sudoku grid. The text has to consist of
    /// exactly nine lines, each holding exactly nine comma-separated entries.
    /// An entry is either a number from 0 to 9 or empty, where an empty entry
    /// and a 0 both represent an empty cell. Whitespace around entries is
    /// ignored to allow for more intuitive formatting.
    ///
    /// As an example, the text
    ///
    /// ```text
    /// 5,3, , ,7, , , ,
    /// 6, , ,1,9,5, , ,
    ///  ,9,8, , , , ,6,
    /// 8, , , ,6, , , ,3
    /// 4, , ,8, ,3, , ,1
    /// 7, , , ,2, , , ,6
    ///  ,6, , , , ,2,8,
    ///  , , ,4,1,9, , ,5
    ///  , , , ,8, , ,7,9
    /// ```
    ///
    /// will parse to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
    /// ║ 5 │ 3 │   ║   │ 7 │   ║   │   │   ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║ 6 │   │   ║ 1 │ 9 │ 5 ║   │   │   ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║   │ 9 │ 8 ║   │   │   ║   │ 6 │   ║
    /// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
    /// ║ 8 │   │   ║   │ 6 │   ║   │   │ 3 ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║ 4 │   │   ║ 8 │   │ 3 ║   │   │ 1 ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║ 7 │   │   ║   │ 2 │   ║   │   │ 6 ║
    /// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
    /// ║   │ 6 │   ║   │   │   ║ 2 │ 8 │   ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║   │   │   ║ 4 │ 1 │ 9 ║   │   │ 5 ║
    /// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
    /// ║   │   │   ║   │ 8 │   ║   │ 7 │ 9 ║
    /// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of [ParseError] (see that documentation).
    pub fn parse(text: &str) -> ParseResult<Grid> {
        let rows: Vec<&str> = text.lines().collect();

        if rows.len() != 9 {
            return Err(ParseError::WrongNumberOfRows(rows.len()));
        }

        let mut grid = Grid::new();

        for (row_index, row) in rows.iter().enumerate() {
            let entries: Vec<&str> = row.split(',').collect();

            if entries.len() != 9 {
                return Err(ParseError::WrongNumberOfEntries {
                    row: row_index + 1,
                    count: entries.len()
                });
            }

            for (col_index, entry) in entries.iter().enumerate() {
                let entry = entry.trim();

                if entry.is_empty() {
                    continue;
                }

                let value: i32 = entry.parse()
                    .map_err(|_| ParseError::NumberFormatError {
                        row: row_index + 1
                    })?;

                if !(0..=9).contains(&value) {
                    return Err(ParseError::InvalidValue {
                        row: row_index + 1
                    });
                }

                grid.cells[row_index][col_index] = value as u8;
            }
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_census::Grid;
    ///
    /// let mut grid = Grid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set(4, 1, 1);
    /// grid.set(5, 2, 1);
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = Grid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(|row| row.iter()
                .map(|&cell| to_string(cell))
                .collect::<Vec<String>>()
                .join(","))
            .collect::<Vec<String>>()
            .join("\n")
    }

    /// Gets the value of the cell at the given position, where 0 represents
    /// an empty cell.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the queried cell. Must be in the range `[0, 9[`.
    /// * `col`: The column of the queried cell. Must be in the range
    /// `[0, 9[`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 9[`.
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Sets the value of the empty cell at the given position. Filling a cell
    /// that already holds a digit is considered a defect in the caller, as
    /// the search never overwrites cells.
    ///
    /// # Arguments
    ///
    /// * `value`: The digit to put into the cell. Must be in the range
    /// `[1, 9]`.
    /// * `row`: The row of the changed cell. Must be in the range `[0, 9[`.
    /// * `col`: The column of the changed cell. Must be in the range
    /// `[0, 9[`.
    ///
    /// # Panics
    ///
    /// If `row` or `col` is not in the range `[0, 9[`, if `value` is not in
    /// the range `[1, 9]`, or if the cell at the given position is already
    /// filled.
    pub fn set(&mut self, value: u8, row: usize, col: usize) {
        assert!(row < 9 && col < 9,
            "cell ({}, {}) is outside the grid", row, col);
        assert!((1..=9).contains(&value),
            "value {} is not a digit from 1 to 9", value);
        assert_eq!(0, self.cells[row][col],
            "cell ({}, {}) is already filled", row, col);

        self.cells[row][col] = value;
    }

    /// Indicates whether the given value is present anywhere in the given
    /// row.
    ///
    /// # Arguments
    ///
    /// * `value`: The digit to search for. Must be in the range `[1, 9]`.
    /// * `row`: The row to search. Must be in the range `[0, 9[`.
    pub fn in_row(&self, value: u8, row: usize) -> bool {
        self.cells[row].contains(&value)
    }

    /// Indicates whether the given value is present anywhere in the given
    /// column.
    ///
    /// # Arguments
    ///
    /// * `value`: The digit to search for. Must be in the range `[1, 9]`.
    /// * `col`: The column to search. Must be in the range `[0, 9[`.
    pub fn in_col(&self, value: u8, col: usize) -> bool {
        self.cells.iter().any(|row| row[col] == value)
    }

    /// Indicates whether the given value is present anywhere in the 3x3 box
    /// containing the cell at the given position.
    ///
    /// # Arguments
    ///
    /// * `value`: The digit to search for. Must be in the range `[1, 9]`.
    /// * `row`: The row of a cell in the box to search. Must be in the range
    /// `[0, 9[`.
    /// * `col`: The column of a cell in the box to search. Must be in the
    /// range `[0, 9[`.
    pub fn in_box(&self, value: u8, row: usize, col: usize) -> bool {
        let box_row = (row / 3) * 3;
        let box_col = (col / 3) * 3;

        for other_row in box_row..box_row + 3 {
            for other_col in box_col..box_col + 3 {
                if self.cells[other_row][other_col] == value {
                    return true;
                }
            }
        }

        false
    }

    /// Indicates whether the given value could be placed in the cell at the
    /// given position without repeating a digit in the cell's row, column, or
    /// box. The result is only meaningful for empty cells.
    ///
    /// # Arguments
    ///
    /// * `value`: The digit to check. Must be in the range `[1, 9]`.
    /// * `row`: The row of the checked cell. Must be in the range `[0, 9[`.
    /// * `col`: The column of the checked cell. Must be in the range
    /// `[0, 9[`.
    pub fn is_candidate(&self, value: u8, row: usize, col: usize) -> bool {
        !self.in_row(value, row) && !self.in_col(value, col)
            && !self.in_box(value, row, col)
    }

    /// Returns the set of all digits that could be placed in the empty cell
    /// at the given position without repeating a digit in the cell's row,
    /// column, or box.
    ///
    /// # Arguments
    ///
    /// * `row`: The row of the checked cell. Must be in the range `[0, 9[`.
    /// * `col`: The column of the checked cell. Must be in the range
    /// `[0, 9[`.
    ///
    /// # Example
    ///
    /// ```
    /// use sudoku_census::Grid;
    /// use sudoku_census::digits;
    ///
    /// let mut grid = Grid::new();
    /// grid.set(1, 0, 0);
    /// grid.set(2, 0, 4);
    /// grid.set(3, 1, 1);
    /// grid.set(4, 4, 1);
    ///
    /// assert_eq!(digits!(5, 6, 7, 8, 9), grid.candidates(0, 1));
    /// ```
    pub fn candidates(&self, row: usize, col: usize) -> DigitSet {
        let mut result = DigitSet::new();

        for value in 1..=9 {
            if self.is_candidate(value, row, col) {
                result.insert(value);
            }
        }

        result
    }

    /// Indicates whether any row contains the same digit twice. Empty cells
    /// are ignored.
    pub fn has_row_contradiction(&self) -> bool {
        let mut seen = DigitSet::new();

        for row in 0..9 {
            seen.clear();

            for col in 0..9 {
                let value = self.cells[row][col];

                if value != 0 && !seen.insert(value) {
                    return true;
                }
            }
        }

        false
    }

    /// Indicates whether any column contains the same digit twice. Empty
    /// cells are ignored.
    pub fn has_col_contradiction(&self) -> bool {
        let mut seen = DigitSet::new();

        for col in 0..9 {
            seen.clear();

            for row in 0..9 {
                let value = self.cells[row][col];

                if value != 0 && !seen.insert(value) {
                    return true;
                }
            }
        }

        false
    }

    /// Indicates whether any 3x3 box contains the same digit twice. Empty
    /// cells are ignored.
    pub fn has_box_contradiction(&self) -> bool {
        let mut seen = DigitSet::new();

        for box_row in (0..9).step_by(3) {
            for box_col in (0..9).step_by(3) {
                seen.clear();

                for row in box_row..box_row + 3 {
                    for col in box_col..box_col + 3 {
                        let value = self.cells[row][col];

                        if value != 0 && !seen.insert(value) {
                            return true;
                        }
                    }
                }
            }
        }

        false
    }

    /// Indicates whether any row, column, or box contains the same digit
    /// twice, which makes the grid impossible to complete.
    pub fn has_contradiction(&self) -> bool {
        self.has_row_contradiction() || self.has_col_contradiction()
            || self.has_box_contradiction()
    }

    /// Fills the empty cell in every row that has exactly one, deriving the
    /// value from the fact that a completed row sums to 45. Returns `true` if
    /// at least one cell was filled.
    pub fn complete_rows(&mut self) -> bool {
        let mut changed = false;

        for row in 0..9 {
            let mut empty_col = None;
            let mut empty_count = 0;
            let mut sum = 0;

            for col in 0..9 {
                let value = self.cells[row][col];

                if value == 0 {
                    empty_col = Some(col);
                    empty_count += 1;
                }

                sum += i32::from(value);
            }

            if empty_count != 1 {
                continue;
            }

            let missing = 45 - sum;

            // Eight distinct digits always leave a missing value from 1 to 9.
            // Anything else means the row already contains a duplicate, which
            // the contradiction checks catch.
            if (1..=9).contains(&missing) {
                if let Some(col) = empty_col {
                    self.set(missing as u8, row, col);
                    changed = true;
                }
            }
        }

        changed
    }

    // TODO investigate whether the code duplication between the three
    // completion sweeps can be avoided.

    /// Fills the empty cell in every column that has exactly one, deriving
    /// the value from the fact that a completed column sums to 45. Returns
    /// `true` if at least one cell was filled.
    pub fn complete_cols(&mut self) -> bool {
        let mut changed = false;

        for col in 0..9 {
            let mut empty_row = None;
            let mut empty_count = 0;
            let mut sum = 0;

            for row in 0..9 {
                let value = self.cells[row][col];

                if value == 0 {
                    empty_row = Some(row);
                    empty_count += 1;
                }

                sum += i32::from(value);
            }

            if empty_count != 1 {
                continue;
            }

            let missing = 45 - sum;

            if (1..=9).contains(&missing) {
                if let Some(row) = empty_row {
                    self.set(missing as u8, row, col);
                    changed = true;
                }
            }
        }

        changed
    }

    /// Fills the empty cell in every 3x3 box that has exactly one, deriving
    /// the value from the fact that a completed box sums to 45. Returns
    /// `true` if at least one cell was filled.
    pub fn complete_boxes(&mut self) -> bool {
        let mut changed = false;

        for box_row in (0..9).step_by(3) {
            for box_col in (0..9).step_by(3) {
                let mut empty_cell = None;
                let mut empty_count = 0;
                let mut sum = 0;

                for row in box_row..box_row + 3 {
                    for col in box_col..box_col + 3 {
                        let value = self.cells[row][col];

                        if value == 0 {
                            empty_cell = Some((row, col));
                            empty_count += 1;
                        }

                        sum += i32::from(value);
                    }
                }

                if empty_count != 1 {
                    continue;
                }

                let missing = 45 - sum;

                if (1..=9).contains(&missing) {
                    if let Some((row, col)) = empty_cell {
                        self.set(missing as u8, row, col);
                        changed = true;
                    }
                }
            }
        }

        changed
    }

    /// Indicates whether every row of the grid sums to 45. This is a cheap
    /// necessary condition for the grid being solved, but not a sufficient
    /// one, so a positive answer must be confirmed with
    /// [Grid::verify_solved].
    pub fn looks_complete(&self) -> bool {
        self.cells.iter().all(|row|
            row.iter().map(|&value| i32::from(value)).sum::<i32>() == 45)
    }

    /// Indicates whether the grid is completely filled and every row, column,
    /// and box contains each digit from 1 to 9 exactly once, that is, whether
    /// the grid is a valid Sudoku solution.
    pub fn verify_solved(&self) -> bool {
        let mut seen = DigitSet::new();

        for row in 0..9 {
            seen.clear();

            for col in 0..9 {
                let value = self.cells[row][col];

                if value == 0 || !seen.insert(value) {
                    return false;
                }
            }
        }

        for col in 0..9 {
            seen.clear();

            for row in 0..9 {
                let value = self.cells[row][col];

                if value == 0 || !seen.insert(value) {
                    return false;
                }
            }
        }

        for box_row in (0..9).step_by(3) {
            for box_col in (0..9).step_by(3) {
                seen.clear();

                for row in box_row..box_row + 3 {
                    for col in box_col..box_col + 3 {
                        let value = self.cells[row][col];

                        if value == 0 || !seen.insert(value) {
                            return false;
                        }
                    }
                }
            }
        }

        true
    }

    /// Indicates whether every cell of the grid is filled, regardless of
    /// whether the digits form a valid solution.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&value| value != 0)
    }

    /// Returns the number of empty cells in this grid.
    pub fn count_empty(&self) -> usize {
        self.cells.iter()
            .map(|row| row.iter().filter(|&&value| value == 0).count())
            .sum()
    }

    /// Indicates whether this grid is a subset of another one. That is, every
    /// cell that is filled in this grid must hold the same digit in `other`,
    /// while cells that are empty here may hold anything there.
    ///
    /// # Arguments
    ///
    /// * `other`: The grid checked for being a superset of this one.
    pub fn is_subset(&self, other: &Grid) -> bool {
        self.cells.iter().flatten()
            .zip(other.cells.iter().flatten())
            .all(|(&self_cell, &other_cell)|
                self_cell == 0 || self_cell == other_cell)
    }

    /// Indicates whether this grid is a superset of another one. See
    /// [Grid::is_subset] for the definition.
    ///
    /// # Arguments
    ///
    /// * `other`: The grid checked for being a subset of this one.
    pub fn is_superset(&self, other: &Grid) -> bool {
        other.is_subset(self)
    }
}

impl From<Grid> for [[u8; 9]; 9] {
    fn from(grid: Grid) -> [[u8; 9]; 9] {
        grid.cells
    }
}

impl TryFrom<[[u8; 9]; 9]> for Grid {
    type Error = GridError;

    fn try_from(cells: [[u8; 9]; 9]) -> GridResult<Grid> {
        Grid::from_array(cells)
    }
}
