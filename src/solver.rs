//! This module contains the logic for counting the solutions of a Sudoku.
//!
//! Most importantly, this module contains the definition of the [Solver],
//! which exhaustively searches the solution space of a
//! [Grid](crate::Grid), and the [SolveReport] describing the outcome.

use crate::Grid;
use crate::util::DigitSet;

use log::{debug, trace};

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// The aggregated result of counting the solutions of a
/// [Grid](crate::Grid). Besides the number of solutions, it carries
/// statistics describing the explored search tree.
///
/// The search tree has one leaf for every time the search arrived at a
/// solution or at a contradiction, so `branches` always equals
/// `solutions + contradictions`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SolveReport {

    /// The total number of solutions of the puzzle.
    pub solutions: u64,

    /// The number of leaves of the explored search tree. A run that never
    /// has to guess still counts one branch.
    pub branches: u64,

    /// The number of contradictions the search ran into.
    pub contradictions: u64,

    /// One arbitrary solution of the puzzle, if at least one exists.
    pub witness: Option<Grid>
}

impl SolveReport {

    fn solved(grid: Grid) -> SolveReport {
        SolveReport {
            solutions: 1,
            branches: 1,
            contradictions: 0,
            witness: Some(grid)
        }
    }

    fn contradicted() -> SolveReport {
        SolveReport {
            solutions: 0,
            branches: 1,
            contradictions: 1,
            witness: None
        }
    }

    fn empty() -> SolveReport {
        SolveReport {
            solutions: 0,
            branches: 0,
            contradictions: 0,
            witness: None
        }
    }

    /// Merges this report with the report of another part of the search by
    /// adding all counters. The merged witness is the one of this report, if
    /// present, and otherwise the one of `other`.
    ///
    /// # Example
    ///
    /// ```
    /// use sudoku_census::solver::SolveReport;
    ///
    /// let left = SolveReport {
    ///     solutions: 1,
    ///     branches: 2,
    ///     contradictions: 1,
    ///     witness: None
    /// };
    /// let right = SolveReport {
    ///     solutions: 0,
    ///     branches: 1,
    ///     contradictions: 1,
    ///     witness: None
    /// };
    ///
    /// let merged = left.merge(right);
    ///
    /// assert_eq!(1, merged.solutions);
    /// assert_eq!(3, merged.branches);
    /// assert_eq!(2, merged.contradictions);
    /// ```
    pub fn merge(self, other: SolveReport) -> SolveReport {
        SolveReport {
            solutions: self.solutions + other.solutions,
            branches: self.branches + other.branches,
            contradictions: self.contradictions + other.contradictions,
            witness: self.witness.or(other.witness)
        }
    }
}

/// Collects the cells that are tied for the globally minimal number of
/// candidates. Offering a cell with fewer candidates than the current minimum
/// discards all previously offered cells.
struct BranchPool {
    min_len: usize,
    cells: Vec<(usize, usize, DigitSet)>
}

impl BranchPool {
    fn new() -> BranchPool {
        BranchPool {
            min_len: 10,
            cells: Vec::new()
        }
    }

    fn offer(&mut self, row: usize, col: usize, candidates: DigitSet) {
        let len = candidates.len();

        if len < self.min_len {
            self.min_len = len;
            self.cells.clear();
        }

        if len == self.min_len {
            self.cells.push((row, col, candidates));
        }
    }

    fn pick<R: Rng>(&self, rng: &mut R) -> (usize, usize, DigitSet) {
        self.cells[rng.gen_range(0..self.cells.len())]
    }
}

enum Propagation {
    Contradicted,
    Solved,
    Stuck(BranchPool)
}

/// Repeats completion sweeps, contradiction checks, and a candidate scan
/// until the grid stops changing. Cells with a single candidate are filled
/// along the way, so afterwards the grid is either solved, contradictory, or
/// stuck with a pool of cells to branch on.
fn propagate(grid: &mut Grid) -> Propagation {
    loop {
        let mut changed = false;
        let mut pool = BranchPool::new();

        changed |= grid.complete_rows();
        changed |= grid.complete_cols();
        changed |= grid.complete_boxes();

        if grid.has_contradiction() {
            return Propagation::Contradicted;
        }

        if grid.looks_complete() && grid.verify_solved() {
            return Propagation::Solved;
        }

        for row in 0..9 {
            for col in 0..9 {
                if grid.get(row, col) != 0 {
                    continue;
                }

                let candidates = grid.candidates(row, col);

                match candidates.len() {
                    0 => return Propagation::Contradicted,
                    1 => {
                        if let Some(value) = candidates.iter().next() {
                            grid.set(value, row, col);
                        }

                        changed = true;
                    },
                    _ => pool.offer(row, col, candidates)
                }
            }
        }

        if !changed {
            return Propagation::Stuck(pool);
        }
    }
}

/// A solver that exhaustively searches the solution space of a
/// [Grid](crate::Grid) and counts every solution. It interleaves two
/// techniques: constraint propagation, which fills cells whose value is
/// forced, and backtracking, which tries every candidate digit of one cell
/// whenever propagation cannot make progress.
///
/// The cell to branch on is chosen randomly among the cells that are tied
/// for the fewest candidates, which keeps the search tree small. The random
/// number generator influences which witness is reported and how the search
/// tree unfolds, but never the number of solutions.
pub struct Solver<R: Rng> {
    rng: R
}

impl Solver<ThreadRng> {

    /// Creates a new solver that uses a [ThreadRng](rand::rngs::ThreadRng)
    /// to choose the cells on which the search branches.
    pub fn new_default() -> Solver<ThreadRng> {
        Solver::new(rand::thread_rng())
    }
}

impl<R: Rng> Solver<R> {

    /// Creates a new solver that branches using the given random number
    /// generator.
    ///
    /// # Arguments
    ///
    /// * `rng`: The random number generator used to choose the cells on
    /// which the search branches.
    pub fn new(rng: R) -> Solver<R> {
        Solver {
            rng
        }
    }

    /// Counts all solutions of the given puzzle and reports them together
    /// with search statistics. The input grid is not modified, as every
    /// branch of the search works on its own copy.
    ///
    /// # Arguments
    ///
    /// * `grid`: The puzzle whose solutions are counted. It may be
    /// contradictory, unsolvable, uniquely solvable, or ambiguous.
    pub fn solve(&mut self, grid: &Grid) -> SolveReport {
        debug!("solving a grid with {} empty cells", grid.count_empty());

        let report = self.solve_rec(grid.clone());

        debug!("search explored {} branches and hit {} contradictions",
            report.branches, report.contradictions);

        report
    }

    fn solve_rec(&mut self, mut grid: Grid) -> SolveReport {
        match propagate(&mut grid) {
            Propagation::Contradicted => SolveReport::contradicted(),
            Propagation::Solved => SolveReport::solved(grid),
            Propagation::Stuck(pool) => {
                let (row, col, candidates) = pool.pick(&mut self.rng);

                trace!("branching on cell ({}, {}) with {} candidates", row,
                    col, candidates.len());

                let mut report = SolveReport::empty();

                for value in candidates.iter() {
                    let mut next = grid.clone();
                    next.set(value, row, col);
                    report = report.merge(self.solve_rec(next));
                }

                report
            }
        }
    }
}
