use crate::Grid;
use crate::solver::Solver;

// The first example Sudoku is taken from the World Puzzle Federation Sudoku
// Grand Prix:

// Classic: GP 2020 Round 8 (Puzzle 2)
// Puzzle: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf
// Solution: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8_SB.pdf

const GRAND_PRIX_PUZZLE: &str =
    " , , , ,8,1, , , \n\
      , ,2, , ,7,8, , \n\
      ,5,3, , , ,1,7, \n\
     3,7, , , , , , , \n\
     6, , , , , , , ,3\n\
      , , , , , , ,2,4\n\
      ,6,9, , , ,2,3, \n\
      , ,5,9, , ,4, , \n\
      , , ,6,5, , , , ";

const GRAND_PRIX_SOLUTION: &str =
    "7,4,6,2,8,1,3,5,9\n\
     9,1,2,5,3,7,8,4,6\n\
     8,5,3,4,9,6,1,7,2\n\
     3,7,4,1,2,5,6,9,8\n\
     6,2,8,7,4,9,5,1,3\n\
     5,9,1,3,6,8,7,2,4\n\
     1,6,9,8,7,4,2,3,5\n\
     2,8,5,9,1,3,4,6,7\n\
     4,3,7,6,5,2,9,8,1";

fn assert_unique_solution(puzzle: &str, solution: &str) {
    let puzzle = Grid::parse(puzzle).unwrap();
    let expected = Grid::parse(solution).unwrap();
    let mut solver = Solver::new_default();
    let report = solver.solve(&puzzle);

    assert_eq!(1, report.solutions);
    assert_eq!(Some(expected), report.witness);
    assert_eq!(report.branches, report.solutions + report.contradictions);
}

#[test]
fn classic_grand_prix_riddle_has_unique_solution() {
    assert_unique_solution(GRAND_PRIX_PUZZLE, GRAND_PRIX_SOLUTION);
}

#[test]
fn sparse_classic_riddle_has_unique_solution() {
    assert_unique_solution(
        " , , , , ,7,3, , \n\
          ,1,2, , , ,5,4, \n\
          , ,3,4, , , ,1, \n\
          , ,5,6, , , ,8, \n\
          , , , , , , , , \n\
         7, , , , ,2,4, , \n\
         6,4,1, , , ,8, , \n\
         5,3, , , ,6,7, , \n\
          , , , , ,9, , , ",
        "4,5,6,2,1,7,3,9,8\n\
         8,1,2,9,6,3,5,4,7\n\
         9,7,3,4,5,8,6,1,2\n\
         1,2,5,6,7,4,9,8,3\n\
         3,6,4,8,9,1,2,7,5\n\
         7,9,8,5,3,2,4,6,1\n\
         6,4,1,7,2,5,8,3,9\n\
         5,3,9,1,8,6,7,2,4\n\
         2,8,7,3,4,9,1,5,6");
}

#[test]
fn contradicting_extra_clue_makes_riddle_unsolvable() {
    // The riddle above is uniquely solvable with a 7 in the top-left corner,
    // so filling in a 9 leaves nothing to find.
    let mut puzzle = Grid::parse(GRAND_PRIX_PUZZLE).unwrap();
    puzzle.set(9, 0, 0);

    let mut solver = Solver::new_default();
    let report = solver.solve(&puzzle);

    assert_eq!(0, report.solutions);
    assert_eq!(None, report.witness);
    assert_eq!(report.branches, report.contradictions);
    assert!(report.contradictions >= 1);
}
