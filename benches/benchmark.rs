use criterion::{
    criterion_group,
    criterion_main,
    BenchmarkGroup,
    Criterion,
    SamplingMode
};
use criterion::measurement::WallTime;

use rand::SeedableRng;

use rand_chacha::ChaCha12Rng;

use sudoku_census::Grid;
use sudoku_census::solver::Solver;

use std::time::Duration;

// Note: The sparse riddle explores far more branches than the others, so it
// runs with fewer samples.

// Explanation of benchmark puzzles:
//
// easy: A newspaper-grade riddle that propagation alone nearly finishes.
// grand-prix: A competition riddle from the WPF Sudoku Grand Prix.
// sparse: A 24-clue riddle that requires deep backtracking.
// rectangle: An ambiguous grid with exactly two solutions.

const MEASUREMENT_TIME_SECS: u64 = 30;
const DEFAULT_SAMPLE_SIZE: usize = 100;
const SPARSE_SAMPLE_SIZE: usize = 50;

// A fixed seed keeps the explored search tree identical across samples.
const RNG_SEED: u64 = 42;

// Taken from the English Wikipedia article about Sudoku:
// https://en.wikipedia.org/wiki/Sudoku

const EASY_PUZZLE: &str =
    "5,3, , ,7, , , , \n\
     6, , ,1,9,5, , , \n\
      ,9,8, , , , ,6, \n\
     8, , , ,6, , , ,3\n\
     4, , ,8, ,3, , ,1\n\
     7, , , ,2, , , ,6\n\
      ,6, , , , ,2,8, \n\
      , , ,4,1,9, , ,5\n\
      , , , ,8, , ,7,9";

// Taken from the World Puzzle Federation Sudoku Grand Prix:
//
// Classic: GP 2020 Round 8 (Puzzle 2)
// https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf

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

const SPARSE_PUZZLE: &str =
    " , , , , ,7,3, , \n\
      ,1,2, , , ,5,4, \n\
      , ,3,4, , , ,1, \n\
      , ,5,6, , , ,8, \n\
      , , , , , , , , \n\
     7, , , , ,2,4, , \n\
     6,4,1, , , ,8, , \n\
     5,3, , , ,6,7, , \n\
      , , , , ,9, , , ";

const RECTANGLE_PUZZLE: &str =
    "5,3,4,6,7,8,9,1,2\n\
     6,7,2,1,9,5,3,4,8\n\
     1,9,8,3,4,2,5,6,7\n\
     8,5,9,7,6, ,4,2, \n\
     4,2,6,8,5, ,7,9, \n\
     7,1,3,9,2,4,8,5,6\n\
     9,6,1,5,3,7,2,8,4\n\
     2,8,7,4,1,9,6,3,5\n\
     3,4,5,2,8,6,1,7,9";

fn count_solutions(puzzle: &Grid, expected_solutions: u64) {
    let mut solver = Solver::new(ChaCha12Rng::seed_from_u64(RNG_SEED));
    let report = solver.solve(puzzle);
    assert_eq!(expected_solutions, report.solutions);
}

fn benchmark_puzzle(group: &mut BenchmarkGroup<WallTime>, id: &str,
        sample_size: usize, puzzle: &str, expected_solutions: u64) {
    let puzzle = Grid::parse(puzzle).unwrap();

    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(sample_size);
    group.sampling_mode(SamplingMode::Flat);
    group.bench_function(id,
        |b| b.iter(|| count_solutions(&puzzle, expected_solutions)));
}

fn benchmark_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("count solutions");

    benchmark_puzzle(&mut group, "easy", DEFAULT_SAMPLE_SIZE, EASY_PUZZLE, 1);
    benchmark_puzzle(&mut group, "grand-prix", DEFAULT_SAMPLE_SIZE,
        GRAND_PRIX_PUZZLE, 1);
    benchmark_puzzle(&mut group, "sparse", SPARSE_SAMPLE_SIZE, SPARSE_PUZZLE,
        1);
    benchmark_puzzle(&mut group, "rectangle", DEFAULT_SAMPLE_SIZE,
        RECTANGLE_PUZZLE, 2);
}

criterion_group!(all, benchmark_counting);

criterion_main!(all);
