//! The command line interface for counting the solutions of a Sudoku puzzle
//! read from a file.

use clap::Parser;

use log::debug;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use sudoku_census::Grid;
use sudoku_census::solver::{SolveReport, Solver};

/// Counts all solutions of a classic 9x9 Sudoku puzzle.
#[derive(Parser)]
#[command(version, about)]
struct Args {

    /// Path to the puzzle file, which must hold nine lines of nine
    /// comma-separated entries each, where an empty entry or a 0 marks an
    /// empty cell.
    puzzle: PathBuf,

    /// Print search statistics after the result.
    #[arg(long)]
    stats: bool,

    /// Print the entire report as JSON instead of text.
    #[arg(long)]
    json: bool
}

fn render(report: &SolveReport) {
    if report.solutions == 1 {
        println!("Found an exact solution:");
    }
    else if report.solutions > 1 {
        println!("Not a well formulated problem, many solutions possible. \
            One of them:");
    }
    else {
        println!("No solutions possible");
    }

    if let Some(witness) = &report.witness {
        println!("{}", witness);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let text = match fs::read_to_string(&args.puzzle) {
        Ok(text) => text,
        Err(error) => {
            eprintln!("cannot read {}: {}", args.puzzle.display(), error);
            return ExitCode::from(1);
        }
    };
    let grid = match Grid::parse(&text) {
        Ok(grid) => grid,
        Err(error) => {
            eprintln!("invalid puzzle: {}", error);
            return ExitCode::from(2);
        }
    };

    debug!("parsed {} with {} empty cells", args.puzzle.display(),
        grid.count_empty());

    let start = Instant::now();
    let mut solver = Solver::new_default();
    let report = solver.solve(&grid);
    let elapsed = start.elapsed();

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("cannot serialize report: {}", error);
                return ExitCode::FAILURE;
            }
        }
    }
    else {
        render(&report);
    }

    if args.stats {
        println!();
        println!("Branches: {}", report.branches);
        println!("Contradictions: {}", report.contradictions);
        println!("Runtime: {:.2?}", elapsed);
    }

    ExitCode::SUCCESS
}
