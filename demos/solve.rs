//! Solve a puzzle from a JSON hint file:
//!
//! ```text
//! cargo run --example solve -- puzzle.json --progress
//! ```
//!
//! where `puzzle.json` looks like `{"rows": [[3]], "cols": [[1],[1],[1]]}`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use nonosolve::solver::engine::{Solver, SolverConfig};
use nonosolve::solver::grid::Grid;
use nonosolve::solver::hint::PuzzleHints;
use nonosolve::solver::scheduler::SliceOutcome;
use nonosolve::solver::stats::render_stats_table;

#[derive(Parser)]
#[command(about = "Solve a nonogram from a JSON hint file")]
struct Args {
    /// Path to the puzzle JSON ({"rows": [...], "cols": [...]}).
    puzzle: PathBuf,

    /// Print the partial grid every time a slice yields.
    #[arg(long)]
    progress: bool,

    /// Time budget per slice, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    slice_ms: u64,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let json = std::fs::read_to_string(&args.puzzle).expect("failed to read puzzle file");
    let hints: PuzzleHints = serde_json::from_str(&json).expect("failed to parse puzzle JSON");

    let solver = Solver::new(hints)
        .expect("invalid puzzle")
        .with_config(SolverConfig {
            show_progress: args.progress,
        });

    let mut task = solver.solve_task();
    let budget = Duration::from_millis(args.slice_ms);
    let outcome = loop {
        match task.run_slice(budget) {
            SliceOutcome::Yielded { progress } => {
                if let Some(rows) = progress {
                    let mut grid = Grid::new(rows.len(), rows[0].len());
                    for (r, row) in rows.iter().enumerate() {
                        grid.set_row(r, row);
                    }
                    println!("-- still solving --\n{}", grid.render());
                }
            }
            SliceOutcome::Done(outcome) => break outcome,
        }
    };

    match outcome.solutions.len() {
        0 => println!("No solutions: the hints are infeasible."),
        1 => println!("Unique solution:"),
        n => println!("Ambiguous puzzle, {n} solutions:"),
    }
    for rows in &outcome.solutions {
        let mut grid = Grid::new(rows.len(), rows[0].len());
        for (r, row) in rows.iter().enumerate() {
            grid.set_row(r, row);
        }
        println!("{}", grid.render());
    }

    println!("{}", render_stats_table(task.stats()));
}
