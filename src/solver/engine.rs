//! The solver frontend: hint tables in, solution grids out.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{Result, SolverError},
    solver::{
        candidate::Candidate,
        grid::Line,
        hint::{Hint, PuzzleHints},
        propagation::{self, Axis},
        scheduler::{SliceOutcome, SolveTask, DEFAULT_SLICE_BUDGET},
        stats::SolveStats,
    },
};

/// The optional configuration bundle a caller may supply alongside the
/// hint tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Emit partial-grid snapshots whenever a slice yields.
    pub show_progress: bool,
}

/// The result of a completed solve.
///
/// Zero solutions means the hints are infeasible; more than one means the
/// puzzle is ambiguous. Callers validating puzzle quality expect exactly
/// one. `iterations` counts the rounds of the initial fixpoint propagation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub solutions: Vec<Vec<Line>>,
    pub iterations: u64,
}

/// A solver for one puzzle's hint tables.
///
/// The solver itself is immutable; each call to [`Solver::solve`] or
/// [`Solver::solve_task`] explores an independent candidate tree, so
/// multiple solves may run side by side without cross-talk.
#[derive(Debug)]
pub struct Solver {
    rows: Vec<Hint>,
    cols: Vec<Hint>,
    col_totals: Vec<usize>,
    config: SolverConfig,
}

impl Solver {
    pub fn new(hints: PuzzleHints) -> Result<Self> {
        if hints.rows.is_empty() || hints.cols.is_empty() {
            return Err(SolverError::EmptyPuzzle.into());
        }
        let col_totals = hints.cols.iter().map(Hint::total).collect();
        Ok(Self {
            rows: hints.rows,
            cols: hints.cols,
            col_totals,
            config: SolverConfig::default(),
        })
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rows(&self) -> &[Hint] {
        &self.rows
    }

    pub fn cols(&self) -> &[Hint] {
        &self.cols
    }

    pub(crate) fn col_totals(&self) -> &[usize] {
        &self.col_totals
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Starts a resumable solve; the caller drives it slice by slice.
    pub fn solve_task(&self) -> SolveTask<'_> {
        SolveTask::new(self)
    }

    /// Whether reducing one line over an externally supplied board would
    /// determine cells the board still leaves unknown.
    ///
    /// This serves assistance features: a player board where some line has
    /// deducible cells means the player has missed a forced mark. The board
    /// is given as rows and is not modified; `index` addresses a row or a
    /// column depending on `axis`.
    pub fn line_has_deducible_cells(&self, board: &[Line], axis: Axis, index: usize) -> bool {
        let mut candidate = Candidate::new(&self.rows, &self.cols);
        for (r, row) in board.iter().enumerate() {
            candidate.grid.set_row(r, row);
        }
        let before = match axis {
            Axis::Row => candidate.grid.row(index).to_vec(),
            Axis::Column => candidate.grid.col(index).to_vec(),
        };
        propagation::reduce_line(&mut candidate, axis, index);
        let after = match axis {
            Axis::Row => candidate.grid.row(index),
            Axis::Column => candidate.grid.col(index),
        };
        after != before.as_slice()
    }

    /// Runs the solve to completion in a plain loop, discarding any
    /// progress snapshots.
    pub fn solve(&self) -> (SolveOutcome, SolveStats) {
        let mut task = self.solve_task();
        loop {
            match task.run_slice(DEFAULT_SLICE_BUDGET) {
                SliceOutcome::Done(outcome) => {
                    let stats = task.stats().clone();
                    debug!(
                        solutions = outcome.solutions.len(),
                        iterations = outcome.iterations,
                        "solve finished"
                    );
                    return (outcome, stats);
                }
                SliceOutcome::Yielded { .. } => continue,
            }
        }
    }
}
