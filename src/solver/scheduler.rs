//! Cooperative time-slicing of a solve.
//!
//! A [`SolveTask`] is an explicit resumable state machine: the worklist is
//! the continuation. A host calls [`SolveTask::run_slice`] repeatedly, from
//! a plain loop, a thread, or an async task, and each slice processes whole
//! units of work (one propagation round or one search work item) until its
//! time budget runs out. Yields happen only between units, so no partially
//! reduced grid is ever observable; cancellation is simply the host not
//! calling `run_slice` again.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::solver::{
    candidate::Candidate,
    engine::{SolveOutcome, Solver},
    grid::Line,
    propagation,
    search,
    stats::SolveStats,
    work_list::{WorkItem, WorkList},
};

/// Default per-slice time budget.
pub const DEFAULT_SLICE_BUDGET: Duration = Duration::from_secs(1);

/// What a slice ended with.
#[derive(Debug, Clone)]
pub enum SliceOutcome {
    /// The budget ran out; call `run_slice` again to resume. `progress`
    /// carries a snapshot of the best-known partial grid when progress
    /// reporting is enabled.
    Yielded { progress: Option<Vec<Line>> },
    /// The worklist drained; the solve is finished.
    Done(SolveOutcome),
}

#[derive(Debug)]
enum Phase {
    /// Running the initial propagation to fixpoint, one round per unit.
    Propagate(Candidate),
    /// Draining the search worklist, one work item per unit.
    Search,
    Done(SolveOutcome),
}

/// A resumable solve over one puzzle.
#[derive(Debug)]
pub struct SolveTask<'s> {
    solver: &'s Solver,
    phase: Phase,
    work: WorkList,
    solutions: Vec<Vec<Line>>,
    /// Rounds of the initial fixpoint propagation, reported in the outcome.
    initial_rounds: u64,
    stats: SolveStats,
    started: Instant,
}

impl<'s> SolveTask<'s> {
    pub(crate) fn new(solver: &'s Solver) -> Self {
        let mut candidate = Candidate::new(solver.rows(), solver.cols());
        candidate.seed_from_row_marks();
        Self {
            solver,
            phase: Phase::Propagate(candidate),
            work: WorkList::new(),
            solutions: Vec::new(),
            initial_rounds: 0,
            stats: SolveStats::default(),
            started: Instant::now(),
        }
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Done(_))
    }

    /// Processes units of work until `budget` elapses or the solve
    /// finishes. At least one unit is processed per slice, so a zero budget
    /// still makes progress.
    pub fn run_slice(&mut self, budget: Duration) -> SliceOutcome {
        let slice_start = Instant::now();
        loop {
            if let Phase::Done(outcome) = &self.phase {
                return SliceOutcome::Done(outcome.clone());
            }
            self.step();
            if self.is_finished() {
                continue;
            }
            if slice_start.elapsed() >= budget {
                return SliceOutcome::Yielded {
                    progress: self.progress_snapshot(),
                };
            }
        }
    }

    fn step(&mut self) {
        match &mut self.phase {
            Phase::Propagate(candidate) => {
                // A candidate can be dead on arrival when a hint admits no
                // arrangement at all; skip straight to the (empty) search.
                let changed = if candidate.cannot_match {
                    false
                } else {
                    self.stats.propagation_rounds += 1;
                    propagation::run_round(candidate)
                };
                if candidate.cannot_match || !changed {
                    self.initial_rounds = candidate.iterations;
                    if let Phase::Propagate(candidate) =
                        std::mem::replace(&mut self.phase, Phase::Search)
                    {
                        if candidate.cannot_match {
                            debug!("contradiction during initial propagation");
                        } else {
                            self.work.push_back(WorkItem { candidate, row: 0 });
                        }
                    }
                }
            }
            Phase::Search => match self.work.pop_front() {
                Some(item) => {
                    self.stats.nodes_visited += 1;
                    let successors =
                        search::expand(self.solver, item, &mut self.solutions, &mut self.stats);
                    self.work.push_front_all(successors);
                }
                None => {
                    self.stats.time_spent_micros = self.started.elapsed().as_micros() as u64;
                    let outcome = SolveOutcome {
                        solutions: std::mem::take(&mut self.solutions),
                        iterations: self.initial_rounds,
                    };
                    debug!(
                        solutions = outcome.solutions.len(),
                        iterations = outcome.iterations,
                        "worklist drained"
                    );
                    self.phase = Phase::Done(outcome);
                }
            },
            Phase::Done(_) => {}
        }
    }

    /// The best-known partial grid, when progress reporting is enabled:
    /// the propagating candidate's grid, or the grid of the work item the
    /// search will process next.
    fn progress_snapshot(&self) -> Option<Vec<Line>> {
        if !self.solver.config().show_progress {
            return None;
        }
        match &self.phase {
            Phase::Propagate(candidate) => Some(candidate.grid.rows().to_vec()),
            Phase::Search => self.work.front().map(|item| item.candidate.grid.rows().to_vec()),
            Phase::Done(_) => None,
        }
    }
}
