//! The mutable solver state explored by propagation and search.

use crate::solver::{
    arrangement::{arrangements, common_marks, ArrangementSet},
    grid::{Cell, Grid, Line},
    hint::Hint,
};

/// One candidate puzzle: the tri-state grid plus the surviving arrangement
/// sets and memoized common marks for every line.
///
/// A candidate is created once per solve and cloned at every search branch;
/// branches never share a candidate, so cloning is the only synchronization
/// the solver needs. The arrangement sets are persistent vectors, which
/// keeps those clones cheap. The caches belong to the candidate, never to
/// the process, since many candidates coexist during search.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub grid: Grid,
    pub row_arrangements: Vec<ArrangementSet>,
    pub col_arrangements: Vec<ArrangementSet>,
    pub(crate) row_marks_cache: Vec<Option<Line>>,
    pub(crate) col_marks_cache: Vec<Option<Line>>,
    /// Set when any line's arrangement set becomes empty; the candidate is
    /// then a dead branch and is discarded by its owner.
    pub cannot_match: bool,
    /// Propagation rounds performed on this candidate (diagnostic).
    pub iterations: u64,
}

impl Candidate {
    /// Generates the full arrangement sets for every line and an
    /// all-unknown grid.
    pub fn new(rows: &[Hint], cols: &[Hint]) -> Self {
        let row_arrangements = rows.iter().map(|h| arrangements(h, cols.len())).collect();
        let col_arrangements = cols.iter().map(|h| arrangements(h, rows.len())).collect();
        Self {
            grid: Grid::new(rows.len(), cols.len()),
            row_arrangements,
            col_arrangements,
            row_marks_cache: vec![None; rows.len()],
            col_marks_cache: vec![None; cols.len()],
            cannot_match: false,
            iterations: 0,
        }
    }

    /// Seeds the grid from each row's common marks before the first
    /// propagation round, and flags a contradiction if any line's hint
    /// admits no arrangement at all (infeasible hint).
    pub fn seed_from_row_marks(&mut self) {
        for row in 0..self.grid.row_count() {
            let Some(marks) = common_marks(&self.row_arrangements[row]) else {
                self.cannot_match = true;
                return;
            };
            for (col, &mark) in marks.iter().enumerate() {
                if mark != Cell::Unknown {
                    self.grid.set(row, col, mark);
                }
            }
            self.row_marks_cache[row] = Some(marks);
        }
        if self.col_arrangements.iter().any(ArrangementSet::is_empty) {
            self.cannot_match = true;
        }
    }
}
