//! The common-mark constraint propagation loop.

use tracing::{debug, trace};

use crate::solver::{
    arrangement::{common_marks, ArrangementSet},
    candidate::Candidate,
    grid::{Cell, Line},
};

/// Which family of lines a reduction targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// True when an arrangement disagrees with any already-known cell of the
/// line.
fn conflicts(arrangement: &Line, line: &[Cell]) -> bool {
    line.iter()
        .zip(arrangement)
        .any(|(&known, &cell)| known != Cell::Unknown && known != cell)
}

/// Reduces one line: filters its arrangement set against the known cells,
/// refreshes the common-mark cache if the set shrank (or no cache exists
/// yet), and writes the marks into the grid. Returns whether any cell
/// changed.
///
/// An emptied arrangement set marks the whole candidate `cannot_match`;
/// the caller must stop reducing this candidate.
pub fn reduce_line(candidate: &mut Candidate, axis: Axis, index: usize) -> bool {
    let Candidate {
        grid,
        row_arrangements,
        col_arrangements,
        row_marks_cache,
        col_marks_cache,
        cannot_match,
        ..
    } = candidate;

    let line: Line = match axis {
        Axis::Row => grid.row(index).to_vec(),
        Axis::Column => grid.col(index).to_vec(),
    };
    let (set, cache): (&mut ArrangementSet, &mut Option<Line>) = match axis {
        Axis::Row => (&mut row_arrangements[index], &mut row_marks_cache[index]),
        Axis::Column => (&mut col_arrangements[index], &mut col_marks_cache[index]),
    };

    let mut shrank = false;
    if line.iter().any(|&c| c != Cell::Unknown) {
        let before = set.len();
        let filtered: ArrangementSet = set.iter().filter(|a| !conflicts(a, &line)).cloned().collect();
        if filtered.len() < before {
            trace!(?axis, index, before, after = filtered.len(), "arrangement set shrank");
            *set = filtered;
            shrank = true;
        }
        if set.is_empty() {
            *cannot_match = true;
            return false;
        }
    }

    if shrank || cache.is_none() {
        *cache = common_marks(set);
    }
    let Some(marks) = cache.as_ref() else {
        *cannot_match = true;
        return false;
    };

    let mut changed = false;
    for (i, &mark) in marks.iter().enumerate() {
        if mark == Cell::Unknown {
            continue;
        }
        let (row, col) = match axis {
            Axis::Row => (index, i),
            Axis::Column => (i, index),
        };
        if grid.get(row, col) != mark {
            grid.set(row, col, mark);
            changed = true;
        }
    }
    changed
}

/// One propagation round: every column, then every row unless a
/// contradiction was found. Returns whether the round was productive.
pub fn run_round(candidate: &mut Candidate) -> bool {
    candidate.iterations += 1;
    let mut changed = false;

    for col in 0..candidate.grid.col_count() {
        changed |= reduce_line(candidate, Axis::Column, col);
        if candidate.cannot_match {
            return changed;
        }
    }
    for row in 0..candidate.grid.row_count() {
        changed |= reduce_line(candidate, Axis::Row, row);
        if candidate.cannot_match {
            return changed;
        }
    }
    changed
}

/// Runs rounds until a round changes nothing (fixpoint), a contradiction is
/// raised, or `max_rounds` rounds have executed.
pub fn propagate(candidate: &mut Candidate, max_rounds: Option<usize>) {
    let mut rounds = 0;
    while !candidate.cannot_match {
        if max_rounds.is_some_and(|limit| rounds == limit) {
            break;
        }
        let changed = run_round(candidate);
        rounds += 1;
        debug!(round = candidate.iterations, changed, "propagation round");
        if !changed {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::hint::Hint;

    fn candidate(rows: &[&[usize]], cols: &[&[usize]]) -> Candidate {
        let rows: Vec<Hint> = rows.iter().map(|r| Hint::new(r.to_vec())).collect();
        let cols: Vec<Hint> = cols.iter().map(|c| Hint::new(c.to_vec())).collect();
        let mut candidate = Candidate::new(&rows, &cols);
        candidate.seed_from_row_marks();
        candidate
    }

    #[test]
    fn a_forced_line_is_solved_without_search() {
        let mut c = candidate(&[&[3]], &[&[1], &[1], &[1]]);
        propagate(&mut c, None);

        assert!(!c.cannot_match);
        assert_eq!(c.grid.row(0), &[Cell::Filled; 3]);
        assert!(c.grid.is_complete());
    }

    #[test]
    fn filtering_narrows_sets_against_known_cells() {
        // Column hints force the first row's single filled cell to the left.
        let mut c = candidate(&[&[1], &[1]], &[&[2], &[0]]);
        propagate(&mut c, None);

        assert!(!c.cannot_match);
        assert_eq!(c.grid.row(0), &[Cell::Filled, Cell::Empty]);
        assert_eq!(c.grid.row(1), &[Cell::Filled, Cell::Empty]);
        assert_eq!(c.row_arrangements[0].len(), 1);
    }

    #[test]
    fn contradictory_hints_raise_cannot_match() {
        // The row demands all three cells filled; the middle column demands
        // its only cell empty.
        let mut c = candidate(&[&[3]], &[&[1], &[0], &[1]]);
        propagate(&mut c, None);

        assert!(c.cannot_match);
    }

    #[test]
    fn propagation_is_idempotent_at_fixpoint() {
        let mut c = candidate(&[&[3]], &[&[1], &[1], &[1]]);
        propagate(&mut c, None);
        let grid_at_fixpoint = c.grid.clone();
        let rounds_at_fixpoint = c.iterations;

        propagate(&mut c, None);
        assert_eq!(c.grid, grid_at_fixpoint);
        assert!(c.iterations <= rounds_at_fixpoint + 1);
    }

    #[test]
    fn round_budget_bounds_the_loop() {
        // This puzzle needs a productive round plus the unproductive round
        // that detects the fixpoint.
        let mut unbounded = candidate(&[&[1], &[0]], &[&[1], &[0]]);
        propagate(&mut unbounded, None);
        assert_eq!(unbounded.iterations, 2);

        let mut bounded = candidate(&[&[1], &[0]], &[&[1], &[0]]);
        propagate(&mut bounded, Some(1));
        assert_eq!(bounded.iterations, 1);
    }
}
