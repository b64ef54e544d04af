//! The backtracking search engine: work-item expansion, partial-match
//! pruning, and leaf validation.

use tracing::{debug, trace};

use crate::solver::{
    engine::Solver,
    grid::{Cell, Grid, Line},
    hint::{line_runs, Hint},
    propagation::propagate,
    stats::SolveStats,
    work_list::WorkItem,
};

/// Propagation bound per branch decision; keeps one expansion a small unit
/// of work for the scheduler.
const MAX_BRANCH_ROUNDS: usize = 8;

/// Validates a full assignment by recomputing every row's and column's run
/// sequence from the grid and comparing against the original hints.
///
/// Propagation alone does not guarantee a generated leaf is valid: a row can
/// reach "fully determined" via common marks and still, combined with other
/// rows, violate a column hint.
pub fn has_correct_hints(rows: &[Hint], cols: &[Hint], grid: &Grid) -> bool {
    for (r, hint) in rows.iter().enumerate() {
        if !hint.matches(&line_runs(grid.row(r))) {
            return false;
        }
    }
    for (c, hint) in cols.iter().enumerate() {
        if !hint.matches(&line_runs(grid.col(c))) {
            return false;
        }
    }
    true
}

/// Checks that a partially determined column can still satisfy its hint.
///
/// The determined prefix runs up to the first unknown cell; the tests are
/// conservative in the sense that a failing column proves the branch dead,
/// while a passing column proves nothing.
pub fn partial_match(column: &[Cell], hint: &Hint, hint_total: usize, total_space: usize) -> bool {
    let determined = column
        .iter()
        .position(|&c| c == Cell::Unknown)
        .unwrap_or(column.len());
    let completed = &column[..determined];

    let computed = line_runs(completed);
    let real = hint.runs();
    if computed.len() > real.len() {
        return false;
    }

    // The largest run committed anywhere in the column, even past the first
    // unknown cell, can only grow further.
    let committed_largest = line_runs(column).into_iter().max().unwrap_or(0);
    if committed_largest > hint.largest() {
        return false;
    }

    let filled = column.iter().filter(|&&c| c == Cell::Filled).count();
    if filled > hint_total {
        return false;
    }

    // Run-by-run: no computed run may exceed its counterpart.
    for (i, &run) in computed.iter().enumerate() {
        if run > real[i] {
            return false;
        }
    }

    // A closed final run (one already followed by a gap) can no longer grow,
    // so it must have reached its full target length.
    let open_run = !computed.is_empty() && completed.last() == Some(&Cell::Filled);
    if !computed.is_empty() && !open_run {
        let last = computed.len() - 1;
        if computed[last] < real[last] {
            return false;
        }
    }

    // Feasibility: the remaining runs plus their mandatory gaps must fit in
    // the undetermined suffix. An open run still owes the separator after it,
    // hence the extra run counted.
    let remaining_space = total_space - completed.len();
    let remaining_runs = real.len() - computed.len() + usize::from(open_run);
    let spaces_for_runs = hint_total - computed.iter().sum::<usize>();
    let spaces_between_runs = remaining_runs.saturating_sub(1);
    spaces_for_runs + spaces_between_runs <= remaining_space
}

/// Processes one work item, appending any accepted solution and returning
/// the successor items to explore.
pub fn expand(
    solver: &Solver,
    item: WorkItem,
    solutions: &mut Vec<Vec<Line>>,
    stats: &mut SolveStats,
) -> Vec<WorkItem> {
    let WorkItem { candidate, row } = item;
    let row_count = solver.rows().len();

    if row == row_count {
        stats.leaves_checked += 1;
        if has_correct_hints(solver.rows(), solver.cols(), &candidate.grid) {
            stats.solutions_found += 1;
            debug!(total = solutions.len() + 1, "solution accepted");
            solutions.push(candidate.grid.rows().to_vec());
        }
        return Vec::new();
    }

    // Skip branches of the tree where any column is already incorrect.
    if row > 1 {
        for (col, hint) in solver.cols().iter().enumerate() {
            if !partial_match(candidate.grid.col(col), hint, solver.col_totals()[col], row_count) {
                stats.branches_pruned += 1;
                trace!(row, col, "branch pruned by partial match");
                return Vec::new();
            }
        }
    }

    if candidate.grid.row_is_complete(row) {
        return vec![WorkItem {
            candidate,
            row: row + 1,
        }];
    }

    let arrangements = candidate.row_arrangements[row].clone();
    let mut successors = Vec::with_capacity(arrangements.len());
    for arrangement in arrangements.iter() {
        let mut branch = candidate.clone();
        branch.grid.set_row(row, arrangement);
        propagate(&mut branch, Some(MAX_BRANCH_ROUNDS));
        stats.propagation_rounds += branch.iterations - candidate.iterations;
        if branch.cannot_match {
            stats.contradictions += 1;
            continue;
        }
        successors.push(WorkItem {
            candidate: branch,
            row: row + 1,
        });
    }
    successors
}
