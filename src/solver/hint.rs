//! Run-length hints and the hint side of the puzzle exchange format.

use serde::{Deserialize, Serialize};

use crate::solver::grid::Cell;

/// An ordered sequence of run lengths describing the filled groups of one
/// line, left to right (rows) or top to bottom (columns).
///
/// Hints are normalized at construction: zero-length runs are stripped, so
/// `[0]` and `[]` both denote a blank line and compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct Hint(Vec<usize>);

impl Hint {
    pub fn new(runs: Vec<usize>) -> Self {
        Self(runs.into_iter().filter(|&r| r != 0).collect())
    }

    /// The normalized run lengths. Empty for a blank line.
    pub fn runs(&self) -> &[usize] {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of filled cells the hint demands.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// The longest single run, or zero for a blank line.
    pub fn largest(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    /// Minimum line length able to hold the hint: every run plus one
    /// separating cell between adjacent runs.
    pub fn min_span(&self) -> usize {
        self.total() + self.0.len().saturating_sub(1)
    }

    /// Whether a recomputed run sequence matches this hint exactly.
    pub fn matches(&self, computed: &[usize]) -> bool {
        self.0 == computed
    }
}

impl From<Vec<usize>> for Hint {
    fn from(runs: Vec<usize>) -> Self {
        Self::new(runs)
    }
}

impl From<Hint> for Vec<usize> {
    fn from(hint: Hint) -> Self {
        hint.0
    }
}

/// Computes the run lengths of filled cells in a line.
///
/// `Unknown` breaks a run just as `Empty` does, which makes the result exact
/// for fully determined lines and a lower bound on committed runs for
/// partially determined ones.
pub fn line_runs(cells: &[Cell]) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut current = 0;
    for cell in cells {
        if *cell == Cell::Filled {
            current += 1;
        } else if current > 0 {
            runs.push(current);
            current = 0;
        }
    }
    if current > 0 {
        runs.push(current);
    }
    runs
}

/// The two hint tables a puzzle-providing collaborator hands to the solver.
///
/// Grid dimensions are implied: `rows.len()` × `cols.len()`, with each row
/// of length `cols.len()` and each column of length `rows.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleHints {
    pub rows: Vec<Hint>,
    pub cols: Vec<Hint>,
}

impl PuzzleHints {
    pub fn new(rows: Vec<Vec<usize>>, cols: Vec<Vec<usize>>) -> Self {
        Self {
            rows: rows.into_iter().map(Hint::new).collect(),
            cols: cols.into_iter().map(Hint::new).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_hint_forms_are_equivalent() {
        assert_eq!(Hint::new(vec![]), Hint::new(vec![0]));
        assert!(Hint::new(vec![0]).is_blank());
        assert_eq!(Hint::new(vec![0]).min_span(), 0);
    }

    #[test]
    fn min_span_counts_runs_and_gaps() {
        assert_eq!(Hint::new(vec![3]).min_span(), 3);
        assert_eq!(Hint::new(vec![1, 2]).min_span(), 4);
        assert_eq!(Hint::new(vec![2, 2, 2]).min_span(), 8);
    }

    #[test]
    fn line_runs_splits_on_empty_and_unknown() {
        use Cell::*;
        assert_eq!(line_runs(&[Filled, Filled, Empty, Filled]), vec![2, 1]);
        assert_eq!(line_runs(&[Empty, Empty, Empty]), Vec::<usize>::new());
        assert_eq!(line_runs(&[Filled, Unknown, Filled]), vec![1, 1]);
        assert_eq!(line_runs(&[]), Vec::<usize>::new());
    }

    #[test]
    fn matches_compares_normalized_runs() {
        assert!(Hint::new(vec![0]).matches(&[]));
        assert!(Hint::new(vec![1, 2]).matches(&[1, 2]));
        assert!(!Hint::new(vec![1, 2]).matches(&[2, 1]));
    }

    #[test]
    fn hints_round_trip_through_the_exchange_format() {
        let hints = PuzzleHints::new(vec![vec![3], vec![0]], vec![vec![1], vec![1], vec![1]]);
        let json = serde_json::to_string(&hints).unwrap();
        assert_eq!(json, r#"{"rows":[[3],[]],"cols":[[1],[1],[1]]}"#);
        let parsed: PuzzleHints = serde_json::from_str(r#"{"rows":[[3],[0]],"cols":[[1],[1],[1]]}"#).unwrap();
        assert_eq!(parsed, hints);
    }
}
