//! Nonosolve solves nonogram ("picross") puzzles: given per-row and
//! per-column run-length hints, it finds every grid filling consistent with
//! both hint tables.
//!
//! The solver works in three layers:
//!
//! - **Arrangement generation**: every valid filling of each line is
//!   enumerated up front ([`solver::arrangement`]).
//! - **Common-mark propagation**: cells every surviving arrangement agrees
//!   on are written into the grid, and arrangement sets are filtered against
//!   known cells, alternating rows and columns to a fixpoint
//!   ([`solver::propagation`]).
//! - **Backtracking search**: rows still ambiguous after propagation are
//!   branched on, pruned column-by-column with a partial-match test, and
//!   every accepted leaf is re-validated against the original hints
//!   ([`solver::search`]).
//!
//! Long solves are cooperatively scheduled: [`solver::scheduler::SolveTask`]
//! runs in bounded time slices and can report partial grids between slices.
//!
//! # Example
//!
//! ```
//! use nonosolve::solver::engine::Solver;
//! use nonosolve::solver::grid::Cell;
//! use nonosolve::solver::hint::PuzzleHints;
//!
//! // A 1x3 puzzle: one row of three filled cells.
//! let hints = PuzzleHints::new(vec![vec![3]], vec![vec![1], vec![1], vec![1]]);
//! let solver = Solver::new(hints).unwrap();
//! let (outcome, _stats) = solver.solve();
//!
//! assert_eq!(outcome.solutions.len(), 1);
//! assert_eq!(outcome.solutions[0][0], vec![Cell::Filled; 3]);
//! ```
pub mod error;
pub mod puzzles;
pub mod solver;
