//! Bundled sample puzzles, used by tests, benchmarks and the demo CLI.

use crate::solver::hint::PuzzleHints;

/// 1×3, single row fully filled. One solution.
pub fn single_row() -> PuzzleHints {
    PuzzleHints::new(vec![vec![3]], vec![vec![1], vec![1], vec![1]])
}

/// 2×2 with one filled cell per line. Ambiguous: the two diagonals.
pub fn diagonals() -> PuzzleHints {
    PuzzleHints::new(vec![vec![1], vec![1]], vec![vec![1], vec![1]])
}

/// 1×1 blank grid. One solution, the empty cell.
pub fn blank() -> PuzzleHints {
    PuzzleHints::new(vec![vec![0]], vec![vec![0]])
}

/// A row hint that cannot fit its line. Zero solutions.
pub fn infeasible() -> PuzzleHints {
    PuzzleHints::new(vec![vec![5]], vec![vec![1], vec![1], vec![1]])
}

/// A 9×9 heart. Uniquely solvable by propagation alone:
///
/// ```text
/// .##...##.
/// ####.####
/// #########
/// #########
/// #########
/// .#######.
/// ..#####..
/// ...###...
/// ....#....
/// ```
pub fn heart() -> PuzzleHints {
    PuzzleHints::new(
        vec![
            vec![2, 2],
            vec![4, 4],
            vec![9],
            vec![9],
            vec![9],
            vec![7],
            vec![5],
            vec![3],
            vec![1],
        ],
        vec![
            vec![4],
            vec![6],
            vec![7],
            vec![7],
            vec![7],
            vec![7],
            vec![7],
            vec![6],
            vec![4],
        ],
    )
}
