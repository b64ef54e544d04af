//! Solve-time statistics and a table rendering for diagnostics.

use prettytable::{Cell, Row, Table};

/// Counters accumulated over one solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Propagation rounds across the initial fixpoint and every branch.
    pub propagation_rounds: u64,
    /// Search work items processed.
    pub nodes_visited: u64,
    /// Branches discarded by the partial-match test.
    pub branches_pruned: u64,
    /// Branch clones discarded because propagation found a contradiction.
    pub contradictions: u64,
    /// Full assignments that reached hint validation.
    pub leaves_checked: u64,
    pub solutions_found: u64,
    pub time_spent_micros: u64,
}

pub fn render_stats_table(stats: &SolveStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));

    let rows: [(&str, String); 7] = [
        ("Propagation rounds", stats.propagation_rounds.to_string()),
        ("Nodes visited", stats.nodes_visited.to_string()),
        ("Branches pruned", stats.branches_pruned.to_string()),
        ("Contradictions", stats.contradictions.to_string()),
        ("Leaves checked", stats.leaves_checked.to_string()),
        ("Solutions found", stats.solutions_found.to_string()),
        (
            "Total time (ms)",
            format!("{:.2}", stats.time_spent_micros as f64 / 1000.0),
        ),
    ];
    for (name, value) in rows {
        table.add_row(Row::new(vec![Cell::new(name), Cell::new(&value)]));
    }

    table.to_string()
}
