//! CSV export of the solution path.

use std::fmt::Write as _;

use guarini_solver::Path;

/// Serializes the path as comma-delimited `(step, state)` rows with a header
/// line. States use the compact 9-symbol board form.
pub fn to_csv(path: &Path) -> String {
    let mut out = String::from("step,state\n");
    for (step, board) in path.boards().iter().enumerate() {
        // Infallible for String.
        let _ = writeln!(out, "{step},{board}");
    }
    out
}

#[cfg(test)]
mod tests {
    use guarini_core::Board;
    use guarini_solver::{StateGraph, shortest_path};

    use super::*;

    #[test]
    fn test_csv_shape() {
        let graph = StateGraph::explore(Board::INITIAL).unwrap();
        let path = shortest_path(&graph, Board::INITIAL, Board::GOAL).unwrap();
        let csv = to_csv(&path);

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 18); // header + 17 boards
        assert_eq!(lines[0], "step,state");
        assert_eq!(lines[1], "0,♞·♞···♘·♘");
        assert_eq!(lines[17], "16,♘·♘···♞·♞");
    }
}
