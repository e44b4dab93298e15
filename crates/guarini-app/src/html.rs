//! Interactive HTML export of the full state graph.
//!
//! Produces a self-contained page rendering the graph with vis-network:
//! every reachable board becomes a node labeled with its 3-line text form,
//! colored by role, and every transition becomes a directed edge, with the
//! computed shortest path highlighted.

use std::{collections::HashMap, fmt::Write as _};

use guarini_core::Board;
use guarini_solver::{Path, StateGraph};

use crate::render;

const START_COLOR: &str = "#ff7f0e";
const GOAL_COLOR: &str = "#2ca02c";
const NODE_COLOR: &str = "#1f77b4";
const PATH_EDGE_COLOR: &str = "red";
const EDGE_COLOR: &str = "#cccccc";

/// Serializes `graph` as an interactive HTML page with the boards of `path`
/// highlighted.
pub fn to_html(graph: &StateGraph, path: &Path) -> String {
    let ids: HashMap<Board, usize> = graph.nodes().enumerate().map(|(id, b)| (b, id)).collect();
    let goal = path.boards().last().copied();

    let mut nodes = String::new();
    for (id, board) in graph.nodes().enumerate() {
        let color = if board == graph.start() {
            START_COLOR
        } else if Some(board) == goal {
            GOAL_COLOR
        } else {
            NODE_COLOR
        };
        let label = render::board_lines(&board).join("\\n");
        let _ = writeln!(
            nodes,
            "    {{ id: {id}, label: \"{label}\", color: \"{color}\" }},"
        );
    }

    let mut edges = String::new();
    for (from, to) in graph.edges() {
        let (color, width) = if path.contains_move(&from, &to) {
            (PATH_EDGE_COLOR, 4)
        } else {
            (EDGE_COLOR, 1)
        };
        let _ = writeln!(
            edges,
            "    {{ from: {}, to: {}, color: \"{color}\", width: {width} }},",
            ids[&from], ids[&to]
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Guarini 3×3 state space</title>
<script src="https://unpkg.com/vis-network/standalone/umd/vis-network.min.js"></script>
<style>#network {{ width: 100%; height: 750px; }}</style>
</head>
<body>
<div id="network"></div>
<script>
  const nodes = new vis.DataSet([
{nodes}  ]);
  const edges = new vis.DataSet([
{edges}  ]);
  const container = document.getElementById("network");
  new vis.Network(container, {{ nodes, edges }}, {{
    nodes: {{ shape: "box", font: {{ face: "monospace" }} }},
    edges: {{ arrows: "to" }},
  }});
</script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use guarini_solver::shortest_path;

    use super::*;

    #[test]
    fn test_html_contains_all_nodes_and_edges() {
        let graph = StateGraph::explore(Board::INITIAL).unwrap();
        let path = shortest_path(&graph, Board::INITIAL, Board::GOAL).unwrap();
        let html = to_html(&graph, &path);

        assert_eq!(html.matches("id:").count(), graph.node_count());
        assert_eq!(html.matches("from:").count(), graph.edge_count());
        // The 16 moves of the shortest path are highlighted.
        assert_eq!(html.matches(PATH_EDGE_COLOR).count(), 16);
        // Exactly one start node and one goal node.
        assert_eq!(html.matches(START_COLOR).count(), 1);
        assert_eq!(html.matches(GOAL_COLOR).count(), 1);
    }
}
