//! Shortest paths over the built state graph.

use std::collections::{HashMap, HashSet, VecDeque};

use guarini_core::Board;

use crate::{SolverError, StateGraph};

/// An ordered sequence of boards in which each consecutive pair is one legal
/// move, as returned by [`shortest_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    boards: Vec<Board>,
}

impl Path {
    /// Returns the boards of this path in order, source first.
    ///
    /// The slice is never empty: even a path from a board to itself contains
    /// that one board.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the number of moves in this path (one less than the number of
    /// boards).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.boards.len() - 1
    }

    /// Returns `true` if the pair `(from, to)` is one of this path's moves.
    #[must_use]
    pub fn contains_move(&self, from: &Board, to: &Board) -> bool {
        self.boards
            .windows(2)
            .any(|pair| pair[0] == *from && pair[1] == *to)
    }
}

/// Computes one shortest directed path from `source` to `target` in `graph`.
///
/// Breadth-first search with predecessor tracking; all edges count as one
/// move. When several paths of minimal length exist, which one is returned
/// is unspecified (callers may only rely on the length and on every
/// consecutive pair being a legal move). A path from a board to itself is
/// the single-element path with zero moves.
///
/// # Errors
///
/// Returns [`SolverError::NoPath`] if `source` or `target` is not a node of
/// `graph`, or if `target` cannot be reached from `source`.
///
/// # Examples
///
/// ```
/// use guarini_core::Board;
/// use guarini_solver::{StateGraph, shortest_path};
///
/// let graph = StateGraph::explore(Board::INITIAL)?;
/// let path = shortest_path(&graph, Board::INITIAL, Board::GOAL)?;
/// assert_eq!(path.move_count(), 16);
/// assert_eq!(path.boards()[0], Board::INITIAL);
/// assert_eq!(path.boards()[16], Board::GOAL);
/// # Ok::<(), guarini_solver::SolverError>(())
/// ```
pub fn shortest_path(
    graph: &StateGraph,
    source: Board,
    target: Board,
) -> Result<Path, SolverError> {
    let no_path = SolverError::NoPath { source, target };
    if !graph.contains(&source) || !graph.contains(&target) {
        return Err(no_path);
    }
    if source == target {
        return Ok(Path {
            boards: vec![source],
        });
    }

    let mut predecessor: HashMap<Board, Board> = HashMap::new();
    let mut visited: HashSet<Board> = HashSet::from([source]);
    let mut queue: VecDeque<Board> = VecDeque::from([source]);
    while let Some(board) = queue.pop_front() {
        for &next in graph.successors(&board) {
            if !visited.insert(next) {
                continue;
            }
            predecessor.insert(next, board);
            if next == target {
                return Ok(reconstruct(&predecessor, source, target));
            }
            queue.push_back(next);
        }
    }

    Err(no_path)
}

/// Walks the predecessor map back from `target` to `source`.
fn reconstruct(predecessor: &HashMap<Board, Board>, source: Board, target: Board) -> Path {
    let mut boards = vec![target];
    let mut current = target;
    while current != source {
        // Every visited board other than the source has a predecessor.
        current = predecessor[&current];
        boards.push(current);
    }
    boards.reverse();
    Path { boards }
}

#[cfg(test)]
mod tests {
    use guarini_core::successors;

    use super::*;

    fn graph() -> StateGraph {
        StateGraph::explore(Board::INITIAL).unwrap()
    }

    #[test]
    fn test_fixed_instance_optimum() {
        let graph = graph();
        let path = shortest_path(&graph, Board::INITIAL, Board::GOAL).unwrap();
        assert_eq!(path.move_count(), 16);
        assert_eq!(path.boards().len(), 17);
        assert_eq!(path.boards()[0], Board::INITIAL);
        assert_eq!(*path.boards().last().unwrap(), Board::GOAL);
    }

    #[test]
    fn test_every_step_is_legal() {
        let graph = graph();
        let path = shortest_path(&graph, Board::INITIAL, Board::GOAL).unwrap();
        for pair in path.boards().windows(2) {
            assert!(
                successors(&pair[0]).contains(&pair[1]),
                "{} -> {} is not a legal move",
                pair[0],
                pair[1]
            );
            assert!(path.contains_move(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn test_source_equals_target() {
        let graph = graph();
        let path = shortest_path(&graph, Board::INITIAL, Board::INITIAL).unwrap();
        assert_eq!(path.boards(), &[Board::INITIAL]);
        assert_eq!(path.move_count(), 0);
    }

    #[test]
    fn test_one_move_targets() {
        let graph = graph();
        for &next in graph.successors(&Board::INITIAL) {
            let path = shortest_path(&graph, Board::INITIAL, next).unwrap();
            assert_eq!(path.move_count(), 1);
            assert_eq!(path.boards(), &[Board::INITIAL, next]);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        // The edge relation is symmetric, so distance must be too.
        let graph = graph();
        let there = shortest_path(&graph, Board::INITIAL, Board::GOAL).unwrap();
        let back = shortest_path(&graph, Board::GOAL, Board::INITIAL).unwrap();
        assert_eq!(there.move_count(), back.move_count());
    }

    #[test]
    fn test_target_outside_graph_fails() {
        let graph = graph();

        // A board with a knight on the (unreachable) center square.
        let center: Board = "n.n.N.N..".parse().unwrap();
        let err = shortest_path(&graph, Board::INITIAL, center).unwrap_err();
        assert_eq!(
            err,
            SolverError::NoPath {
                source: Board::INITIAL,
                target: center,
            }
        );

        // A board on the ring whose cyclic piece order differs from the
        // start (colors alternate around the cycle): never reachable.
        let alternating: Board = "n.N...N.n".parse().unwrap();
        assert!(!graph.contains(&alternating));
        assert!(shortest_path(&graph, Board::INITIAL, alternating).is_err());
    }

    #[test]
    fn test_source_outside_graph_fails() {
        let graph = graph();
        let outside: Board = "....n....".parse().unwrap();
        let err = shortest_path(&graph, outside, Board::GOAL).unwrap_err();
        assert!(matches!(err, SolverError::NoPath { .. }));
    }
}
