//! Breadth-first construction of the reachable state graph.

use std::collections::{HashMap, HashSet, VecDeque};

use guarini_core::{Board, successors};

use crate::SolverError;

/// Defensive cap on the number of discovered boards.
///
/// The 3×3 puzzle admits at most 9!/(2!·2!·5!) = 756 distinct boards, so a
/// correct move table can never come close to this limit. Exceeding it aborts
/// exploration with [`SolverError::StateLimitExceeded`] instead of looping.
pub const STATE_LIMIT: usize = 4096;

/// The directed graph of every board reachable from a fixed start board.
///
/// Nodes are boards (keyed by value, so boards discovered via different move
/// sequences collapse into one node); an edge `u → v` exists iff `v` is a
/// one-move successor of `u`. The graph is built once by [`explore`] and is
/// immutable afterwards.
///
/// [`explore`]: StateGraph::explore
///
/// # Examples
///
/// ```
/// use guarini_core::Board;
/// use guarini_solver::StateGraph;
///
/// let graph = StateGraph::explore(Board::INITIAL)?;
/// assert!(graph.contains(&Board::GOAL));
/// assert_eq!(graph.node_count(), 280);
/// assert_eq!(graph.edge_count(), 1280);
/// # Ok::<(), guarini_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StateGraph {
    start: Board,
    /// Boards in discovery order; drives deterministic edge enumeration.
    nodes: Vec<Board>,
    adjacency: HashMap<Board, Vec<Board>>,
    edge_count: usize,
}

impl StateGraph {
    /// Builds the full reachable state graph from `start`.
    ///
    /// Breadth-first traversal: a FIFO queue seeded with `start` and a
    /// visited set keyed by board value. Every generated edge is recorded,
    /// including edges leading back to already-visited boards; each board is
    /// enqueued exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::StateLimitExceeded`] if more than
    /// [`STATE_LIMIT`] boards are discovered, which can only happen with a
    /// malformed move table.
    pub fn explore(start: Board) -> Result<Self, SolverError> {
        let mut nodes = vec![start];
        let mut adjacency = HashMap::new();
        let mut edge_count = 0;

        let mut visited: HashSet<Board> = HashSet::from([start]);
        let mut queue: VecDeque<Board> = VecDeque::from([start]);
        while let Some(board) = queue.pop_front() {
            let moves = successors(&board).to_vec();
            for &next in &moves {
                if visited.insert(next) {
                    if nodes.len() >= STATE_LIMIT {
                        return Err(SolverError::StateLimitExceeded { limit: STATE_LIMIT });
                    }
                    nodes.push(next);
                    queue.push_back(next);
                }
            }
            edge_count += moves.len();
            adjacency.insert(board, moves);
        }

        Ok(Self {
            start,
            nodes,
            adjacency,
            edge_count,
        })
    }

    /// Returns the start board this graph was explored from.
    #[must_use]
    pub const fn start(&self) -> Board {
        self.start
    }

    /// Returns the number of reachable boards.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of directed edges (legal one-move transitions).
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if `board` is reachable from the start board.
    #[must_use]
    pub fn contains(&self, board: &Board) -> bool {
        self.adjacency.contains_key(board)
    }

    /// Returns the one-move successors of `board`, or an empty slice if
    /// `board` is not a node of this graph.
    #[must_use]
    pub fn successors(&self, board: &Board) -> &[Board] {
        self.adjacency.get(board).map_or(&[], Vec::as_slice)
    }

    /// Returns an iterator over all boards in discovery order, starting with
    /// the start board.
    pub fn nodes(&self) -> impl Iterator<Item = Board> + '_ {
        self.nodes.iter().copied()
    }

    /// Returns an iterator over all directed edges as `(from, to)` pairs, in
    /// discovery order of the origin board.
    pub fn edges(&self) -> impl Iterator<Item = (Board, Board)> + '_ {
        self.nodes
            .iter()
            .flat_map(|&from| self.successors(&from).iter().map(move |&to| (from, to)))
    }
}
