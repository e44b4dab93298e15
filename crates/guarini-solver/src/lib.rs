//! Exhaustive state-space search for the Guarini knight-swap puzzle.
//!
//! Built on the move generator from `guarini-core`, this crate provides the
//! two search operations of the tool:
//!
//! 1. [`StateGraph::explore`] — breadth-first construction of the directed
//!    graph of every board reachable from a start board, with one edge per
//!    legal move.
//! 2. [`shortest_path`] — one minimum-move path between two boards of the
//!    built graph.
//!
//! # Examples
//!
//! ```
//! use guarini_core::Board;
//! use guarini_solver::{StateGraph, shortest_path};
//!
//! let graph = StateGraph::explore(Board::INITIAL)?;
//! let path = shortest_path(&graph, Board::INITIAL, Board::GOAL)?;
//! assert_eq!(path.move_count(), 16);
//! # Ok::<(), guarini_solver::SolverError>(())
//! ```

use guarini_core::Board;

pub mod graph;
pub mod path;

pub use self::{
    graph::{STATE_LIMIT, StateGraph},
    path::{Path, shortest_path},
};

/// Errors produced by the state-space search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// Exploration discovered more boards than the combinatorial ceiling of
    /// the 3×3 puzzle allows, which means the move table is malformed.
    #[display("state space exceeded {limit} boards; the move table is malformed")]
    StateLimitExceeded {
        /// The exceeded limit, [`STATE_LIMIT`].
        limit: usize,
    },
    /// The target board cannot be reached from the source board.
    #[display("no path from {source} to {target}")]
    NoPath {
        /// The path source. Not an error cause, despite the field name.
        #[error(not(source))]
        source: Board,
        /// The unreachable target.
        target: Board,
    },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_error_display_and_source() {
        let err = SolverError::NoPath {
            source: Board::INITIAL,
            target: Board::GOAL,
        };
        assert_eq!(err.to_string(), "no path from ♞·♞···♘·♘ to ♘·♘···♞·♞");
        // The `source` field is a board, not an underlying error cause.
        assert!(err.source().is_none());

        let err = SolverError::StateLimitExceeded { limit: STATE_LIMIT };
        assert_eq!(
            err.to_string(),
            "state space exceeded 4096 boards; the move table is malformed"
        );
        assert!(err.source().is_none());
    }
}
