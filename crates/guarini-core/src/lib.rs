//! Core data structures for the 1512 Guarini knight-swap puzzle.
//!
//! The puzzle places two black and two white knights on a 3×3 board and asks
//! for the shortest sequence of knight moves that exchanges the two colors.
//! This crate provides the board model and the move generator; the exhaustive
//! state-space search lives in `guarini-solver`.
//!
//! # Overview
//!
//! - [`cell`]: contents of a single board cell ([`Cell`])
//! - [`square`]: validated cell indices 0-8 with row/column mapping
//!   ([`Square`])
//! - [`square_set`]: compact sets of squares ([`SquareSet`])
//! - [`board`]: a full board configuration used as a graph key ([`Board`])
//! - [`moves`]: the precomputed knight-destination table and the move
//!   generator ([`successors`])
//!
//! # Examples
//!
//! ```
//! use guarini_core::{Board, successors};
//!
//! // The four corner knights of the starting position have two free
//! // destinations each.
//! let moves = successors(&Board::INITIAL);
//! assert_eq!(moves.len(), 8);
//! ```

pub mod board;
pub mod cell;
pub mod moves;
pub mod square;
pub mod square_set;

pub use self::{
    board::{Board, BoardError},
    cell::Cell,
    moves::{KNIGHT_DESTINATIONS, Moves, successors},
    square::Square,
    square_set::SquareSet,
};
