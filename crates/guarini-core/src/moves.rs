//! Knight move geometry and the move generator.

use tinyvec::ArrayVec;

use crate::{Board, Cell, Square, SquareSet};

/// The 8 knight offsets as (row delta, column delta) pairs.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Squares reachable by one knight step from each square, indexed by origin.
///
/// Computed at compile time from [`KNIGHT_OFFSETS`] restricted to the 3×3
/// grid. The center square has no destinations; every outer square has
/// exactly two, which chains the 8 outer squares into a single cycle.
///
/// # Examples
///
/// ```
/// use guarini_core::{KNIGHT_DESTINATIONS, Square};
///
/// // No knight move enters or leaves the center.
/// assert!(KNIGHT_DESTINATIONS[4].is_empty());
/// assert_eq!(KNIGHT_DESTINATIONS[0].len(), 2);
/// assert!(KNIGHT_DESTINATIONS[0].contains(Square::new(5)));
/// assert!(KNIGHT_DESTINATIONS[0].contains(Square::new(7)));
/// ```
pub const KNIGHT_DESTINATIONS: [SquareSet; Square::COUNT] = {
    let mut table = [SquareSet::EMPTY; Square::COUNT];
    let mut origin = 0;
    while origin < Square::COUNT {
        #[expect(clippy::cast_possible_truncation)]
        let (row, column) = ((origin / 3) as i8, (origin % 3) as i8);
        let mut k = 0;
        while k < KNIGHT_OFFSETS.len() {
            let (dr, dc) = KNIGHT_OFFSETS[k];
            let (r, c) = (row + dr, column + dc);
            if 0 <= r && r < 3 && 0 <= c && c < 3 {
                #[expect(clippy::cast_sign_loss)]
                let destination = Square::from_coords(r as u8, c as u8);
                table[origin] = table[origin].with(destination);
            }
            k += 1;
        }
        origin += 1;
    }
    table
};

/// Hard upper bound on the number of legal moves from any board: there are
/// at most 16 ordered knight-adjacent (origin, destination) square pairs.
pub const MAX_MOVES: usize = 16;

/// The successor boards produced by [`successors`].
pub type Moves = ArrayVec<[Board; MAX_MOVES]>;

/// Returns every board reachable from `board` by moving exactly one piece
/// one knight step onto an empty square.
///
/// The output order is deterministic: origin square ascending, then
/// destination square ascending. The input board is never among the
/// successors, and every successor holds the same multiset of pieces as the
/// input. Pure function; the input is not modified.
///
/// # Examples
///
/// ```
/// use guarini_core::{Board, successors};
///
/// let moves = successors(&Board::INITIAL);
/// assert_eq!(moves.len(), 8);
/// assert!(moves.iter().all(|m| *m != Board::INITIAL));
/// ```
#[must_use]
pub fn successors(board: &Board) -> Moves {
    let mut moves = Moves::new();
    for origin in Square::all() {
        if !board[origin].is_piece() {
            continue;
        }
        for destination in KNIGHT_DESTINATIONS[usize::from(origin.index())] {
            if board[destination] == Cell::Empty {
                moves.push(board.with_move(origin, destination));
            }
        }
    }
    moves
}
