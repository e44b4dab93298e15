//! Full board configurations.

use std::{
    fmt::{self, Debug, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, Square};

/// A full assignment of [`Cell`] values to all 9 board squares.
///
/// A board is an immutable value: two boards with equal cell sequences are
/// the same state for graph purposes, which is why the type is `Copy` and
/// implements structural equality and hashing. Cells are stored row-major,
/// matching [`Square`] indexing.
///
/// The compact textual form used by [`Display`] and [`FromStr`] is the 9
/// cell symbols concatenated row-major, e.g. `♞·♞···♘·♘` for the starting
/// position (ASCII `n.n...N.N` parses to the same board).
///
/// # Examples
///
/// ```
/// use guarini_core::{Board, Cell, Square};
///
/// let board: Board = "n.n...N.N".parse()?;
/// assert_eq!(board, Board::INITIAL);
/// assert_eq!(board[Square::new(0)], Cell::Black);
/// assert_eq!(board[Square::new(4)], Cell::Empty);
/// assert_eq!(board.to_string(), "♞·♞···♘·♘");
/// # Ok::<(), guarini_core::BoardError>(())
/// ```
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; Square::COUNT],
}

impl Board {
    /// The fixed starting position of the 1512 puzzle: black knights on the
    /// top corners, white knights on the bottom corners.
    pub const INITIAL: Self = Self::new([
        Cell::Black,
        Cell::Empty,
        Cell::Black,
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        Cell::White,
        Cell::Empty,
        Cell::White,
    ]);

    /// The fixed goal position: the two colors exchanged.
    pub const GOAL: Self = Self::new([
        Cell::White,
        Cell::Empty,
        Cell::White,
        Cell::Empty,
        Cell::Empty,
        Cell::Empty,
        Cell::Black,
        Cell::Empty,
        Cell::Black,
    ]);

    /// Creates a board from a fixed-size cell array, row-major.
    #[must_use]
    pub const fn new(cells: [Cell; Square::COUNT]) -> Self {
        Self { cells }
    }

    /// Creates a board from a cell slice, validating its shape.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidLength`] if the slice does not contain
    /// exactly 9 cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarini_core::{Board, BoardError, Cell};
    ///
    /// let board = Board::from_cells(&[Cell::Empty; 9])?;
    /// assert_eq!(board.count(Cell::Empty), 9);
    ///
    /// let err = Board::from_cells(&[Cell::Empty; 4]).unwrap_err();
    /// assert_eq!(err, BoardError::InvalidLength { len: 4 });
    /// # Ok::<(), BoardError>(())
    /// ```
    pub fn from_cells(cells: &[Cell]) -> Result<Self, BoardError> {
        let cells: [Cell; Square::COUNT] = cells
            .try_into()
            .map_err(|_| BoardError::InvalidLength { len: cells.len() })?;
        Ok(Self::new(cells))
    }

    /// Returns the cells of this board, row-major.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; Square::COUNT] {
        &self.cells
    }

    /// Returns the number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Returns a copy of this board with the contents of `origin` relocated
    /// to `destination`.
    ///
    /// Callers must ensure `origin` holds a piece and `destination` is empty;
    /// this is an internal step of move generation, not a legality check.
    pub(crate) fn with_move(&self, origin: Square, destination: Square) -> Self {
        debug_assert!(self[origin].is_piece());
        debug_assert!(!self[destination].is_piece());
        let mut cells = self.cells;
        cells[usize::from(destination.index())] = cells[usize::from(origin.index())];
        cells[usize::from(origin.index())] = Cell::Empty;
        Self::new(cells)
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, square: Square) -> &Cell {
        &self.cells[usize::from(square.index())]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            Display::fmt(cell, f)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({self})")
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; Square::COUNT];
        let mut len = 0;
        for symbol in s.chars() {
            let cell =
                Cell::from_symbol(symbol).ok_or(BoardError::InvalidSymbol { symbol })?;
            if len < cells.len() {
                cells[len] = cell;
            }
            len += 1;
        }
        if len != cells.len() {
            return Err(BoardError::InvalidLength { len });
        }
        Ok(Self::new(cells))
    }
}

/// Errors produced when constructing a board from external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The input did not contain exactly 9 cells.
    #[display("board must have exactly 9 cells, got {len}")]
    InvalidLength {
        /// Number of cells actually supplied.
        len: usize,
    },
    /// The input contained a character outside the symbol table.
    #[display("unknown cell symbol {symbol:?}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
    },
}
