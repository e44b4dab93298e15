//! Contents of a single board cell.

use std::fmt::{self, Display};

/// The contents of one cell of the 3×3 board.
///
/// Every cell is either empty or holds a knight of one of the two colors.
/// The fixed symbol table used throughout the tool maps `Empty` to `·`,
/// `Black` to `♞` and `White` to `♘`.
///
/// # Examples
///
/// ```
/// use guarini_core::Cell;
///
/// assert_eq!(Cell::Black.symbol(), '♞');
/// assert_eq!(Cell::from_symbol('.'), Some(Cell::Empty));
/// assert!(Cell::White.is_piece());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// An empty cell.
    #[default]
    Empty,
    /// A knight of the first color.
    Black,
    /// A knight of the second color.
    White,
}

impl Cell {
    /// Array containing all cell values.
    pub const ALL: [Self; 3] = [Self::Empty, Self::Black, Self::White];

    /// Returns `true` if this cell holds a knight of either color.
    #[must_use]
    pub const fn is_piece(self) -> bool {
        !matches!(self, Self::Empty)
    }

    /// Returns the display symbol for this cell value.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '·',
            Self::Black => '♞',
            Self::White => '♘',
        }
    }

    /// Parses a cell value from its display symbol.
    ///
    /// ASCII spellings are accepted alongside the Unicode glyphs: `.` for an
    /// empty cell, `n` for a black knight and `N` for a white one. Returns
    /// `None` for any other character.
    ///
    /// # Examples
    ///
    /// ```
    /// use guarini_core::Cell;
    ///
    /// assert_eq!(Cell::from_symbol('♞'), Some(Cell::Black));
    /// assert_eq!(Cell::from_symbol('N'), Some(Cell::White));
    /// assert_eq!(Cell::from_symbol('x'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '·' | '.' => Some(Self::Empty),
            '♞' | 'n' => Some(Self::Black),
            '♘' | 'N' => Some(Self::White),
            _ => None,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.symbol(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
    }

    #[test]
    fn test_ascii_spellings() {
        assert_eq!(Cell::from_symbol('.'), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol('n'), Some(Cell::Black));
        assert_eq!(Cell::from_symbol('N'), Some(Cell::White));
        assert_eq!(Cell::from_symbol('?'), None);
    }

    #[test]
    fn test_is_piece() {
        assert!(!Cell::Empty.is_piece());
        assert!(Cell::Black.is_piece());
        assert!(Cell::White.is_piece());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Cell::Empty), "·");
        assert_eq!(format!("{}", Cell::Black), "♞");
        assert_eq!(format!("{}", Cell::White), "♘");
    }
}
