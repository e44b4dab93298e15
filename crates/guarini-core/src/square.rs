//! Validated cell indices for the 3×3 board.

/// A cell index in the range 0-8, row-major over the 3×3 board.
///
/// The index maps bijectively to a (row, column) pair via
/// `row = index / 3` and `column = index % 3`. The type ensures at
/// construction time that the index is within the valid range.
///
/// # Examples
///
/// ```
/// use guarini_core::Square;
///
/// let square = Square::new(5);
/// assert_eq!(square.row(), 1);
/// assert_eq!(square.column(), 2);
/// assert_eq!(Square::from_coords(1, 2), square);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    index: u8,
}

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 9;

    /// Creates a new square from a raw index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-8.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 9, "square index must be 0-8");
        Self { index }
    }

    /// Creates a square from board coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is not in the range 0-2.
    #[must_use]
    pub const fn from_coords(row: u8, column: u8) -> Self {
        assert!(row < 3 && column < 3, "coordinates must be 0-2");
        Self::new(3 * row + column)
    }

    /// Returns the underlying index value (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the row of this square (0-2).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / 3
    }

    /// Returns the column of this square (0-2).
    #[must_use]
    pub const fn column(self) -> u8 {
        self.index % 3
    }

    /// Returns an iterator over all 9 squares in index order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use guarini_core::Square;
    /// let squares: Vec<_> = Square::all().collect();
    /// assert_eq!(squares.len(), 9);
    /// assert_eq!(squares[0].index(), 0);
    /// assert_eq!(squares[8].index(), 8);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).map(Square::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_round_trip() {
        for square in Square::all() {
            assert_eq!(Square::from_coords(square.row(), square.column()), square);
        }
    }

    #[test]
    fn test_row_major_layout() {
        assert_eq!(Square::new(0).row(), 0);
        assert_eq!(Square::new(0).column(), 0);
        assert_eq!(Square::new(5).row(), 1);
        assert_eq!(Square::new(5).column(), 2);
        assert_eq!(Square::new(8).row(), 2);
        assert_eq!(Square::new(8).column(), 2);
    }

    #[test]
    #[should_panic(expected = "square index must be 0-8")]
    fn test_rejects_nine() {
        let _ = Square::new(9);
    }

    #[test]
    #[should_panic(expected = "coordinates must be 0-2")]
    fn test_rejects_bad_coords() {
        let _ = Square::from_coords(3, 0);
    }
}
