//! Compact sets of board squares.

use std::iter::FusedIterator;

use crate::Square;

/// A set of board squares backed by a 9-bit mask.
///
/// Supports const construction so that the knight-destination table can be
/// computed at compile time. Iteration yields squares in ascending index
/// order.
///
/// # Examples
///
/// ```
/// use guarini_core::{Square, SquareSet};
///
/// let set = SquareSet::EMPTY.with(Square::new(5)).with(Square::new(7));
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Square::new(5)));
/// assert!(!set.contains(Square::new(4)));
///
/// let squares: Vec<_> = set.into_iter().collect();
/// assert_eq!(squares, vec![Square::new(5), Square::new(7)]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareSet {
    bits: u16,
}

impl SquareSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Returns a copy of this set with `square` added.
    #[must_use]
    pub const fn with(self, square: Square) -> Self {
        Self {
            bits: self.bits | 1 << square.index(),
        }
    }

    /// Returns `true` if `square` is a member of this set.
    #[must_use]
    pub const fn contains(self, square: Square) -> bool {
        self.bits & 1 << square.index() != 0
    }

    /// Returns the number of squares in this set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if this set contains no squares.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = Squares;

    fn into_iter(self) -> Self::IntoIter {
        Squares { bits: self.bits }
    }
}

/// Iterator over the squares of a [`SquareSet`] in ascending index order.
#[derive(Debug, Clone)]
pub struct Squares {
    bits: u16,
}

impl Iterator for Squares {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Square::new(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Squares {}
impl ExactSizeIterator for Squares {}
