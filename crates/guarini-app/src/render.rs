//! Console rendering of boards.

use guarini_core::{Board, Square};

/// Renders a board as three lines of space-separated cell symbols.
pub fn board_lines(board: &Board) -> [String; 3] {
    let mut lines = [const { String::new() }; 3];
    for (row, line) in (0u8..).zip(&mut lines) {
        for column in 0..3 {
            if column > 0 {
                line.push(' ');
            }
            line.push(board[Square::from_coords(row, column)].symbol());
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board_rendering() {
        assert_eq!(
            board_lines(&Board::INITIAL),
            ["♞ · ♞", "· · ·", "♘ · ♘"]
        );
        assert_eq!(
            board_lines(&Board::GOAL),
            ["♘ · ♘", "· · ·", "♞ · ♞"]
        );
    }
}
