use std::fmt;

use super::{Board, Square};

impl Board {
    /// Renders the board with row labels on the left and column labels on
    /// top, row 0 first. Dark squares without a piece show a dot.
    pub fn to_ascii(&self) -> String {
        let mut buffer = String::with_capacity(1024);
        buffer.push_str("    0   1   2   3   4   5   6   7\n");
        buffer.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..8u8 {
            buffer.push_str(&format!("{} │", row));
            for col in 0..8u8 {
                let square = Square::new(row, col);
                let cell = match self.get(square) {
                    Some(piece) => piece.to_char(),
                    None if square.is_dark() => '·',
                    None => ' ',
                };
                buffer.push_str(&format!(" {} │", cell));
            }
            buffer.push_str(&format!(" {}\n", row));

            if row < 7 {
                buffer.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            } else {
                buffer.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
            }
        }

        buffer.push_str("    0   1   2   3   4   5   6   7\n");
        buffer
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}

/// Builds a board from a diagram of 64 cells, row 0 first:
///
/// ```
/// use checkers::checkers_position;
///
/// let board = checkers_position! {
///     ........
///     ........
///     ........
///     ..b.b...
///     ...r....
///     ........
///     ........
///     ........
/// };
/// assert_eq!(board.total_piece_count(), 3);
/// ```
///
/// `.` is an empty square, `r`/`R` a red man/king and `b`/`B` a black
/// man/king. Panics if the diagram is malformed or puts a piece on a light
/// square.
#[macro_export]
macro_rules! checkers_position {
    ($($cell:tt)*) => {{
        // Convert all input tokens to a string; whitespace is dropped by the parser.
        let diagram = stringify!($($cell)*);
        $crate::board::Board::from_diagram(diagram)
            .unwrap_or_else(|error| panic!("invalid checkers position: {}", error))
    }};
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Piece, Player, Square};

    #[test]
    fn test_ascii_marks_pieces_and_dark_squares() {
        let ascii = Board::starting_position().to_ascii();
        let first_row = ascii.lines().nth(2).unwrap();
        assert_eq!(first_row, "0 │   │ b │   │ b │   │ b │   │ b │ 0");
        let middle_row = ascii.lines().nth(10).unwrap();
        assert_eq!(middle_row, "4 │   │ · │   │ · │   │ · │   │ · │ 4");
    }

    #[test]
    fn test_position_macro() {
        let board = checkers_position! {
            ........
            ........
            ........
            ..b.B...
            ...r....
            ........
            ........
            R.......
        };
        assert_eq!(board.get(Square::new(3, 2)), Some(Piece::man(Player::Black)));
        assert_eq!(board.get(Square::new(3, 4)), Some(Piece::king(Player::Black)));
        assert_eq!(board.get(Square::new(4, 3)), Some(Piece::man(Player::Red)));
        assert_eq!(board.get(Square::new(7, 0)), Some(Piece::king(Player::Red)));
        assert_eq!(board.total_piece_count(), 4);
    }
}
