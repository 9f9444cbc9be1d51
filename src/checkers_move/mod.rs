//! The checkers move type and the rules for applying a move to a board.

mod apply;

use std::fmt;

use smallvec::SmallVec;

use crate::board::Square;

/// Moves in generation order. The order matters: searches break ties in
/// favor of the earliest move.
pub type MoveList = SmallVec<[Move; 32]>;

/// A single step (one row) or a single jump (two rows, capturing the piece
/// in between).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn is_jump(&self) -> bool {
        self.from.row_distance(self.to) == 2
    }

    /// The square of the piece this move captures, if it is a jump.
    pub fn captured_square(&self) -> Option<Square> {
        if self.is_jump() {
            Some(self.from.midpoint(self.to))
        } else {
            None
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Shorthand for building a move in tests: `checkers_move!((5, 0) => (4, 1))`.
#[macro_export]
macro_rules! checkers_move {
    (($from_row:expr, $from_col:expr) => ($to_row:expr, $to_col:expr)) => {
        $crate::checkers_move::Move::new(
            $crate::board::Square::new($from_row, $from_col),
            $crate::board::Square::new($to_row, $to_col),
        )
    };
}
