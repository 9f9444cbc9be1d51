use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::BoardError;

static SQUARE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*([0-7])\s*,\s*([0-7])\s*\)?$").expect("SQUARE_RE regex should be valid")
});

/// A square on the 8x8 board, addressed by `(row, col)`. Row 0 is black's
/// back rank (top of the board), row 7 is red's.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Builds a square from in-range coordinates. Panics if either coordinate
    /// is off the board; use `try_new` for arithmetic results.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square ({}, {}) is off the board", row, col);
        Self { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Pieces only ever stand on dark squares.
    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    pub fn row_distance(&self, other: Square) -> u8 {
        (self.row as i8 - other.row as i8).unsigned_abs()
    }

    /// The square halfway between `self` and `other`, rounding toward `self`.
    pub fn midpoint(&self, other: Square) -> Square {
        let row = self.row as i8 + (other.row as i8 - self.row as i8) / 2;
        let col = self.col as i8 + (other.col as i8 - self.col as i8) / 2;
        Square {
            row: row as u8,
            col: col as u8,
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let caps = SQUARE_RE
            .captures(input.trim())
            .ok_or_else(|| BoardError::InvalidSquare {
                input: input.to_string(),
            })?;

        // both groups are a single digit in 0..=7
        let row = caps[1].parse::<u8>().map_err(|_| BoardError::InvalidSquare {
            input: input.to_string(),
        })?;
        let col = caps[2].parse::<u8>().map_err(|_| BoardError::InvalidSquare {
            input: input.to_string(),
        })?;

        Ok(Square::new(row, col))
    }
}
