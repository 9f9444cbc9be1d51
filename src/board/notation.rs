//! Compact text notation for checkers positions.
//!
//! Eight rows separated by `/`, row 0 (black's back rank) first. Pieces are
//! `r`/`R` for a red man/king and `b`/`B` for a black man/king; digits 1-8
//! stand for runs of empty squares.

use std::str::FromStr;

use super::{Board, BoardError, Piece, Square};

pub const STARTING_POSITION: &str = "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/r1r1r1r1/1r1r1r1r/r1r1r1r1";

impl Board {
    pub fn to_notation(&self) -> String {
        let rows: Vec<String> = (0..8u8)
            .map(|row| {
                let mut encoded = String::new();
                let mut empty_run = 0;
                for col in 0..8u8 {
                    match self.get(Square::new(row, col)) {
                        Some(piece) => {
                            if empty_run > 0 {
                                encoded.push_str(&empty_run.to_string());
                                empty_run = 0;
                            }
                            encoded.push(piece.to_char());
                        }
                        None => empty_run += 1,
                    }
                }
                if empty_run > 0 {
                    encoded.push_str(&empty_run.to_string());
                }
                encoded
            })
            .collect();
        rows.join("/")
    }

    /// Parses a 64-cell diagram of `.`, `r`, `R`, `b`, `B`. Whitespace is
    /// ignored, so diagrams can be laid out one row per line.
    pub fn from_diagram(diagram: &str) -> Result<Board, BoardError> {
        let cells: Vec<char> = diagram.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != 64 {
            return Err(BoardError::InvalidPosition {
                msg: format!("expected 64 squares, got {}", cells.len()),
            });
        }

        let mut board = Board::new();
        for (square, &c) in Square::all().zip(cells.iter()) {
            if c == '.' {
                continue;
            }
            let piece = Piece::from_char(c).ok_or_else(|| BoardError::InvalidPosition {
                msg: format!("unexpected character {:?} at {}", c, square),
            })?;
            board.put(square, piece)?;
        }
        Ok(board)
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = notation.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(BoardError::InvalidPosition {
                msg: format!("expected 8 rows, got {}", rows.len()),
            });
        }

        let mut board = Board::new();
        for (row, encoded) in rows.iter().enumerate() {
            let mut col: u8 = 0;
            for c in encoded.chars() {
                if let Some(run) = c.to_digit(10) {
                    if run == 0 || run > 8 {
                        return Err(BoardError::InvalidPosition {
                            msg: format!("invalid empty run {:?} in row {}", c, row),
                        });
                    }
                    col += run as u8;
                } else {
                    let piece = Piece::from_char(c).ok_or_else(|| BoardError::InvalidPosition {
                        msg: format!("unexpected character {:?} in row {}", c, row),
                    })?;
                    if col < 8 {
                        board.put(Square::new(row as u8, col), piece)?;
                    }
                    col += 1;
                }
                if col > 8 {
                    return Err(BoardError::InvalidPosition {
                        msg: format!("row {} describes more than 8 squares", row),
                    });
                }
            }
            if col != 8 {
                return Err(BoardError::InvalidPosition {
                    msg: format!("row {} describes {} squares, expected 8", row, col),
                });
            }
        }
        Ok(board)
    }
}
