use thiserror::Error;

use super::square::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a piece on {square}, the square is already occupied")]
    SquareOccupiedBoardPutError { square: Square },
    #[error("Cannot put a piece on {square}, pieces may only stand on dark squares")]
    LightSquareBoardPutError { square: Square },
    #[error("invalid square: {input:?} (expected `row,col` with both in 0..=7)")]
    InvalidSquare { input: String },
    #[error("invalid position: {msg}")]
    InvalidPosition { msg: String },
}
