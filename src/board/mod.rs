pub mod error;
pub mod piece;
pub mod player;
pub mod square;

mod display;
mod notation;


pub use error::BoardError;
pub use notation::STARTING_POSITION;
pub use piece::Piece;
pub use player::Player;
pub use square::Square;

/// Rows of the starting position occupied by each side.
const BLACK_START_ROWS: std::ops::Range<u8> = 0..3;
const RED_START_ROWS: std::ops::Range<u8> = 5..8;

/// An 8x8 checkers board. Boards are plain `Copy` values: applying a move
/// produces a new board and leaves the old one untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Default::default()
    }

    /// Black men on the dark squares of rows 0-2, red men on the dark squares
    /// of rows 5-7.
    pub fn starting_position() -> Self {
        let mut board = Self::new();
        for square in Square::all().filter(Square::is_dark) {
            if BLACK_START_ROWS.contains(&square.row()) {
                board.set(square, Some(Piece::man(Player::Black)));
            } else if RED_START_ROWS.contains(&square.row()) {
                board.set(square, Some(Piece::man(Player::Red)));
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn put(&mut self, square: Square, piece: Piece) -> Result<(), BoardError> {
        if !square.is_dark() {
            return Err(BoardError::LightSquareBoardPutError { square });
        }
        if !self.is_empty(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { square });
        }
        self.set(square, Some(piece));
        Ok(())
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let removed = self.get(square);
        self.set(square, None);
        removed
    }

    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn piece_count(&self, player: Player) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.owner == player)
            .count()
    }

    pub fn total_piece_count(&self) -> usize {
        self.pieces().count()
    }
}
