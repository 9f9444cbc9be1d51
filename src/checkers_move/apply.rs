use log::warn;

use super::Move;
use crate::board::Board;

impl Move {
    /// Returns the board after this move is played. The input board is never
    /// modified.
    ///
    /// The moving piece is relocated, a jumped piece is removed, and a man
    /// reaching its back rank is crowned. Playing a move from an empty square
    /// leaves the position unchanged.
    pub fn apply(&self, board: &Board) -> Board {
        let mut next = *board;

        let piece = match next.remove(self.from) {
            Some(piece) => piece,
            None => {
                warn!("ignoring move {}: the `from` square is empty", self);
                return next;
            }
        };

        if let Some(captured) = self.captured_square() {
            next.set(captured, None);
        }

        let piece = if !piece.is_king && self.to.row() == piece.owner.back_rank() {
            piece.crowned()
        } else {
            piece
        };
        next.set(self.to, Some(piece));

        next
    }
}
