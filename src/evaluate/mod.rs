use crate::board::{Board, Player};
use crate::move_generator::has_legal_moves;

mod piece_values;

pub use piece_values::{KING_VALUE, MAN_VALUE};

/// Material balance from red's point of view: positive scores favor red (the
/// maximizing side), negative scores favor black.
pub fn score(board: &Board) -> i16 {
    board
        .pieces()
        .map(|(_, piece)| {
            if piece.owner.maximize_score() {
                piece.value()
            } else {
                -piece.value()
            }
        })
        .sum()
}

/// Returns the winner if the game is over with `player_to_move` to move.
/// A side with no legal moves, whether blocked or out of pieces, loses.
pub fn winner(board: &Board, player_to_move: Player) -> Option<Player> {
    if has_legal_moves(board, player_to_move) {
        None
    } else {
        Some(player_to_move.opposite())
    }
}
