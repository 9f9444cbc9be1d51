use crate::board::{Board, Piece, Player};
use crate::checkers_move::{Move, MoveList};

const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const RED_MAN_DIRECTIONS: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const BLACK_MAN_DIRECTIONS: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// Diagonal `(d_row, d_col)` directions a piece may move in. Men only move
/// toward the opponent's back rank; kings move in all four diagonals.
pub fn directions(piece: Piece) -> &'static [(i8, i8)] {
    if piece.is_king {
        return &KING_DIRECTIONS;
    }
    match piece.owner {
        Player::Red => &RED_MAN_DIRECTIONS,
        Player::Black => &BLACK_MAN_DIRECTIONS,
    }
}

/// Generates the legal moves for `player`.
///
/// Captures are mandatory: if any of the player's pieces can jump, only jumps
/// are returned. Each jump captures a single piece; multi-jump sequences are
/// not generated. Squares are scanned in row-major order and, per piece, in
/// the order of `directions`.
pub fn generate_moves(board: &Board, player: Player) -> MoveList {
    let mut steps = MoveList::new();
    let mut jumps = MoveList::new();
    let opponent = player.opposite();

    for (from, piece) in board.pieces().filter(|(_, piece)| piece.owner == player) {
        for &(d_row, d_col) in directions(piece) {
            if let Some(to) = from.offset(d_row, d_col) {
                if board.is_empty(to) {
                    steps.push(Move::new(from, to));
                }
            }

            let over = from.offset(d_row, d_col);
            let landing = from.offset(2 * d_row, 2 * d_col);
            if let (Some(over), Some(landing)) = (over, landing) {
                let jumps_opponent = board.get(over).map_or(false, |p| p.owner == opponent);
                if jumps_opponent && board.is_empty(landing) {
                    jumps.push(Move::new(from, landing));
                }
            }
        }
    }

    if jumps.is_empty() {
        steps
    } else {
        jumps
    }
}

pub fn has_legal_moves(board: &Board, player: Player) -> bool {
    !generate_moves(board, player).is_empty()
}

/// Counts the leaf positions reachable in `depth` plies, sides alternating
/// from `player`. A side without legal moves ends its line early.
pub fn count_positions(depth: u8, board: &Board, player: Player) -> usize {
    let candidates = generate_moves(board, player);

    if depth == 0 || candidates.is_empty() {
        return 1;
    }

    candidates
        .iter()
        .map(|candidate| count_positions(depth - 1, &candidate.apply(board), player.opposite()))
        .sum()
}
