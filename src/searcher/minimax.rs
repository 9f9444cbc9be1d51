use super::{search_root, SearchResult};
use crate::board::{Board, Player};
use crate::evaluate;
use crate::move_generator::generate_moves;

pub(super) fn search(
    board: &Board,
    depth: u8,
    is_maximizing: bool,
    searched_position_count: &mut usize,
) -> SearchResult {
    *searched_position_count += 1;
    search_root(board, depth, is_maximizing, |child, _best| {
        minimax_value(child, depth - 1, !is_maximizing, searched_position_count)
    })
}

fn minimax_value(
    board: &Board,
    depth: u8,
    is_maximizing: bool,
    searched_position_count: &mut usize,
) -> i16 {
    *searched_position_count += 1;

    let candidates = generate_moves(board, Player::from_maximizing(is_maximizing));
    if depth == 0 || candidates.is_empty() {
        return evaluate::score(board);
    }

    let initial = if is_maximizing { i16::MIN } else { i16::MAX };
    candidates.iter().fold(initial, |best, candidate| {
        let value = minimax_value(
            &candidate.apply(board),
            depth - 1,
            !is_maximizing,
            searched_position_count,
        );
        if is_maximizing {
            best.max(value)
        } else {
            best.min(value)
        }
    })
}
