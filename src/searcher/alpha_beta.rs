use super::{search_root, SearchResult};
use crate::board::{Board, Player};
use crate::evaluate;
use crate::move_generator::generate_moves;

/// Root children are searched with a window bounded by the best value so far.
/// A child that cannot strictly beat it fails low (or high, for black) and is
/// never picked, so the chosen move matches plain minimax.
pub(super) fn search(
    board: &Board,
    depth: u8,
    is_maximizing: bool,
    searched_position_count: &mut usize,
) -> SearchResult {
    *searched_position_count += 1;
    search_root(board, depth, is_maximizing, |child, best| {
        let (alpha, beta) = if is_maximizing {
            (best.unwrap_or(i16::MIN), i16::MAX)
        } else {
            (i16::MIN, best.unwrap_or(i16::MAX))
        };
        alpha_beta_value(
            child,
            depth - 1,
            alpha,
            beta,
            !is_maximizing,
            searched_position_count,
        )
    })
}

/// Fail-soft alpha-beta. The result is exact when it lies strictly inside
/// `(alpha, beta)` and a bound on the exact value otherwise.
fn alpha_beta_value(
    board: &Board,
    depth: u8,
    mut alpha: i16,
    mut beta: i16,
    is_maximizing: bool,
    searched_position_count: &mut usize,
) -> i16 {
    *searched_position_count += 1;

    let candidates = generate_moves(board, Player::from_maximizing(is_maximizing));
    if depth == 0 || candidates.is_empty() {
        return evaluate::score(board);
    }

    if is_maximizing {
        let mut best_score = i16::MIN;
        for candidate in candidates.iter() {
            let score = alpha_beta_value(
                &candidate.apply(board),
                depth - 1,
                alpha,
                beta,
                false,
                searched_position_count,
            );
            best_score = best_score.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        best_score
    } else {
        let mut best_score = i16::MAX;
        for candidate in candidates.iter() {
            let score = alpha_beta_value(
                &candidate.apply(board),
                depth - 1,
                alpha,
                beta,
                true,
                searched_position_count,
            );
            best_score = best_score.min(score);
            beta = beta.min(score);
            if alpha >= beta {
                break;
            }
        }
        best_score
    }
}
