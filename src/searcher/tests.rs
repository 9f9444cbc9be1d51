//! Search tests.
//!
//! Test coverage:
//! - Tie-breaking toward the first generated move
//! - Terminal positions (depth 0, side without moves)
//! - Avoiding a losing exchange
//! - Alpha-beta and memoized searches agreeing with plain minimax

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;
use crate::board::Square;
use crate::{checkers_move, checkers_position};

const STRATEGIES: [SearchStrategy; 3] = [
    SearchStrategy::Minimax,
    SearchStrategy::AlphaBeta,
    SearchStrategy::Memoized,
];

/// Plays a seeded random game for up to `plies` half-moves.
fn random_position(rng: &mut StdRng, plies: usize) -> (Board, Player) {
    let mut board = Board::starting_position();
    let mut player = Player::Red;
    for _ in 0..plies {
        let moves = generate_moves(&board, player);
        match moves.choose(rng) {
            Some(candidate) => board = candidate.apply(&board),
            None => break,
        }
        player = player.opposite();
    }
    (board, player)
}

#[test]
fn test_ties_go_to_the_first_generated_move() {
    let board = Board::starting_position();

    let result = minimax(&board, 1, true);
    assert_eq!(
        result,
        SearchResult {
            value: 0,
            best_move: Some(checkers_move!((5, 0) => (4, 1))),
        }
    );

    let result = minimax(&board, 1, false);
    assert_eq!(result.best_move, Some(checkers_move!((2, 1) => (3, 0))));
}

#[test]
fn test_depth_zero_only_evaluates() {
    let board = Board::starting_position();
    assert_eq!(
        minimax(&board, 0, true),
        SearchResult {
            value: 0,
            best_move: None,
        }
    );
}

#[test]
fn test_side_without_moves_returns_no_move() {
    let board = checkers_position! {
        ........
        ........
        ........
        ....b...
        ........
        ........
        ........
        ........
    };
    for strategy in STRATEGIES.iter() {
        let mut context = SearchContext::with_strategy(4, *strategy);
        assert_eq!(
            context.search(&board, true),
            SearchResult {
                value: -1,
                best_move: None,
            }
        );
    }
}

#[test]
fn test_avoids_stepping_into_a_capture() {
    // (5,2)->(4,1) is generated first but lets black jump to (5,2).
    let board = checkers_position! {
        ........
        ........
        ........
        b.......
        ........
        ..r.....
        ........
        ........
    };
    let result = minimax(&board, 2, true);
    assert_eq!(
        result,
        SearchResult {
            value: 0,
            best_move: Some(checkers_move!((5, 2) => (4, 3))),
        }
    );
}

#[test]
fn test_black_takes_the_capture() {
    let board = checkers_position! {
        ........
        ........
        ........
        ..b.....
        ...r....
        ........
        ........
        .r......
    };
    let result = minimax(&board, 4, false);
    assert_eq!(result.best_move, Some(checkers_move!((3, 2) => (5, 4))));
    assert!(result.value <= 0);
}

#[test]
fn test_minimax_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(11);
    let (board, player) = random_position(&mut rng, 12);
    let first = minimax(&board, 4, player.maximize_score());
    for _ in 0..3 {
        assert_eq!(minimax(&board, 4, player.maximize_score()), first);
    }
}

#[test]
fn test_strategies_match_plain_minimax() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..25 {
        let plies = rng.gen_range(0..40);
        let (board, player) = random_position(&mut rng, plies);

        for depth in 1..=4 {
            let expected = minimax(&board, depth, player.maximize_score());
            for strategy in STRATEGIES.iter() {
                let mut context = SearchContext::with_strategy(depth, *strategy);
                let result = context.search(&board, player.maximize_score());
                assert_eq!(
                    result, expected,
                    "{} search differs at depth {} for {} on\n{}",
                    strategy, depth, player, board
                );
            }
        }
    }
}

#[test]
fn test_alpha_beta_searches_fewer_positions() {
    let board = Board::starting_position();

    let mut minimax_context = SearchContext::with_strategy(4, SearchStrategy::Minimax);
    let mut alpha_beta_context = SearchContext::with_strategy(4, SearchStrategy::AlphaBeta);
    let mut memoized_context = SearchContext::with_strategy(4, SearchStrategy::Memoized);

    minimax_context.search(&board, true);
    alpha_beta_context.search(&board, true);
    memoized_context.search(&board, true);

    assert!(
        alpha_beta_context.searched_position_count() < minimax_context.searched_position_count()
    );
    assert!(memoized_context.searched_position_count() <= minimax_context.searched_position_count());
}

#[test]
fn test_context_records_stats() {
    let mut context = SearchContext::new(DEFAULT_SEARCH_DEPTH);
    assert_eq!(context.last_score(), None);
    assert_eq!(context.last_search_duration(), None);

    let board = checkers_move!((5, 2) => (4, 3)).apply(&Board::starting_position());
    let result = context.search(&board, false);

    assert_eq!(context.last_score(), Some(result.value));
    assert!(context.last_search_duration().is_some());
    assert!(context.searched_position_count() > 1);
    assert_eq!(context.search_depth(), 4);
    assert_eq!(context.strategy(), SearchStrategy::Minimax);
    assert!(result
        .best_move
        .map_or(false, |m| m.from.row() == 2 && m.to.row() == 3));
    assert!(board.get(Square::new(4, 3)).is_some());
}

#[test]
fn test_parse_strategy() {
    assert_eq!(
        SearchStrategy::from_str("alpha-beta").unwrap(),
        SearchStrategy::AlphaBeta
    );
    assert_eq!(
        SearchStrategy::from_str("memoized").unwrap(),
        SearchStrategy::Memoized
    );
    assert_eq!(
        SearchStrategy::from_str("minimax").unwrap(),
        SearchStrategy::Minimax
    );
    assert!(SearchStrategy::from_str("mcts").is_err());
}
