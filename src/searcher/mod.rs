//! Depth-bounded minimax search.
//!
//! `minimax` is the reference search: it explores every legal move to a fixed
//! depth. `SearchContext` runs the same search with one of three strategies.
//! Alpha-beta and memoized searches only skip work whose outcome is already
//! decided, so they return exactly the `(value, best_move)` of plain minimax.

mod alpha_beta;
mod minimax;
mod transposition_table;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Player};
use crate::checkers_move::Move;
use crate::evaluate;
use crate::move_generator::generate_moves;

pub use transposition_table::TranspositionTable;

pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SearchResult {
    pub value: i16,
    pub best_move: Option<Move>,
}

/// Plain minimax. Red maximizes, black minimizes. Returns the evaluation and
/// no move at depth 0 or when the side to move has no legal moves. Among
/// equally valued moves the first one generated wins.
pub fn minimax(board: &Board, depth: u8, is_maximizing: bool) -> SearchResult {
    let mut searched_position_count = 0;
    minimax::search(board, depth, is_maximizing, &mut searched_position_count)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchStrategy {
    Minimax,
    AlphaBeta,
    Memoized,
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::Minimax
    }
}

impl FromStr for SearchStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(SearchStrategy::Minimax),
            "alpha-beta" => Ok(SearchStrategy::AlphaBeta),
            "memoized" => Ok(SearchStrategy::Memoized),
            _ => Err("invalid strategy; options are: minimax, alpha-beta, memoized"),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchStrategy::Minimax => "minimax",
            SearchStrategy::AlphaBeta => "alpha-beta",
            SearchStrategy::Memoized => "memoized",
        };
        write!(f, "{}", name)
    }
}

/// Runs searches at a fixed depth and keeps statistics about the last one.
pub struct SearchContext {
    search_depth: u8,
    strategy: SearchStrategy,
    transposition_table: TranspositionTable,
    searched_position_count: usize,
    last_score: Option<i16>,
    last_search_duration: Option<Duration>,
}

impl SearchContext {
    pub fn new(search_depth: u8) -> Self {
        Self::with_strategy(search_depth, SearchStrategy::default())
    }

    pub fn with_strategy(search_depth: u8, strategy: SearchStrategy) -> Self {
        Self {
            search_depth,
            strategy,
            transposition_table: TranspositionTable::default(),
            searched_position_count: 0,
            last_score: None,
            last_search_duration: None,
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn cache_hit_count(&self) -> usize {
        self.transposition_table.hit_count()
    }

    pub fn last_score(&self) -> Option<i16> {
        self.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_search_duration
    }

    /// Searches for the best move of the side given by `is_maximizing`.
    pub fn search(&mut self, board: &Board, is_maximizing: bool) -> SearchResult {
        self.searched_position_count = 0;
        self.transposition_table.clear();
        let started_at = Instant::now();

        let depth = self.search_depth;
        let result = match self.strategy {
            SearchStrategy::Minimax => minimax::search(
                board,
                depth,
                is_maximizing,
                &mut self.searched_position_count,
            ),
            SearchStrategy::AlphaBeta => alpha_beta::search(
                board,
                depth,
                is_maximizing,
                &mut self.searched_position_count,
            ),
            SearchStrategy::Memoized => transposition_table::search(
                board,
                depth,
                is_maximizing,
                &mut self.transposition_table,
                &mut self.searched_position_count,
            ),
        };

        let duration = started_at.elapsed();
        self.last_score = Some(result.value);
        self.last_search_duration = Some(duration);

        debug!(
            "{} search for {} at depth {}: value {}, move {:?}, {} positions in {:?}",
            self.strategy,
            Player::from_maximizing(is_maximizing),
            depth,
            result.value,
            result.best_move.map(|m| m.to_string()),
            self.searched_position_count,
            duration
        );

        result
    }
}

/// Shared root loop for every strategy. `child_value` receives each child
/// position and the best value found so far, and returns the child's value.
/// A move replaces the current best only on strict improvement, so the
/// earliest of equally valued moves is kept.
fn search_root<F>(board: &Board, depth: u8, is_maximizing: bool, mut child_value: F) -> SearchResult
where
    F: FnMut(&Board, Option<i16>) -> i16,
{
    let player = Player::from_maximizing(is_maximizing);
    let candidates = generate_moves(board, player);

    if depth == 0 || candidates.is_empty() {
        return SearchResult {
            value: evaluate::score(board),
            best_move: None,
        };
    }

    let mut best: Option<(i16, Move)> = None;
    for candidate in candidates.iter() {
        let value = child_value(&candidate.apply(board), best.map(|(value, _)| value));
        let improves = match best {
            None => true,
            Some((best_value, _)) if is_maximizing => value > best_value,
            Some((best_value, _)) => value < best_value,
        };
        if improves {
            best = Some((value, *candidate));
        }
    }

    match best {
        Some((value, best_move)) => SearchResult {
            value,
            best_move: Some(best_move),
        },
        // unreachable: candidates is non-empty
        None => SearchResult {
            value: evaluate::score(board),
            best_move: None,
        },
    }
}
