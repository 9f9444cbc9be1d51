//! Transposition table for the memoized minimax search.
//!
//! Minimax values depend only on the position, the remaining depth and the
//! side to move, so they can be shared between transpositions without
//! changing the result.

use rustc_hash::FxHashMap;

use super::{search_root, SearchResult};
use crate::board::{Board, Player};
use crate::evaluate;
use crate::move_generator::generate_moves;

type SearchNode = (Board, u8, bool); // position, remaining depth, is_maximizing
type SearchValue = i16;

#[derive(Default)]
pub struct TranspositionTable {
    entries: FxHashMap<SearchNode, SearchValue>,
    hits: usize,
}

impl TranspositionTable {
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    fn probe(&mut self, node: &SearchNode) -> Option<SearchValue> {
        let value = self.entries.get(node).copied();
        if value.is_some() {
            self.hits += 1;
        }
        value
    }

    fn store(&mut self, node: SearchNode, value: SearchValue) {
        self.entries.insert(node, value);
    }
}

pub(super) fn search(
    board: &Board,
    depth: u8,
    is_maximizing: bool,
    table: &mut TranspositionTable,
    searched_position_count: &mut usize,
) -> SearchResult {
    *searched_position_count += 1;
    search_root(board, depth, is_maximizing, |child, _best| {
        memoized_value(
            child,
            depth - 1,
            !is_maximizing,
            table,
            searched_position_count,
        )
    })
}

fn memoized_value(
    board: &Board,
    depth: u8,
    is_maximizing: bool,
    table: &mut TranspositionTable,
    searched_position_count: &mut usize,
) -> SearchValue {
    let node = (*board, depth, is_maximizing);
    if let Some(value) = table.probe(&node) {
        return value;
    }
    *searched_position_count += 1;

    let candidates = generate_moves(board, Player::from_maximizing(is_maximizing));
    let value = if depth == 0 || candidates.is_empty() {
        evaluate::score(board)
    } else {
        let initial = if is_maximizing { i16::MIN } else { i16::MAX };
        candidates.iter().fold(initial, |best, candidate| {
            let value = memoized_value(
                &candidate.apply(board),
                depth - 1,
                !is_maximizing,
                table,
                searched_position_count,
            );
            if is_maximizing {
                best.max(value)
            } else {
                best.min(value)
            }
        })
    };

    table.store(node, value);
    value
}
