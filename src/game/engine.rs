use std::time::Duration;

use thiserror::Error;

use crate::board::error::BoardError;
use crate::board::{Board, Player};
use crate::checkers_move::Move;
use crate::game::scheduler::DEFAULT_AI_DELAY;
use crate::searcher::{SearchContext, SearchResult, SearchStrategy, DEFAULT_SEARCH_DEPTH};

pub const DEFAULT_WIN_POINTS: u32 = 50;

/// Core engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search_depth: u8,
    pub strategy: SearchStrategy,
    pub ai_delay: Duration,
    pub win_points: u32,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            strategy: SearchStrategy::default(),
            ai_delay: DEFAULT_AI_DELAY,
            win_points: DEFAULT_WIN_POINTS,
            starting_position: Board::starting_position(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.search_depth == 0 {
            return Err(EngineError::InvalidSearchDepth {
                depth: self.search_depth,
            });
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid search depth {depth}; the engine needs at least 1 ply")]
    InvalidSearchDepth { depth: u8 },
    #[error("Board error: {error}")]
    BoardError { error: BoardError },
}

impl From<BoardError> for EngineError {
    fn from(error: BoardError) -> Self {
        EngineError::BoardError { error }
    }
}

/// Picks moves for either side with a fixed search depth and strategy.
pub struct Engine {
    search_context: SearchContext,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(&EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            search_context: SearchContext::with_strategy(config.search_depth, config.strategy),
        }
    }

    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        self.search_context.search(board, player.maximize_score())
    }

    pub fn best_move(&mut self, board: &Board, player: Player) -> Option<Move> {
        self.search(board, player).best_move
    }

    pub fn get_search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.search_context.searched_position_count(),
            cache_hits: self.search_context.cache_hit_count(),
            depth: self.search_context.search_depth(),
            strategy: self.search_context.strategy(),
            last_score: self.search_context.last_score(),
            last_search_duration: self.search_context.last_search_duration(),
        }
    }
}

/// Search performance statistics
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub cache_hits: usize,
    pub depth: u8,
    pub strategy: SearchStrategy,
    pub last_score: Option<i16>,
    pub last_search_duration: Option<Duration>,
}
