use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::board::{Board, Player};
use crate::move_generator::count_positions;
use crate::searcher::{SearchContext, SearchStrategy};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountPositionsStrategy {
    /// Every leaf position, no search.
    All,
    /// Positions visited by a search with the given strategy.
    Search(SearchStrategy),
}

impl FromStr for CountPositionsStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountPositionsStrategy::All),
            _ => SearchStrategy::from_str(s)
                .map(CountPositionsStrategy::Search)
                .map_err(|_| "invalid strategy; options are: all, minimax, alpha-beta, memoized"),
        }
    }
}

/// Counts positions from the starting position at exactly `depth`, red to move.
pub fn count_positions_at_depth(depth: u8, strategy: CountPositionsStrategy) -> usize {
    let board = Board::starting_position();
    match strategy {
        CountPositionsStrategy::All => count_positions(depth, &board, Player::Red),
        CountPositionsStrategy::Search(search_strategy) => {
            let mut search_context = SearchContext::with_strategy(depth, search_strategy);
            search_context.search(&board, Player::Red.maximize_score());
            search_context.searched_position_count()
        }
    }
}

pub fn run_count_positions(depth: u8, strategy: CountPositionsStrategy) {
    let depths = 1..=depth;

    let mut total_positions = 0;
    let mut total_duration = Duration::from_secs(0);

    for depth in depths {
        let starting_time = Instant::now();
        let count = count_positions_at_depth(depth, strategy);
        let duration = starting_time.elapsed();
        let positions_per_second = count as f64 / duration.as_secs_f64();

        total_positions += count;
        total_duration += duration;

        println!(
            "depth: {}, positions: {}, positions per second: {}",
            depth, count, positions_per_second
        );
    }

    println!(
        "total positions: {}, total duration: {:?}, positions per second: {}",
        total_positions,
        total_duration,
        total_positions as f64 / total_duration.as_secs_f64()
    );
}
