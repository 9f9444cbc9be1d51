//! Shared utilities for CLI commands.

use std::process;
use std::time::Duration;

use checkers::board::Board;
use checkers::game::engine::{EngineConfig, EngineError};
use checkers::searcher::SearchStrategy;

pub(crate) fn create_config(
    depth: u8,
    strategy: SearchStrategy,
    delay_ms: u64,
    win_points: u32,
    position: &str,
) -> Result<EngineConfig, EngineError> {
    let starting_position: Board = position.parse()?;
    let config = EngineConfig {
        search_depth: depth,
        strategy,
        ai_delay: Duration::from_millis(delay_ms),
        win_points,
        starting_position,
    };
    config.validate()?;
    Ok(config)
}

/// Prints the error and exits with status 1.
pub(crate) fn exit_with_error(context: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, error);
    process::exit(1);
}
