//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, count_positions::CountPositionsArgs,
    play::PlayArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(name = "checkers", about = "A checkers engine implemented in Rust ⛀")]
pub enum Checkers {
    #[structopt(
        name = "play",
        about = "Play red against the computer, which answers after `--delay` milliseconds (default: 500) with the best move found by a minimax search at the given `--depth` (default: 4). A win earns `--points` (default: 50). Runs in a terminal UI unless `--plain` is given, in which case squares are typed as `row,col`. The initial position can be given with `--position` (default: starting position)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "watch",
        about = "Watch the engine play red against the computer at the given `--depth` (default: 4), one move every `--delay` milliseconds (default: 500). The initial position can be given with `--position` (default: starting position)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the engine to determine the best move for `--player` (default: black) from a given `--position` (required). You can optionally specify the depth of the search with the `--depth` arg (default: 4)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the number of possible positions for a given `--depth` (default: 4), and reports the time it took to do so. By default, this counts all leaf positions. Select a search with `--strategy minimax`, `alpha-beta` or `memoized` to count the positions it visits instead."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Checkers {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            CountPositions(cmd),
        }
    }
}
