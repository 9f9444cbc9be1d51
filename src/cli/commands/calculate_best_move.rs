//! Calculate best move command - determine the best move from a position.

use checkers::board::{Board, Player};
use checkers::game::engine::{Engine, EngineConfig};
use checkers::searcher::SearchStrategy;
use structopt::StructOpt;

use super::util::exit_with_error;
use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "minimax")]
    pub strategy: SearchStrategy,
    #[structopt(short, long, default_value = "black")]
    pub player: Player,
    #[structopt(long = "position")]
    pub starting_position: Board,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let config = EngineConfig {
            search_depth: self.depth,
            strategy: self.strategy,
            starting_position: self.starting_position,
            ..EngineConfig::default()
        };
        if let Err(error) = config.validate() {
            exit_with_error("Invalid configuration", error);
        }

        let mut engine = Engine::with_config(&config);
        let result = engine.search(&config.starting_position, self.player);

        match result.best_move {
            Some(best_move) => println!("{} (value {})", best_move, result.value),
            None => eprintln!(
                "There are no valid moves for {} in the given position.",
                self.player
            ),
        }
    }
}
