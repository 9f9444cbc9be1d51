//! Play command - play a game against the computer.

use checkers::board::STARTING_POSITION;
use checkers::game::controller::GameController;
use checkers::game::r#loop::GameLoop;
use checkers::game::scoring::LogScoreReporter;
use checkers::searcher::SearchStrategy;
use checkers::tui::TuiApp;
use structopt::StructOpt;

use super::util::{create_config, exit_with_error};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "minimax")]
    pub strategy: SearchStrategy,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay before the computer moves, in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long, default_value = "50", help = "Points awarded for a win")]
    pub points: u32,
    #[structopt(long = "position", default_value = STARTING_POSITION)]
    pub position: String,
    #[structopt(long, help = "Read `row,col` commands from stdin instead of using the TUI")]
    pub plain: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(
            self.depth,
            self.strategy,
            self.delay_ms,
            self.points,
            &self.position,
        )
        .unwrap_or_else(|error| exit_with_error("Invalid configuration", error));

        if self.plain {
            match GameLoop::new(config, LogScoreReporter::new()) {
                Ok(mut game) => game.run(),
                Err(error) => exit_with_error("Failed to start game", error),
            }
            return;
        }

        let mut controller = GameController::new(config, LogScoreReporter::new())
            .unwrap_or_else(|error| exit_with_error("Failed to start game", error));
        let result = TuiApp::new().and_then(|mut app| app.run_play(&mut controller));
        if let Err(error) = result {
            exit_with_error("Terminal error", error);
        }

        let reporter = controller.reporter();
        if reporter.games_won() > 0 {
            println!(
                "You won {} game(s) for {} points.",
                reporter.games_won(),
                reporter.total_points()
            );
        }
    }
}
