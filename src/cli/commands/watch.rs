//! Watch command - watch the engine play red against the computer.

use std::time::Duration;

use checkers::board::STARTING_POSITION;
use checkers::game::controller::GameController;
use checkers::game::engine::DEFAULT_WIN_POINTS;
use checkers::game::scoring::LogScoreReporter;
use checkers::searcher::SearchStrategy;
use checkers::tui::TuiApp;
use structopt::StructOpt;

use super::util::{create_config, exit_with_error};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub strategy: SearchStrategy,
    #[structopt(long = "position", default_value = STARTING_POSITION)]
    pub position: String,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(
            self.depth,
            self.strategy,
            self.delay_ms,
            DEFAULT_WIN_POINTS,
            &self.position,
        )
        .unwrap_or_else(|error| exit_with_error("Invalid configuration", error));

        let mut controller = GameController::new(config, LogScoreReporter::new())
            .unwrap_or_else(|error| exit_with_error("Failed to start game", error));

        let delay = Duration::from_millis(self.delay_ms);
        let result = TuiApp::new().and_then(|mut app| app.run_watch(&mut controller, delay));
        if let Err(error) = result {
            exit_with_error("Failed to initialize TUI", error);
        }
    }
}
