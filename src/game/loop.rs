use std::thread;
use std::time::Instant;

use crate::game::controller::{GameController, SessionEvent};
use crate::game::engine::{EngineConfig, EngineError};
use crate::game::scoring::ScoreReporter;
use crate::input_handler::{read_play_input, PlayInput};

/// Line-oriented host: prints the board and reads typed commands from stdin.
pub struct GameLoop<R: ScoreReporter> {
    controller: GameController<R>,
}

impl<R: ScoreReporter> GameLoop<R> {
    pub fn new(config: EngineConfig, reporter: R) -> Result<Self, EngineError> {
        Ok(Self {
            controller: GameController::new(config, reporter)?,
        })
    }

    pub fn run(&mut self) {
        loop {
            self.render();

            if self.controller.session().is_ai_turn() {
                if let Some(wait) = self.controller.time_until_ai_move(Instant::now()) {
                    thread::sleep(wait);
                }
                self.controller.tick(Instant::now());
                continue;
            }

            match read_play_input() {
                Ok(PlayInput::Click(square)) => self
                    .controller
                    .handle(SessionEvent::CellClicked(square), Instant::now()),
                Ok(PlayInput::NewGame) => self
                    .controller
                    .handle(SessionEvent::NewGame, Instant::now()),
                Ok(PlayInput::Quit) => break,
                Err(error) => println!("error: {}", error),
            }
        }
    }

    fn render(&self) {
        let model = self.controller.render_model();
        println!("{}", model.board.to_ascii());

        if let Some(selected) = model.selected {
            let targets: Vec<String> = model
                .legal_moves_for_selection
                .iter()
                .map(|candidate| candidate.to.to_string())
                .collect();
            if targets.is_empty() {
                println!("selected {}, no moves", selected);
            } else {
                println!("selected {}, moves to: {}", selected, targets.join(" "));
            }
        }

        let stats = self.controller.search_stats();
        if let (Some(score), Some(duration)) = (stats.last_score, stats.last_search_duration) {
            println!(
                "engine: score {}, {} positions in {:.2}s",
                score,
                stats.positions_searched,
                duration.as_secs_f64()
            );
        }

        println!("{}", model.status_line());
    }
}
