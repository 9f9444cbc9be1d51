//! Owns a session and carries out the effects of its transitions.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::board::Square;
use crate::checkers_move::Move;
use crate::game::engine::{Engine, EngineConfig, EngineError, SearchStats};
use crate::game::scheduler::AiMoveScheduler;
use crate::game::scoring::ScoreReporter;
use crate::game::session::{Phase, RenderModel, Session, SessionEffect, Transition, COMPUTER, HUMAN};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    CellClicked(Square),
    NewGame,
}

pub struct GameController<R: ScoreReporter> {
    config: EngineConfig,
    session: Session,
    engine: Engine,
    scheduler: AiMoveScheduler,
    reporter: R,
}

impl<R: ScoreReporter> GameController<R> {
    pub fn new(config: EngineConfig, reporter: R) -> Result<Self, EngineError> {
        config.validate()?;

        Ok(Self {
            session: Session::new(config.starting_position, config.win_points),
            engine: Engine::with_config(&config),
            scheduler: AiMoveScheduler::new(config.ai_delay),
            config,
            reporter,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn handle(&mut self, event: SessionEvent, now: Instant) {
        match event {
            SessionEvent::CellClicked(square) => {
                let transition = self.session.click(square);
                self.commit(transition, now);
            }
            SessionEvent::NewGame => {
                self.session = self.session.reset();
                self.scheduler.cancel();
                info!("new game {}", self.session.generation());
            }
        }
    }

    /// Runs the computer's move if it is due. Returns whether a move was made.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.scheduler.take_due(now, self.session.generation()) {
            Some(_) => self.run_ai_turn(now).is_some(),
            None => false,
        }
    }

    /// Searches and applies the computer's move right away, ignoring the
    /// delay. Does nothing unless the computer is to move.
    pub fn run_ai_turn(&mut self, now: Instant) -> Option<Move> {
        if self.session.phase() != Phase::AiThinking {
            return None;
        }
        self.scheduler.cancel();

        let ai_move = self.engine.best_move(self.session.board(), COMPUTER);
        let transition = self.session.apply_ai_move(ai_move);
        self.commit(transition, now);
        ai_move
    }

    /// Lets the engine pick the human side's move, playing it through the
    /// same clicks a person would make.
    pub fn play_best_human_move(&mut self, now: Instant) -> Option<Move> {
        if self.session.phase() != Phase::HumanTurn {
            return None;
        }

        let human_move = self.engine.best_move(self.session.board(), HUMAN)?;
        if self.session.selected().is_some() {
            let cleared = self.session.click(human_move.from);
            self.commit(cleared, now);
        }
        for square in [human_move.from, human_move.to].iter() {
            let transition = self.session.click(*square);
            self.commit(transition, now);
        }
        Some(human_move)
    }

    fn commit(&mut self, transition: Transition, now: Instant) {
        self.session = transition.session;
        for effect in transition.effects {
            debug!("applying {:?}", effect);
            match effect {
                SessionEffect::ScheduleAiMove { generation } => {
                    self.scheduler.schedule(generation, now)
                }
                SessionEffect::ReportGameEnd { points } => self.reporter.on_game_end(points),
            }
        }
    }

    pub fn render_model(&self) -> RenderModel {
        self.session.render_model()
    }

    pub fn search_stats(&self) -> SearchStats {
        self.engine.get_search_stats()
    }

    pub fn time_until_ai_move(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_due(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Player};
    use crate::game::scoring::LogScoreReporter;
    use crate::searcher::SearchStrategy;
    use crate::{checkers_move, checkers_position};

    fn config_for(starting_position: Board) -> EngineConfig {
        EngineConfig {
            starting_position,
            ..EngineConfig::default()
        }
    }

    fn click(controller: &mut GameController<impl ScoreReporter>, row: u8, col: u8, now: Instant) {
        controller.handle(SessionEvent::CellClicked(Square::new(row, col)), now);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            search_depth: 0,
            ..EngineConfig::default()
        };
        assert!(GameController::new(config, LogScoreReporter::new()).is_err());
    }

    #[test]
    fn test_computer_moves_after_delay() {
        let start = Instant::now();
        let mut controller =
            GameController::new(EngineConfig::default(), LogScoreReporter::new()).unwrap();

        click(&mut controller, 5, 2, start);
        click(&mut controller, 4, 3, start);
        assert_eq!(controller.session().phase(), Phase::AiThinking);
        assert_eq!(
            controller.time_until_ai_move(start),
            Some(Duration::from_millis(500))
        );

        assert!(!controller.tick(start + Duration::from_millis(100)));
        assert_eq!(controller.session().phase(), Phase::AiThinking);

        assert!(controller.tick(start + Duration::from_millis(500)));
        assert_eq!(controller.session().phase(), Phase::HumanTurn);
        assert_eq!(controller.session().turn(), Player::Red);
        assert_eq!(controller.time_until_ai_move(start), None);
        assert_eq!(controller.session().board().piece_count(Player::Black), 12);
        assert!(controller.search_stats().last_score.is_some());
        assert_eq!(controller.render_model().status_line(), "Your Turn");
    }

    #[test]
    fn test_new_game_discards_pending_move() {
        let start = Instant::now();
        let mut controller =
            GameController::new(EngineConfig::default(), LogScoreReporter::new()).unwrap();

        click(&mut controller, 5, 2, start);
        click(&mut controller, 4, 3, start);
        controller.handle(SessionEvent::NewGame, start + Duration::from_millis(100));

        assert!(!controller.tick(start + Duration::from_secs(1)));
        assert_eq!(controller.session().generation(), 1);
        assert_eq!(controller.session().phase(), Phase::HumanTurn);
        assert_eq!(controller.session().board(), &Board::starting_position());
        assert_eq!(controller.search_stats().last_score, None);
    }

    #[test]
    fn test_computer_captures() {
        let board = checkers_position! {
            ........
            ........
            ........
            ....b...
            ........
            ..r.....
            ........
            r.......
        };
        let start = Instant::now();
        let mut controller = GameController::new(config_for(board), LogScoreReporter::new()).unwrap();

        click(&mut controller, 5, 2, start);
        click(&mut controller, 4, 3, start);
        assert_eq!(
            controller.run_ai_turn(start),
            Some(checkers_move!((3, 4) => (5, 2)))
        );

        let board = controller.session().board();
        assert!(board.is_empty(Square::new(4, 3)));
        assert!(board.is_empty(Square::new(3, 4)));
        assert_eq!(
            board.get(Square::new(5, 2)).map(|piece| piece.owner),
            Some(Player::Black)
        );
        assert_eq!(controller.session().phase(), Phase::HumanTurn);
        assert!(!controller.tick(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_red_win_reported_once() {
        let board = checkers_position! {
            ........
            ........
            ........
            ....b...
            ...r....
            ........
            ........
            ........
        };
        let start = Instant::now();
        let mut awarded = Vec::new();
        {
            let mut controller =
                GameController::new(config_for(board), |points: u32| awarded.push(points))
                    .unwrap();

            click(&mut controller, 4, 3, start);
            click(&mut controller, 2, 5, start);
            assert_eq!(controller.session().winner(), Some(Player::Red));

            // Further input after the game has ended changes nothing.
            click(&mut controller, 2, 5, start);
            assert_eq!(controller.run_ai_turn(start), None);
            assert!(!controller.tick(start + Duration::from_secs(1)));
        }
        assert_eq!(awarded, vec![50]);
    }

    #[test]
    fn test_each_won_game_is_reported() {
        let board = checkers_position! {
            ........
            ........
            ........
            ....b...
            ...r....
            ........
            ........
            ........
        };
        let start = Instant::now();
        let mut controller = GameController::new(
            EngineConfig {
                win_points: 20,
                ..config_for(board)
            },
            LogScoreReporter::new(),
        )
        .unwrap();

        for _ in 0..2 {
            click(&mut controller, 4, 3, start);
            click(&mut controller, 2, 5, start);
            controller.handle(SessionEvent::NewGame, start);
        }
        assert_eq!(controller.reporter().total_points(), 40);
        assert_eq!(controller.reporter().games_won(), 2);
    }

    #[test]
    fn test_black_win_not_reported() {
        let board = checkers_position! {
            ........
            ........
            ........
            ....b...
            ........
            ..r.....
            ........
            ........
        };
        let start = Instant::now();
        let mut controller = GameController::new(config_for(board), LogScoreReporter::new()).unwrap();

        click(&mut controller, 5, 2, start);
        click(&mut controller, 4, 3, start);
        assert!(controller.tick(start + Duration::from_millis(500)));

        assert_eq!(controller.session().winner(), Some(Player::Black));
        assert_eq!(controller.render_model().status_line(), "Winner: AI!");
        assert_eq!(controller.reporter().games_won(), 0);
    }

    #[test]
    fn test_engine_can_play_the_human_side() {
        let start = Instant::now();
        let mut controller = GameController::new(
            EngineConfig {
                strategy: SearchStrategy::AlphaBeta,
                ..EngineConfig::default()
            },
            LogScoreReporter::new(),
        )
        .unwrap();

        // A stray selection does not get in the way.
        click(&mut controller, 6, 1, start);

        let human_move = controller.play_best_human_move(start).unwrap();
        assert_eq!(human_move.from.row(), 5);
        assert_eq!(controller.session().phase(), Phase::AiThinking);
        assert_eq!(controller.play_best_human_move(start), None);

        assert!(controller.run_ai_turn(start).is_some());
        assert_eq!(controller.session().phase(), Phase::HumanTurn);
    }
}
