//! Human-versus-computer game session.
//!
//! A `Session` is an immutable value. Every transition returns the next
//! session together with the effects the host has to carry out: scheduling
//! the computer's move and reporting a won game to the scoring collaborator.

use log::{debug, info};

use crate::board::{Board, Player, Square};
use crate::checkers_move::{Move, MoveList};
use crate::evaluate;
use crate::move_generator::generate_moves;

pub const HUMAN: Player = Player::Red;
pub const COMPUTER: Player = Player::Black;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    HumanTurn,
    AiThinking,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    /// The computer should move once the configured delay has passed.
    /// `generation` identifies the game the move belongs to.
    ScheduleAiMove { generation: u64 },
    /// The human won; award `points` to the player. Emitted once per game.
    ReportGameEnd { points: u32 },
}

#[derive(Clone, Debug)]
pub struct Transition {
    pub session: Session,
    pub effects: Vec<SessionEffect>,
}

impl Transition {
    fn unchanged(session: &Session) -> Self {
        Self {
            session: session.clone(),
            effects: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    board: Board,
    turn: Player,
    winner: Option<Player>,
    selected: Option<Square>,
    legal_moves: MoveList,
    phase: Phase,
    score_awarded: bool,
    generation: u64,
    starting_position: Board,
    win_points: u32,
}

impl Session {
    /// Starts a game with the human (red) to move. If red cannot move in the
    /// starting position, the game is already over and black has won.
    pub fn new(starting_position: Board, win_points: u32) -> Self {
        Self::start(starting_position, win_points, 0)
    }

    fn start(starting_position: Board, win_points: u32, generation: u64) -> Self {
        let legal_moves = generate_moves(&starting_position, HUMAN);
        let (phase, winner) = if legal_moves.is_empty() {
            (Phase::GameOver, Some(COMPUTER))
        } else {
            (Phase::HumanTurn, None)
        };

        Self {
            board: starting_position,
            turn: HUMAN,
            winner,
            selected: None,
            legal_moves,
            phase,
            score_awarded: false,
            generation,
            starting_position,
            win_points,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Red's legal moves while it is the human's turn, empty otherwise.
    pub fn legal_moves(&self) -> &MoveList {
        &self.legal_moves
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_ai_turn(&self) -> bool {
        self.phase == Phase::AiThinking
    }

    pub fn score_awarded(&self) -> bool {
        self.score_awarded
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn starting_position(&self) -> &Board {
        &self.starting_position
    }

    pub fn win_points(&self) -> u32 {
        self.win_points
    }

    /// Handles a click on `square`. Only meaningful on the human's turn:
    /// the first click selects a red piece, the second either plays the
    /// matching legal move or clears the selection.
    pub fn click(&self, square: Square) -> Transition {
        if self.phase != Phase::HumanTurn {
            return Transition::unchanged(self);
        }

        let from = match self.selected {
            Some(from) => from,
            None => {
                return match self.board.get(square) {
                    Some(piece) if piece.owner == HUMAN => {
                        debug!("selected {}", square);
                        let mut next = self.clone();
                        next.selected = Some(square);
                        Transition {
                            session: next,
                            effects: Vec::new(),
                        }
                    }
                    _ => Transition::unchanged(self),
                };
            }
        };

        let chosen = self
            .legal_moves
            .iter()
            .find(|candidate| candidate.from == from && candidate.to == square)
            .copied();

        match chosen {
            Some(human_move) => self.apply_human_move(human_move),
            None => {
                debug!("cleared selection {}", from);
                let mut next = self.clone();
                next.selected = None;
                Transition {
                    session: next,
                    effects: Vec::new(),
                }
            }
        }
    }

    fn apply_human_move(&self, human_move: Move) -> Transition {
        debug!("human plays {}", human_move);
        let mut next = self.clone();
        next.board = human_move.apply(&self.board);
        next.selected = None;
        next.turn = COMPUTER;
        next.legal_moves = MoveList::new();

        if let Some(winner) = evaluate::winner(&next.board, COMPUTER) {
            return next.finish(winner);
        }

        next.phase = Phase::AiThinking;
        let generation = next.generation;
        Transition {
            session: next,
            effects: vec![SessionEffect::ScheduleAiMove { generation }],
        }
    }

    /// Applies the computer's chosen move. `None` means the computer had no
    /// legal move and the human wins.
    pub fn apply_ai_move(&self, ai_move: Option<Move>) -> Transition {
        if self.phase != Phase::AiThinking {
            return Transition::unchanged(self);
        }

        let ai_move = match ai_move {
            Some(ai_move) => ai_move,
            None => return self.clone().finish(HUMAN),
        };

        debug!("computer plays {}", ai_move);
        let mut next = self.clone();
        next.board = ai_move.apply(&self.board);
        next.turn = HUMAN;
        next.legal_moves = generate_moves(&next.board, HUMAN);

        if next.legal_moves.is_empty() {
            return next.finish(COMPUTER);
        }

        next.phase = Phase::HumanTurn;
        Transition {
            session: next,
            effects: Vec::new(),
        }
    }

    fn finish(mut self, winner: Player) -> Transition {
        info!("game {} over, {} wins", self.generation, winner);
        self.phase = Phase::GameOver;
        self.winner = Some(winner);
        self.selected = None;
        self.legal_moves = MoveList::new();

        let mut effects = Vec::new();
        if winner == HUMAN && !self.score_awarded {
            self.score_awarded = true;
            effects.push(SessionEffect::ReportGameEnd {
                points: self.win_points,
            });
        }

        Transition {
            session: self,
            effects,
        }
    }

    /// Starts over from the starting position. The generation is bumped so
    /// that a computer move scheduled for the old game is discarded.
    pub fn reset(&self) -> Session {
        debug!("resetting game {}", self.generation);
        Self::start(self.starting_position, self.win_points, self.generation + 1)
    }

    pub fn render_model(&self) -> RenderModel {
        let legal_moves_for_selection = match self.selected {
            Some(from) => self
                .legal_moves
                .iter()
                .filter(|candidate| candidate.from == from)
                .copied()
                .collect(),
            None => MoveList::new(),
        };

        RenderModel {
            board: self.board,
            turn: self.turn,
            winner: self.winner,
            is_ai_turn: self.is_ai_turn(),
            selected: self.selected,
            legal_moves_for_selection,
            phase: self.phase,
        }
    }
}

/// Everything a host needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderModel {
    pub board: Board,
    pub turn: Player,
    pub winner: Option<Player>,
    pub is_ai_turn: bool,
    pub selected: Option<Square>,
    pub legal_moves_for_selection: MoveList,
    pub phase: Phase,
}

impl RenderModel {
    pub fn status_line(&self) -> &'static str {
        match self.winner {
            Some(HUMAN) => "Winner: You!",
            Some(_) => "Winner: AI!",
            None if self.is_ai_turn => "AI is thinking...",
            None => "Your Turn",
        }
    }

    pub fn is_move_target(&self, square: Square) -> bool {
        self.legal_moves_for_selection
            .iter()
            .any(|candidate| candidate.to == square)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{checkers_move, checkers_position};

    fn square(row: u8, col: u8) -> Square {
        Square::new(row, col)
    }

    /// Selects `from` and clicks `to`, returning the second transition.
    fn play(session: &Session, from: Square, to: Square) -> Transition {
        let selected = session.click(from);
        assert!(selected.effects.is_empty());
        selected.session.click(to)
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(Board::starting_position(), 50);
        assert_eq!(session.phase(), Phase::HumanTurn);
        assert_eq!(session.turn(), Player::Red);
        assert_eq!(session.winner(), None);
        assert_eq!(session.selected(), None);
        assert_eq!(session.legal_moves().len(), 7);
        assert_eq!(session.generation(), 0);
        assert!(!session.score_awarded());
        assert_eq!(session.render_model().status_line(), "Your Turn");
    }

    #[test]
    fn test_red_without_moves_loses_immediately() {
        let board = checkers_position! {
            ........
            ........
            ........
            ....b...
            ........
            ........
            ........
            ........
        };
        let session = Session::new(board, 50);
        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.winner(), Some(Player::Black));
        assert_eq!(session.render_model().status_line(), "Winner: AI!");
    }

    #[test]
    fn test_click_selects_only_red_pieces() {
        let session = Session::new(Board::starting_position(), 50);

        let empty = session.click(square(4, 1));
        assert_eq!(empty.session, session);
        assert!(empty.effects.is_empty());

        let black = session.click(square(2, 1));
        assert_eq!(black.session.selected(), None);

        let red = session.click(square(5, 2));
        assert_eq!(red.session.selected(), Some(square(5, 2)));
        assert!(red.effects.is_empty());

        let model = red.session.render_model();
        assert_eq!(model.selected, Some(square(5, 2)));
        assert_eq!(
            model.legal_moves_for_selection.to_vec(),
            vec![
                checkers_move!((5, 2) => (4, 1)),
                checkers_move!((5, 2) => (4, 3)),
            ]
        );
        assert!(model.is_move_target(square(4, 3)));
        assert!(!model.is_move_target(square(4, 5)));
    }

    #[test]
    fn test_blocked_red_piece_can_be_selected_without_targets() {
        let session = Session::new(Board::starting_position(), 50);
        let selected = session.click(square(6, 1)).session;
        assert_eq!(selected.selected(), Some(square(6, 1)));
        assert!(selected.render_model().legal_moves_for_selection.is_empty());
    }

    #[test]
    fn test_non_matching_click_clears_selection() {
        let session = Session::new(Board::starting_position(), 50);
        let transition = play(&session, square(5, 2), square(3, 2));
        assert_eq!(transition.session.selected(), None);
        assert_eq!(transition.session.board(), &Board::starting_position());
        assert_eq!(transition.session.phase(), Phase::HumanTurn);
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn test_human_move_hands_over_to_computer() {
        let session = Session::new(Board::starting_position(), 50);
        let transition = play(&session, square(5, 2), square(4, 3));
        let next = &transition.session;

        assert_eq!(next.phase(), Phase::AiThinking);
        assert_eq!(next.turn(), Player::Black);
        assert_eq!(next.selected(), None);
        assert!(next.legal_moves().is_empty());
        assert!(next.board().is_empty(square(5, 2)));
        assert!(next.board().get(square(4, 3)).is_some());
        assert_eq!(
            transition.effects,
            vec![SessionEffect::ScheduleAiMove { generation: 0 }]
        );
        assert_eq!(next.render_model().status_line(), "AI is thinking...");
        assert!(next.render_model().is_ai_turn);
    }

    #[test]
    fn test_clicks_ignored_while_computer_thinks() {
        let session = Session::new(Board::starting_position(), 50);
        let thinking = play(&session, square(5, 2), square(4, 3)).session;

        let transition = thinking.click(square(5, 4));
        assert_eq!(transition.session, thinking);
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn test_computer_move_returns_turn_to_human() {
        let session = Session::new(Board::starting_position(), 50);
        let thinking = play(&session, square(5, 2), square(4, 3)).session;

        let transition = thinking.apply_ai_move(Some(checkers_move!((2, 1) => (3, 2))));
        let next = &transition.session;
        assert_eq!(next.phase(), Phase::HumanTurn);
        assert_eq!(next.turn(), Player::Red);
        assert!(transition.effects.is_empty());
        // Red must now take the black piece on (3,2).
        assert_eq!(
            next.legal_moves().to_vec(),
            vec![checkers_move!((4, 3) => (2, 1))]
        );
    }

    #[test]
    fn test_ai_move_ignored_outside_ai_phase() {
        let session = Session::new(Board::starting_position(), 50);
        let transition = session.apply_ai_move(Some(checkers_move!((2, 1) => (3, 2))));
        assert_eq!(transition.session, session);
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn test_red_wins_by_capturing_last_piece() {
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
        let session = Session::new(board, 50);
        let transition = play(&session, square(4, 3), square(2, 5));
        let next = &transition.session;

        assert_eq!(next.phase(), Phase::GameOver);
        assert_eq!(next.winner(), Some(Player::Red));
        assert_eq!(next.turn(), Player::Black);
        assert!(next.score_awarded());
        assert_eq!(
            transition.effects,
            vec![SessionEffect::ReportGameEnd { points: 50 }]
        );
        assert_eq!(next.render_model().status_line(), "Winner: You!");
    }

    #[test]
    fn test_red_wins_by_blocking() {
        // Black's only man sits on red's back rank and cannot move forward.
        let board = checkers_position! {
            ........
            ........
            ........
            ........
            ........
            ..r.....
            ........
            b.......
        };
        let session = Session::new(board, 30);
        let transition = play(&session, square(5, 2), square(4, 1));
        assert_eq!(transition.session.winner(), Some(Player::Red));
        assert_eq!(
            transition.effects,
            vec![SessionEffect::ReportGameEnd { points: 30 }]
        );
    }

    #[test]
    fn test_computer_without_move_loses() {
        let session = Session::new(Board::starting_position(), 50);
        let thinking = play(&session, square(5, 2), square(4, 3)).session;

        let transition = thinking.apply_ai_move(None);
        assert_eq!(transition.session.phase(), Phase::GameOver);
        assert_eq!(transition.session.winner(), Some(Player::Red));
        assert_eq!(
            transition.effects,
            vec![SessionEffect::ReportGameEnd { points: 50 }]
        );
    }

    #[test]
    fn test_black_win_is_not_reported() {
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
        let session = Session::new(board, 50);
        let thinking = play(&session, square(5, 2), square(4, 3)).session;
        assert_eq!(thinking.phase(), Phase::AiThinking);

        let transition = thinking.apply_ai_move(Some(checkers_move!((3, 4) => (5, 2))));
        assert_eq!(transition.session.phase(), Phase::GameOver);
        assert_eq!(transition.session.winner(), Some(Player::Black));
        assert!(!transition.session.score_awarded());
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn test_finished_game_ignores_input() {
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
        let over = play(&Session::new(board, 50), square(4, 3), square(2, 5)).session;

        assert_eq!(over.click(square(2, 5)).session, over);
        let transition = over.apply_ai_move(None);
        assert!(transition.effects.is_empty());
        assert_eq!(transition.session, over);
    }

    #[test]
    fn test_reset_starts_next_generation() {
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
        let over = play(&Session::new(board, 50), square(4, 3), square(2, 5)).session;
        assert!(over.score_awarded());

        let fresh = over.reset();
        assert_eq!(fresh.generation(), 1);
        assert_eq!(fresh.board(), &board);
        assert_eq!(fresh.phase(), Phase::HumanTurn);
        assert_eq!(fresh.winner(), None);
        assert!(!fresh.score_awarded());

        // The award is available again in the new game.
        let transition = play(&fresh, square(4, 3), square(2, 5));
        assert_eq!(
            transition.effects,
            vec![SessionEffect::ReportGameEnd { points: 50 }]
        );
        assert_eq!(transition.session.reset().generation(), 2);
    }
}
