//! Common types re-exported for convenience.

pub use crate::board::{Board, BoardError, Piece, Player, Square};
pub use crate::checkers_move::{Move, MoveList};
pub use crate::game::controller::{GameController, SessionEvent};
pub use crate::game::engine::{Engine, EngineConfig, EngineError};
pub use crate::game::scoring::{LogScoreReporter, ScoreReporter};
pub use crate::game::session::{Phase, RenderModel, Session, SessionEffect};
pub use crate::move_generator::generate_moves;
pub use crate::searcher::{minimax, SearchContext, SearchResult, SearchStrategy};
