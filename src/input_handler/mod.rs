//! Typed commands for the plain-text game loop.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Square;

static NEW_GAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i)^(n|new|new game)$").expect("NEW_GAME_RE regex should be valid"));
static QUIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("(?i)^(q|quit|exit)$").expect("QUIT_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?} (expected `row,col`, `new` or `quit`)")]
    InvalidInput { input: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayInput {
    Click(Square),
    NewGame,
    Quit,
}

impl FromStr for PlayInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();

        if NEW_GAME_RE.is_match(trimmed) {
            return Ok(PlayInput::NewGame);
        }

        if QUIT_RE.is_match(trimmed) {
            return Ok(PlayInput::Quit);
        }

        trimmed
            .parse::<Square>()
            .map(PlayInput::Click)
            .map_err(|_| InputError::InvalidInput {
                input: input.to_string(),
            })
    }
}

/// Reads one command from stdin. End of input is treated as `Quit`.
pub fn read_play_input() -> Result<PlayInput, InputError> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) => Ok(PlayInput::Quit),
        Ok(_n) => input.parse(),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}
