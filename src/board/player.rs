use std::fmt;
use std::str::FromStr;

/// The two sides of a checkers game. Red is the human side and the maximizing
/// player; black is played by the engine and minimizes.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Black];

    pub fn opposite(&self) -> Self {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    pub fn maximize_score(&self) -> bool {
        match self {
            Player::Red => true,
            Player::Black => false,
        }
    }

    pub fn from_maximizing(is_maximizing: bool) -> Self {
        if is_maximizing {
            Player::Red
        } else {
            Player::Black
        }
    }

    /// Row delta a non-king piece of this player moves by.
    pub fn forward(&self) -> i8 {
        match self {
            Player::Red => -1,
            Player::Black => 1,
        }
    }

    /// The row on which a non-king piece of this player is crowned.
    pub fn back_rank(&self) -> u8 {
        match self {
            Player::Red => 0,
            Player::Black => 7,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::Red => "red",
            Player::Black => "black",
        };
        write!(f, "{}", player_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "red" => Ok(Player::Red),
            "black" => Ok(Player::Black),
            _ => Err("invalid player; options are: red, black"),
        }
    }
}
