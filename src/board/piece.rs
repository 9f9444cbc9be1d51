use super::player::Player;
use crate::evaluate::{KING_VALUE, MAN_VALUE};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    pub owner: Player,
    pub is_king: bool,
}

impl Piece {
    pub fn man(owner: Player) -> Self {
        Self {
            owner,
            is_king: false,
        }
    }

    pub fn king(owner: Player) -> Self {
        Self {
            owner,
            is_king: true,
        }
    }

    pub fn crowned(self) -> Self {
        Self::king(self.owner)
    }

    /// Material value, always positive.
    pub fn value(&self) -> i16 {
        if self.is_king {
            KING_VALUE
        } else {
            MAN_VALUE
        }
    }

    pub fn to_char(&self) -> char {
        match (self.owner, self.is_king) {
            (Player::Red, false) => 'r',
            (Player::Red, true) => 'R',
            (Player::Black, false) => 'b',
            (Player::Black, true) => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c {
            'r' => Some(Piece::man(Player::Red)),
            'R' => Some(Piece::king(Player::Red)),
            'b' => Some(Piece::man(Player::Black)),
            'B' => Some(Piece::king(Player::Black)),
            _ => None,
        }
    }

    pub fn to_unicode_char(&self) -> char {
        if self.is_king {
            '◉'
        } else {
            '●'
        }
    }
}
