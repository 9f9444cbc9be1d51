pub const MAN_VALUE: i16 = 1;
pub const KING_VALUE: i16 = 2;
