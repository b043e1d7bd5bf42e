use std::fmt;

/// The content of a single tile, doubling as the player whose turn it is
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Piece {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Piece {
    /// The other player. `Empty` has no opponent and maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Piece::PlayerOne => Piece::PlayerTwo,
            Piece::PlayerTwo => Piece::PlayerOne,
            Piece::Empty => Piece::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    /// Single character used when rendering a board
    pub fn symbol(self) -> char {
        match self {
            Piece::PlayerOne => 'X',
            Piece::PlayerTwo => 'O',
            Piece::Empty => ' ',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::PlayerOne => write!(f, "Player 1"),
            Piece::PlayerTwo => write!(f, "Player 2"),
            Piece::Empty => write!(f, "Nobody"),
        }
    }
}
