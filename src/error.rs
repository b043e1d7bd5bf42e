/// Errors raised by the rules engine and the search
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move, column {column} is full")]
    ColumnFull { column: usize },

    #[error("invalid move, column {column} out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("no legal moves, the game is already over")]
    NoLegalMove,

    #[error("could not parse '{character}' as a valid move")]
    ParseMove { character: char },

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
