use thiserror::Error;

use crate::board::Coordinate;

/// Errors raised by boards, games and the search.
///
/// A move into an occupied cell or a full column is not an error: `try_move`
/// reports it as `Ok(false)` so input loops can ask again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{coordinate} is outside the {width}x{height} board")]
    OutOfRange {
        coordinate: Coordinate,
        width: usize,
        height: usize,
    },

    #[error("column {column} must be between 1 and {width}")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("{player} may not act now, it is {current}'s turn")]
    OutOfTurn { player: String, current: String },

    #[error("position is not over but produced no child states")]
    NoChildStates,

    #[error("no move available: the game is over or the search depth is zero")]
    NoMoveAvailable,

    #[error("{0} was expected to be legal but the game rejected it")]
    RejectedMove(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
