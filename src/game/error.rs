//! Game-level errors.

use std::fmt;

use crate::board::{Piece, Square};

/// Error type for game commands. Every variant is recoverable: the game
/// state is left exactly as it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The requested move is not in the current legal move set.
    IllegalMove {
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    },
    /// The game has already ended; no further moves are accepted.
    GameOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::IllegalMove {
                from,
                to,
                promotion,
            } => match promotion {
                Some(piece) => write!(f, "illegal move {from}{to} promoting to {piece}"),
                None => write!(f, "illegal move {from}{to}"),
            },
            GameError::GameOver => write!(f, "the game is over"),
        }
    }
}

impl std::error::Error for GameError {}
