//! Chess board representation and rules.
//!
//! A plain 8x8 mailbox board with strictly legal move generation: pseudo-
//! legal moves per piece kind filtered by king safety. Positions are
//! immutable per ply; [`Board::apply`] returns the successor.
//!
//! # Example
//! ```
//! use glasschess::board::Board;
//!
//! let board = Board::new();
//! assert_eq!(board.legal_moves().len(), 20);
//! ```

mod error;
mod fen;
mod movegen;
mod state;
mod types;


pub use error::{FenError, SquareError};
pub use fen::START_FEN;
pub use state::{Board, TerminalState};
pub use types::{CastlingRights, Color, Move, MoveKind, Piece, Square};
