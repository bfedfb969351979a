//! Explainable chess engine.
//!
//! The engine is consumed through a single stateful [`Game`] handle: the host
//! applies player moves, requests engine moves and hints, and toggles the
//! named evaluation modules that make up the score. Every score the engine
//! reports can be broken down into per-module contributions.
//!
//! The crate is synchronous and single-threaded by contract: every call runs
//! to completion on the caller's thread, and a `Game` instance owns all of
//! its mutable state. Hosts that need asynchrony put the handle behind their
//! own queue.
//!
//! # Example
//! ```
//! use glasschess::{Game, Square};
//!
//! let mut game = Game::new();
//! game.make_move(Square(1, 4), Square(3, 4), None).unwrap(); // e2e4
//! let reply = game.make_ai_move();
//! assert!(reply.mv.is_some());
//! ```

pub mod board;
pub mod eval;
pub mod game;
pub mod search;

mod zobrist;

pub use board::{
    Board, CastlingRights, Color, FenError, Move, MoveKind, Piece, Square, SquareError,
    TerminalState, START_FEN,
};
pub use eval::{EvalBreakdown, ModuleScore, Weights, MODULE_NAMES};
pub use game::{
    AiMoveOutcome, BoardState, ConfigError, EngineConfig, Game, GameError, GameStatus,
};
pub use search::{SearchResult, AUTO_DEEPEN_CEILING, MAX_DEPTH};

/// Crate version, retrievable without constructing an engine instance.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
