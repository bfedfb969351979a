//! Stateful game controller.
//!
//! [`Game`] is the single host-facing handle: it owns the current position,
//! the engine configuration, the move history, and the bookkeeping the
//! position itself does not carry (captured pieces, repetition counts).
//! Commands either mutate that state and return the refreshed
//! [`BoardState`], or fail with a recoverable error and leave everything
//! untouched.
//!
//! All calls are synchronous and run on the caller's thread.

mod config;
mod error;

pub use config::{ConfigError, EngineConfig};
pub use error::GameError;

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, FenError, Move, Piece, Square, TerminalState};
use crate::eval::{self, EvalBreakdown};
use crate::search::{self, SearchResult, MAX_DEPTH};

/// Where the game stands after the latest move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveRule,
    InsufficientMaterial,
    /// The same position occurred three times with the same side to move,
    /// castling rights, and en-passant target.
    Repetition,
}

impl GameStatus {
    /// Whether play continues.
    #[inline]
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }
}

/// Snapshot of everything a host needs to render the game: the grid, whose
/// turn it is, check and termination status, the full legal move set, the
/// captured pieces per side, and the last move played.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardState {
    /// `squares[rank][file]`, rank 0 = White's back rank.
    pub squares: [[Option<(Color, Piece)>; 8]; 8],
    pub side_to_move: Color,
    pub in_check: bool,
    pub status: GameStatus,
    /// Legal moves for the side to move; empty once the game is over.
    pub legal_moves: Vec<Move>,
    /// Pieces White has captured, in capture order.
    pub captured_by_white: Vec<Piece>,
    /// Pieces Black has captured, in capture order.
    pub captured_by_black: Vec<Piece>,
    pub last_move: Option<(Square, Square)>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// Result of [`Game::make_ai_move`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AiMoveOutcome {
    /// Board state after the engine's move (or unchanged when `mv` is
    /// `None`).
    pub state: BoardState,
    /// The move played, or `None` when the game was already over.
    pub mv: Option<Move>,
    /// Search score of the chosen line, from the mover's perspective.
    pub score: f64,
    /// Leaf evaluations the deciding search performed.
    pub evals: u64,
    /// Depth in plies the deciding search reached.
    pub depth: u32,
}

/// A full game of chess against (or between) engines.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    config: EngineConfig,
    history: Vec<Move>,
    // Zobrist hash -> occurrence count, for threefold repetition.
    position_counts: HashMap<u64, u32>,
    captured_by_white: Vec<Piece>,
    captured_by_black: Vec<Piece>,
    last_move: Option<(Square, Square)>,
    last_evals: u64,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A new game from the standard starting position with the default
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Game::from_board(Board::new())
    }

    /// Start a game from an arbitrary FEN position.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Game::from_board(Board::from_fen(fen)?))
    }

    fn from_board(board: Board) -> Self {
        let mut position_counts = HashMap::new();
        position_counts.insert(board.zobrist_hash(), 1);
        Game {
            board,
            config: EngineConfig::default(),
            history: Vec::new(),
            position_counts,
            captured_by_white: Vec::new(),
            captured_by_black: Vec::new(),
            last_move: None,
            last_evals: 0,
        }
    }

    /// The current position.
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The current engine configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Moves played so far, in order.
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Leaf evaluations performed by the most recent [`Game::make_ai_move`]
    /// search. Zero before the first engine move; hints do not update it.
    #[inline]
    #[must_use]
    pub const fn last_evals(&self) -> u64 {
        self.last_evals
    }

    /// Current game status, recomputed from the position and the
    /// repetition counts.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if let Some(terminal) = self.board.terminal_state() {
            return match terminal {
                TerminalState::Checkmate => GameStatus::Checkmate {
                    winner: self.board.side_to_move().opponent(),
                },
                TerminalState::Stalemate => GameStatus::Stalemate,
                TerminalState::FiftyMoveRule => GameStatus::FiftyMoveRule,
                TerminalState::InsufficientMaterial => GameStatus::InsufficientMaterial,
            };
        }
        let count = self
            .position_counts
            .get(&self.board.zobrist_hash())
            .copied()
            .unwrap_or(0);
        if count >= 3 {
            return GameStatus::Repetition;
        }
        GameStatus::InProgress
    }

    /// Full renderable snapshot of the game.
    #[must_use]
    pub fn board_state(&self) -> BoardState {
        let status = self.status();
        let legal_moves = if status.is_in_progress() {
            self.board.legal_moves()
        } else {
            Vec::new()
        };
        let mut squares = [[None; 8]; 8];
        for sq in Square::all() {
            squares[sq.rank()][sq.file()] = self.board.piece_at(sq);
        }
        BoardState {
            squares,
            side_to_move: self.board.side_to_move(),
            in_check: self.board.is_in_check(self.board.side_to_move()),
            status,
            legal_moves,
            captured_by_white: self.captured_by_white.clone(),
            captured_by_black: self.captured_by_black.clone(),
            last_move: self.last_move,
            halfmove_clock: self.board.halfmove_clock(),
            fullmove_number: self.board.fullmove_number(),
        }
    }

    /// Legal moves originating from one square; empty for empty squares,
    /// opposing pieces, and finished games.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        if self.status().is_in_progress() {
            self.board.legal_moves_from(from)
        } else {
            Vec::new()
        }
    }

    /// Apply a player move described by origin, destination, and an
    /// optional promotion piece.
    ///
    /// A promotion request of `None` on a promoting move defaults to a
    /// queen. On failure the game state is untouched.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<BoardState, GameError> {
        if !self.status().is_in_progress() {
            return Err(GameError::GameOver);
        }
        let mv = self
            .board
            .legal_moves()
            .into_iter()
            .find(|&mv| matches_request(mv, from, to, promotion))
            .ok_or(GameError::IllegalMove {
                from,
                to,
                promotion,
            })?;
        self.play(mv);
        Ok(self.board_state())
    }

    /// Let the engine choose and play a move under the current
    /// configuration.
    ///
    /// On a finished game this is a no-op reporting `mv: None`; a game
    /// being over is an outcome, not an error.
    pub fn make_ai_move(&mut self) -> AiMoveOutcome {
        if !self.status().is_in_progress() {
            return AiMoveOutcome {
                state: self.board_state(),
                mv: None,
                score: 0.0,
                evals: 0,
                depth: 0,
            };
        }
        let result = search::search(&self.board, &self.config);
        self.last_evals = result.evals;
        if let Some(mv) = result.best_move {
            self.play(mv);
        }
        AiMoveOutcome {
            state: self.board_state(),
            mv: result.best_move,
            score: result.score,
            evals: result.evals,
            depth: result.depth,
        }
    }

    /// Best move for the side to move at an explicit depth, without
    /// playing it. The game state, including [`Game::last_evals`], is not
    /// modified.
    pub fn hint(&self, depth: u32) -> Result<SearchResult, ConfigError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(ConfigError::InvalidDepth { depth });
        }
        Ok(search::search_at_depth(&self.board, depth, &self.config))
    }

    /// Per-module evaluation breakdown of the current position.
    #[must_use]
    pub fn eval_breakdown(&self) -> EvalBreakdown {
        eval::evaluate_breakdown(&self.board, &self.config)
    }

    /// Enable or disable an evaluation module by name.
    pub fn set_module(&mut self, name: &str, enabled: bool) -> Result<(), ConfigError> {
        self.config.set_module(name, enabled)
    }

    /// Set the fixed search depth in plies.
    pub fn set_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        self.config.set_depth(depth)
    }

    /// Enable or disable auto-deepening with its minimum-evaluations
    /// threshold.
    pub fn set_auto_deepen(&mut self, enabled: bool, min_evals: u64) -> Result<(), ConfigError> {
        self.config.set_auto_deepen(enabled, min_evals)
    }

    /// Current position as FEN.
    #[must_use]
    pub fn fen(&self) -> String {
        self.board.to_fen()
    }

    fn play(&mut self, mv: Move) {
        if mv.is_capture() {
            // En passant victims are always pawns and sit off the target
            // square.
            let victim = self
                .board
                .piece_at(mv.to)
                .map_or(Piece::Pawn, |(_, piece)| piece);
            match self.board.side_to_move() {
                Color::White => self.captured_by_white.push(victim),
                Color::Black => self.captured_by_black.push(victim),
            }
        }
        self.board = self.board.apply(mv);
        self.history.push(mv);
        self.last_move = Some((mv.from, mv.to));
        *self
            .position_counts
            .entry(self.board.zobrist_hash())
            .or_insert(0) += 1;
    }
}

fn matches_request(mv: Move, from: Square, to: Square, promotion: Option<Piece>) -> bool {
    if mv.from != from || mv.to != to {
        return false;
    }
    match (promotion, mv.promotion) {
        (None, None) => true,
        (None, Some(piece)) => piece == Piece::Queen,
        (Some(requested), Some(piece)) => requested == piece,
        (Some(_), None) => false,
    }
}
