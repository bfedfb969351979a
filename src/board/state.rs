//! Board state and rule queries.
//!
//! The board is a plain 8x8 mailbox: each cell holds an optional
//! (color, piece) pair. Positions are immutable per ply; [`Board::apply`]
//! returns the successor position and never touches `self`.

use crate::zobrist;

use super::movegen::{DIAGONAL_DIRS, KNIGHT_OFFSETS, STRAIGHT_DIRS};
use super::types::{CastlingRights, Color, Move, MoveKind, Piece, Square};

/// Why a position has no continuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalState {
    /// Side to move is in check with no legal moves.
    Checkmate,
    /// Side to move has no legal moves but is not in check.
    Stalemate,
    /// Fifty full moves (100 plies) without a pawn move or capture.
    FiftyMoveRule,
    /// Neither side can possibly deliver mate.
    InsufficientMaterial,
}

/// A complete chess position.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            board.squares[0][file] = Some((Color::White, *piece));
            board.squares[1][file] = Some((Color::White, Piece::Pawn));
            board.squares[6][file] = Some((Color::Black, Piece::Pawn));
            board.squares[7][file] = Some((Color::Black, *piece));
        }
        board.castling = CastlingRights::all();
        board
    }

    /// An empty board with no pieces and no castling rights. Only useful as
    /// a base for FEN parsing and tests; it violates the king invariant
    /// until kings are placed.
    #[must_use]
    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// The side whose turn it is.
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Contents of a square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub(crate) fn is_empty_square(&self, sq: Square) -> bool {
        self.squares[sq.rank()][sq.file()].is_none()
    }

    /// Locate the king of the given color.
    ///
    /// Every reachable position has exactly one king per side; a missing
    /// king means move application corrupted the position, which is a bug
    /// worth dying loudly for rather than returning a plausible answer.
    #[must_use]
    pub(crate) fn king_square(&self, color: Color) -> Square {
        for sq in Square::all() {
            if self.piece_at(sq) == Some((color, Piece::King)) {
                return sq;
            }
        }
        panic!("invariant violated: no {color} king on the board");
    }

    /// Whether `attacker` attacks the given square.
    #[must_use]
    pub(crate) fn is_square_attacked(&self, target: Square, attacker: Color) -> bool {
        // Knights.
        for (dr, df) in KNIGHT_OFFSETS {
            if let Some(sq) = target.offset(dr, df) {
                if self.piece_at(sq) == Some((attacker, Piece::Knight)) {
                    return true;
                }
            }
        }

        // Adjacent king.
        for dr in -1..=1 {
            for df in -1..=1 {
                if dr == 0 && df == 0 {
                    continue;
                }
                if let Some(sq) = target.offset(dr, df) {
                    if self.piece_at(sq) == Some((attacker, Piece::King)) {
                        return true;
                    }
                }
            }
        }

        // Pawns: an attacking pawn sits one rank behind the target square
        // relative to its own push direction.
        let pawn_dir: isize = if attacker == Color::White { 1 } else { -1 };
        for df in [-1, 1] {
            if let Some(sq) = target.offset(-pawn_dir, df) {
                if self.piece_at(sq) == Some((attacker, Piece::Pawn)) {
                    return true;
                }
            }
        }

        // Sliders: walk each ray until the first occupied square.
        for (dirs, slider) in [(STRAIGHT_DIRS, Piece::Rook), (DIAGONAL_DIRS, Piece::Bishop)] {
            for (dr, df) in dirs {
                let mut current = target;
                while let Some(sq) = current.offset(dr, df) {
                    if let Some((color, piece)) = self.piece_at(sq) {
                        if color == attacker && (piece == slider || piece == Piece::Queen) {
                            return true;
                        }
                        break;
                    }
                    current = sq;
                }
            }
        }

        false
    }

    /// Whether the given side's king is attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }

    /// Apply a move, returning the successor position.
    ///
    /// `mv` must be a member of this position's legal move set; the move
    /// generator is the only source of `Move` values.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Board {
        debug_assert!(
            self.piece_at(mv.from).map(|(c, _)| c) == Some(self.side_to_move),
            "apply called with a move not belonging to the side to move"
        );

        let mut next = self.clone();
        next.apply_in_place(mv);
        next
    }

    fn apply_in_place(&mut self, mv: Move) {
        let mover = self.side_to_move;
        let Some((_, piece)) = self.piece_at(mv.from) else {
            panic!("invariant violated: apply from an empty square {}", mv.from);
        };

        let is_capture = !self.is_empty_square(mv.to) || mv.kind == MoveKind::EnPassant;

        // En passant removes the captured pawn from its own rank, not the
        // target square.
        if mv.kind == MoveKind::EnPassant {
            self.squares[mv.from.rank()][mv.to.file()] = None;
        }

        // Move the piece, swapping in the promotion piece if any.
        let placed = match mv.promotion {
            Some(promo) => (mover, promo),
            None => (mover, piece),
        };
        self.squares[mv.to.rank()][mv.to.file()] = Some(placed);
        self.squares[mv.from.rank()][mv.from.file()] = None;

        // Castling also moves the rook.
        match mv.kind {
            MoveKind::CastleKingside => {
                let rank = mv.from.rank();
                self.squares[rank][5] = self.squares[rank][7].take();
            }
            MoveKind::CastleQueenside => {
                let rank = mv.from.rank();
                self.squares[rank][3] = self.squares[rank][0].take();
            }
            _ => {}
        }

        // Castling rights go away for good once the king or a rook moves,
        // or a rook is captured on its home square.
        if piece == Piece::King {
            self.castling.revoke_both(mover);
        }
        if piece == Piece::Rook {
            let home_rank = if mover == Color::White { 0 } else { 7 };
            if mv.from.rank() == home_rank {
                match mv.from.file() {
                    0 => self.castling.revoke(mover, false),
                    7 => self.castling.revoke(mover, true),
                    _ => {}
                }
            }
        }
        match (mv.to.rank(), mv.to.file()) {
            (0, 0) => self.castling.revoke(Color::White, false),
            (0, 7) => self.castling.revoke(Color::White, true),
            (7, 0) => self.castling.revoke(Color::Black, false),
            (7, 7) => self.castling.revoke(Color::Black, true),
            _ => {}
        }

        // En-passant target only survives for the immediately following move.
        self.en_passant_target = if mv.kind == MoveKind::DoublePawnPush {
            Some(Square((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()))
        } else {
            None
        };

        if piece == Piece::Pawn || is_capture {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        if mover == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = mover.opponent();
    }

    /// Terminal status of this position, or `None` if play continues.
    ///
    /// Always computed fresh from the current state; nothing caches it
    /// because any `apply` would invalidate the cache.
    #[must_use]
    pub fn terminal_state(&self) -> Option<TerminalState> {
        if self.halfmove_clock >= 100 {
            return Some(TerminalState::FiftyMoveRule);
        }
        if self.has_insufficient_material() {
            return Some(TerminalState::InsufficientMaterial);
        }
        if self.legal_moves().is_empty() {
            return Some(if self.is_in_check(self.side_to_move) {
                TerminalState::Checkmate
            } else {
                TerminalState::Stalemate
            });
        }
        None
    }

    /// King vs king, or king + single minor piece vs bare king.
    #[must_use]
    pub(crate) fn has_insufficient_material(&self) -> bool {
        let mut white = Vec::new();
        let mut black = Vec::new();
        for sq in Square::all() {
            match self.piece_at(sq) {
                Some((Color::White, piece)) => white.push(piece),
                Some((Color::Black, piece)) => black.push(piece),
                None => {}
            }
        }

        let is_minor = |p: &Piece| matches!(p, Piece::Bishop | Piece::Knight);
        match (white.len(), black.len()) {
            (1, 1) => true,
            (1, 2) => black.iter().any(is_minor),
            (2, 1) => white.iter().any(is_minor),
            _ => false,
        }
    }

    /// Position hash for repetition bookkeeping. Covers piece placement,
    /// side to move, castling rights, and the en-passant target.
    #[must_use]
    pub fn zobrist_hash(&self) -> u64 {
        zobrist::hash_board(self)
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    /// Standard validation tool for the move generator.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .map(|mv| self.apply(mv).perft(depth - 1))
            .sum()
    }
}
