//! Zobrist hashing for positions.
//!
//! Keys are generated once from a fixed-seed RNG so hashes are reproducible
//! across runs and platforms. The hash feeds the game controller's
//! repetition bookkeeping; nothing in evaluation or search depends on it.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, Color, Piece, Square};

struct ZobristKeys {
    /// piece_keys[piece][color][square]
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    /// castling_keys[color][side]: 0 = kingside, 1 = queenside
    castling_keys: [[u64; 2]; 2],
    /// en_passant_keys[file]; only the file matters for the target square
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed for reproducibility.
        let mut rng = StdRng::seed_from_u64(0x5eed_cafe_f00d_u64);

        let mut piece_keys = [[[0u64; 64]; 2]; 6];
        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        let mut castling_keys = [[0u64; 2]; 2];
        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        let mut en_passant_keys = [0u64; 8];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Hash a full position. The mailbox board is small enough that a full
/// recompute per position beats carrying incremental state through `apply`.
pub(crate) fn hash_board(board: &Board) -> u64 {
    let keys = &*ZOBRIST;
    let mut hash = 0u64;

    for sq in Square::all() {
        if let Some((color, piece)) = board.piece_at(sq) {
            hash ^= keys.piece_keys[piece.index()][color.index()][sq.as_index()];
        }
    }

    if board.side_to_move() == Color::Black {
        hash ^= keys.black_to_move_key;
    }

    for color in [Color::White, Color::Black] {
        if board.castling_rights().has(color, true) {
            hash ^= keys.castling_keys[color.index()][0];
        }
        if board.castling_rights().has(color, false) {
            hash ^= keys.castling_keys[color.index()][1];
        }
    }

    if let Some(target) = board.en_passant_target() {
        hash ^= keys.en_passant_keys[target.file()];
    }

    hash
}
