//! FEN parsing and generation.

use std::str::FromStr;

use super::error::FenError;
use super::types::{CastlingRights, Color, Piece, Square};
use super::Board;

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Parse a FEN string. The halfmove and fullmove fields are optional
    /// and default to 0 and 1.
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();

        // Piece placement: ranks come 8 down to 1.
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }
        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::InvalidRank { rank });
                    }
                    board.squares[rank][file] = Some((color, piece));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::InvalidRank { rank });
            }
        }

        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        board.castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => board.castling.grant(Color::White, true),
                    'Q' => board.castling.grant(Color::White, false),
                    'k' => board.castling.grant(Color::Black, true),
                    'q' => board.castling.grant(Color::Black, false),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                }
            }
        }

        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq = Square::from_str(parts[3]).map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            Some(sq)
        };

        board.halfmove_clock = match parts.get(4) {
            Some(s) => s.parse().map_err(|_| FenError::InvalidCounter {
                found: (*s).to_string(),
            })?,
            None => 0,
        };
        board.fullmove_number = match parts.get(5) {
            Some(s) => s.parse().map_err(|_| FenError::InvalidCounter {
                found: (*s).to_string(),
            })?,
            None => 1,
        };

        board.check_king_counts()?;
        Ok(board)
    }

    /// Exactly one king per side; anything else cannot come from legal play.
    fn check_king_counts(&self) -> Result<(), FenError> {
        for (color, name) in [(Color::White, "white"), (Color::Black, "black")] {
            let found = Square::all()
                .filter(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
                .count();
            if found != 1 {
                return Err(FenError::BadKingCount { color: name, found });
            }
        }
        Ok(())
    }

    /// Render this position as a FEN string.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.squares[rank][file] {
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            fen.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                fen.push_str(&empty_run.to_string());
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let rights = [
            (Color::White, true, 'K'),
            (Color::White, false, 'Q'),
            (Color::Black, true, 'k'),
            (Color::Black, false, 'q'),
        ];
        let mut any = false;
        for (color, kingside, c) in rights {
            if self.castling.has(color, kingside) {
                fen.push(c);
                any = true;
            }
        }
        if !any {
            fen.push('-');
        }

        fen.push(' ');
        match self.en_passant_target {
            Some(sq) => fen.push_str(&sq.to_string()),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        fen
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_fen(s)
    }
}
