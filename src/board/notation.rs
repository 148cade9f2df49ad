//! Board-level notation: Forsyth placement strings and short algebraic
//! notation (SAN) for moves about to be played.

use crate::board::board::Board;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{file_to_char, rank_to_char, square_to_algebraic};

impl Board {
    /// Placement field of FEN, eighth rank first, followed by a single space.
    /// No side-to-move, castling or en-passant fields.
    pub fn get_forsyth(&self) -> String {
        let mut forsyth = String::with_capacity(72);

        for rank in (0..8).rev() {
            let mut file = 0;
            while file < 8 {
                let piece = self.get_piece_at(file, rank);
                let (gap, _) = self.search_direction(file, rank, 1, 0);

                if let Some(ch) = piece_to_char(piece) {
                    forsyth.push(ch);
                    if gap > 0 {
                        forsyth.push_str(&gap.to_string());
                    }
                } else {
                    forsyth.push_str(&(gap + 1).to_string());
                }
                file += gap as i8 + 1;
            }

            if rank > 0 {
                forsyth.push('/');
            }
        }

        forsyth.push(' ');
        forsyth
    }

    /// Short algebraic notation for `mv`, without check or mate suffixes.
    /// Must be called before the move is made.
    pub fn get_san(&self, mv: Move) -> Result<String, ChessErrors> {
        let normal = match mv {
            Move::Castle {
                side: CastleSide::KingSide,
                ..
            } => return Ok("O-O".to_owned()),
            Move::Castle {
                side: CastleSide::QueenSide,
                ..
            } => return Ok("O-O-O".to_owned()),
            Move::Normal(normal) => normal,
        };

        let kind = piece_kind_from_code(self.get_piece(normal.from))
            .ok_or(ChessErrors::EmptyOriginSquare(normal.from))?;
        let is_capture = self.is_take(mv) || self.is_passant_move(mv).is_some();

        let mut san = String::new();
        if kind == PieceKind::Pawn {
            if is_capture {
                san.push(file_to_char(normal.from_file())?);
            }
        } else {
            san.push(kind.letter());
            san.push_str(&self.get_clarification_str(mv)?);
        }

        if is_capture {
            san.push('x');
        }
        san.push_str(&square_to_algebraic(normal.to)?);
        Ok(san)
    }

    /// Disambiguation for a non-pawn move: the origin file if another piece
    /// of the same type and color can reach the destination from a
    /// different file, the origin rank if one can from the same file.
    fn get_clarification_str(&self, mv: Move) -> Result<String, ChessErrors> {
        let Some(normal) = mv.normal() else {
            return Ok(String::new());
        };
        let piece = self.get_piece(normal.from);
        let Some(color) = color_of_code(piece) else {
            return Err(ChessErrors::EmptyOriginSquare(normal.from));
        };

        let mut need_file = false;
        let mut need_rank = false;

        let rivals =
            (0..64u8).filter(|square| *square != normal.from && self.get_piece(*square) == piece);
        for rival in rivals {
            if self.get_piece_moves(color, rival).contains(&normal.to) {
                if file_of(rival) != normal.from_file() {
                    need_file = true;
                } else {
                    need_rank = true;
                }
            }
        }

        let mut out = String::new();
        if need_file {
            out.push(file_to_char(normal.from_file())?);
        }
        if need_rank {
            out.push(rank_to_char(normal.from_rank())?);
        }
        Ok(out)
    }
}
