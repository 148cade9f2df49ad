//! Move application for `GameState`.
//!
//! Validates a move against the side to move's legal list, updates castling
//! rights, the en-passant target and the move counters, then moves pieces on
//! the board. The turn is not handed over here; see `GameState::swap_turn`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{
    BLACK_KINGSIDE_ROOK_HOME, BLACK_QUEENSIDE_ROOK_HOME, WHITE_KINGSIDE_ROOK_HOME,
    WHITE_QUEENSIDE_ROOK_HOME,
};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

impl GameState {
    /// Apply `mv` for the side to move. The state is unchanged on error.
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessErrors> {
        let mover = match mv {
            Move::Castle { color, .. } => color,
            Move::Normal(normal) => color_of_code(self.board.get_piece(normal.from))
                .ok_or(ChessErrors::EmptyOriginSquare(normal.from))?,
        };
        if mover != self.side_to_move {
            return Err(ChessErrors::IllegalMove(format!(
                "{mv}: {} is not to move",
                mover.name()
            )));
        }

        let legal = match mv {
            Move::Castle { .. } => self.is_legal_move(mv),
            Move::Normal(normal) => self.get_piece_moves(mover, normal.from).contains(&mv),
        };
        if !legal {
            return Err(ChessErrors::IllegalMove(mv.to_string()));
        }

        self.update_counts(mv, mover);
        self.board.apply_unchecked(mv);
        Ok(())
    }

    /// Bookkeeping for `mv`, read from the board before the move is made.
    fn update_counts(&mut self, mv: Move, mover: Color) {
        let resets_clock = self.board.is_pawn_move(mv)
            || self.board.is_take(mv)
            || self.board.is_passant_move(mv).is_some();

        if self.board.is_king_move(mv) {
            self.castling_rights &= !(castle_right(mover, CastleSide::KingSide)
                | castle_right(mover, CastleSide::QueenSide));
        }
        if let Some(normal) = mv.normal() {
            if self.board.is_rook_move(mv) {
                self.castling_rights &= !rook_home_right(normal.from);
            }
            // A rook captured at home takes its right with it.
            self.castling_rights &= !rook_home_right(normal.to);
        }

        self.en_passant_square = self.board.is_double_pawn_move(mv);

        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        self.ply = self.ply.saturating_add(1);
    }
}

/// Castling right tied to a rook home square, or no rights.
fn rook_home_right(square: Square) -> CastlingRights {
    match square {
        WHITE_QUEENSIDE_ROOK_HOME => CASTLE_WHITE_QUEENSIDE,
        WHITE_KINGSIDE_ROOK_HOME => CASTLE_WHITE_KINGSIDE,
        BLACK_QUEENSIDE_ROOK_HOME => CASTLE_BLACK_QUEENSIDE,
        BLACK_KINGSIDE_ROOK_HOME => CASTLE_BLACK_KINGSIDE,
        _ => 0,
    }
}
