//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting position, rook home squares used
//! by castling-right bookkeeping, and the fifty-move threshold.

use crate::game_state::chess_types::Square;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Placement field of the starting position as rendered by `Board::get_forsyth`.
pub const STARTING_POSITION_FORSYTH: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR ";

/// File both kings start on.
pub const KING_HOME_FILE: i8 = 4;

pub const WHITE_QUEENSIDE_ROOK_HOME: Square = 0;
pub const WHITE_KINGSIDE_ROOK_HOME: Square = 7;
pub const BLACK_QUEENSIDE_ROOK_HOME: Square = 56;
pub const BLACK_KINGSIDE_ROOK_HOME: Square = 63;

/// Half-move clock value at which the game is drawn (fifty moves per side).
pub const FIFTY_MOVE_LIMIT: u16 = 100;
