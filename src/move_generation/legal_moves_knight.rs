//! Legal knight destinations.

use crate::board::board::Board;
use crate::board::ray_scan::KNIGHT_OFFSETS;
use crate::game_state::chess_types::Square;
use crate::move_generation::legal_moves_king::offset_moves;

pub fn knight_moves(board: &Board, from: Square) -> Vec<Square> {
    offset_moves(board, from, &KNIGHT_OFFSETS)
}
