//! Legal king destinations, excluding castling (see `legal_move_generator`).

use crate::board::board::Board;
use crate::board::ray_scan::KING_OFFSETS;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub fn king_moves(board: &Board, from: Square) -> Vec<Square> {
    offset_moves(board, from, &KING_OFFSETS)
}

/// Single-step destinations at each `(d_file, d_rank)` offset that pass
/// `is_possible_valid_move`. Shared with knight enumeration.
pub(crate) fn offset_moves(board: &Board, from: Square, offsets: &[(i8, i8)]) -> Vec<Square> {
    let (file, rank) = (file_of(from), rank_of(from));

    offsets
        .iter()
        .filter_map(|(d_file, d_rank)| square_at(file + d_file, rank + d_rank))
        .filter(|to| board.is_possible_valid_move(Move::from_squares(from, *to)))
        .collect()
}
