//! Legal queen destinations: the rook and bishop rays combined.

use crate::board::board::Board;
use crate::board::ray_scan::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::game_state::chess_types::Square;

pub fn queen_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    for (d_file, d_rank) in ORTHOGONAL_DIRECTIONS.into_iter().chain(DIAGONAL_DIRECTIONS) {
        board.collect_ray_moves(from, d_file, d_rank, &mut out);
    }
    out
}
