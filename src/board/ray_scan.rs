//! Directional ray scan shared by sliding-piece enumeration, check
//! detection, castling geometry and Forsyth serialization.

use crate::board::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (1, -1),
    (1, 1),
];

impl Board {
    /// Walk from `(file, rank)` (exclusive) one step at a time in the
    /// direction `(d_file, d_rank)`, reduced to unit steps.
    ///
    /// Returns the number of empty squares crossed and the first piece met,
    /// or `EMPTY` if the edge of the board was reached. A zero direction or
    /// an off-board start yields `(0, EMPTY)`.
    pub fn search_direction(
        &self,
        file: i8,
        rank: i8,
        d_file: i8,
        d_rank: i8,
    ) -> (usize, PieceCode) {
        if (d_file == 0 && d_rank == 0) || square_at(file, rank).is_none() {
            return (0, EMPTY);
        }
        let (d_file, d_rank) = (d_file.signum(), d_rank.signum());

        let mut count = 0;
        let mut file = file + d_file;
        let mut rank = rank + d_rank;
        while let Some(square) = square_at(file, rank) {
            let piece = self.get_piece(square);
            if piece != EMPTY {
                return (count, piece);
            }
            count += 1;
            file += d_file;
            rank += d_rank;
        }

        (count, EMPTY)
    }

    /// Ray scan for the piece on `origin` that appends every destination
    /// the piece may legally reach along the ray to `out`.
    ///
    /// Empty squares are offered when `is_valid_move` holds; the scan stops at
    /// the first piece, which is offered only if it is an enemy and the
    /// capture is valid. Returns the piece that stopped the scan, or `EMPTY`.
    pub fn collect_ray_moves(
        &self,
        origin: Square,
        d_file: i8,
        d_rank: i8,
        out: &mut Vec<Square>,
    ) -> PieceCode {
        if d_file == 0 && d_rank == 0 {
            return EMPTY;
        }
        let (d_file, d_rank) = (d_file.signum(), d_rank.signum());

        let mut file = file_of(origin) + d_file;
        let mut rank = rank_of(origin) + d_rank;
        while let Some(target) = square_at(file, rank) {
            let mv = Move::from_squares(origin, target);
            let allowed = self.is_valid_move(mv);
            let piece = self.get_piece(target);

            if piece != EMPTY {
                if allowed && self.is_take(mv) {
                    out.push(target);
                }
                return piece;
            }
            if allowed {
                out.push(target);
            }

            file += d_file;
            rank += d_rank;
        }

        EMPTY
    }
}
