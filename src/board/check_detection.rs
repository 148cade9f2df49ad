//! Check detection by radiating outward from the king.

use crate::board::board::Board;
use crate::board::ray_scan::{
    DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS,
};
use crate::game_state::chess_types::*;

impl Board {
    /// True if the king of `color` is attacked.
    ///
    /// Scans the eight rays for sliding attackers, the knight offsets, the
    /// two pawn diagonals and the adjacent squares for the enemy king. With
    /// no king of `color` on the board this returns false.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.find_king(color) else {
            return false;
        };
        let enemy = color.opposite();
        let (file, rank) = (file_of(king), rank_of(king));

        let queen = piece_code(enemy, PieceKind::Queen);
        let rook = piece_code(enemy, PieceKind::Rook);
        let bishop = piece_code(enemy, PieceKind::Bishop);
        let knight = piece_code(enemy, PieceKind::Knight);
        let pawn = piece_code(enemy, PieceKind::Pawn);
        let enemy_king = piece_code(enemy, PieceKind::King);

        for (d_file, d_rank) in ORTHOGONAL_DIRECTIONS {
            let (_, found) = self.search_direction(file, rank, d_file, d_rank);
            if found == queen || found == rook {
                return true;
            }
        }

        for (d_file, d_rank) in DIAGONAL_DIRECTIONS {
            let (_, found) = self.search_direction(file, rank, d_file, d_rank);
            if found == queen || found == bishop {
                return true;
            }
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|(df, dr)| self.get_piece_at(file + df, rank + dr) == knight)
        {
            return true;
        }

        // Enemy pawns capture toward this side's back rank, so they sit one
        // rank further along this side's forward direction.
        let pawn_rank = rank + color.sign();
        if self.get_piece_at(file - 1, pawn_rank) == pawn
            || self.get_piece_at(file + 1, pawn_rank) == pawn
        {
            return true;
        }

        KING_OFFSETS
            .iter()
            .any(|(df, dr)| self.get_piece_at(file + df, rank + dr) == enemy_king)
    }
}
