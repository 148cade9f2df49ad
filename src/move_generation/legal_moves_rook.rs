//! Legal rook destinations.

use crate::board::board::Board;
use crate::board::ray_scan::ORTHOGONAL_DIRECTIONS;
use crate::game_state::chess_types::Square;

pub fn rook_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    for (d_file, d_rank) in ORTHOGONAL_DIRECTIONS {
        board.collect_ray_moves(from, d_file, d_rank, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::board::board::Board;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    #[test]
    fn rook_on_open_board_reaches_fourteen_squares() {
        let mut board = Board::empty();
        let d4 = algebraic_to_square("d4").expect("d4");
        board.place_piece(d4, WHITE_ROOK);
        board.place_piece(algebraic_to_square("a1").expect("a1"), WHITE_KING);
        board.place_piece(algebraic_to_square("h8").expect("h8"), BLACK_KING);

        assert_eq!(rook_moves(&board, d4).len(), 14);
    }

    #[test]
    fn pinned_rook_stays_on_the_pin_line() {
        let mut board = Board::empty();
        let e2 = algebraic_to_square("e2").expect("e2");
        board.place_piece(algebraic_to_square("e1").expect("e1"), WHITE_KING);
        board.place_piece(e2, WHITE_ROOK);
        board.place_piece(algebraic_to_square("e6").expect("e6"), BLACK_QUEEN);
        board.place_piece(algebraic_to_square("a8").expect("a8"), BLACK_KING);

        let moves = rook_moves(&board, e2);
        // e3, e4, e5 and the capture on e6.
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|square| square % 8 == 4));
    }
}
