//! Legal pawn destinations from grid contents: advances and diagonal
//! captures. En passant needs the previous move and is added by
//! `GameState`.

use crate::board::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

pub fn pawn_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut out = Vec::new();
    let Some(color) = color_of_code(board.get_piece(from)) else {
        return out;
    };
    let (file, rank) = (file_of(from), rank_of(from));
    let forward = color.sign();

    if let Some(one_step) = square_at(file, rank + forward) {
        if board.get_piece(one_step) == EMPTY {
            if board.is_valid_move(Move::from_squares(from, one_step)) {
                out.push(one_step);
            }

            // The double step is checked on its own: it may block a check the
            // single step does not.
            if rank == color.pawn_rank() {
                if let Some(two_step) = square_at(file, rank + 2 * forward) {
                    if board.get_piece(two_step) == EMPTY
                        && board.is_valid_move(Move::from_squares(from, two_step))
                    {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_file in [-1, 1] {
        let Some(target) = square_at(file + d_file, rank + forward) else {
            continue;
        };
        let capture = Move::from_squares(from, target);
        if board.is_take(capture) && board.is_possible_valid_move(capture) {
            out.push(target);
        }
    }

    out
}
