//! Perft: exhaustive legal-move tree counts used to verify move generation.
//!
//! Promotions branch into one child per promotion piece so totals match
//! published perft tables.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{PieceKind, PROMOTION_KINDS};
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in game_state.get_player_moves(game_state.side_to_move) {
        for promotion in promotion_choices(game_state, mv) {
            let mut child = game_state.clone();
            child.play_move(mv, promotion)?;

            if depth == 1 {
                total.merge(leaf_counts(game_state, mv, promotion));
            } else {
                total.merge(perft(&child, depth - 1)?);
            }
        }
    }

    Ok(total)
}

/// Root moves with the node count below each, in move order. Useful for
/// narrowing down a perft mismatch.
pub fn perft_divide(
    game_state: &GameState,
    depth: u8,
) -> Result<Vec<(Move, Option<PieceKind>, usize)>, ChessErrors> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in game_state.get_player_moves(game_state.side_to_move) {
        for promotion in promotion_choices(game_state, mv) {
            let mut child = game_state.clone();
            child.play_move(mv, promotion)?;
            out.push((mv, promotion, perft(&child, depth - 1)?.nodes));
        }
    }

    Ok(out)
}

fn promotion_choices(game_state: &GameState, mv: Move) -> Vec<Option<PieceKind>> {
    if game_state.needs_promotion(mv) {
        PROMOTION_KINDS.iter().copied().map(Some).collect()
    } else {
        vec![None]
    }
}

/// Tallies for one leaf move, classified on the position before it is made.
fn leaf_counts(game_state: &GameState, mv: Move, promotion: Option<PieceKind>) -> PerftCounts {
    let board = &game_state.board;
    let en_passant = board.is_passant_move(mv).is_some();

    PerftCounts {
        nodes: 1,
        captures: usize::from(board.is_take(mv) || en_passant),
        en_passant: usize::from(en_passant),
        castles: usize::from(mv.is_castle()),
        promotions: usize::from(promotion.is_some()),
    }
}
