//! Player abstraction used by the game driver.
//!
//! A player sees the current `GameState` and answers with a move and,
//! when a pawn is about to reach the last rank, a promotion piece. Diagnostic
//! text travels back in `info_lines`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default)]
pub struct PlayerOutput {
    /// `None` only when the player has no legal move to offer.
    pub chosen_move: Option<Move>,
    /// Promotion piece for a promoting pawn move, if the player already knows it.
    pub promotion: Option<PieceKind>,
    pub info_lines: Vec<String>,
}

pub trait Player {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState) -> Result<PlayerOutput, ChessErrors>;

    /// Asked when `choose_move` returned a promoting pawn move without a piece.
    fn choose_promotion(&mut self, _game_state: &GameState) -> Result<PieceKind, ChessErrors> {
        Ok(PieceKind::Queen)
    }
}
