//! Player that replays a fixed list of move tokens.
//!
//! Tokens may be long algebraic or SAN. Used for replaying recorded games and
//! for driving the game loop in tests.

use std::collections::VecDeque;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::players::player_trait::{Player, PlayerOutput};
use crate::utils::long_algebraic::parse_move_text;

pub struct ScriptedPlayer {
    name: String,
    tokens: VecDeque<String>,
}

impl ScriptedPlayer {
    pub fn new<I, S>(name: &str, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_owned(),
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Tokens not yet played.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl Player for ScriptedPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<PlayerOutput, ChessErrors> {
        let token = self
            .tokens
            .pop_front()
            .ok_or(ChessErrors::PlayerInputClosed)?;
        let (chosen, promotion) = parse_move_text(&token, game_state)?;

        let promotion = match promotion {
            Some(kind) => Some(kind),
            None if game_state.needs_promotion(chosen) => Some(PieceKind::Queen),
            None => None,
        };

        Ok(PlayerOutput {
            chosen_move: Some(chosen),
            promotion,
            info_lines: vec![format!("scripted_player {} played {token}", self.name)],
        })
    }
}
