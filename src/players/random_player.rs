//! Uniform random mover.
//!
//! Picks any legal move with equal probability and always promotes to a
//! queen. Seeded players replay identically, which keeps simulated games
//! reproducible.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::players::player_trait::{Player, PlayerOutput};

pub struct RandomPlayer {
    name: String,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            name: "Random".to_owned(),
            rng,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<PlayerOutput, ChessErrors> {
        let legal_moves = game_state.get_player_moves(game_state.side_to_move);

        let mut out = PlayerOutput::default();
        out.info_lines.push(format!(
            "random_player {} legal_moves {}",
            game_state.side_to_move.name(),
            legal_moves.len()
        ));

        let Some(picked) = legal_moves.as_slice().choose(&mut self.rng).copied() else {
            return Ok(out);
        };

        out.chosen_move = Some(picked);
        if game_state.needs_promotion(picked) {
            out.promotion = Some(PieceKind::Queen);
        }
        Ok(out)
    }
}
