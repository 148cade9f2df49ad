//! Turn-by-turn game driver.
//!
//! `Game` asks the player on move for a move, records its SAN, plays it with
//! the requested promotion and logs the result, until the game reaches a
//! terminal status or the optional ply cap.

use crate::chess_errors::ChessErrors;
use crate::game::move_log::MoveLog;
use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::game_state::GameState;
use crate::players::player_trait::Player;

#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub status: GameStatus,
    pub plies: u32,
    pub result: &'static str,
    pub pgn: String,
}

pub struct Game {
    state: GameState,
    white: Box<dyn Player>,
    black: Box<dyn Player>,
    log: MoveLog,
    status: GameStatus,
    plies: u32,
    max_plies: Option<u32>,
}

impl Game {
    pub fn new(white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self::from_state(GameState::new_game(), white, black)
    }

    /// Start from an arbitrary position. A position that is already over
    /// (no legal move, fifty-move limit, bare kings) starts terminal.
    pub fn from_state(state: GameState, white: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        let mut probe = state.clone();
        probe.swap_turn();
        let status = match probe.get_status() {
            status if status.is_terminal() => status,
            _ => GameStatus::Continue,
        };

        let mut log = MoveLog::new(&state);
        log.set_final_status(status);

        Self {
            log,
            state,
            white,
            black,
            status,
            plies: 0,
            max_plies: None,
        }
    }

    pub fn with_max_plies(mut self, max_plies: Option<u32>) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn player_name(&self, color: Color) -> &str {
        match color {
            Color::White => self.white.name(),
            Color::Black => self.black.name(),
        }
    }

    /// Play one move for the side to move and return the resulting status.
    pub fn take_turn(&mut self) -> Result<GameStatus, ChessErrors> {
        let player = match self.state.side_to_move {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        };

        let output = player.choose_move(&self.state)?;
        self.log.add_info_lines(output.info_lines);
        let chosen = output.chosen_move.ok_or(ChessErrors::NoLegalMoves)?;

        let promotion = if self.state.needs_promotion(chosen) {
            match output.promotion {
                Some(kind) => Some(kind),
                None => Some(player.choose_promotion(&self.state)?),
            }
        } else {
            None
        };

        let san = self.state.get_san(chosen)?;
        let status = self.state.play_move(chosen, promotion)?;
        self.log.record(&san, promotion, status);

        self.plies += 1;
        self.status = status;
        Ok(status)
    }

    /// Play until the game ends or the ply cap is reached.
    pub fn play(&mut self) -> Result<GameOutcome, ChessErrors> {
        self.white.new_game();
        self.black.new_game();

        while !self.status.is_terminal() {
            if self.max_plies.is_some_and(|max| self.plies >= max) {
                break;
            }
            self.take_turn()?;
        }

        let pgn = self.log.to_pgn(self.white.name(), self.black.name());
        Ok(GameOutcome {
            status: self.status,
            plies: self.plies,
            result: self.log.result_token(),
            pgn,
        })
    }
}
