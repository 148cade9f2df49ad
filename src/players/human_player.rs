//! Interactive player reading moves from a text stream.
//!
//! Generic over the reader and writer so it runs on stdin/stdout in the
//! binary and on in-memory buffers in tests. Input is SAN or long algebraic;
//! `moves` lists the legal moves, anything unparseable re-prompts.

use std::io::{BufRead, Write};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::players::player_trait::{Player, PlayerOutput};
use crate::utils::long_algebraic::parse_move_text;
use crate::utils::render_game_state::render_game_state;

pub struct HumanPlayer<R: BufRead, W: Write> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(name: &str, input: R, output: W) -> Self {
        Self {
            name: name.to_owned(),
            input,
            output,
        }
    }

    /// Give back the writer, for inspecting prompts in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, ChessErrors> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ChessErrors::PlayerInputClosed);
        }
        Ok(line.trim().to_owned())
    }

    fn list_moves(&mut self, game_state: &GameState) -> Result<(), ChessErrors> {
        let moves = game_state.get_player_moves(game_state.side_to_move);
        let mut sans = Vec::with_capacity(moves.len());
        for mv in moves {
            sans.push(game_state.get_san(mv)?);
        }
        writeln!(self.output, "{}", sans.join(" "))?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<PlayerOutput, ChessErrors> {
        writeln!(self.output, "{}", render_game_state(game_state))?;

        loop {
            let prompt = format!("{} ({}) move: ", self.name, game_state.side_to_move.name());
            let line = self.prompt(&prompt)?;
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("moves") {
                self.list_moves(game_state)?;
                continue;
            }

            match parse_move_text(&line, game_state) {
                Ok((chosen, promotion)) => {
                    return Ok(PlayerOutput {
                        chosen_move: Some(chosen),
                        promotion,
                        info_lines: vec![format!("human_player {} entered {line}", self.name)],
                    });
                }
                Err(err) => writeln!(self.output, "{err}, try again")?,
            }
        }
    }

    fn choose_promotion(&mut self, _game_state: &GameState) -> Result<PieceKind, ChessErrors> {
        loop {
            let line = self.prompt("Promote to (q/r/b/n): ")?;
            let kind = line
                .chars()
                .next()
                .and_then(PieceKind::from_letter)
                .filter(|kind| kind.is_promotion_target());
            match kind {
                Some(kind) if line.len() == 1 => return Ok(kind),
                _ => writeln!(self.output, "'{line}' is not a promotion piece")?,
            }
        }
    }
}
