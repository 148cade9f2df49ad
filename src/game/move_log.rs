//! Game record: numbered SAN move list, collected player diagnostics and PGN
//! export.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, GameStatus, PieceKind};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone)]
pub struct MoveLog {
    start_fen: String,
    start_ply: u16,
    entries: Vec<String>,
    info_lines: Vec<String>,
    final_status: GameStatus,
}

impl MoveLog {
    pub fn new(start: &GameState) -> Self {
        Self {
            start_fen: start.get_fen(),
            start_ply: start.ply,
            entries: Vec::new(),
            info_lines: Vec::new(),
            final_status: GameStatus::Continue,
        }
    }

    /// Record one move. `san` is taken before the move was made; the
    /// promotion piece and the resulting status add `=Q`, `+` or `#`.
    pub fn record(&mut self, san: &str, promotion: Option<PieceKind>, status: GameStatus) {
        let mut entry = san.to_owned();
        if let Some(kind) = promotion {
            entry.push('=');
            entry.push(kind.letter());
        }
        match status {
            GameStatus::Check(_) => entry.push('+'),
            GameStatus::Win(_) => entry.push('#'),
            _ => {}
        }
        self.entries.push(entry);
        self.final_status = status;
    }

    pub fn add_info_lines<I: IntoIterator<Item = String>>(&mut self, lines: I) {
        self.info_lines.extend(lines);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn info_lines(&self) -> &[String] {
        &self.info_lines
    }

    pub fn final_status(&self) -> GameStatus {
        self.final_status
    }

    /// Status of a record with no moves yet, for games that start in a
    /// finished position.
    pub fn set_final_status(&mut self, status: GameStatus) {
        self.final_status = status;
    }

    /// PGN result token for the last recorded status. Games that have not
    /// reached a terminal status score `*`.
    pub fn result_token(&self) -> &'static str {
        match self.final_status {
            GameStatus::Win(Color::White) => "1-0",
            GameStatus::Win(Color::Black) => "0-1",
            GameStatus::Stalemate | GameStatus::FiftyMoveDraw | GameStatus::KingDraw => "1/2-1/2",
            GameStatus::Continue | GameStatus::Check(_) => "*",
        }
    }

    /// Numbered move text, e.g. `1. e4 e5 2. Nf3`. A record that starts with
    /// Black to move opens with `N...`.
    pub fn movetext(&self) -> String {
        let mut parts = Vec::with_capacity(self.entries.len() * 3 / 2 + 1);

        for (offset, entry) in self.entries.iter().enumerate() {
            let ply = usize::from(self.start_ply) + offset;
            let number = ply / 2 + 1;
            if ply % 2 == 0 {
                parts.push(format!("{number}. {entry}"));
            } else if offset == 0 {
                parts.push(format!("{number}... {entry}"));
            } else {
                parts.push(entry.clone());
            }
        }

        parts.join(" ")
    }

    pub fn to_pgn(&self, white_name: &str, black_name: &str) -> String {
        self.to_pgn_dated(white_name, black_name, Local::now().date_naive())
    }

    pub fn to_pgn_dated(&self, white_name: &str, black_name: &str, date: NaiveDate) -> String {
        let result = self.result_token();
        let mut headers = vec![
            ("Event", "Casual Game".to_owned()),
            ("Site", "Local".to_owned()),
            ("Date", date.format("%Y.%m.%d").to_string()),
            ("Round", "-".to_owned()),
            ("White", white_name.to_owned()),
            ("Black", black_name.to_owned()),
            ("Result", result.to_owned()),
        ];
        if self.start_fen != STARTING_POSITION_FEN {
            headers.push(("SetUp", "1".to_owned()));
            headers.push(("FEN", self.start_fen.clone()));
        }

        let mut out = String::new();
        for (key, value) in headers {
            out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(&value)));
        }
        out.push('\n');

        let movetext = self.movetext();
        if !movetext.is_empty() {
            out.push_str(&movetext);
            out.push(' ');
        }
        out.push_str(result);
        out.push('\n');
        out
    }

    /// Append this game as PGN to `path`, creating the file if needed.
    pub fn write_to_file(
        &self,
        path: &Path,
        white_name: &str,
        black_name: &str,
    ) -> Result<(), ChessErrors> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", self.to_pgn(white_name, black_name))?;
        Ok(())
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
