//! Player selection by name, for configuration-driven sessions.

use std::fmt;
use std::io::{self, BufReader};
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::players::human_player::HumanPlayer;
use crate::players::player_trait::Player;
use crate::players::random_player::RandomPlayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Random,
}

impl FromStr for PlayerKind {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(PlayerKind::Human),
            "random" => Ok(PlayerKind::Random),
            _ => Err(ChessErrors::InvalidConfigValue((
                "player".to_owned(),
                s.to_owned(),
            ))),
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Random => write!(f, "random"),
        }
    }
}

/// Build a boxed player. Humans read stdin and write stdout.
pub fn build_player(kind: PlayerKind, name: &str, seed: Option<u64>) -> Box<dyn Player> {
    match kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(
            name,
            BufReader::new(io::stdin()),
            io::stdout(),
        )),
        PlayerKind::Random => Box::new(RandomPlayer::new(seed).with_name(name)),
    }
}
