//! Session configuration for the game binary.
//!
//! Defaults describe one random-vs-random game. `from_env` overlays the
//! `CHESS_*` environment variables on top of the defaults.

use std::path::PathBuf;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::players::player_factory::PlayerKind;

pub const ENV_WHITE: &str = "CHESS_WHITE";
pub const ENV_BLACK: &str = "CHESS_BLACK";
pub const ENV_GAMES: &str = "CHESS_GAMES";
pub const ENV_SEED: &str = "CHESS_SEED";
pub const ENV_PGN: &str = "CHESS_PGN";
pub const ENV_MAX_PLIES: &str = "CHESS_MAX_PLIES";
pub const ENV_VERBOSE: &str = "CHESS_VERBOSE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub white: PlayerKind,
    pub black: PlayerKind,
    pub games: u32,
    /// Base seed for random players; each game and side derives its own.
    pub seed: Option<u64>,
    /// PGN file that finished games are appended to.
    pub pgn_path: Option<PathBuf>,
    /// Games still running after this many plies are stopped and scored `*`.
    pub max_plies: Option<u32>,
    pub verbose: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white: PlayerKind::Random,
            black: PlayerKind::Random,
            games: 1,
            seed: None,
            pgn_path: None,
            max_plies: None,
            verbose: false,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Result<Self, ChessErrors> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source. Missing or blank keys keep
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChessErrors>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = get(ENV_WHITE) {
            config.white = parse_value(ENV_WHITE, &value)?;
        }
        if let Some(value) = get(ENV_BLACK) {
            config.black = parse_value(ENV_BLACK, &value)?;
        }
        if let Some(value) = get(ENV_GAMES) {
            config.games = parse_value(ENV_GAMES, &value)?;
        }
        if let Some(value) = get(ENV_SEED) {
            config.seed = Some(parse_value(ENV_SEED, &value)?);
        }
        if let Some(value) = get(ENV_PGN) {
            config.pgn_path = Some(PathBuf::from(value.trim()));
        }
        if let Some(value) = get(ENV_MAX_PLIES) {
            config.max_plies = Some(parse_value(ENV_MAX_PLIES, &value)?);
        }
        if let Some(value) = get(ENV_VERBOSE) {
            config.verbose = parse_flag(ENV_VERBOSE, &value)?;
        }

        Ok(config)
    }

    /// Seed for one side of one game, if seeding is configured.
    pub fn player_seed(&self, game_index: u32, black: bool) -> Option<u64> {
        self.seed.map(|base| {
            base.wrapping_add(u64::from(game_index) * 2)
                .wrapping_add(u64::from(black))
        })
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ChessErrors> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ChessErrors::InvalidConfigValue((key.to_owned(), value.to_owned())))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ChessErrors> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ChessErrors::InvalidConfigValue((
            key.to_owned(),
            value.to_owned(),
        ))),
    }
}
