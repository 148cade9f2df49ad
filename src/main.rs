//! Plays configured games between two players and reports the results.
//!
//! Run with:
//! `cargo run --release`
//! `CHESS_GAMES=20 CHESS_SEED=7 cargo run --release -- --verbose`
//! `CHESS_WHITE=human cargo run --release`

use std::time::Instant;

use plum_rules::chess_errors::ChessErrors;
use plum_rules::game::game_config::GameConfig;
use plum_rules::game::game_loop::Game;
use plum_rules::game_state::chess_types::{Color, GameStatus};
use plum_rules::players::player_factory::build_player;

#[derive(Debug, Default)]
struct Tally {
    white_wins: u32,
    black_wins: u32,
    draws: u32,
    unfinished: u32,
}

impl Tally {
    fn add(&mut self, status: GameStatus) {
        match status {
            GameStatus::Win(Color::White) => self.white_wins += 1,
            GameStatus::Win(Color::Black) => self.black_wins += 1,
            status if status.is_draw() => self.draws += 1,
            _ => self.unfinished += 1,
        }
    }
}

fn main() -> Result<(), ChessErrors> {
    let mut config = GameConfig::from_env()?;
    if std::env::args().any(|a| a == "--verbose" || a == "-v") {
        config.verbose = true;
    }

    let started = Instant::now();
    let mut tally = Tally::default();

    for game_index in 0..config.games {
        let white = build_player(config.white, "White", config.player_seed(game_index, false));
        let black = build_player(config.black, "Black", config.player_seed(game_index, true));
        let mut game = Game::new(white, black).with_max_plies(config.max_plies);

        let outcome = game.play()?;

        if config.verbose {
            for line in game.log().info_lines() {
                println!("{line}");
            }
            println!("{}", game.log().movetext());
        }
        println!(
            "game {}/{}: {} {:?} after {} plies",
            game_index + 1,
            config.games,
            outcome.result,
            outcome.status,
            outcome.plies
        );

        if let Some(path) = &config.pgn_path {
            game.log().write_to_file(
                path,
                game.player_name(Color::White),
                game.player_name(Color::Black),
            )?;
        }

        tally.add(outcome.status);
    }

    println!(
        "games={} white_wins={} black_wins={} draws={} unfinished={} elapsed_s={:.3}",
        config.games,
        tally.white_wins,
        tally.black_wins,
        tally.draws,
        tally.unfinished,
        started.elapsed().as_secs_f64()
    );
    Ok(())
}
