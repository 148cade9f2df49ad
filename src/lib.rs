//! Crate root module declarations for the Plum chess rules engine.
//!
//! Exposes the board model, game state and move generation, notation
//! utilities, players and the game driver so the binary, tests and benches
//! can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod board {
    pub mod board;
    pub mod check_detection;
    pub mod notation;
    pub mod ray_scan;
}

pub mod moves {
    pub mod chess_move;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod players {
    pub mod human_player;
    pub mod player_factory;
    pub mod player_trait;
    pub mod random_player;
    pub mod scripted_player;
}

pub mod game {
    pub mod game_config;
    pub mod game_loop;
    pub mod move_log;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
