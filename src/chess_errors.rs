//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by board mutation, game
//! state transitions, notation parsing, players and the game driver. Each
//! variant carries enough context to print a useful diagnostic.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidAlgebraicString`, `InvalidFENstringForm`, ...)
//!   are recoverable and suitable for showing to a user.
//! - `IllegalMove`, `EmptyOriginSquare` and the promotion variants mean the
//!   caller handed the engine a move it refused; the position is unchanged.
//! - `PlayerInputClosed` ends a game driven by an interactive player.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug)]
pub enum ChessErrors {
    /// A single character in algebraic notation was not a file, rank or
    /// piece letter.
    InvalidAlgebraicChar(char),

    /// A square or move string could not be interpreted.
    InvalidAlgebraicString(String),

    /// Unexpected character in a FEN placement field.
    InvalidFENtoken(char),

    /// FEN string with missing, extra or malformed fields.
    InvalidFENstringForm(String),

    /// A move was requested from a square holding no piece.
    EmptyOriginSquare(Square),

    /// The move is not legal in the current position. Payload describes it.
    IllegalMove(String),

    /// Pawns may only become a queen, rook, bishop or knight.
    InvalidPromotionPiece(PieceKind),

    /// A pawn reached the last rank but no promotion piece was supplied.
    MissingPromotionChoice,

    /// Promotion was requested with no pawn on the far rank.
    NoPawnToPromote,

    /// A player was asked to move in a position with no legal moves.
    NoLegalMoves,

    /// An interactive player's input stream ended.
    PlayerInputClosed,

    /// A configuration value could not be parsed. Payload: (key, value).
    InvalidConfigValue((String, String)),

    /// Writing a game record failed.
    Io(std::io::Error),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidAlgebraicChar(ch) => {
                write!(f, "invalid algebraic character '{ch}'")
            }
            ChessErrors::InvalidAlgebraicString(text) => {
                write!(f, "invalid algebraic string: {text}")
            }
            ChessErrors::InvalidFENtoken(ch) => write!(f, "invalid FEN token '{ch}'"),
            ChessErrors::InvalidFENstringForm(msg) => write!(f, "malformed FEN: {msg}"),
            ChessErrors::EmptyOriginSquare(square) => {
                write!(f, "no piece on origin square {square}")
            }
            ChessErrors::IllegalMove(msg) => write!(f, "illegal move: {msg}"),
            ChessErrors::InvalidPromotionPiece(kind) => {
                write!(f, "cannot promote a pawn to {kind:?}")
            }
            ChessErrors::MissingPromotionChoice => {
                write!(f, "pawn reached the last rank without a promotion choice")
            }
            ChessErrors::NoPawnToPromote => write!(f, "no pawn is eligible for promotion"),
            ChessErrors::NoLegalMoves => write!(f, "no legal moves available"),
            ChessErrors::PlayerInputClosed => write!(f, "player input closed"),
            ChessErrors::InvalidConfigValue((key, value)) => {
                write!(f, "invalid value '{value}' for {key}")
            }
            ChessErrors::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl Error for ChessErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ChessErrors::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ChessErrors {
    fn from(err: std::io::Error) -> Self {
        ChessErrors::Io(err)
    }
}
