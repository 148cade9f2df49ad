//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and square
//! indices, reused by SAN, FEN and long-algebraic components.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{file_of, rank_of, Square};

/// File letter for a file index (`0 -> 'a'`).
#[inline]
pub fn file_to_char(file: i8) -> Result<char, ChessErrors> {
    if !(0..=7).contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicString(format!("file index {file}")));
    }
    Ok(char::from(b'a' + file as u8))
}

/// Rank digit for a rank index (`0 -> '1'`).
#[inline]
pub fn rank_to_char(rank: i8) -> Result<char, ChessErrors> {
    if !(0..=7).contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(format!("rank index {rank}")));
    }
    Ok(char::from(b'1' + rank as u8))
}

/// Convert algebraic notation (for example: "e4") to a square index.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if square > 63 {
        return Err(ChessErrors::InvalidAlgebraicString(format!(
            "square index {square}"
        )));
    }

    let file_char = file_to_char(file_of(square))?;
    let rank_char = rank_to_char(rank_of(square))?;
    Ok(format!("{file_char}{rank_char}"))
}
