//! FEN-to-GameState parser.
//!
//! Builds a full game state from a Forsyth-Edwards Notation string: piece
//! placement, side to move, castling rights, en-passant target and both
//! move counters. The full-move number is folded into the ply counter.

use crate::board::board::Board;
use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

fn missing(field: &str) -> ChessErrors {
    ChessErrors::InvalidFENstringForm(format!("missing {field}"))
}

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| missing("board layout"))?;
    let side_part = parts.next().ok_or_else(|| missing("side to move"))?;
    let castling_part = parts.next().ok_or_else(|| missing("castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| missing("en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| missing("halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| missing("fullmove number"))?;

    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFENstringForm(
            "extra trailing fields".to_owned(),
        ));
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let halfmove_clock = halfmove_part.parse::<u16>().map_err(|_| {
        ChessErrors::InvalidFENstringForm(format!("halfmove clock '{halfmove_part}'"))
    })?;
    let fullmove_number = fullmove_part.parse::<u16>().map_err(|_| {
        ChessErrors::InvalidFENstringForm(format!("fullmove number '{fullmove_part}'"))
    })?;

    // Some published positions carry a full-move number of 0.
    let black_to_move = u16::from(side_to_move == Color::Black);
    let ply = fullmove_number
        .max(1)
        .saturating_sub(1)
        .saturating_mul(2)
        .saturating_add(black_to_move);

    Ok(GameState {
        board: parse_board(board_part)?,
        side_to_move,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant_square: parse_en_passant_square(en_passant_part)?,
        halfmove_clock,
        ply,
    })
}

/// Parse the placement field alone, eighth rank first.
pub fn parse_board(board_part: &str) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFENstringForm(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                file += empty_count as i8;
                if file > 8 {
                    return Err(ChessErrors::InvalidFENstringForm(format!(
                        "rank '{rank_str}' has more than 8 files"
                    )));
                }
                continue;
            }

            let piece = piece_from_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
            let square = square_at(file, rank).ok_or_else(|| {
                ChessErrors::InvalidFENstringForm(format!(
                    "rank '{rank_str}' has more than 8 files"
                ))
            })?;
            board.place_piece(square, piece);
            file += 1;
        }

        if file != 8 {
            return Err(ChessErrors::InvalidFENstringForm(format!(
                "rank '{rank_str}' does not sum to 8 files"
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFENstringForm(format!(
            "side to move '{side_part}'"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(ChessErrors::InvalidFENtoken(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}
