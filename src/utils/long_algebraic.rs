//! Text move parsing: long algebraic (`e2e4`, `e7e8q`, `O-O`) and SAN
//! (`Nf3`, `exd6`, `e8=Q+`), both resolved against the legal moves of the
//! side to move.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Long algebraic text for `mv`. Castles are written as the king's two-file
/// hop (`e1g1`), promotions get a lowercase piece suffix (`e7e8q`).
pub fn move_to_long_algebraic(
    mv: Move,
    promotion: Option<PieceKind>,
) -> Result<String, ChessErrors> {
    let (from, to) = match mv {
        Move::Normal(normal) => (normal.from, normal.to),
        Move::Castle { color, side } => {
            let rank = color.home_rank();
            let from = square_at(KING_HOME_FILE, rank)
                .ok_or_else(|| ChessErrors::IllegalMove(mv.to_string()))?;
            let to = square_at(side.king_to_file(), rank)
                .ok_or_else(|| ChessErrors::IllegalMove(mv.to_string()))?;
            (from, to)
        }
    };

    let mut out = square_to_algebraic(from)?;
    out.push_str(&square_to_algebraic(to)?);
    if let Some(kind) = promotion {
        if !kind.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotionPiece(kind));
        }
        out.push(kind.letter().to_ascii_lowercase());
    }
    Ok(out)
}

/// Parse long algebraic text for the side to move.
///
/// A king hop from its home square to the castling file is read as the
/// castle. A promotion suffix is returned alongside the move; a promoting
/// pawn move without one yields `None` and leaves the choice to the caller.
pub fn parse_long_algebraic(
    text: &str,
    game_state: &GameState,
) -> Result<(Move, Option<PieceKind>), ChessErrors> {
    let text = text.trim();
    let color = game_state.side_to_move;

    if let Some(side) = castle_side_from_text(text) {
        return legal_or_err(game_state, Move::castle(color, side), None);
    }

    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let piece = game_state.board.get_piece(from);
    if piece == EMPTY {
        return Err(ChessErrors::EmptyOriginSquare(from));
    }

    let promotion = match text[4..].chars().next() {
        Some(ch) => {
            let kind = PieceKind::from_letter(ch).ok_or(ChessErrors::InvalidAlgebraicChar(ch))?;
            if !kind.is_promotion_target() {
                return Err(ChessErrors::InvalidPromotionPiece(kind));
            }
            Some(kind)
        }
        None => None,
    };

    let mv = king_hop_as_castle(piece, from, to).unwrap_or(Move::from_squares(from, to));
    if promotion.is_some() && !game_state.needs_promotion(mv) {
        return Err(ChessErrors::IllegalMove(format!(
            "{text}: only a pawn reaching the last rank promotes"
        )));
    }

    legal_or_err(game_state, mv, promotion)
}

/// Parse SAN for the side to move by matching it against the SAN of every
/// legal move. Check, mate and annotation marks are ignored, as is a missing
/// capture `x`.
pub fn parse_san(
    text: &str,
    game_state: &GameState,
) -> Result<(Move, Option<PieceKind>), ChessErrors> {
    let trimmed = text
        .trim()
        .trim_end_matches(|ch: char| matches!(ch, '+' | '#' | '!' | '?'));
    let (body, promotion) = split_promotion_suffix(trimmed)?;
    let wanted = body.replace('0', "O");

    let moves = game_state.get_player_moves(game_state.side_to_move);
    for mv in moves {
        let san = game_state.get_san(mv)?;
        if san == wanted || san.replace('x', "") == wanted {
            if promotion.is_some() && !game_state.needs_promotion(mv) {
                return Err(ChessErrors::IllegalMove(format!(
                    "{text}: only a pawn reaching the last rank promotes"
                )));
            }
            return Ok((mv, promotion));
        }
    }

    Err(ChessErrors::IllegalMove(text.trim().to_owned()))
}

/// Accept either notation: long algebraic first, then SAN.
pub fn parse_move_text(
    text: &str,
    game_state: &GameState,
) -> Result<(Move, Option<PieceKind>), ChessErrors> {
    match parse_long_algebraic(text, game_state) {
        Ok(parsed) => Ok(parsed),
        Err(long_err) => parse_san(text, game_state).map_err(|_| long_err),
    }
}

fn castle_side_from_text(text: &str) -> Option<CastleSide> {
    match text {
        "O-O" | "0-0" => Some(CastleSide::KingSide),
        "O-O-O" | "0-0-0" => Some(CastleSide::QueenSide),
        _ => None,
    }
}

fn king_hop_as_castle(piece: PieceCode, from: Square, to: Square) -> Option<Move> {
    if piece_kind_from_code(piece) != Some(PieceKind::King) {
        return None;
    }
    let color = color_of_code(piece)?;
    if from != square_at(KING_HOME_FILE, color.home_rank())? {
        return None;
    }

    [CastleSide::KingSide, CastleSide::QueenSide]
        .into_iter()
        .find(|side| square_at(side.king_to_file(), color.home_rank()) == Some(to))
        .map(|side| Move::castle(color, side))
}

/// Split `e8=Q` or `e8Q` into the move body and promotion piece.
fn split_promotion_suffix(text: &str) -> Result<(&str, Option<PieceKind>), ChessErrors> {
    let Some(last) = text.chars().last() else {
        return Err(ChessErrors::InvalidAlgebraicString(text.to_owned()));
    };
    if !last.is_ascii_uppercase() || text.len() < 3 || text.starts_with('O') {
        return Ok((text, None));
    }

    let kind = PieceKind::from_letter(last).ok_or(ChessErrors::InvalidAlgebraicChar(last))?;
    if !kind.is_promotion_target() {
        return Err(ChessErrors::InvalidPromotionPiece(kind));
    }
    let body = &text[..text.len() - 1];
    Ok((body.strip_suffix('=').unwrap_or(body), Some(kind)))
}

fn legal_or_err(
    game_state: &GameState,
    mv: Move,
    promotion: Option<PieceKind>,
) -> Result<(Move, Option<PieceKind>), ChessErrors> {
    if game_state.board.mover_color(mv) != Some(game_state.side_to_move) {
        return Err(ChessErrors::IllegalMove(format!(
            "{mv}: {} is not to move",
            game_state.side_to_move.opposite().name()
        )));
    }
    let legal = match mv {
        Move::Castle { .. } => game_state.is_legal_move(mv),
        Move::Normal(normal) => game_state
            .get_piece_moves(game_state.side_to_move, normal.from)
            .contains(&mv),
    };
    if !legal {
        return Err(ChessErrors::IllegalMove(mv.to_string()));
    }
    Ok((mv, promotion))
}
