//! Immutable move descriptions.
//!
//! A move is either a square-to-square relocation or a castle tagged with
//! color and side. Square coordinates only exist on the normal variant.

use std::fmt;

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

/// Square-to-square relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NormalMove {
    pub from: Square,
    pub to: Square,
}

impl NormalMove {
    #[inline]
    pub const fn from_file(self) -> i8 {
        file_of(self.from)
    }

    #[inline]
    pub const fn from_rank(self) -> i8 {
        rank_of(self.from)
    }

    #[inline]
    pub const fn to_file(self) -> i8 {
        file_of(self.to)
    }

    #[inline]
    pub const fn to_rank(self) -> i8 {
        rank_of(self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Normal(NormalMove),
    Castle { color: Color, side: CastleSide },
}

impl Move {
    /// Move between two on-board coordinates. Returns `None` if either
    /// coordinate is off the board.
    pub const fn new(from_file: i8, from_rank: i8, to_file: i8, to_rank: i8) -> Option<Self> {
        match (square_at(from_file, from_rank), square_at(to_file, to_rank)) {
            (Some(from), Some(to)) => Some(Move::Normal(NormalMove { from, to })),
            _ => None,
        }
    }

    /// Move between two raw square indices.
    #[inline]
    pub const fn from_squares(from: Square, to: Square) -> Self {
        Move::Normal(NormalMove { from, to })
    }

    #[inline]
    pub const fn castle(color: Color, side: CastleSide) -> Self {
        Move::Castle { color, side }
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, Move::Castle { .. })
    }

    /// `(color, side)` for castle moves.
    #[inline]
    pub const fn castle_details(self) -> Option<(Color, CastleSide)> {
        match self {
            Move::Castle { color, side } => Some((color, side)),
            Move::Normal(_) => None,
        }
    }

    /// Square fields for normal moves.
    #[inline]
    pub const fn normal(self) -> Option<NormalMove> {
        match self {
            Move::Normal(normal) => Some(normal),
            Move::Castle { .. } => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Castle {
                side: CastleSide::KingSide,
                ..
            } => write!(f, "O-O"),
            Move::Castle {
                side: CastleSide::QueenSide,
                ..
            } => write!(f, "O-O-O"),
            Move::Normal(normal) => {
                write_square(f, normal.from)?;
                write_square(f, normal.to)
            }
        }
    }
}

/// Off-board indices are written raw (`#64`) so a bad move can still be
/// reported in an error.
fn write_square(f: &mut fmt::Formatter<'_>, square: Square) -> fmt::Result {
    match square_to_algebraic(square) {
        Ok(name) => f.write_str(&name),
        Err(_) => write!(f, "#{square}"),
    }
}
