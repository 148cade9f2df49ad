//! Core value types shared by the board, move and game-state layers.
//!
//! Pieces are stored on the board as signed piece codes: the magnitude names
//! the piece kind and the sign names the color (White positive, Black
//! negative, `0` empty). The enums here give typed access to the same codes.

/// Board square index (`0..=63`), `rank * 8 + file`, with `0 == a1`.
pub type Square = u8;

/// Signed piece code as stored in the board grid.
pub type PieceCode = i8;

/// Returned by square queries for coordinates that are not on the board.
/// Deliberately outside the `-6..=6` piece-code range.
pub const INVALID_SQUARE: PieceCode = -10;

pub const EMPTY: PieceCode = 0;

pub const WHITE_KING: PieceCode = 1;
pub const WHITE_QUEEN: PieceCode = 2;
pub const WHITE_BISHOP: PieceCode = 3;
pub const WHITE_KNIGHT: PieceCode = 4;
pub const WHITE_ROOK: PieceCode = 5;
pub const WHITE_PAWN: PieceCode = 6;

pub const BLACK_KING: PieceCode = -1;
pub const BLACK_QUEEN: PieceCode = -2;
pub const BLACK_BISHOP: PieceCode = -3;
pub const BLACK_KNIGHT: PieceCode = -4;
pub const BLACK_ROOK: PieceCode = -5;
pub const BLACK_PAWN: PieceCode = -6;

/// Side color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// `+1` for White, `-1` for Black. Multiplying a kind code by this gives
    /// the colored piece code; it is also the forward rank direction of the
    /// side's pawns.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank index of this side's back rank.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank index pawns of this side start on.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// Piece kind, without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

/// Pieces a pawn may be promoted to, strongest first.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    /// Unsigned piece code (`1..=6`).
    #[inline]
    pub const fn code(self) -> PieceCode {
        match self {
            PieceKind::King => 1,
            PieceKind::Queen => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
            PieceKind::Rook => 5,
            PieceKind::Pawn => 6,
        }
    }

    /// Uppercase letter used by FEN and SAN.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Rook => 'R',
            PieceKind::Pawn => 'P',
        }
    }

    /// Case-insensitive inverse of [`PieceKind::letter`].
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            'R' => Some(PieceKind::Rook),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

#[inline]
pub const fn piece_code(color: Color, kind: PieceKind) -> PieceCode {
    kind.code() * color.sign()
}

/// Kind of a piece code, or `None` for empty squares and the sentinel.
pub fn piece_kind_from_code(code: PieceCode) -> Option<PieceKind> {
    match code.checked_abs()? {
        1 => Some(PieceKind::King),
        2 => Some(PieceKind::Queen),
        3 => Some(PieceKind::Bishop),
        4 => Some(PieceKind::Knight),
        5 => Some(PieceKind::Rook),
        6 => Some(PieceKind::Pawn),
        _ => None,
    }
}

/// Color of a piece code, or `None` for empty squares and the sentinel.
pub fn color_of_code(code: PieceCode) -> Option<Color> {
    match code {
        1..=6 => Some(Color::White),
        -6..=-1 => Some(Color::Black),
        _ => None,
    }
}

/// Display letter for a piece code: uppercase White, lowercase Black,
/// `None` for anything that is not a piece.
pub fn piece_to_char(code: PieceCode) -> Option<char> {
    let kind = piece_kind_from_code(code)?;
    let letter = kind.letter();
    match color_of_code(code)? {
        Color::White => Some(letter),
        Color::Black => Some(letter.to_ascii_lowercase()),
    }
}

/// Inverse of [`piece_to_char`].
pub fn piece_from_char(ch: char) -> Option<PieceCode> {
    let kind = PieceKind::from_letter(ch)?;
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    Some(piece_code(color, kind))
}

/// Which rook a castle uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// File step from the king toward the castling rook.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// Number of empty squares required between king and rook.
    #[inline]
    pub const fn gap(self) -> usize {
        match self {
            CastleSide::KingSide => 2,
            CastleSide::QueenSide => 3,
        }
    }

    #[inline]
    pub const fn rook_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 7,
            CastleSide::QueenSide => 0,
        }
    }

    #[inline]
    pub const fn king_to_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 6,
            CastleSide::QueenSide => 2,
        }
    }

    #[inline]
    pub const fn rook_to_file(self) -> i8 {
        match self {
            CastleSide::KingSide => 5,
            CastleSide::QueenSide => 3,
        }
    }
}

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[inline]
pub const fn castle_right(color: Color, side: CastleSide) -> CastlingRights {
    match (color, side) {
        (Color::White, CastleSide::KingSide) => CASTLE_WHITE_KINGSIDE,
        (Color::White, CastleSide::QueenSide) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, CastleSide::KingSide) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, CastleSide::QueenSide) => CASTLE_BLACK_QUEENSIDE,
    }
}

/// Outcome of [`GameState::get_status`](crate::game_state::game_state::GameState::get_status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Nothing to report.
    Continue,
    /// The given color is in check and has a legal reply.
    Check(Color),
    /// The given color has checkmated its opponent.
    Win(Color),
    Stalemate,
    FiftyMoveDraw,
    /// Only the two kings remain.
    KingDraw,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Continue | GameStatus::Check(_))
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::Stalemate | GameStatus::FiftyMoveDraw | GameStatus::KingDraw
        )
    }
}

/// File of a square (`0..=7`).
#[inline]
pub const fn file_of(square: Square) -> i8 {
    (square % 8) as i8
}

/// Rank of a square (`0..=7`).
#[inline]
pub const fn rank_of(square: Square) -> i8 {
    (square / 8) as i8
}

/// Square for `(file, rank)`, or `None` when either is off the board.
#[inline]
pub const fn square_at(file: i8, rank: i8) -> Option<Square> {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        None
    } else {
        Some((rank * 8 + file) as Square)
    }
}
