//! Square-level board model.
//!
//! `Board` is an 8x8 grid of signed piece codes. It owns everything that can
//! be decided from grid contents alone: placement, move application, the
//! possible/valid move predicates, check detection (see `check_detection`),
//! per-piece move enumeration (see `move_generation`) and notation (see
//! `notation`). Cross-move state such as castling rights and the en-passant
//! target lives in `GameState`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::bishop_moves;
use crate::move_generation::legal_moves_king::king_moves;
use crate::move_generation::legal_moves_knight::knight_moves;
use crate::move_generation::legal_moves_pawn::pawn_moves;
use crate::move_generation::legal_moves_queen::queen_moves;
use crate::move_generation::legal_moves_rook::rook_moves;
use crate::moves::chess_move::Move;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Grid of piece codes indexed `[rank][file]`. Copies are deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[PieceCode; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Self::empty();
        board.set_up();
        board
    }
}

impl Board {
    /// Board in the standard opening arrangement.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with no pieces, for setting up test and puzzle positions.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            grid: [[EMPTY; 8]; 8],
        }
    }

    /// Reset to the standard opening arrangement.
    pub fn set_up(&mut self) {
        self.grid = [[EMPTY; 8]; 8];

        for (file, kind) in BACK_RANK.iter().enumerate() {
            self.grid[0][file] = piece_code(Color::White, *kind);
            self.grid[1][file] = WHITE_PAWN;
            self.grid[6][file] = BLACK_PAWN;
            self.grid[7][file] = piece_code(Color::Black, *kind);
        }
    }

    /// Piece code on `square`, or [`INVALID_SQUARE`] if `square > 63`.
    #[inline]
    pub fn get_piece(&self, square: Square) -> PieceCode {
        if square > 63 {
            return INVALID_SQUARE;
        }
        self.get_piece_at(file_of(square), rank_of(square))
    }

    /// Piece code at `(file, rank)`, or [`INVALID_SQUARE`] off the board.
    #[inline]
    pub fn get_piece_at(&self, file: i8, rank: i8) -> PieceCode {
        if !(0..8).contains(&file) || !(0..8).contains(&rank) {
            return INVALID_SQUARE;
        }
        self.grid[rank as usize][file as usize]
    }

    /// Put `piece` on `square`. Returns true if a piece was replaced.
    pub fn place_piece(&mut self, square: Square, piece: PieceCode) -> bool {
        if square > 63 {
            return false;
        }
        let cell = &mut self.grid[rank_of(square) as usize][file_of(square) as usize];
        let replaced = *cell != EMPTY;
        *cell = piece;
        replaced
    }

    /// Clear `square`. Returns true if a piece was there.
    #[inline]
    pub fn remove_piece(&mut self, square: Square) -> bool {
        self.place_piece(square, EMPTY)
    }

    /// Squares holding a piece of `color`, in square order.
    pub fn occupied_squares(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        (0..64u8).filter(move |square| color_of_code(self.get_piece(*square)) == Some(color))
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = piece_code(color, PieceKind::King);
        (0..64u8).find(|square| self.get_piece(*square) == king)
    }

    /// Apply `mv` after checking it is possible and valid.
    ///
    /// Moves the rook along with the king when castling and removes the
    /// captured pawn for en passant. Leaves the board untouched on error.
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessErrors> {
        if let Move::Normal(normal) = mv {
            if self.get_piece(normal.from) == EMPTY {
                return Err(ChessErrors::EmptyOriginSquare(normal.from));
            }
        }
        if !self.is_possible_valid_move(mv) {
            return Err(ChessErrors::IllegalMove(mv.to_string()));
        }

        self.apply_unchecked(mv);
        Ok(())
    }

    /// Relocate pieces for `mv` without any legality check.
    pub(crate) fn apply_unchecked(&mut self, mv: Move) {
        match mv {
            Move::Castle { color, side } => self.castle(color, side),
            Move::Normal(normal) => {
                if let Some(captured) = self.is_passant_move(mv) {
                    self.remove_piece(captured);
                }
                let piece = self.get_piece(normal.from);
                self.remove_piece(normal.from);
                self.place_piece(normal.to, piece);
            }
        }
    }

    fn castle(&mut self, color: Color, side: CastleSide) {
        let rank = color.home_rank();
        let hops = [
            (KING_HOME_FILE, side.king_to_file()),
            (side.rook_file(), side.rook_to_file()),
        ];

        for (from_file, to_file) in hops {
            if let (Some(from), Some(to)) = (square_at(from_file, rank), square_at(to_file, rank)) {
                let piece = self.get_piece(from);
                self.remove_piece(from);
                self.place_piece(to, piece);
            }
        }
    }

    /// Geometric/occupancy check only: the destination is on the board and
    /// not held by the mover's own color. For castling: king and rook on
    /// their home squares with nothing between them.
    pub fn is_possible_move(&self, mv: Move) -> bool {
        match mv {
            Move::Castle { color, side } => self.is_possible_castle_move(color, side),
            Move::Normal(normal) => {
                let Some(mover) = color_of_code(self.get_piece(normal.from)) else {
                    return false;
                };
                let target = self.get_piece(normal.to);
                target != INVALID_SQUARE && color_of_code(target) != Some(mover)
            }
        }
    }

    /// True if the mover's king is not in check once `mv` is played on a
    /// scratch copy. Castling additionally may not start in check nor pass
    /// through or land on an attacked square.
    pub fn is_valid_move(&self, mv: Move) -> bool {
        match mv {
            Move::Castle { color, side } => self.is_valid_castle_move(color, side),
            Move::Normal(normal) => {
                let Some(mover) = color_of_code(self.get_piece(normal.from)) else {
                    return false;
                };
                let mut scratch = *self;
                scratch.apply_unchecked(mv);
                !scratch.is_in_check(mover)
            }
        }
    }

    /// Canonical legality predicate for a single move.
    #[inline]
    pub fn is_possible_valid_move(&self, mv: Move) -> bool {
        self.is_possible_move(mv) && self.is_valid_move(mv)
    }

    /// Castle geometry only. Says nothing about whether king or rook have
    /// moved before; that is `GameState`'s castling rights.
    pub fn is_possible_castle_move(&self, color: Color, side: CastleSide) -> bool {
        let rank = color.home_rank();
        if self.get_piece_at(KING_HOME_FILE, rank) != piece_code(color, PieceKind::King) {
            return false;
        }

        let (empty_squares, found) =
            self.search_direction(KING_HOME_FILE, rank, side.direction(), 0);
        empty_squares == side.gap() && found == piece_code(color, PieceKind::Rook)
    }

    pub fn is_valid_castle_move(&self, color: Color, side: CastleSide) -> bool {
        if self.is_in_check(color) {
            return false;
        }

        let rank = color.home_rank();
        (1..=2).all(|step| {
            Move::new(
                KING_HOME_FILE,
                rank,
                KING_HOME_FILE + side.direction() * step,
                rank,
            )
            .is_some_and(|transit| self.is_valid_move(transit))
        })
    }

    /// For an en-passant capture, the square of the pawn being taken: a pawn
    /// moving diagonally onto an empty square.
    pub fn is_passant_move(&self, mv: Move) -> Option<Square> {
        let normal = mv.normal()?;
        let piece = self.get_piece(normal.from);
        if piece_kind_from_code(piece) != Some(PieceKind::Pawn) {
            return None;
        }
        if normal.to_file() == normal.from_file() || self.get_piece(normal.to) != EMPTY {
            return None;
        }
        square_at(normal.to_file(), normal.from_rank())
    }

    /// Color making `mv`, read from the origin square for normal moves.
    pub fn mover_color(&self, mv: Move) -> Option<Color> {
        match mv {
            Move::Castle { color, .. } => Some(color),
            Move::Normal(normal) => color_of_code(self.get_piece(normal.from)),
        }
    }

    /// Kind of piece `mv` moves. Castles count as king moves.
    pub fn moved_kind(&self, mv: Move) -> Option<PieceKind> {
        match mv {
            Move::Castle { .. } => Some(PieceKind::King),
            Move::Normal(normal) => piece_kind_from_code(self.get_piece(normal.from)),
        }
    }

    #[inline]
    pub fn is_king_move(&self, mv: Move) -> bool {
        self.moved_kind(mv) == Some(PieceKind::King)
    }

    /// Does not include castles.
    #[inline]
    pub fn is_rook_move(&self, mv: Move) -> bool {
        self.moved_kind(mv) == Some(PieceKind::Rook)
    }

    #[inline]
    pub fn is_pawn_move(&self, mv: Move) -> bool {
        self.moved_kind(mv) == Some(PieceKind::Pawn)
    }

    /// For a two-square pawn advance, the square it skipped over.
    pub fn is_double_pawn_move(&self, mv: Move) -> Option<Square> {
        let normal = mv.normal()?;
        if !self.is_pawn_move(mv) || (normal.to_rank() - normal.from_rank()).abs() != 2 {
            return None;
        }
        square_at(normal.from_file(), (normal.from_rank() + normal.to_rank()) / 2)
    }

    /// True if `mv` lands on a piece of the opposite color. En passant does
    /// not count; see [`Board::is_passant_move`].
    pub fn is_take(&self, mv: Move) -> bool {
        let Some(normal) = mv.normal() else {
            return false;
        };
        match (
            color_of_code(self.get_piece(normal.from)),
            color_of_code(self.get_piece(normal.to)),
        ) {
            (Some(mover), Some(target)) => mover != target,
            _ => false,
        }
    }

    /// Legal destination squares for the piece on `square`, excluding
    /// castling and en passant. Empty if the square does not hold a piece of
    /// `color`.
    pub fn get_piece_moves(&self, color: Color, square: Square) -> Vec<Square> {
        let piece = self.get_piece(square);
        if color_of_code(piece) != Some(color) {
            return Vec::new();
        }

        match piece_kind_from_code(piece) {
            Some(PieceKind::King) => king_moves(self, square),
            Some(PieceKind::Queen) => queen_moves(self, square),
            Some(PieceKind::Bishop) => bishop_moves(self, square),
            Some(PieceKind::Knight) => knight_moves(self, square),
            Some(PieceKind::Rook) => rook_moves(self, square),
            Some(PieceKind::Pawn) => pawn_moves(self, square),
            None => Vec::new(),
        }
    }

    /// True if some piece of `color` has a legal destination. Does not see
    /// en passant; `GameState::legal_move_exists` does.
    pub fn legal_move_exists(&self, color: Color) -> bool {
        self.occupied_squares(color)
            .any(|square| !self.get_piece_moves(color, square).is_empty())
    }

    /// True if `color` has checkmated its opponent.
    pub fn has_won(&self, color: Color) -> bool {
        let loser = color.opposite();
        !self.legal_move_exists(loser) && self.is_in_check(loser)
    }

    /// True if only the two kings are left.
    pub fn is_king_draw(&self) -> bool {
        (0..64u8).all(|square| {
            let piece = self.get_piece(square);
            piece == EMPTY || piece_kind_from_code(piece) == Some(PieceKind::King)
        })
    }

    /// True if a pawn of `color` stands on the opponent's back rank.
    pub fn can_promote_pawn(&self, color: Color) -> bool {
        self.promotable_pawn(color).is_some()
    }

    /// Replace the first promotable pawn of `color` (in file order) with
    /// `kind`. Returns false if there is no such pawn or `kind` is not a
    /// legal promotion piece.
    pub fn promote_pawn(&mut self, color: Color, kind: PieceKind) -> bool {
        if !kind.is_promotion_target() {
            return false;
        }
        let Some(square) = self.promotable_pawn(color) else {
            return false;
        };
        self.place_piece(square, piece_code(color, kind));
        true
    }

    fn promotable_pawn(&self, color: Color) -> Option<Square> {
        let rank = color.opposite().home_rank();
        let pawn = piece_code(color, PieceKind::Pawn);
        (0..8)
            .filter_map(|file| square_at(file, rank))
            .find(|square| self.get_piece(*square) == pawn)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::Move;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::from_squares(sq(from), sq(to))
    }

    #[test]
    fn set_up_places_standard_arrangement() {
        let board = Board::new();
        assert_eq!(board.get_piece(sq("e1")), WHITE_KING);
        assert_eq!(board.get_piece(sq("d8")), BLACK_QUEEN);
        assert_eq!(board.get_piece(sq("a2")), WHITE_PAWN);
        assert_eq!(board.get_piece(sq("h7")), BLACK_PAWN);
        assert_eq!(board.get_piece(sq("e4")), EMPTY);
        assert_eq!(board.occupied_squares(Color::White).count(), 16);
    }

    #[test]
    fn out_of_range_queries_return_sentinel() {
        let board = Board::new();
        assert_eq!(board.get_piece(64), INVALID_SQUARE);
        assert_eq!(board.get_piece_at(-1, 0), INVALID_SQUARE);
        assert_eq!(board.get_piece_at(3, 8), INVALID_SQUARE);
    }

    #[test]
    fn make_move_refuses_off_board_squares() {
        let mut board = Board::new();
        let before = board;
        assert!(matches!(
            board.make_move(Move::from_squares(12, 64)),
            Err(ChessErrors::IllegalMove(_))
        ));
        assert!(board.make_move(Move::from_squares(64, 28)).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn get_piece_agrees_for_both_addressing_forms() {
        let board = Board::new();
        for square in 0..64u8 {
            assert_eq!(
                board.get_piece(square),
                board.get_piece_at(file_of(square), rank_of(square))
            );
        }
    }

    #[test]
    fn place_and_remove_report_previous_occupancy() {
        let mut board = Board::empty();
        assert!(!board.place_piece(sq("d4"), WHITE_QUEEN));
        assert!(board.place_piece(sq("d4"), BLACK_ROOK));
        assert!(board.remove_piece(sq("d4")));
        assert!(!board.remove_piece(sq("d4")));
        assert!(!board.place_piece(70, WHITE_PAWN));
    }

    #[test]
    fn possible_move_rejects_own_pieces_and_empty_origins() {
        let board = Board::new();
        assert!(board.is_possible_move(mv("e2", "e4")));
        assert!(!board.is_possible_move(mv("a1", "a2")));
        assert!(!board.is_possible_move(mv("e4", "e5")));
        assert!(!board.is_possible_move(Move::from_squares(12, 64)));
    }

    #[test]
    fn pinned_piece_moves_are_not_valid() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), WHITE_KING);
        board.place_piece(sq("e2"), WHITE_ROOK);
        board.place_piece(sq("e8"), BLACK_ROOK);
        board.place_piece(sq("a8"), BLACK_KING);

        assert!(board.is_possible_valid_move(mv("e2", "e5")));
        assert!(!board.is_possible_valid_move(mv("e2", "d2")));
        assert!(board.is_possible_valid_move(mv("e2", "e8")));
    }

    #[test]
    fn make_move_relocates_and_refuses_illegal_moves() {
        let mut board = Board::new();
        board.make_move(mv("g1", "f3")).expect("Nf3 is legal");
        assert_eq!(board.get_piece(sq("f3")), WHITE_KNIGHT);
        assert_eq!(board.get_piece(sq("g1")), EMPTY);

        let before = board;
        assert!(board.make_move(mv("e4", "e5")).is_err());
        assert!(board.make_move(mv("a1", "a2")).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn grid_level_move_and_inverse_restore_the_board() {
        let mut board = Board::new();
        let start = board;
        board.make_move(mv("b1", "c3")).expect("Nc3 is legal");
        board.make_move(mv("c3", "b1")).expect("Nb1 is legal");
        assert_eq!(board, start);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), WHITE_KING);
        board.place_piece(sq("e8"), BLACK_KING);
        board.place_piece(sq("e5"), WHITE_PAWN);
        board.place_piece(sq("d5"), BLACK_PAWN);

        let capture = mv("e5", "d6");
        assert_eq!(board.is_passant_move(capture), Some(sq("d5")));
        board.make_move(capture).expect("en passant is legal on the grid");
        assert_eq!(board.get_piece(sq("d6")), WHITE_PAWN);
        assert_eq!(board.get_piece(sq("d5")), EMPTY);
    }

    #[test]
    fn castling_moves_king_and_rook() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), WHITE_KING);
        board.place_piece(sq("a1"), WHITE_ROOK);
        board.place_piece(sq("h1"), WHITE_ROOK);
        board.place_piece(sq("e8"), BLACK_KING);

        let mut kingside = board;
        kingside
            .make_move(Move::castle(Color::White, CastleSide::KingSide))
            .expect("kingside castle is legal");
        assert_eq!(kingside.get_piece(sq("g1")), WHITE_KING);
        assert_eq!(kingside.get_piece(sq("f1")), WHITE_ROOK);
        assert_eq!(kingside.get_piece(sq("h1")), EMPTY);

        board
            .make_move(Move::castle(Color::White, CastleSide::QueenSide))
            .expect("queenside castle is legal");
        assert_eq!(board.get_piece(sq("c1")), WHITE_KING);
        assert_eq!(board.get_piece(sq("d1")), WHITE_ROOK);
        assert_eq!(board.get_piece(sq("a1")), EMPTY);
    }

    #[test]
    fn castle_needs_empty_path_and_unattacked_transit() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), WHITE_KING);
        board.place_piece(sq("h1"), WHITE_ROOK);
        board.place_piece(sq("a1"), WHITE_ROOK);
        board.place_piece(sq("b1"), WHITE_KNIGHT);
        board.place_piece(sq("e8"), BLACK_KING);
        board.place_piece(sq("f8"), BLACK_ROOK);

        assert!(board.is_possible_move(Move::castle(Color::White, CastleSide::KingSide)));
        assert!(!board.is_valid_move(Move::castle(Color::White, CastleSide::KingSide)));
        assert!(!board.is_possible_move(Move::castle(Color::White, CastleSide::QueenSide)));
    }

    #[test]
    fn queenside_castle_allows_attacked_b_file() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), WHITE_KING);
        board.place_piece(sq("a1"), WHITE_ROOK);
        board.place_piece(sq("h8"), BLACK_KING);
        board.place_piece(sq("b8"), BLACK_ROOK);

        assert!(board.is_possible_valid_move(Move::castle(Color::White, CastleSide::QueenSide)));
    }

    #[test]
    fn move_classifiers() {
        let board = Board::new();
        assert_eq!(board.is_double_pawn_move(mv("e2", "e4")), Some(sq("e3")));
        assert_eq!(board.is_double_pawn_move(mv("e7", "e5")), Some(sq("e6")));
        assert_eq!(board.is_double_pawn_move(mv("e2", "e3")), None);
        assert!(board.is_pawn_move(mv("e2", "e3")));
        assert!(board.is_rook_move(mv("a1", "a3")));
        assert!(board.is_king_move(Move::castle(Color::Black, CastleSide::KingSide)));
        assert!(!board.is_rook_move(Move::castle(Color::Black, CastleSide::KingSide)));
        assert!(!board.is_take(mv("e2", "e4")));
        assert_eq!(board.mover_color(mv("g8", "f6")), Some(Color::Black));
    }

    #[test]
    fn king_draw_and_win_detection() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), WHITE_KING);
        board.place_piece(sq("e8"), BLACK_KING);
        assert!(board.is_king_draw());

        // Back-rank mate.
        board.place_piece(sq("d7"), BLACK_PAWN);
        board.place_piece(sq("e7"), BLACK_PAWN);
        board.place_piece(sq("f7"), BLACK_PAWN);
        board.place_piece(sq("a8"), WHITE_ROOK);
        board.remove_piece(sq("e8"));
        board.place_piece(sq("g8"), BLACK_KING);
        board.place_piece(sq("g7"), BLACK_PAWN);
        board.place_piece(sq("h7"), BLACK_PAWN);
        board.place_piece(sq("f8"), EMPTY);

        assert!(!board.is_king_draw());
        assert!(board.is_in_check(Color::Black));
        assert!(!board.legal_move_exists(Color::Black));
        assert!(board.has_won(Color::White));
        assert!(!board.has_won(Color::Black));
    }

    #[test]
    fn promotion_replaces_first_pawn_in_file_order() {
        let mut board = Board::empty();
        board.place_piece(sq("e1"), WHITE_KING);
        board.place_piece(sq("a8"), BLACK_KING);
        board.place_piece(sq("c8"), WHITE_PAWN);
        board.place_piece(sq("g8"), WHITE_PAWN);
        board.place_piece(sq("b1"), BLACK_PAWN);

        assert!(board.can_promote_pawn(Color::White));
        assert!(board.can_promote_pawn(Color::Black));
        assert!(!board.promote_pawn(Color::White, PieceKind::King));
        assert!(board.promote_pawn(Color::White, PieceKind::Knight));
        assert_eq!(board.get_piece(sq("c8")), WHITE_KNIGHT);
        assert_eq!(board.get_piece(sq("g8")), WHITE_PAWN);
        assert!(board.promote_pawn(Color::Black, PieceKind::Queen));
        assert_eq!(board.get_piece(sq("b1")), BLACK_QUEEN);
        assert!(!board.can_promote_pawn(Color::Black));
        assert!(!board.promote_pawn(Color::Black, PieceKind::Queen));
    }
}
