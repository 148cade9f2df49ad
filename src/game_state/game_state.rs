//! Game state: a board plus everything that persists across moves.
//!
//! `GameState` wraps a [`Board`] with the side to move, castling rights, the
//! en-passant target, the half-move clock and the ply counter. Legal move
//! enumeration lives in `move_generation::legal_move_generator` and move
//! application in `move_generation::legal_move_apply`; this module holds
//! construction, status evaluation and the turn protocol.
//!
//! Turn protocol for one accepted move:
//! 1. `make_move` (rights and counters first, then the board),
//! 2. `promote_pawn` if `can_promote_pawn`,
//! 3. `get_status`, evaluated for the side that must reply,
//! 4. `swap_turn`.
//!
//! [`GameState::play_move`] performs all four steps.

use crate::board::board::Board;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{FIFTY_MOVE_LIMIT, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    /// Side whose move is being played. Flipped by `swap_turn` only.
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square behind a pawn that advanced two squares on the previous ply.
    pub en_passant_square: Option<Square>,

    /// Plies since the last capture or pawn move.
    pub halfmove_clock: u16,
    /// Plies played in total.
    pub ply: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            side_to_move: Color::White,
            castling_rights: CASTLE_ALL,
            en_passant_square: None,
            halfmove_clock: 0,
            ply: 0,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn starting_fen() -> &'static str {
        STARTING_POSITION_FEN
    }

    /// Full-move number as written in FEN.
    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.ply / 2 + 1
    }

    #[inline]
    pub fn has_castling_right(&self, color: Color, side: CastleSide) -> bool {
        self.castling_rights & castle_right(color, side) != 0
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// True if the side to move has a pawn waiting on the far rank.
    #[inline]
    pub fn can_promote_pawn(&self) -> bool {
        self.board.can_promote_pawn(self.side_to_move)
    }

    /// Promote the side to move's waiting pawn to `kind`.
    pub fn promote_pawn(&mut self, kind: PieceKind) -> Result<(), ChessErrors> {
        if !kind.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotionPiece(kind));
        }
        if !self.board.promote_pawn(self.side_to_move, kind) {
            return Err(ChessErrors::NoPawnToPromote);
        }
        Ok(())
    }

    /// True if `mv` is a pawn move onto the mover's last rank.
    pub fn needs_promotion(&self, mv: Move) -> bool {
        let Some(normal) = mv.normal() else {
            return false;
        };
        let piece = self.board.get_piece(normal.from);
        match (piece_kind_from_code(piece), color_of_code(piece)) {
            (Some(PieceKind::Pawn), Some(color)) => {
                normal.to_rank() == color.opposite().home_rank()
            }
            _ => false,
        }
    }

    /// Status after the side to move has played, seen from the side that
    /// must reply. The first matching condition wins: fifty-move draw, king
    /// draw, checkmate, stalemate, check.
    pub fn get_status(&self) -> GameStatus {
        let mover = self.side_to_move;
        let opponent = mover.opposite();

        if self.halfmove_clock >= FIFTY_MOVE_LIMIT {
            return GameStatus::FiftyMoveDraw;
        }
        if self.board.is_king_draw() {
            return GameStatus::KingDraw;
        }

        let in_check = self.board.is_in_check(opponent);
        let legal_move_exists = self.legal_move_exists(opponent);

        match (legal_move_exists, in_check) {
            (false, true) => GameStatus::Win(mover),
            (false, false) => GameStatus::Stalemate,
            (true, true) => GameStatus::Check(opponent),
            (true, false) => GameStatus::Continue,
        }
    }

    #[inline]
    pub fn swap_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
    }

    /// SAN for `mv` in the current position; call before playing it.
    #[inline]
    pub fn get_san(&self, mv: Move) -> Result<String, ChessErrors> {
        self.board.get_san(mv)
    }

    /// Play one accepted move end to end: apply it, promote with
    /// `promotion` if a pawn reached the last rank, compute the status and
    /// hand the turn over. Nothing changes if an error is returned.
    pub fn play_move(
        &mut self,
        mv: Move,
        promotion: Option<PieceKind>,
    ) -> Result<GameStatus, ChessErrors> {
        if self.needs_promotion(mv) {
            match promotion {
                None => return Err(ChessErrors::MissingPromotionChoice),
                Some(kind) if !kind.is_promotion_target() => {
                    return Err(ChessErrors::InvalidPromotionPiece(kind));
                }
                Some(_) => {}
            }
        }

        self.make_move(mv)?;
        if let Some(kind) = promotion {
            if self.can_promote_pawn() {
                self.promote_pawn(kind)?;
            }
        }

        let status = self.get_status();
        self.swap_turn();
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FORSYTH;
    use crate::game_state::chess_types::*;
    use crate::moves::chess_move::Move;
    use crate::utils::algebraic::algebraic_to_square;

    fn mv(from: &str, to: &str) -> Move {
        Move::from_squares(
            algebraic_to_square(from).expect("from square"),
            algebraic_to_square(to).expect("to square"),
        )
    }

    #[test]
    fn new_game_starts_with_all_rights() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.castling_rights, CASTLE_ALL);
        assert_eq!(game.en_passant_square, None);
        assert_eq!(game.halfmove_clock, 0);
        assert_eq!(game.ply, 0);
        assert_eq!(game.board.get_forsyth(), STARTING_POSITION_FORSYTH);
        assert_eq!(game.get_fen(), GameState::starting_fen());
    }

    #[test]
    fn play_move_follows_the_turn_protocol() {
        let mut game = GameState::new_game();
        let status = game.play_move(mv("e2", "e4"), None).expect("e4 is legal");
        assert_eq!(status, GameStatus::Continue);
        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(game.ply, 1);
        assert_eq!(game.fullmove_number(), 1);

        // White may not move twice.
        assert!(game.play_move(mv("d2", "d4"), None).is_err());
        assert_eq!(game.side_to_move, Color::Black);
    }

    #[test]
    fn fools_mate_is_a_win_for_black() {
        let mut game = GameState::new_game();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
            game.play_move(mv(from, to), None).expect("opening move is legal");
        }
        let status = game.play_move(mv("d8", "h4"), None).expect("Qh4 is legal");
        assert_eq!(status, GameStatus::Win(Color::Black));
    }

    #[test]
    fn check_is_reported_for_the_side_in_check() {
        let mut game = GameState::new_game();
        for (from, to) in [("e2", "e4"), ("f7", "f6"), ("d1", "h5")] {
            let status = game.play_move(mv(from, to), None).expect("move is legal");
            if from == "d1" {
                assert_eq!(status, GameStatus::Check(Color::Black));
            }
        }
    }

    #[test]
    fn fifty_move_rule_takes_priority() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K1N1 w - - 99 80")
            .expect("test FEN should parse");
        let status = game.play_move(mv("g1", "f3"), None).expect("Nf3 is legal");
        assert_eq!(game.halfmove_clock, 100);
        assert_eq!(status, GameStatus::FiftyMoveDraw);
    }

    #[test]
    fn only_kings_left_is_a_draw() {
        let mut game = GameState::from_fen("4k3/8/8/8/8/8/3q4/4K3 w - - 0 1")
            .expect("test FEN should parse");
        let status = game.play_move(mv("e1", "d2"), None).expect("Kxd2 is legal");
        assert_eq!(status, GameStatus::KingDraw);
    }

    #[test]
    fn stalemate_is_detected() {
        let mut game = GameState::from_fen("k7/8/1Q6/8/8/8/8/7K w - - 0 1")
            .expect("test FEN should parse");
        let status = game.play_move(mv("b6", "c7"), None).expect("Qc7 is legal");
        assert_eq!(status, GameStatus::Stalemate);
    }

    #[test]
    fn promotion_requires_and_applies_a_choice() {
        let mut game = GameState::from_fen("8/4P2k/8/8/8/8/8/4K3 w - - 0 1")
            .expect("test FEN should parse");
        let push = mv("e7", "e8");

        assert!(matches!(
            game.play_move(push, None),
            Err(ChessErrors::MissingPromotionChoice)
        ));
        assert!(matches!(
            game.play_move(push, Some(PieceKind::King)),
            Err(ChessErrors::InvalidPromotionPiece(PieceKind::King))
        ));
        assert_eq!(game.side_to_move, Color::White);

        game.play_move(push, Some(PieceKind::Rook))
            .expect("promotion to rook is legal");
        assert_eq!(
            game.board.get_piece(algebraic_to_square("e8").expect("e8")),
            WHITE_ROOK
        );
        assert_eq!(game.side_to_move, Color::Black);
    }

    #[test]
    fn promote_pawn_without_candidate_fails() {
        let mut game = GameState::new_game();
        assert!(!game.can_promote_pawn());
        assert!(matches!(
            game.promote_pawn(PieceKind::Queen),
            Err(ChessErrors::NoPawnToPromote)
        ));
    }
}
