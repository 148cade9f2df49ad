//! Game-level legal move enumeration.
//!
//! Extends the board's per-piece destinations with the two moves that depend
//! on history: castling (gated by castling rights) and en passant (gated by
//! the en-passant target square).

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

impl GameState {
    /// Every legal move for the piece on `square`, including castles for a
    /// king and en passant for a pawn. Empty unless the square holds a piece
    /// of `color`.
    pub fn get_piece_moves(&self, color: Color, square: Square) -> Vec<Move> {
        let mut moves: Vec<Move> = self
            .board
            .get_piece_moves(color, square)
            .into_iter()
            .map(|to| Move::from_squares(square, to))
            .collect();

        let piece = self.board.get_piece(square);
        if piece == piece_code(color, PieceKind::Pawn) {
            if let Some(target) = self.can_passant(color, square) {
                moves.push(Move::from_squares(square, target));
            }
        } else if piece == piece_code(color, PieceKind::King) {
            for side in [CastleSide::KingSide, CastleSide::QueenSide] {
                let castle = Move::castle(color, side);
                if self.is_legal_move(castle) {
                    moves.push(castle);
                }
            }
        }

        moves
    }

    /// Every legal move for `color`, grouped by origin square.
    pub fn get_player_moves(&self, color: Color) -> Vec<Move> {
        self.board
            .occupied_squares(color)
            .flat_map(|square| self.get_piece_moves(color, square))
            .collect()
    }

    /// True if `color` has at least one legal move, en passant and castling
    /// included.
    pub fn legal_move_exists(&self, color: Color) -> bool {
        self.board
            .occupied_squares(color)
            .any(|square| !self.get_piece_moves(color, square).is_empty())
    }

    /// Board legality plus, for castles, the matching right and the rook
    /// still standing on its home square.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        if let Some((color, side)) = mv.castle_details() {
            if !self.could_castle(color, side) {
                return false;
            }
        }
        self.board.is_possible_valid_move(mv)
    }

    fn could_castle(&self, color: Color, side: CastleSide) -> bool {
        self.has_castling_right(color, side)
            && self.board.get_piece_at(side.rook_file(), color.home_rank())
                == piece_code(color, PieceKind::Rook)
    }

    /// En-passant destination for the pawn of `color` on `square`, if the
    /// target square is diagonally ahead of it, empty, next to an enemy pawn
    /// and the capture leaves the king safe.
    pub fn can_passant(&self, color: Color, square: Square) -> Option<Square> {
        let target = self.en_passant_square?;
        if self.board.get_piece(square) != piece_code(color, PieceKind::Pawn) {
            return None;
        }

        let (file, rank) = (file_of(square), rank_of(square));
        if rank_of(target) != rank + color.sign() || (file_of(target) - file).abs() != 1 {
            return None;
        }
        if self.board.get_piece(target) != EMPTY {
            return None;
        }

        let passed = square_at(file_of(target), rank)?;
        if self.board.get_piece(passed) != piece_code(color.opposite(), PieceKind::Pawn) {
            return None;
        }

        self.board
            .is_valid_move(Move::from_squares(square, target))
            .then_some(target)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::chess_move::Move;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    fn mv(from: &str, to: &str) -> Move {
        Move::from_squares(sq(from), sq(to))
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let game = GameState::new_game();
        assert_eq!(game.get_player_moves(Color::White).len(), 20);
        assert_eq!(game.get_player_moves(Color::Black).len(), 20);
        assert_eq!(game.get_piece_moves(Color::White, sq("g1")).len(), 2);
        // Wrong color yields nothing.
        assert!(game.get_piece_moves(Color::Black, sq("g1")).is_empty());
    }

    #[test]
    fn en_passant_window_lasts_one_ply() {
        let mut game = GameState::new_game();
        for (from, to) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
            game.play_move(mv(from, to), None).expect("setup move is legal");
        }

        assert_eq!(game.en_passant_square, Some(sq("d6")));
        assert_eq!(game.can_passant(Color::White, sq("e5")), Some(sq("d6")));
        assert!(game
            .get_piece_moves(Color::White, sq("e5"))
            .contains(&mv("e5", "d6")));

        // A waiting move closes the window.
        game.play_move(mv("h2", "h3"), None).expect("h3 is legal");
        game.play_move(mv("h7", "h6"), None).expect("h6 is legal");
        assert_eq!(game.can_passant(Color::White, sq("e5")), None);
        assert!(!game
            .get_piece_moves(Color::White, sq("e5"))
            .contains(&mv("e5", "d6")));
    }

    #[test]
    fn en_passant_capture_removes_the_pawn() {
        let mut game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("test FEN should parse");
        game.play_move(mv("e5", "d6"), None).expect("en passant is legal");
        assert_eq!(game.board.get_piece(sq("d6")), WHITE_PAWN);
        assert_eq!(game.board.get_piece(sq("d5")), EMPTY);
        assert_eq!(game.halfmove_clock, 0);
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_refused() {
        // Both pawns leave the fifth rank, opening it for the rook.
        let game = GameState::from_fen("8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 1")
            .expect("test FEN should parse");
        assert_eq!(game.can_passant(Color::White, sq("e5")), None);
    }

    #[test]
    fn castles_are_listed_when_legal() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1")
            .expect("test FEN should parse");
        let king_moves = game.get_piece_moves(Color::White, sq("e1"));
        assert!(king_moves.contains(&Move::castle(Color::White, CastleSide::KingSide)));
        assert!(king_moves.contains(&Move::castle(Color::White, CastleSide::QueenSide)));
    }

    #[test]
    fn castle_through_attacked_square_is_not_listed() {
        let game = GameState::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1")
            .expect("test FEN should parse");
        let castle = Move::castle(Color::White, CastleSide::KingSide);
        assert!(!game.is_legal_move(castle));
        assert!(!game.get_player_moves(Color::White).contains(&castle));
    }

    #[test]
    fn castle_needs_the_right() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K2R w Q - 0 1")
            .expect("test FEN should parse");
        assert!(!game.is_legal_move(Move::castle(Color::White, CastleSide::KingSide)));
        assert!(game.is_legal_move(Move::castle(Color::White, CastleSide::QueenSide)));
    }

    #[test]
    fn legal_move_exists_sees_en_passant() {
        // Black's only legal move is the en-passant capture.
        let game = GameState::from_fen("8/8/8/8/3pP3/1B1N4/2K5/k7 b - e3 0 1")
            .expect("test FEN should parse");
        assert!(!game.board.legal_move_exists(Color::Black));
        assert!(game.legal_move_exists(Color::Black));
        assert_eq!(game.get_player_moves(Color::Black), vec![mv("d4", "e3")]);
    }
}
