//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view from the grid for debugging, tests,
//! interactive play and diagnostics in text environments.

use crate::board::board::Board;
use crate::game_state::chess_types::piece_to_char;
use crate::game_state::game_state::GameState;

/// Render the board as text from White's point of view.
///
/// Pieces use FEN letters (uppercase White), empty squares `_`.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8i8).rev() {
        let label = char::from(b'1' + rank as u8);
        out.push(label);
        out.push(' ');

        for file in 0..8 {
            out.push(piece_to_char(board.get_piece_at(file, rank)).unwrap_or('_'));
            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// Board diagram plus a line naming the side to move.
pub fn render_game_state(game_state: &GameState) -> String {
    format!(
        "{}\n{} to move\n",
        render_board(&game_state.board),
        game_state.side_to_move.name()
    )
}

impl Board {
    pub fn get_pictorial(&self) -> String {
        render_board(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{render_board, render_game_state};
    use crate::board::board::Board;
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_diagram() {
        let text = render_board(&Board::new());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 r n b q k b n r 8");
        assert_eq!(lines[4], "5 _ _ _ _ _ _ _ _ 5");
        assert_eq!(lines[8], "1 R N B Q K B N R 1");
        assert_eq!(Board::new().get_pictorial(), text);
    }

    #[test]
    fn game_state_render_names_side_to_move() {
        let text = render_game_state(&GameState::new_game());
        assert!(text.ends_with("White to move\n"));
    }
}
