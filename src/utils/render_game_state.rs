//! Terminal-oriented Unicode board renderer.
//!
//! Text views of the board and of the legal move set for debugging, tests
//! and the command-line front end.

use crate::game_state::board::Board;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::checkers_types::{Piece, PieceKind, Player, Position};
use crate::move_generation::legal_move_set::LegalMoveSet;
use crate::utils::algebraic::position_to_algebraic;

/// Render the board with rank 8 (`y = 7`) on top.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for y in (0..BOARD_SIZE).rev() {
        let rank = char::from(b'1' + y as u8);
        out.push(rank);
        out.push(' ');

        for x in 0..BOARD_SIZE {
            let pos = Position::new(x, y);
            let ch = match board.piece_at(pos) {
                Some(piece) => piece_to_unicode(piece),
                None if pos.is_dark() => '·',
                None => ' ',
            };
            out.push(ch);
            if x < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}

/// One line per source square: `d3: c4 e4`.
pub fn render_legal_moves(legal_moves: &LegalMoveSet) -> String {
    legal_moves
        .iter()
        .map(|(from, destinations)| {
            let targets: Vec<String> = destinations.iter().map(|to| square_name(*to)).collect();
            format!("{}: {}", square_name(from), targets.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn square_name(position: Position) -> String {
    position_to_algebraic(position).unwrap_or_else(|_| position.to_string())
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.owner, piece.kind) {
        (Player::Human, PieceKind::Man) => '⛀',
        (Player::Human, PieceKind::King) => '⛁',
        (Player::Computer, PieceKind::Man) => '⛂',
        (Player::Computer, PieceKind::King) => '⛃',
    }
}
