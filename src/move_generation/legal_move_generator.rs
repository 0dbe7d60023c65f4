//! Legal move generation for the side to move.
//!
//! Scans the mover's pieces in board order and enforces mandatory capture:
//! the first time any piece turns out to have a jump, everything recorded so
//! far is discarded and from then on only jumps are kept, for that piece and
//! every later one.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Player, Position};
use crate::move_generation::legal_move_set::LegalMoveSet;
use crate::move_generation::move_search::{add_jumps_only, search_next_jumps, search_next_moves};

/// Recompute the full legal move set for `turn`.
pub fn update_valid_moves(board: &Board, turn: Player) -> LegalMoveSet {
    let mut legal = LegalMoveSet::new();

    for square in board.dark_squares() {
        match square.occupant {
            Some(piece) if piece.owner == turn => {}
            _ => continue,
        }

        let from = square.position;
        let moves = search_next_moves(board, from);
        if moves.is_empty() {
            continue;
        }

        if legal.is_capture() {
            add_jumps_only(&mut legal, from, &moves);
        } else if square.all_adjacent(&moves) {
            legal.insert(from, moves);
        } else {
            legal.start_capture();
            add_jumps_only(&mut legal, from, &moves);
        }
    }

    legal
}

/// The restricted set after a jump landed on `landing`.
///
/// Holds a single entry when the piece can keep capturing, and is empty when
/// the chain (and the turn) is over.
pub fn capture_continuation(board: &Board, landing: Position) -> LegalMoveSet {
    let jumps = search_next_jumps(board, landing);
    if jumps.is_empty() {
        LegalMoveSet::new()
    } else {
        LegalMoveSet::capture_chain(landing, jumps)
    }
}

/// No legal move for `turn` means `turn` has lost.
pub fn is_terminal(board: &Board, turn: Player) -> bool {
    update_valid_moves(board, turn).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::checkers_types::Piece;

    fn p(x: i8, y: i8) -> Position {
        Position::new(x, y)
    }

    const HUMAN: Piece = Piece::man(Player::Human);
    const COMPUTER: Piece = Piece::man(Player::Computer);

    fn board_with(pieces: &[(i8, i8, Piece)]) -> Board {
        let mut board = Board::new_empty();
        for &(x, y, piece) in pieces {
            board.place(p(x, y), piece).expect("dark square");
        }
        board
    }

    fn entries(legal: &LegalMoveSet) -> Vec<(Position, Vec<Position>)> {
        legal.iter().map(|(from, to)| (from, to.to_vec())).collect()
    }

    #[test]
    fn opening_position_has_seven_simple_moves() {
        let legal = update_valid_moves(&Board::new_game(), Player::Human);
        assert!(!legal.is_capture());
        assert_eq!(legal.move_count(), 7);
        assert_eq!(
            entries(&legal),
            vec![
                (p(1, 2), vec![p(0, 3), p(2, 3)]),
                (p(3, 2), vec![p(2, 3), p(4, 3)]),
                (p(5, 2), vec![p(4, 3), p(6, 3)]),
                (p(7, 2), vec![p(6, 3)]),
            ]
        );
    }

    #[test]
    fn neighbour_occupancy_decides_the_result() {
        let mut board = board_with(&[(3, 2, HUMAN), (2, 3, HUMAN), (4, 3, COMPUTER)]);
        let legal = update_valid_moves(&board, Player::Human);
        assert_eq!(entries(&legal), vec![(p(3, 2), vec![p(5, 4)])]);

        board.remove(p(2, 3));
        board.place(p(2, 3), COMPUTER).expect("dark square");
        let legal = update_valid_moves(&board, Player::Human);
        assert_eq!(entries(&legal), vec![(p(3, 2), vec![p(1, 4), p(5, 4)])]);

        board.remove(p(2, 3));
        board.remove(p(4, 3));
        let legal = update_valid_moves(&board, Player::Human);
        assert!(!legal.is_capture());
        assert_eq!(entries(&legal), vec![(p(3, 2), vec![p(2, 3), p(4, 3)])]);

        board.place(p(3, 2), Piece::king(Player::Human)).expect("dark square");
        let legal = update_valid_moves(&board, Player::Human);
        assert_eq!(
            entries(&legal),
            vec![(p(3, 2), vec![p(2, 1), p(2, 3), p(4, 1), p(4, 3)])]
        );

        board.place(p(2, 3), COMPUTER).expect("dark square");
        let legal = update_valid_moves(&board, Player::Human);
        assert_eq!(entries(&legal), vec![(p(3, 2), vec![p(1, 4)])]);
    }

    #[test]
    fn capture_anywhere_purges_earlier_and_later_simple_moves() {
        // (1, 2) is scanned before (3, 2) and only has steps; (5, 0) after it.
        let board = board_with(&[
            (1, 2, HUMAN),
            (3, 2, HUMAN),
            (5, 0, HUMAN),
            (4, 3, COMPUTER),
        ]);
        let legal = update_valid_moves(&board, Player::Human);
        assert!(legal.is_capture());
        assert_eq!(entries(&legal), vec![(p(3, 2), vec![p(5, 4)])]);
        assert!(legal.is_capture_consistent());
    }

    #[test]
    fn every_capturing_piece_is_listed() {
        let board = board_with(&[
            (1, 2, HUMAN),
            (2, 3, COMPUTER),
            (5, 2, HUMAN),
            (6, 3, COMPUTER),
            (7, 0, HUMAN),
        ]);
        let legal = update_valid_moves(&board, Player::Human);
        assert_eq!(
            entries(&legal),
            vec![(p(1, 2), vec![p(3, 4)]), (p(5, 2), vec![p(7, 4)])]
        );
    }

    #[test]
    fn computer_moves_toward_row_zero() {
        let board = board_with(&[(4, 5, COMPUTER), (5, 4, COMPUTER)]);
        let legal = update_valid_moves(&board, Player::Computer);
        assert_eq!(
            entries(&legal),
            vec![
                (p(4, 5), vec![p(3, 4)]),
                (p(5, 4), vec![p(4, 3), p(6, 3)]),
            ]
        );
    }

    #[test]
    fn light_squares_never_appear() {
        let legal = update_valid_moves(&Board::new_game(), Player::Computer);
        for (from, to) in legal.pairs() {
            assert!(from.is_dark());
            assert!(to.is_dark());
        }
    }

    #[test]
    fn blocked_side_is_terminal() {
        // Human man on the far rank cannot move forward.
        let board = board_with(&[(2, 7, HUMAN), (5, 6, COMPUTER)]);
        assert!(is_terminal(&board, Player::Human));
        assert!(!is_terminal(&board, Player::Computer));
        assert!(is_terminal(&Board::new_empty(), Player::Computer));
    }

    #[test]
    fn continuation_is_single_entry_or_empty() {
        let board = board_with(&[(5, 4, HUMAN), (4, 5, COMPUTER), (6, 5, COMPUTER)]);
        let chain = capture_continuation(&board, p(5, 4));
        assert!(chain.is_capture());
        assert_eq!(entries(&chain), vec![(p(5, 4), vec![p(3, 6), p(7, 6)])]);

        let board = board_with(&[(5, 4, HUMAN)]);
        assert!(capture_continuation(&board, p(5, 4)).is_empty());
    }
}
