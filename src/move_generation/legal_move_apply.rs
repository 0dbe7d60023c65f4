//! Board mutation for a chosen move.
//!
//! Neither function re-checks legality: callers validate the selection
//! against the current `LegalMoveSet` first.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Piece, Player, Position};
use crate::move_generation::legal_move_generator::capture_continuation;
use crate::move_generation::legal_move_set::LegalMoveSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Position,
    pub to: Position,
    /// The piece as it stands on `to`, after any promotion.
    pub piece: Piece,
    pub crowned: bool,
}

impl AppliedMove {
    /// A move to a non-adjacent square is a jump.
    #[inline]
    pub fn is_jump(&self) -> bool {
        !self.from.is_adjacent(&self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureOutcome {
    pub captured_at: Position,
    pub captured: Option<Piece>,
    /// Single entry keyed by the landing square while the chain continues,
    /// empty once it is over.
    pub continuation: LegalMoveSet,
}

impl CaptureOutcome {
    #[inline]
    pub fn chain_continues(&self) -> bool {
        !self.continuation.is_empty()
    }
}

/// Move the piece on `from` to `to`, crowning it on `turn`'s far rank.
///
/// Fails only when `from` is empty or `to` cannot hold a piece; the board
/// is unchanged in both cases.
pub fn apply_move(
    board: &mut Board,
    from: Position,
    to: Position,
    turn: Player,
) -> CheckersResult<AppliedMove> {
    if !to.is_on_board() {
        return Err(CheckersError::OutOfBounds { x: to.x, y: to.y });
    }
    if !to.is_dark() {
        return Err(CheckersError::LightSquare(to));
    }
    let mut piece = board.remove(from).ok_or(CheckersError::EmptySquare(from))?;

    let was_king = piece.is_king();
    if board.is_promotion_row(to, turn) {
        piece.crown();
    }
    board.place(to, piece)?;

    Ok(AppliedMove {
        from,
        to,
        piece,
        crowned: piece.is_king() && !was_king,
    })
}

/// Remove the piece jumped over between `origin` and `landing`, then look
/// for further jumps from `landing`.
pub fn continue_capture(board: &mut Board, origin: Position, landing: Position) -> CaptureOutcome {
    let captured_at = origin.midpoint(&landing);
    let captured = board.remove(captured_at);
    let continuation = capture_continuation(board, landing);

    CaptureOutcome {
        captured_at,
        captured,
        continuation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i8, y: i8) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn apply_moves_piece_and_vacates_origin() {
        let mut board = Board::new_game();
        let applied = apply_move(&mut board, p(1, 2), p(0, 3), Player::Human).expect("piece on origin");
        assert!(board.is_empty_at(p(1, 2)));
        assert_eq!(board.piece_at(p(0, 3)), Some(Piece::man(Player::Human)));
        assert!(!applied.crowned);
        assert!(!applied.is_jump());
    }

    #[test]
    fn apply_from_empty_square_fails_without_mutation() {
        let mut board = Board::new_game();
        let before = board.clone();
        assert_eq!(
            apply_move(&mut board, p(0, 3), p(1, 4), Player::Human),
            Err(CheckersError::EmptySquare(p(0, 3)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn human_is_crowned_on_row_seven_only() {
        let mut board = Board::new_empty();
        board.place(p(1, 6), Piece::man(Player::Human)).expect("dark square");
        board.place(p(3, 4), Piece::man(Player::Human)).expect("dark square");

        let applied = apply_move(&mut board, p(1, 6), p(2, 7), Player::Human).expect("piece");
        assert!(applied.crowned);
        assert_eq!(board.piece_at(p(2, 7)), Some(Piece::king(Player::Human)));

        let applied = apply_move(&mut board, p(3, 4), p(4, 5), Player::Human).expect("piece");
        assert!(!applied.crowned);
        assert_eq!(board.piece_at(p(4, 5)), Some(Piece::man(Player::Human)));
    }

    #[test]
    fn computer_is_crowned_on_row_zero() {
        let mut board = Board::new_empty();
        board.place(p(2, 1), Piece::man(Player::Computer)).expect("dark square");
        let applied = apply_move(&mut board, p(2, 1), p(1, 0), Player::Computer).expect("piece");
        assert!(applied.crowned);
        assert!(board.piece_at(p(1, 0)).is_some_and(|piece| piece.is_king()));
    }

    #[test]
    fn kings_stay_kings_and_are_not_reported_as_crowned() {
        let mut board = Board::new_empty();
        board.place(p(3, 6), Piece::king(Player::Human)).expect("dark square");
        let applied = apply_move(&mut board, p(3, 6), p(4, 7), Player::Human).expect("piece");
        assert!(!applied.crowned);
        assert!(applied.piece.is_king());
    }

    #[test]
    fn continue_capture_removes_the_jumped_piece() {
        let mut board = Board::new_empty();
        board.place(p(3, 2), Piece::man(Player::Human)).expect("dark square");
        board.place(p(4, 3), Piece::man(Player::Computer)).expect("dark square");

        let applied = apply_move(&mut board, p(3, 2), p(5, 4), Player::Human).expect("piece");
        assert!(applied.is_jump());
        let outcome = continue_capture(&mut board, p(3, 2), p(5, 4));
        assert_eq!(outcome.captured_at, p(4, 3));
        assert_eq!(outcome.captured, Some(Piece::man(Player::Computer)));
        assert!(board.is_empty_at(p(4, 3)));
        assert!(!outcome.chain_continues());
    }

    #[test]
    fn continue_capture_reports_further_jumps() {
        let mut board = Board::new_empty();
        board.place(p(1, 0), Piece::man(Player::Human)).expect("dark square");
        board.place(p(2, 1), Piece::man(Player::Computer)).expect("dark square");
        board.place(p(4, 3), Piece::man(Player::Computer)).expect("dark square");

        apply_move(&mut board, p(1, 0), p(3, 2), Player::Human).expect("piece");
        let outcome = continue_capture(&mut board, p(1, 0), p(3, 2));
        assert!(outcome.chain_continues());
        assert_eq!(outcome.continuation.destinations(p(3, 2)), Some(&[p(5, 4)][..]));
    }
}
