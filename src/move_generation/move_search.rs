//! Per-square move search.
//!
//! Off-board candidates, empty jump targets and same-owner pieces all yield
//! "no candidate"; none of these searches can fail.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::Position;
use crate::game_state::square::{SearchDirections, Square};
use crate::move_generation::legal_move_set::LegalMoveSet;

fn directions_from(board: &Board, from: Position) -> Option<SearchDirections> {
    board.square(from).and_then(Square::search_directions)
}

/// Landing square for a jump from `origin` over `over`, if the jump is open.
///
/// Requires an opposing piece on `over` and an empty on-board landing
/// square. Jumping a piece of one's own side is silently skipped.
pub fn search_jump(board: &Board, origin: Position, over: Position) -> Option<Position> {
    let mover = board.piece_at(origin)?;
    let victim = board.piece_at(over)?;
    if victim.owner == mover.owner {
        return None;
    }

    let landing = origin.reflect_through(&over);
    (landing.is_on_board() && board.is_empty_at(landing)).then_some(landing)
}

/// Simple steps and jumps from `from`, mixed, in search order.
///
/// Used to discover whether a capture exists; the caller separates the two
/// kinds by adjacency.
pub fn search_next_moves(board: &Board, from: Position) -> Vec<Position> {
    let Some(directions) = directions_from(board, from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(4);
    for (dx, dy) in directions.offsets() {
        let Some(target) = from.offset(dx, dy) else {
            continue;
        };
        if board.is_empty_at(target) {
            out.push(target);
        } else if let Some(landing) = search_jump(board, from, target) {
            out.push(landing);
        }
    }
    out
}

/// Jump landings from `from`, in search order.
pub fn search_next_jumps(board: &Board, from: Position) -> Vec<Position> {
    let Some(directions) = directions_from(board, from) else {
        return Vec::new();
    };

    directions
        .offsets()
        .filter_map(|(dx, dy)| from.offset(dx, dy))
        .filter_map(|over| search_jump(board, from, over))
        .collect()
}

/// Keep only the non-adjacent entries of `moves` and record them under `from`.
pub fn add_jumps_only(legal_moves: &mut LegalMoveSet, from: Position, moves: &[Position]) {
    let jumps: Vec<Position> = moves
        .iter()
        .copied()
        .filter(|to| !from.is_adjacent(to))
        .collect();
    legal_moves.insert(from, jumps);
}
