//! Perft node counting over complete turns.
//!
//! A capture chain is one turn: every distinct jump path is expanded to its
//! end before the other side moves. Used as a move-generation regression
//! check and as the benchmark workload.

use crate::checkers_errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Player, Position};
use crate::move_generation::legal_move_apply::{apply_move, continue_capture};
use crate::move_generation::legal_move_generator::update_valid_moves;
use crate::move_generation::legal_move_set::LegalMoveSet;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub promotions: u64,
}

pub fn perft(board: &Board, turn: Player, depth: u8) -> CheckersResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }

    let legal = update_valid_moves(board, turn);
    for (from, to) in legal.pairs() {
        let mut next = board.clone();
        perft_turn(&mut next, turn, from, to, depth, &mut counts)?;
    }
    Ok(counts)
}

/// Per-source-move node counts at `depth`, in scan order.
pub fn perft_divide(
    board: &Board,
    turn: Player,
    depth: u8,
) -> CheckersResult<Vec<((Position, Position), u64)>> {
    let legal = update_valid_moves(board, turn);
    let mut out = Vec::with_capacity(legal.move_count());
    for (from, to) in legal.pairs() {
        let mut counts = PerftCounts::default();
        let mut next = board.clone();
        perft_turn(&mut next, turn, from, to, depth.max(1), &mut counts)?;
        out.push(((from, to), counts.nodes));
    }
    Ok(out)
}

fn perft_turn(
    board: &mut Board,
    turn: Player,
    from: Position,
    to: Position,
    depth: u8,
    counts: &mut PerftCounts,
) -> CheckersResult<()> {
    let applied = apply_move(board, from, to, turn)?;
    if applied.crowned {
        counts.promotions += 1;
    }

    let continuation = if applied.is_jump() {
        counts.captures += 1;
        continue_capture(board, from, to).continuation
    } else {
        LegalMoveSet::new()
    };

    if continuation.is_empty() {
        let below = perft(board, turn.opposite(), depth - 1)?;
        counts.nodes += below.nodes;
        counts.captures += below.captures;
        counts.promotions += below.promotions;
        return Ok(());
    }

    for (chain_from, chain_to) in continuation.pairs() {
        let mut next = board.clone();
        perft_turn(&mut next, turn, chain_from, chain_to, depth, counts)?;
    }
    Ok(())
}
