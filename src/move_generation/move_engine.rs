//! Owner of the board.
//!
//! `MoveEngine` is the only writer of square occupancy. Everything else
//! reads the board through it and receives legal move sets as values.

use log::{debug, trace};

use crate::checkers_errors::CheckersResult;
use crate::game_state::board::Board;
use crate::game_state::checkers_types::{Player, Position};
use crate::move_generation::legal_move_apply::{
    apply_move, continue_capture, AppliedMove, CaptureOutcome,
};
use crate::move_generation::legal_move_generator::update_valid_moves;
use crate::move_generation::legal_move_set::LegalMoveSet;
use crate::move_generation::move_search::{search_next_jumps, search_next_moves};

#[derive(Debug, Clone, Default)]
pub struct MoveEngine {
    board: Board,
}

impl MoveEngine {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn new_game() -> Self {
        Self::new(Board::new_game())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn search_next_moves(&self, from: Position) -> Vec<Position> {
        search_next_moves(&self.board, from)
    }

    pub fn search_next_jumps(&self, from: Position) -> Vec<Position> {
        search_next_jumps(&self.board, from)
    }

    pub fn update_valid_moves(&self, turn: Player) -> LegalMoveSet {
        let legal = update_valid_moves(&self.board, turn);
        debug!(
            "{turn} to move: {} sources, {} moves, capture={}",
            legal.len(),
            legal.move_count(),
            legal.is_capture()
        );
        legal
    }

    pub fn apply_move(
        &mut self,
        from: Position,
        to: Position,
        turn: Player,
    ) -> CheckersResult<AppliedMove> {
        let applied = apply_move(&mut self.board, from, to, turn)?;
        trace!("{turn} moved ({from}) -> ({to})");
        if applied.crowned {
            debug!("{turn} piece crowned at ({to})");
        }
        Ok(applied)
    }

    pub fn continue_capture(&mut self, origin: Position, landing: Position) -> CaptureOutcome {
        let outcome = continue_capture(&mut self.board, origin, landing);
        trace!(
            "captured at ({}), chain continues: {}",
            outcome.captured_at,
            outcome.chain_continues()
        );
        outcome
    }

    pub fn is_terminal(&self, turn: Player) -> bool {
        self.update_valid_moves(turn).is_empty()
    }
}
